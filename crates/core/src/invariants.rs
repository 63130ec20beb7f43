//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::Booking;

/// Validate that a single booking is internally consistent
pub fn assert_booking_valid(booking: &Booking) {
    debug_assert!(
        booking.check_in < booking.check_out,
        "Booking {} has check-out {} on or before check-in {}",
        booking.booking_id,
        booking.check_out,
        booking.check_in
    );

    debug_assert!(
        booking.total_price >= 0.0,
        "Booking {} has negative total {}",
        booking.booking_id,
        booking.total_price
    );

    debug_assert!(
        !booking.username.is_empty(),
        "Booking {} has empty username",
        booking.booking_id
    );
}

/// Validate that no two active bookings on the same room overlap
pub fn assert_schedule_consistent(bookings: &[Booking]) {
    for (i, a) in bookings.iter().enumerate() {
        if !a.is_active() {
            continue;
        }
        for b in bookings.iter().skip(i + 1) {
            if !b.is_active() || b.room_number != a.room_number {
                continue;
            }
            debug_assert!(
                !a.overlaps(&b.check_in, &b.check_out),
                "Active bookings {} and {} overlap on room {}",
                a.booking_id,
                b.booking_id,
                a.room_number
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    fn make_booking(id: u32, room: u32, check_in: &str, check_out: &str) -> Booking {
        Booking::new(
            id,
            room,
            "alice".to_string(),
            check_in.to_string(),
            check_out.to_string(),
            100.0,
        )
    }

    #[test]
    fn test_disjoint_schedule_passes() {
        let bookings = vec![
            make_booking(1, 101, "2025-06-01", "2025-06-03"),
            make_booking(2, 101, "2025-06-03", "2025-06-05"),
            make_booking(3, 102, "2025-06-01", "2025-06-05"),
        ];
        assert_schedule_consistent(&bookings);
    }

    #[test]
    fn test_canceled_bookings_may_overlap() {
        let mut canceled = make_booking(1, 101, "2025-06-01", "2025-06-03");
        canceled.status = BookingStatus::Canceled;
        let bookings = vec![canceled, make_booking(2, 101, "2025-06-02", "2025-06-04")];
        assert_schedule_consistent(&bookings);
    }

    #[test]
    #[should_panic(expected = "overlap")]
    fn test_overlapping_active_bookings_panic() {
        let bookings = vec![
            make_booking(1, 101, "2025-06-01", "2025-06-03"),
            make_booking(2, 101, "2025-06-02", "2025-06-04"),
        ];
        assert_schedule_consistent(&bookings);
    }
}
