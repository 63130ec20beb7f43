//! Receipt rendering

use innkeep_core::Booking;

pub fn render(hotel_name: &str, booking: &Booking) -> String {
    format!(
        "========== BOOKING RECEIPT ==========\n\
         {hotel_name}\n\
         Booking ID: {}\n\
         Customer: {}\n\
         Room Number: {}\n\
         Booking Date: {}\n\
         Check-in: {}\n\
         Check-out: {}\n\
         Total Price: ${:.2}\n\
         Status: {}\n\
         =====================================\n",
        booking.booking_id,
        booking.username,
        booking.room_number,
        booking.booking_date.format("%Y-%m-%d %H:%M:%S"),
        booking.check_in,
        booking.check_out,
        booking.total_price,
        booking.status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_all_fields() {
        let booking = Booking::new(
            7,
            101,
            "alice".to_string(),
            "2025-06-01".to_string(),
            "2025-06-03".to_string(),
            200.0,
        );
        let text = render("Seaside Lodge", &booking);

        assert!(text.contains("Seaside Lodge"));
        assert!(text.contains("Booking ID: 7"));
        assert!(text.contains("Customer: alice"));
        assert!(text.contains("Room Number: 101"));
        assert!(text.contains("Check-in: 2025-06-01"));
        assert!(text.contains("Total Price: $200.00"));
        assert!(text.contains("Status: active"));
    }
}
