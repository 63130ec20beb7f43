//! Booking engine
//!
//! The state machine at the center of the system: availability checks,
//! booking creation and cancellation, pricing, and revenue aggregation.
//! Availability is always answered by scanning active bookings for window
//! overlap; the persisted room status is written as a display hint but
//! never consulted for decisions.

use tracing::{info, instrument};

use crate::dates;
use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{
    Booking, BookingConfirmation, BookingFilter, BookingStatus, Room, RoomFilter, RoomStatus,
};
use crate::store::Store;

pub struct BookingEngine<'a> {
    store: &'a Store,
}

impl<'a> BookingEngine<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Rooms matching the filter, cheapest first
    pub fn list_rooms(&self, filter: Option<&RoomFilter>) -> Result<Vec<Room>> {
        self.store.rooms().list(filter)
    }

    /// Whether the room is free for the half-open `[check_in, check_out)`
    /// window. Both dates must already be normalized.
    pub fn is_room_available(
        &self,
        room_number: u32,
        check_in: &str,
        check_out: &str,
    ) -> Result<bool> {
        let holders = self.store.bookings().active_for_room(room_number)?;
        Ok(holders
            .iter()
            .all(|booking| !booking.overlaps(check_in, check_out)))
    }

    #[instrument(skip(self))]
    pub fn book_room(
        &self,
        username: &str,
        room_number: u32,
        check_in: &str,
        check_out: &str,
    ) -> Result<BookingConfirmation> {
        let check_in = dates::normalize(check_in).ok_or(Error::InvalidDateFormat)?;
        let check_out = dates::normalize(check_out).ok_or(Error::InvalidDateFormat)?;

        if check_in >= check_out {
            return Err(Error::CheckoutNotAfterCheckin);
        }
        if !dates::is_today_or_future(&check_in) {
            return Err(Error::CheckinInPast);
        }
        if !self.is_room_available(room_number, &check_in, &check_out)? {
            return Err(Error::RoomUnavailable(room_number));
        }

        let complete = self
            .store
            .profiles()
            .find(username)?
            .map_or(false, |profile| profile.is_complete());
        if !complete {
            return Err(Error::ProfileIncomplete(username.to_string()));
        }

        let nights =
            dates::nights_between(&check_in, &check_out).ok_or(Error::InvalidDateFormat)?;
        let price_per_night = self.store.rooms().price_of(room_number)?;
        let total_price = price_per_night * nights as f64;

        let bookings = self.store.bookings();
        let booking_id = bookings.next_id()?;
        let booking = Booking::new(
            booking_id,
            room_number,
            username.to_string(),
            check_in,
            check_out,
            total_price,
        );
        invariants::assert_booking_valid(&booking);
        bookings.append(&booking)?;

        #[cfg(debug_assertions)]
        invariants::assert_schedule_consistent(&bookings.all()?);

        // Legacy display hint; availability decisions never read it
        self.store.rooms().set_status(room_number, RoomStatus::Booked)?;

        info!(booking_id, room_number, nights, "booking recorded");
        Ok(BookingConfirmation {
            booking_id,
            nights,
            total_price,
        })
    }

    /// Flips the booking to canceled. Unknown ids fail; canceling a booking
    /// that is already canceled changes nothing.
    #[instrument(skip(self))]
    pub fn cancel_booking(&self, booking_id: u32) -> Result<()> {
        let bookings = self.store.bookings();
        let mut all = bookings.all()?;
        let booking = all
            .iter_mut()
            .find(|booking| booking.booking_id == booking_id)
            .ok_or(Error::BookingNotFound(booking_id))?;

        if booking.status == BookingStatus::Canceled {
            return Ok(());
        }
        booking.status = BookingStatus::Canceled;
        let room_number = booking.room_number;
        bookings.rewrite(&all)?;

        // Legacy display hint, set back regardless of other active bookings
        self.store
            .rooms()
            .set_status(room_number, RoomStatus::Available)?;

        info!(booking_id, room_number, "booking canceled");
        Ok(())
    }

    /// One user's bookings, in file order
    pub fn bookings_for_user(&self, username: &str) -> Result<Vec<Booking>> {
        self.store.bookings().for_user(username)
    }

    /// Every booking matching the filter, in file order
    pub fn all_bookings(&self, filter: Option<&BookingFilter>) -> Result<Vec<Booking>> {
        self.store.bookings().filtered(filter)
    }

    /// Sum of active bookings created on the given date
    pub fn daily_revenue(&self, date: &str) -> Result<f64> {
        let date = self.normalize_report_date(date)?;
        Ok(self
            .store
            .bookings()
            .all()?
            .iter()
            .filter(|booking| booking.is_active() && booking.booked_on() == date)
            .map(|booking| booking.total_price)
            .sum())
    }

    /// Sum of active bookings created during the Monday-Sunday week
    /// containing the given date
    pub fn weekly_revenue(&self, date: &str) -> Result<f64> {
        let date = self.normalize_report_date(date)?;
        let (monday, sunday) = dates::week_range(&date).ok_or(Error::InvalidDateFormat)?;
        Ok(self
            .store
            .bookings()
            .all()?
            .iter()
            .filter(|booking| {
                let booked_on = booking.booked_on();
                booking.is_active()
                    && booked_on.as_str() >= monday.as_str()
                    && booked_on.as_str() <= sunday.as_str()
            })
            .map(|booking| booking.total_price)
            .sum())
    }

    fn normalize_report_date(&self, date: &str) -> Result<String> {
        let date = dates::normalize(date).ok_or(Error::InvalidDateFormat)?;
        if !dates::validate(&date) {
            return Err(Error::InvalidDateFormat);
        }
        Ok(date)
    }
}
