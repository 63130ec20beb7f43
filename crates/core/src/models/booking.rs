//! Booking model
//!
//! Bookings are append-only history: cancellation flips the status to
//! canceled, the record is never removed.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Active,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Canceled => "canceled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(BookingStatus::Active),
            "canceled" => Some(BookingStatus::Canceled),
            _ => None,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room reservation.
///
/// Check-in and check-out are normalized `YYYY-MM-DD` strings rather than
/// calendar types: the date rules deliberately admit days like the 31st of
/// any month, and every comparison the engine makes on them is
/// lexicographic, which coincides with chronological order for this
/// zero-padded format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: u32,
    pub room_number: u32,
    pub username: String,
    /// Creation timestamp; revenue reports aggregate on its date portion
    pub booking_date: NaiveDateTime,
    pub check_in: String,
    pub check_out: String,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl Booking {
    pub fn new(
        booking_id: u32,
        room_number: u32,
        username: String,
        check_in: String,
        check_out: String,
        total_price: f64,
    ) -> Self {
        Self {
            booking_id,
            room_number,
            username,
            booking_date: Local::now().naive_local(),
            check_in,
            check_out,
            total_price,
            status: BookingStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// Date portion of the creation timestamp, `YYYY-MM-DD`
    pub fn booked_on(&self) -> String {
        self.booking_date.format("%Y-%m-%d").to_string()
    }

    /// Half-open interval overlap against another stay window
    pub fn overlaps(&self, check_in: &str, check_out: &str) -> bool {
        !(check_out <= self.check_in.as_str() || check_in >= self.check_out.as_str())
    }
}

/// Result of a successful booking, for confirmation display
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub booking_id: u32,
    pub nights: i64,
    pub total_price: f64,
}

/// Query criteria for booking listings; zero/empty fields mean "no constraint"
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub booking_id: u32,
    /// Substring match on the username
    pub username: String,
    /// Inclusive lower bound on the booking date portion
    pub start_date: String,
    /// Inclusive upper bound on the booking date portion
    pub end_date: String,
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        if self.booking_id != 0 && booking.booking_id != self.booking_id {
            return false;
        }
        if !self.username.is_empty() && !booking.username.contains(&self.username) {
            return false;
        }
        if !self.start_date.is_empty() || !self.end_date.is_empty() {
            let booked_on = booking.booked_on();
            if !self.start_date.is_empty() && booked_on.as_str() < self.start_date.as_str() {
                return false;
            }
            if !self.end_date.is_empty() && booked_on.as_str() > self.end_date.as_str() {
                return false;
            }
        }
        true
    }
}
