//! Booking record storage

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::models::{Booking, BookingFilter, BookingStatus};

use super::codec::{self, Record};

const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Record for Booking {
    const FILE_NAME: &'static str = "bookings.txt";

    fn to_line(&self) -> Result<String> {
        codec::check_field(&self.username)?;
        codec::check_field(&self.check_in)?;
        codec::check_field(&self.check_out)?;
        Ok(format!(
            "{}:{}:{}:{}:{}:{:.2}:{}:{}",
            self.username,
            self.room_number,
            self.booking_date.format(BOOKING_DATE_FORMAT),
            self.check_in,
            self.check_out,
            self.total_price,
            self.status,
            self.booking_id,
        ))
    }

    fn parse_line(line: &str) -> Option<Self> {
        // The booking timestamp carries colons of its own, so the fixed
        // fields are split off each end and the middle is kept intact.
        let mut left = line.splitn(3, ':');
        let username = left.next()?.to_string();
        let room_number = left.next()?.parse().ok()?;
        let rest = left.next()?;

        let mut right = rest.rsplitn(6, ':');
        let booking_id = right.next()?.parse().ok()?;
        let status = BookingStatus::parse(right.next()?)?;
        let total_price: f64 = right.next()?.parse().ok()?;
        let check_out = right.next()?.to_string();
        let check_in = right.next()?.to_string();
        let booking_date =
            NaiveDateTime::parse_from_str(right.next()?, BOOKING_DATE_FORMAT).ok()?;

        Some(Booking {
            booking_id,
            room_number,
            username,
            booking_date,
            check_in,
            check_out,
            total_price,
            status,
        })
    }
}

pub struct BookingStore<'a> {
    dir: &'a Path,
}

impl<'a> BookingStore<'a> {
    pub(crate) fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// All bookings, in file order
    pub fn all(&self) -> Result<Vec<Booking>> {
        codec::load_all(self.dir)
    }

    pub fn append(&self, booking: &Booking) -> Result<()> {
        codec::append(self.dir, booking)
    }

    pub fn rewrite(&self, bookings: &[Booking]) -> Result<()> {
        codec::rewrite_all(self.dir, bookings)
    }

    pub fn find(&self, booking_id: u32) -> Result<Option<Booking>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|booking| booking.booking_id == booking_id))
    }

    /// Bookings made by one user, in file order
    pub fn for_user(&self, username: &str) -> Result<Vec<Booking>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|booking| booking.username == username)
            .collect())
    }

    /// Filtered listing over every booking, in file order
    pub fn filtered(&self, filter: Option<&BookingFilter>) -> Result<Vec<Booking>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|booking| filter.map_or(true, |f| f.matches(booking)))
            .collect())
    }

    /// Active bookings holding a window on the given room
    pub fn active_for_room(&self, room_number: u32) -> Result<Vec<Booking>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|booking| booking.room_number == room_number && booking.is_active())
            .collect())
    }

    /// Next free booking id. Canceled bookings keep their ids, so ids are
    /// never recycled.
    pub fn next_id(&self) -> Result<u32> {
        let max = self
            .all()?
            .iter()
            .map(|booking| booking.booking_id)
            .max()
            .unwrap_or(0);
        Ok(max + 1)
    }
}
