//! Room catalog storage

use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Room, RoomFilter, RoomStatus, RoomType};

use super::codec::{self, Record};

impl Record for Room {
    const FILE_NAME: &'static str = "rooms.txt";

    fn to_line(&self) -> Result<String> {
        for facility in &self.facilities {
            codec::check_field(facility)?;
        }
        codec::join_fields(&[
            &self.room_number.to_string(),
            self.room_type.as_str(),
            &format!("{:.2}", self.price_per_night),
            self.status.as_str(),
            &self.facilities_joined(),
        ])
    }

    fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.splitn(5, ':');
        let room_number = fields.next()?.parse().ok()?;
        let room_type = RoomType::parse(fields.next()?)?;
        let price_per_night: f64 = fields.next()?.parse().ok()?;
        let status = RoomStatus::parse(fields.next()?)?;
        let facilities = fields.next()?;

        Some(Room {
            room_number,
            room_type,
            price_per_night,
            status,
            facilities: if facilities.is_empty() {
                Vec::new()
            } else {
                facilities.split(',').map(str::to_string).collect()
            },
        })
    }
}

pub struct RoomStore<'a> {
    dir: &'a Path,
}

impl<'a> RoomStore<'a> {
    pub(crate) fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// All rooms, in file order
    pub fn all(&self) -> Result<Vec<Room>> {
        codec::load_all(self.dir)
    }

    /// Filtered listing, ascending by nightly price. The sort is stable, so
    /// equally priced rooms keep their file order.
    pub fn list(&self, filter: Option<&RoomFilter>) -> Result<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .all()?
            .into_iter()
            .filter(|room| filter.map_or(true, |f| f.matches(room)))
            .collect();
        rooms.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night));
        Ok(rooms)
    }

    pub fn find(&self, room_number: u32) -> Result<Option<Room>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|room| room.room_number == room_number))
    }

    pub fn price_of(&self, room_number: u32) -> Result<f64> {
        self.find(room_number)?
            .map(|room| room.price_per_night)
            .ok_or(Error::RoomNotFound(room_number))
    }

    /// Read-all/rewrite-all update of one row's displayed status flag
    pub fn set_status(&self, room_number: u32, status: RoomStatus) -> Result<()> {
        let mut rooms = self.all()?;
        for room in rooms.iter_mut().filter(|r| r.room_number == room_number) {
            room.status = status;
        }
        codec::rewrite_all(self.dir, &rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(dir: &Path) -> RoomStore<'_> {
        let store = RoomStore::new(dir);
        codec::rewrite_all(
            dir,
            &[
                Room::new(103, RoomType::Suite, 300.0).with_facilities(&["WiFi", "Jacuzzi"]),
                Room::new(101, RoomType::Single, 100.0).with_facilities(&["WiFi", "TV", "AC"]),
                Room::new(102, RoomType::Double, 100.0).with_facilities(&["WiFi", "TV"]),
            ],
        )
        .unwrap();
        store
    }

    #[test]
    fn test_list_sorts_by_price_with_stable_ties() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());

        let rooms = store.list(None).unwrap();
        let numbers: Vec<u32> = rooms.iter().map(|r| r.room_number).collect();
        // 101 and 102 share a price; 101 comes first in the file
        assert_eq!(numbers, vec![101, 102, 103]);
    }

    #[test]
    fn test_list_applies_filter() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());

        let filter = RoomFilter {
            facilities: "Jacuzzi".to_string(),
            ..Default::default()
        };
        let rooms = store.list(Some(&filter)).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_number, 103);
    }

    #[test]
    fn test_set_status_touches_only_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());

        store.set_status(101, RoomStatus::Booked).unwrap();

        let room = store.find(101).unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Booked);
        let other = store.find(102).unwrap().unwrap();
        assert_eq!(other.status, RoomStatus::Available);
    }

    #[test]
    fn test_price_of_unknown_room() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());

        assert!(matches!(store.price_of(999), Err(Error::RoomNotFound(999))));
    }

    #[test]
    fn test_room_line_round_trip() {
        let room = Room::new(105, RoomType::Double, 180.0)
            .with_facilities(&["WiFi", "TV", "AC", "Meal Service", "Balcony"]);
        let line = room.to_line().unwrap();
        assert_eq!(line, "105:Double:180.00:Available:WiFi,TV,AC,Meal Service,Balcony");

        let parsed = Room::parse_line(&line).unwrap();
        assert_eq!(parsed.facilities.len(), 5);
        assert_eq!(parsed.price_per_night, 180.0);
    }
}
