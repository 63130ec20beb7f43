//! Room model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Room category offered by the hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Single" => Some(RoomType::Single),
            "Double" => Some(RoomType::Double),
            "Suite" => Some(RoomType::Suite),
            _ => None,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displayed availability flag.
///
/// This is a legacy hint kept for compatibility with the persisted room
/// format; actual availability is always answered by scanning active
/// bookings for window overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Booked,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Booked => "Booked",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(RoomStatus::Available),
            "Booked" => Some(RoomStatus::Booked),
            _ => None,
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hotel room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub room_number: u32,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub status: RoomStatus,
    pub facilities: Vec<String>,
}

impl Room {
    pub fn new(room_number: u32, room_type: RoomType, price_per_night: f64) -> Self {
        Self {
            room_number,
            room_type,
            price_per_night,
            status: RoomStatus::Available,
            facilities: Vec::new(),
        }
    }

    pub fn with_facilities(mut self, facilities: &[&str]) -> Self {
        self.facilities = facilities.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Comma-joined facilities blob, as persisted and as matched by filters
    pub fn facilities_joined(&self) -> String {
        self.facilities.join(",")
    }
}

/// Query criteria for room listings; zero/empty fields mean "no constraint"
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub min_price: f64,
    pub max_price: f64,
    pub room_type: Option<RoomType>,
    pub facilities: String,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        if self.min_price > 0.0 && room.price_per_night < self.min_price {
            return false;
        }
        if self.max_price > 0.0 && room.price_per_night > self.max_price {
            return false;
        }
        if let Some(room_type) = self.room_type {
            if room.room_type != room_type {
                return false;
            }
        }
        if !self.facilities.is_empty() && !room.facilities_joined().contains(&self.facilities) {
            return false;
        }
        true
    }
}
