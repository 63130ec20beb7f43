//! First-run data bootstrap

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{Booking, Room, RoomType, User, UserProfile};

use super::codec::{self, Record};
use super::admin;

/// The five rooms every fresh installation starts with. Values are part of
/// the persisted-format compatibility surface and must not drift.
fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(101, RoomType::Single, 100.0).with_facilities(&["WiFi", "TV", "AC"]),
        Room::new(102, RoomType::Double, 150.0)
            .with_facilities(&["WiFi", "TV", "AC", "Meal Service"]),
        Room::new(103, RoomType::Suite, 300.0)
            .with_facilities(&["WiFi", "TV", "AC", "Meal Service", "Jacuzzi"]),
        Room::new(104, RoomType::Single, 120.0)
            .with_facilities(&["WiFi", "TV", "AC", "Balcony"]),
        Room::new(105, RoomType::Double, 180.0)
            .with_facilities(&["WiFi", "TV", "AC", "Meal Service", "Balcony"]),
    ]
}

/// Creates any missing data files: seed rooms, empty collections, and the
/// default admin credential. Existing files are left untouched.
pub(crate) fn ensure_defaults(dir: &Path) -> Result<()> {
    if !dir.join(Room::FILE_NAME).exists() {
        let rooms = default_rooms();
        codec::rewrite_all(dir, &rooms)?;
        info!(count = rooms.len(), "seeded default rooms");
    }

    for file in [Booking::FILE_NAME, User::FILE_NAME, UserProfile::FILE_NAME] {
        let path = dir.join(file);
        if !path.exists() {
            fs::write(&path, "")?;
        }
    }

    let admin_path = dir.join(admin::FILE_NAME);
    if !admin_path.exists() {
        fs::write(&admin_path, format!("{}\n", admin::DEFAULT_PASSWORD))?;
    }

    Ok(())
}
