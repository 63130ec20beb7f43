//! Flat-file record storage
//!
//! Every collection persists as one line-oriented, colon-delimited text
//! file inside the data directory. Mutations follow a read-all,
//! modify-in-memory, rewrite-via-rename contract.
//!
//! The store performs unsynchronized reads and rewrites: it assumes a
//! single process with one caller at a time. An embedding host with
//! multiple threads must serialize access behind its own mutex.

mod admin;
mod bookings;
mod codec;
mod profiles;
mod rooms;
mod seed;
mod users;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::error::Result;

pub use admin::AdminStore;
pub use bookings::BookingStore;
pub use codec::Record;
pub use profiles::ProfileStore;
pub use rooms::RoomStore;
pub use users::UserStore;

/// Handle on the data directory, one accessor per record kind
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Open or create the data directory, seeding defaults on first run
    #[instrument(skip(data_dir), fields(path = %data_dir.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        seed::ensure_defaults(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn rooms(&self) -> RoomStore<'_> {
        RoomStore::new(&self.data_dir)
    }

    pub fn bookings(&self) -> BookingStore<'_> {
        BookingStore::new(&self.data_dir)
    }

    pub fn users(&self) -> UserStore<'_> {
        UserStore::new(&self.data_dir)
    }

    pub fn profiles(&self) -> ProfileStore<'_> {
        ProfileStore::new(&self.data_dir)
    }

    pub fn admin(&self) -> AdminStore<'_> {
        AdminStore::new(&self.data_dir)
    }
}
