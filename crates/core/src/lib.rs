//! Innkeep Core Library
//!
//! Booking engine, room catalog, flat-file record store, and identity
//! rules for the Innkeep hotel reservation manager.

pub mod config;
pub mod dates;
pub mod engine;
pub mod error;
pub mod identity;
pub mod invariants;
pub mod models;
pub mod store;

pub use config::Config;
pub use engine::BookingEngine;
pub use error::{Error, Result};
pub use models::*;
pub use store::{AdminStore, BookingStore, ProfileStore, Record, RoomStore, Store, UserStore};
