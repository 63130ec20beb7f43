//! Error types for Innkeep Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date format. Use YYYY-MM-DD or DD/MM/YYYY.")]
    InvalidDateFormat,

    #[error("Check-out date must be after check-in.")]
    CheckoutNotAfterCheckin,

    #[error("Check-in date must be today or in the future.")]
    CheckinInPast,

    #[error("Room {0} is already booked for those dates.")]
    RoomUnavailable(u32),

    #[error("Room {0} not found.")]
    RoomNotFound(u32),

    #[error("Please complete your profile before booking.")]
    ProfileIncomplete(String),

    #[error("Booking {0} not found.")]
    BookingNotFound(u32),

    #[error("Username '{0}' is already taken.")]
    UsernameTaken(String),

    #[error("Username must be 3-20 characters, start with a letter, and contain only letters, digits, and underscores.")]
    InvalidUsernameFormat,

    #[error("Phone number must be 10-15 digits.")]
    InvalidPhoneFormat,

    #[error("Phone numbers do not match.")]
    PhoneMismatch,

    #[error("Invalid username or phone number.")]
    InvalidCredentials,

    #[error("Value '{0}' contains a reserved character.")]
    ReservedCharacter(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
