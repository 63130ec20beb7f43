//! Identity rules and credential checks

use tracing::info;

use crate::error::{Error, Result};
use crate::models::{User, UserProfile};
use crate::store::Store;

/// 3-20 characters, leading letter, then letters, digits, or underscores
pub fn valid_username(username: &str) -> bool {
    if !(3..=20).contains(&username.len()) {
        return false;
    }
    let mut chars = username.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 10-15 characters, digits only
pub fn valid_phone(phone: &str) -> bool {
    (10..=15).contains(&phone.len()) && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Registers a new user. The phone number is entered twice at signup and
/// both copies must agree.
pub fn register(store: &Store, username: &str, phone: &str, phone_confirm: &str) -> Result<()> {
    if !valid_username(username) {
        return Err(Error::InvalidUsernameFormat);
    }
    if !valid_phone(phone) {
        return Err(Error::InvalidPhoneFormat);
    }
    if phone != phone_confirm {
        return Err(Error::PhoneMismatch);
    }
    if store.users().exists(username)? {
        return Err(Error::UsernameTaken(username.to_string()));
    }

    store
        .users()
        .create(&User::new(username.to_string(), phone.to_string()))?;
    info!(username, "registered user");
    Ok(())
}

/// Exact match of username and phone against a stored row
pub fn authenticate(store: &Store, username: &str, phone: &str) -> Result<bool> {
    Ok(store
        .users()
        .find(username)?
        .map_or(false, |user| user.phone == phone))
}

/// `authenticate` with the mismatch surfaced as an error, for callers that
/// want the failure message rather than a predicate
pub fn login(store: &Store, username: &str, phone: &str) -> Result<()> {
    if authenticate(store, username, phone)? {
        Ok(())
    } else {
        Err(Error::InvalidCredentials)
    }
}

/// Compares against the stored admin secret, bootstrapping the default on
/// first-ever access
pub fn admin_authenticate(store: &Store, password: &str) -> Result<bool> {
    store.admin().verify(password)
}

pub fn change_admin_password(store: &Store, new_password: &str) -> Result<()> {
    store.admin().set(new_password)?;
    info!("admin password changed");
    Ok(())
}

/// Insert-or-update the caller's profile, keyed by username. Free-text
/// fields are rejected if they would corrupt the record format.
pub fn profile_upsert(store: &Store, profile: &UserProfile) -> Result<()> {
    store.profiles().upsert(profile)
}

/// Stored profile for a username; an absent row reads as an empty profile
pub fn profile_of(store: &Store, username: &str) -> Result<UserProfile> {
    Ok(store.profiles().find(username)?.unwrap_or(UserProfile {
        username: username.to_string(),
        ..Default::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(valid_username("abc_123"));
        assert!(valid_username("alice"));
        assert!(!valid_username("ab"));
        assert!(!valid_username("2abc"));
        assert!(!valid_username("has space"));
        assert!(!valid_username("waaaaaaaaaaay_too_long_name"));
    }

    #[test]
    fn test_phone_rules() {
        assert!(valid_phone("5551234567"));
        assert!(valid_phone("555123456789012"));
        assert!(!valid_phone("555123456"));
        assert!(!valid_phone("5551234567890123"));
        assert!(!valid_phone("555-123-4567"));
    }

    #[test]
    fn test_register_and_authenticate() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        register(&store, "alice", "5551234567", "5551234567").unwrap();
        assert!(authenticate(&store, "alice", "5551234567").unwrap());
        assert!(!authenticate(&store, "alice", "5550000000").unwrap());
        assert!(!authenticate(&store, "bob", "5551234567").unwrap());

        login(&store, "alice", "5551234567").unwrap();
        assert!(matches!(
            login(&store, "alice", "5550000000"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_rejects_duplicates_and_mismatches() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        register(&store, "alice", "5551234567", "5551234567").unwrap();
        assert!(matches!(
            register(&store, "alice", "5559876543", "5559876543"),
            Err(Error::UsernameTaken(_))
        ));
        assert!(matches!(
            register(&store, "bob", "5551234567", "5551234568"),
            Err(Error::PhoneMismatch)
        ));
        assert!(matches!(
            register(&store, "b", "5551234567", "5551234567"),
            Err(Error::InvalidUsernameFormat)
        ));
        assert!(matches!(
            register(&store, "carol", "none", "none"),
            Err(Error::InvalidPhoneFormat)
        ));
    }

    #[test]
    fn test_admin_password_change() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        assert!(admin_authenticate(&store, "admin123").unwrap());
        change_admin_password(&store, "newsecret99").unwrap();
        assert!(!admin_authenticate(&store, "admin123").unwrap());
        assert!(admin_authenticate(&store, "newsecret99").unwrap());
    }

    #[test]
    fn test_profile_upsert_rejects_reserved_characters() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let profile = UserProfile {
            username: "alice".to_string(),
            full_name: "Alice Smith".to_string(),
            id_number: "AB123".to_string(),
            email: "a@example.com".to_string(),
            address: "Flat 2: Main St".to_string(),
            phone: "5551234567".to_string(),
        };
        assert!(matches!(
            profile_upsert(&store, &profile),
            Err(Error::ReservedCharacter(_))
        ));
        // The rejected save must not have written anything
        assert!(store.profiles().find("alice").unwrap().is_none());
    }

    #[test]
    fn test_profile_of_missing_user_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let profile = profile_of(&store, "ghost").unwrap();
        assert_eq!(profile.username, "ghost");
        assert!(!profile.is_complete());
    }
}
