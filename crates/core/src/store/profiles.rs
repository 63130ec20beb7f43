//! User profile storage
//!
//! One row per username, replaced in place on save.

use std::path::Path;

use crate::error::Result;
use crate::models::UserProfile;

use super::codec::{self, Record};

impl Record for UserProfile {
    const FILE_NAME: &'static str = "user_profiles.txt";

    fn to_line(&self) -> Result<String> {
        codec::join_fields(&[
            &self.username,
            &self.full_name,
            &self.id_number,
            &self.email,
            &self.address,
            &self.phone,
        ])
    }

    fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() != 6 || fields[0].is_empty() {
            return None;
        }
        Some(UserProfile {
            username: fields[0].to_string(),
            full_name: fields[1].to_string(),
            id_number: fields[2].to_string(),
            email: fields[3].to_string(),
            address: fields[4].to_string(),
            phone: fields[5].to_string(),
        })
    }
}

pub struct ProfileStore<'a> {
    dir: &'a Path,
}

impl<'a> ProfileStore<'a> {
    pub(crate) fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    pub fn all(&self) -> Result<Vec<UserProfile>> {
        codec::load_all(self.dir)
    }

    pub fn find(&self, username: &str) -> Result<Option<UserProfile>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|profile| profile.username == username))
    }

    /// Replace-or-append keyed by username
    pub fn upsert(&self, profile: &UserProfile) -> Result<()> {
        let mut profiles = self.all()?;
        match profiles
            .iter_mut()
            .find(|existing| existing.username == profile.username)
        {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        codec::rewrite_all(self.dir, &profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(username: &str, full_name: &str) -> UserProfile {
        UserProfile {
            username: username.to_string(),
            full_name: full_name.to_string(),
            id_number: "AB123".to_string(),
            email: "a@example.com".to_string(),
            address: "1 Main St".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        store.upsert(&make_profile("alice", "Alice Smith")).unwrap();
        store.upsert(&make_profile("bob", "Bob Jones")).unwrap();
        store.upsert(&make_profile("alice", "Alice Q. Smith")).unwrap();

        let profiles = store.all().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].username, "alice");
        assert_eq!(profiles[0].full_name, "Alice Q. Smith");
        assert_eq!(profiles[1].username, "bob");
    }

    #[test]
    fn test_profile_line_round_trip() {
        let profile = make_profile("alice", "Alice Smith");
        let line = profile.to_line().unwrap();
        assert_eq!(
            line,
            "alice:Alice Smith:AB123:a@example.com:1 Main St:5551234567"
        );
        let parsed = UserProfile::parse_line(&line).unwrap();
        assert_eq!(parsed.address, "1 Main St");
    }
}
