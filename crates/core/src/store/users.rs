//! User credential storage

use std::path::Path;

use crate::error::Result;
use crate::models::User;

use super::codec::{self, Record};

impl Record for User {
    const FILE_NAME: &'static str = "users.txt";

    fn to_line(&self) -> Result<String> {
        codec::join_fields(&[&self.username, &self.phone])
    }

    fn parse_line(line: &str) -> Option<Self> {
        let (username, phone) = line.split_once(':')?;
        if username.is_empty() || phone.contains(':') {
            return None;
        }
        Some(User::new(username.to_string(), phone.to_string()))
    }
}

pub struct UserStore<'a> {
    dir: &'a Path,
}

impl<'a> UserStore<'a> {
    pub(crate) fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    pub fn all(&self) -> Result<Vec<User>> {
        codec::load_all(self.dir)
    }

    pub fn find(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|user| user.username == username))
    }

    pub fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.find(username)?.is_some())
    }

    pub fn create(&self, user: &User) -> Result<()> {
        codec::append(self.dir, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_find_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path());

        assert!(!store.exists("alice").unwrap());
        store
            .create(&User::new("alice".to_string(), "5551234567".to_string()))
            .unwrap();

        assert!(store.exists("alice").unwrap());
        let user = store.find("alice").unwrap().unwrap();
        assert_eq!(user.phone, "5551234567");
    }

    #[test]
    fn test_rejects_line_with_extra_delimiter() {
        assert!(User::parse_line("alice:555:extra").is_none());
        assert!(User::parse_line("no-delimiter").is_none());
    }
}
