//! User and profile models

use serde::{Deserialize, Serialize};

/// A registered customer; phone doubles as the login credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub phone: String,
}

impl User {
    pub fn new(username: String, phone: String) -> Self {
        Self { username, phone }
    }
}

/// Free-text contact details, upserted by username
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub full_name: String,
    pub id_number: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

impl UserProfile {
    /// A profile must carry a full name and an id number before its owner
    /// may book a room
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty() && !self.id_number.is_empty()
    }
}

/// Explicit login context, passed to operations that need to know the
/// caller instead of consulting process-wide state
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub current_user: Option<String>,
    pub is_admin: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, username: String) {
        self.current_user = Some(username);
    }

    pub fn logout(&mut self) {
        self.current_user = None;
        self.is_admin = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_completeness() {
        let mut profile = UserProfile {
            username: "alice".to_string(),
            ..Default::default()
        };
        assert!(!profile.is_complete());

        profile.full_name = "Alice Smith".to_string();
        assert!(!profile.is_complete());

        profile.id_number = "AB123456".to_string();
        assert!(profile.is_complete());
    }

    #[test]
    fn test_session_logout_clears_admin() {
        let mut session = Session::new();
        session.login("alice".to_string());
        session.is_admin = true;

        session.logout();
        assert!(!session.is_logged_in());
        assert!(!session.is_admin);
    }
}
