//! Admin credential storage
//!
//! A single plaintext secret on disk. Comparison against the stored value
//! is the whole authentication contract here; hashing is out of scope.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

use super::codec;

pub(crate) const FILE_NAME: &str = "admin_pass.txt";
pub(crate) const DEFAULT_PASSWORD: &str = "admin123";

pub struct AdminStore<'a> {
    dir: &'a Path,
}

impl<'a> AdminStore<'a> {
    pub(crate) fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(FILE_NAME)
    }

    /// Stored admin password. A missing file bootstraps the default value.
    pub fn password(&self) -> Result<String> {
        match fs::read_to_string(self.path()) {
            Ok(contents) => Ok(contents.lines().next().unwrap_or("").to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("creating default admin credential");
                self.set(DEFAULT_PASSWORD)?;
                Ok(DEFAULT_PASSWORD.to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn verify(&self, password: &str) -> Result<bool> {
        Ok(self.password()? == password)
    }

    pub fn set(&self, new_password: &str) -> Result<()> {
        codec::check_field(new_password)?;
        fs::write(self.path(), format!("{new_password}\n"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_access_bootstraps_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = AdminStore::new(dir.path());

        assert!(store.verify("admin123").unwrap());
        assert!(dir.path().join(FILE_NAME).exists());
    }

    #[test]
    fn test_set_overwrites_secret() {
        let dir = tempfile::tempdir().unwrap();
        let store = AdminStore::new(dir.path());

        store.set("hunter2hunter2").unwrap();
        assert!(store.verify("hunter2hunter2").unwrap());
        assert!(!store.verify("admin123").unwrap());
    }
}
