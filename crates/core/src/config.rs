//! Application configuration
//!
//! An optional `innkeep.toml` next to the binary overrides where record
//! files live and the hotel name printed on receipts.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_HOTEL_NAME: &str = "Innkeep Hotel";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Where the record files live; defaults to the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub hotel_name: Option<String>,
}

impl Config {
    /// Load from a TOML file. A missing file yields the default config.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Effective data directory: explicit override, else the platform data
    /// dir, else `./data`
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        match ProjectDirs::from("dev", "innkeep", "innkeep") {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => PathBuf::from("data"),
        }
    }

    pub fn hotel_name(&self) -> &str {
        self.hotel_name.as_deref().unwrap_or(DEFAULT_HOTEL_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("/definitely/not/here/innkeep.toml").unwrap();
        assert!(config.data_dir.is_none());
        assert_eq!(config.hotel_name(), DEFAULT_HOTEL_NAME);
    }

    #[test]
    fn test_load_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("innkeep.toml");
        fs::write(&path, "data_dir = \"/tmp/innkeep\"\nhotel_name = \"Seaside Lodge\"\n")
            .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/innkeep"));
        assert_eq!(config.hotel_name(), "Seaside Lodge");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("innkeep.toml");
        fs::write(&path, "data_dir = [not toml").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
