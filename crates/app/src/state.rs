//! Application state management

use innkeep_core::{Config, Result, Session, Store};

/// Main application state: the open record store plus the explicit login
/// context that replaces any process-wide current-user globals
pub struct AppState {
    pub store: Store,
    pub session: Session,
    pub hotel_name: String,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::load("innkeep.toml")?;
        let store = Store::open(config.data_dir())?;
        Ok(Self {
            store,
            session: Session::new(),
            hotel_name: config.hotel_name().to_string(),
        })
    }
}
