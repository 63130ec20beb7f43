//! Innkeep - hotel reservation manager
//!
//! Console front-end over the innkeep-core booking engine. All rules live
//! in the core crate; this binary only prompts, calls, and prints.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod menu;
mod receipt;
mod state;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Innkeep");

    let app = match state::AppState::new() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = menu::run(app) {
        tracing::error!("Unrecoverable error: {}", e);
        std::process::exit(1);
    }
}
