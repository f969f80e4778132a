//! Drives a [`lotto_engine::DrawingEngine`] for a front end.
//!
//! Loads configuration, sets up logging, and runs the paced, cancellable
//! drawing loop.

pub mod config;
pub mod session;

use std::{path::PathBuf, sync::LazyLock};

pub use config::{AppConfig, SessionConfig};
pub use session::{PlaySession, SessionReport, StopHandle, StopReason};

/// Result of loading the `.env` file, resolved once per process
pub static ENV_GUARD: LazyLock<dotenvy::Result<PathBuf>> = LazyLock::new(dotenvy::dotenv);

/// Load `.env` and initialize the logger.
///
/// `level` overrides the global level of `RUST_LOG`, per-module directives
/// from `RUST_LOG` are kept. Calling this twice is harmless.
pub fn setup(level: Option<log::LevelFilter>) {
    let env_loaded = ENV_GUARD.is_ok();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }

    if !env_loaded {
        log::debug!("No .env file found, using process environment");
    }
}
