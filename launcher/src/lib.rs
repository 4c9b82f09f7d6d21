//! Shared pieces of the `wavetech` binary: configuration, store wiring, and
//! the launch sequence.

mod app;
mod config;
mod error;

pub use app::{App, Launch};
pub use config::{AppConfig, DEFAULT_KEYRING_SERVICE, PREFERENCES_FILE};
pub use error::{LauncherError, LauncherResult};
