//! Launcher configuration, read from an optional JSON file.

use crate::error::{LauncherError, LauncherResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wavetech_gate::GateConfig;

pub const DEFAULT_KEYRING_SERVICE: &str = "wavetech";

/// File name of the preference document inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Top-level configuration.
///
/// Every field is optional in the file:
///
/// ```json
/// {
///   "data_dir": "/var/lib/wavetech",
///   "use_platform_keyring": false,
///   "gate": { "endpoint_url": "https://validation.example/check", "access_key": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the preference document lives. Defaults to the platform data
    /// directory plus `wavetech`.
    pub data_dir: Option<PathBuf>,
    /// Service name for keyring entries.
    pub keyring_service: String,
    /// Keep secrets in the OS keyring. When false they live in memory only
    /// and are forgotten on exit.
    pub use_platform_keyring: bool,
    pub gate: GateConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir().map(|dir| dir.join("wavetech")),
            keyring_service: DEFAULT_KEYRING_SERVICE.to_string(),
            use_platform_keyring: true,
            gate: GateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads the config at `path`, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this shape.
    pub fn load(path: Option<&Path>) -> LauncherResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| LauncherError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| LauncherError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Path of the preference document.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::NoDataDir`] when no data directory is
    /// configured and the platform has none.
    pub fn preferences_path(&self) -> LauncherResult<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(PREFERENCES_FILE))
            .ok_or(LauncherError::NoDataDir)
    }
}
