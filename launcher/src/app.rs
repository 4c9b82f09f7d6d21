//! Store wiring and the launch sequence.

use crate::config::AppConfig;
use crate::error::LauncherResult;
use std::sync::Arc;
use tracing::{debug, info};
use wavetech_gate::{GateController, GateState, TrustStore, Url};
use wavetech_inventory::{DashboardSummary, InventoryStore};
use wavetech_storage::{KeyringStore, MemorySecureStore, Preferences, SecureStore};

/// How a launch ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Launch {
    /// Show remote content.
    Remote(Url),
    /// Show the built-in workshop screens.
    Native(DashboardSummary),
}

/// Opened stores for one run of the launcher.
pub struct App {
    config: AppConfig,
    prefs: Arc<Preferences>,
    secure: Arc<dyn SecureStore>,
}

impl App {
    /// Opens the preference document and picks the secret store.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is known or the preference
    /// file exists but cannot be read. A document that does not parse is
    /// moved aside and the launch continues with empty preferences.
    pub fn open(config: AppConfig) -> LauncherResult<Self> {
        let path = config.preferences_path()?;
        debug!(path = %path.display(), "Opening preferences");
        let prefs = Arc::new(Preferences::open_or_reset(&path)?);

        let secure: Arc<dyn SecureStore> = if config.use_platform_keyring {
            Arc::new(KeyringStore::new(&config.keyring_service))
        } else {
            debug!("Platform keyring disabled, secrets are kept in memory");
            Arc::new(MemorySecureStore::new())
        };

        Ok(Self::with_stores(config, prefs, secure))
    }

    /// Uses already opened stores.
    pub fn with_stores(
        config: AppConfig,
        prefs: Arc<Preferences>,
        secure: Arc<dyn SecureStore>,
    ) -> Self {
        Self {
            config,
            prefs,
            secure,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Loads the workshop records, seeding them on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be loaded or seeded.
    pub fn inventory(&self) -> LauncherResult<InventoryStore> {
        Ok(InventoryStore::open(self.prefs.clone())?)
    }

    /// Runs the startup gate to completion.
    ///
    /// Every state change is logged. On approval the remote URL is returned;
    /// otherwise the workshop records are opened and summarised.
    ///
    /// # Errors
    ///
    /// Returns an error if the gate config is invalid, or if the native path
    /// cannot open the records.
    pub async fn launch(&self) -> LauncherResult<Launch> {
        let controller = GateController::from_stores(
            self.config.gate.clone(),
            self.prefs.clone(),
            self.secure.clone(),
        )?;

        let mut states = controller.subscribe();
        let observer = tokio::spawn(async move {
            while states.changed().await.is_ok() {
                let state = states.borrow_and_update().clone();
                info!(state = state.name(), "Gate state changed");
                if state.is_terminal() {
                    break;
                }
            }
        });

        let outcome = controller.activate().await;
        drop(controller);
        // The observer exits on the terminal state or when the sender drops.
        let _ = observer.await;

        match outcome {
            GateState::Approved { url, .. } => {
                info!(%url, "Launching remote content");
                Ok(Launch::Remote(url))
            }
            _ => {
                info!("Launching native workshop");
                Ok(Launch::Native(self.inventory()?.summary()))
            }
        }
    }

    /// Forgets the cached trust record so the next launch validates again.
    ///
    /// # Errors
    ///
    /// Returns an error if either half of the record cannot be removed.
    pub fn reset_trust(&self) -> LauncherResult<()> {
        TrustStore::new(self.prefs.clone(), self.secure.clone(), &self.config.gate).clear()?;
        info!("Cleared cached trust record");
        Ok(())
    }
}
