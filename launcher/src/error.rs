use std::path::PathBuf;
use thiserror::Error;
use wavetech_gate::GateError;
use wavetech_inventory::InventoryError;
use wavetech_storage::StorageError;

pub type LauncherResult<T> = Result<T, LauncherError>;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no data directory: set data_dir in the config or pass --data-dir")]
    NoDataDir,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
