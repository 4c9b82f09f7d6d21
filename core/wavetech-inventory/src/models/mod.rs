//! Record kinds.

mod diagnostic;
mod listing;
mod movement;
mod part;
mod template;
mod work_log;

pub use diagnostic::DiagnosticLog;
pub use listing::MicrowaveListing;
pub use movement::InventoryRecord;
pub use part::PartItem;
pub use template::MaintenanceTemplate;
pub use work_log::WorkLogEntry;

use crate::ids::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and bookkeeping timestamps carried by every record.
///
/// Flattened into each record's JSON, so stored objects look like
/// `{"id": "...", "created_at": "...", "updated_at": "...", ...}`.
/// Records saved without them get a fresh id and the load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMeta {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecordMeta {
    /// Fresh id, both timestamps set to now.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the record as modified at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Default for RecordMeta {
    fn default() -> Self {
        Self::new()
    }
}
