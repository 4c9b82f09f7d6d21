//! Workshop records for WaveTech.
//!
//! Six record kinds, each kept as a JSON array under its own preference key:
//!
//! | Kind | Key |
//! |---|---|
//! | [`MicrowaveListing`] | `microwave_listings` |
//! | [`PartItem`] | `part_items` |
//! | [`InventoryRecord`] | `inventory_records` |
//! | [`WorkLogEntry`] | `work_logs` |
//! | [`MaintenanceTemplate`] | `maintenance_templates` |
//! | [`DiagnosticLog`] | `diagnostic_logs` |
//!
//! Records are flat: there are no invariants between kinds. Each kind checks
//! its own required fields before it is saved, and [`RecordList`] mirrors the
//! stored array in memory, rewriting it after every add or delete.

mod error;
mod ids;
mod list;
mod models;
mod seed;
mod store;
mod summary;
pub mod text;
mod validation;

pub use error::{InventoryError, InventoryResult};
pub use ids::RecordId;
pub use list::{Record, RecordList};
pub use models::{
    DiagnosticLog, InventoryRecord, MaintenanceTemplate, MicrowaveListing, PartItem, RecordMeta,
    WorkLogEntry,
};
pub use store::{InventoryStore, RecordKind};
pub use summary::DashboardSummary;
pub use validation::Violations;
