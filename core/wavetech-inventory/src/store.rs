//! The six record lists behind the workshop screens.

use crate::error::{InventoryError, InventoryResult};
use crate::list::{Record, RecordList};
use crate::models::{
    DiagnosticLog, InventoryRecord, MaintenanceTemplate, MicrowaveListing, PartItem, WorkLogEntry,
};
use crate::seed::SampleData;
use crate::summary::DashboardSummary;
use chrono::Utc;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use wavetech_storage::Preferences;

/// Names one of the six record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Listings,
    Parts,
    Inventory,
    WorkLogs,
    Templates,
    Diagnostics,
}

impl RecordKind {
    pub const ALL: [Self; 6] = [
        Self::Listings,
        Self::Parts,
        Self::Inventory,
        Self::WorkLogs,
        Self::Templates,
        Self::Diagnostics,
    ];

    /// Preference key the kind is stored under.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Listings => MicrowaveListing::STORAGE_KEY,
            Self::Parts => PartItem::STORAGE_KEY,
            Self::Inventory => InventoryRecord::STORAGE_KEY,
            Self::WorkLogs => WorkLogEntry::STORAGE_KEY,
            Self::Templates => MaintenanceTemplate::STORAGE_KEY,
            Self::Diagnostics => DiagnosticLog::STORAGE_KEY,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Listings => "listings",
            Self::Parts => "parts",
            Self::Inventory => "inventory",
            Self::WorkLogs => "work-logs",
            Self::Templates => "templates",
            Self::Diagnostics => "diagnostics",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "listings" | "listing" | "microwaves" | "microwave" => Ok(Self::Listings),
            "parts" | "part" => Ok(Self::Parts),
            "inventory" | "inventory-records" | "movements" => Ok(Self::Inventory),
            "work-logs" | "work-log" | "worklogs" => Ok(Self::WorkLogs),
            "templates" | "template" | "maintenance" | "maintenance-templates" => {
                Ok(Self::Templates)
            }
            "diagnostics" | "diagnostic" | "diagnostic-logs" => Ok(Self::Diagnostics),
            _ => Err(InventoryError::UnknownKind(s.to_string())),
        }
    }
}

/// All record lists, loaded from one preference store.
#[derive(Debug)]
pub struct InventoryStore {
    pub listings: RecordList<MicrowaveListing>,
    pub parts: RecordList<PartItem>,
    pub inventory: RecordList<InventoryRecord>,
    pub work_logs: RecordList<WorkLogEntry>,
    pub templates: RecordList<MaintenanceTemplate>,
    pub diagnostics: RecordList<DiagnosticLog>,
}

impl InventoryStore {
    /// Loads every list. When there are neither listings nor parts, every
    /// list is replaced with one sample record.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference store is unusable or the samples
    /// cannot be written.
    pub fn open(prefs: Arc<Preferences>) -> InventoryResult<Self> {
        let mut store = Self {
            listings: RecordList::load(prefs.clone())?,
            parts: RecordList::load(prefs.clone())?,
            inventory: RecordList::load(prefs.clone())?,
            work_logs: RecordList::load(prefs.clone())?,
            templates: RecordList::load(prefs.clone())?,
            diagnostics: RecordList::load(prefs)?,
        };

        if store.listings.is_empty() && store.parts.is_empty() {
            store.seed()?;
        }
        Ok(store)
    }

    fn seed(&mut self) -> InventoryResult<()> {
        let sample = SampleData::new(Utc::now());
        self.listings.replace(vec![sample.listing])?;
        self.parts.replace(vec![sample.part])?;
        self.inventory.replace(vec![sample.movement])?;
        self.work_logs.replace(vec![sample.work_log])?;
        self.templates.replace(vec![sample.template])?;
        self.diagnostics.replace(vec![sample.diagnostic])?;
        info!("Seeded sample records");
        Ok(())
    }

    /// Number of records of `kind`.
    #[must_use]
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Listings => self.listings.len(),
            RecordKind::Parts => self.parts.len(),
            RecordKind::Inventory => self.inventory.len(),
            RecordKind::WorkLogs => self.work_logs.len(),
            RecordKind::Templates => self.templates.len(),
            RecordKind::Diagnostics => self.diagnostics.len(),
        }
    }

    /// One-line descriptions of the records of `kind` matching `query`.
    #[must_use]
    pub fn headlines(&self, kind: RecordKind, query: &str) -> Vec<String> {
        fn lines<T: Record>(list: &RecordList<T>, query: &str) -> Vec<String> {
            list.search(query).into_iter().map(|item| item.headline()).collect()
        }

        match kind {
            RecordKind::Listings => lines(&self.listings, query),
            RecordKind::Parts => lines(&self.parts, query),
            RecordKind::Inventory => lines(&self.inventory, query),
            RecordKind::WorkLogs => lines(&self.work_logs, query),
            RecordKind::Templates => lines(&self.templates, query),
            RecordKind::Diagnostics => lines(&self.diagnostics, query),
        }
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_store(self)
    }
}
