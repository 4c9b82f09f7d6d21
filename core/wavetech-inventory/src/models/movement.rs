use super::RecordMeta;
use crate::ids::RecordId;
use crate::list::Record;
use crate::validation::Violations;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stock movement against a part.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryRecord {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub part_id: Option<RecordId>,
    pub change: i32,
    pub reason: String,
    pub recorded_by: String,
    pub recorded_at: Option<DateTime<Utc>>,
    pub approval_status: String,
    pub verified_by: String,
    pub verification_date: Option<DateTime<Utc>>,
    pub previous_quantity: i32,
    pub new_quantity: i32,
    pub location: String,
    pub batch_number: String,
    pub reference_doc: String,
    pub cost_impact: f64,
    pub remarks: String,
    pub transaction_type: String,
    pub department: String,
    pub shift: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub barcode: String,
    pub supervisor: String,
    pub inspection_status: String,
    pub audit_flag: bool,
    pub category: String,
    pub storage_area: String,
    pub shelf_number: String,
    pub label_color: String,
    pub record_source: String,
    pub device_name: String,
    pub session_id: String,
    pub uploaded: bool,
}

impl Record for InventoryRecord {
    const STORAGE_KEY: &'static str = "inventory_records";
    const LABEL: &'static str = "inventory record";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn check(&self, v: &mut Violations) {
        v.require_some("Part ID", self.part_id.as_ref())
            .require("Reason", &self.reason)
            .require("Recorded By", &self.recorded_by)
            .require("Location", &self.location)
            .require("Department", &self.department)
            .check(
                self.temperature.is_some() && self.humidity.is_some(),
                "Temperature and Humidity are required.",
            )
            .check(self.cost_impact.is_finite(), "Cost Impact must be a valid number.");
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.reason.as_str(),
            self.recorded_by.as_str(),
            self.location.as_str(),
            self.department.as_str(),
            self.transaction_type.as_str(),
            self.batch_number.as_str(),
            self.reference_doc.as_str(),
        ]
    }

    fn headline(&self) -> String {
        format!(
            "{:+} {} ({} -> {}) by {}",
            self.change, self.reason, self.previous_quantity, self.new_quantity, self.recorded_by
        )
    }
}
