use super::RecordMeta;
use crate::ids::RecordId;
use crate::list::Record;
use crate::validation::Violations;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One step of a repair job, with the readings taken during it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkLogEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub job_id: Option<RecordId>,
    pub author: String,
    pub role: String,
    pub note: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub step_number: u32,
    pub status: String,
    pub temperature_reading: f64,
    pub voltage_reading: f64,
    pub current_reading: f64,
    pub resistance_reading: f64,
    pub component_replaced: String,
    pub part_used: String,
    pub time_spent_minutes: u32,
    pub tools_used: Vec<String>,
    pub customer_feedback: String,
    pub satisfaction_level: u8,
    pub warranty_claim: bool,
    pub claim_status: String,
    pub issue_resolved: bool,
    pub supervisor_name: String,
    pub environment_note: String,
    pub humidity_level: f64,
    pub safety_check_done: bool,
    pub cleaned_after_service: bool,
    pub next_visit_suggested: bool,
    pub next_visit_date: Option<DateTime<Utc>>,
    pub additional_cost: f64,
    pub remarks: String,
    pub signature_name: String,
}

impl Record for WorkLogEntry {
    const STORAGE_KEY: &'static str = "work_logs";
    const LABEL: &'static str = "work log entry";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn check(&self, v: &mut Violations) {
        v.require("Author", &self.author)
            .require("Role", &self.role)
            .require("Note", &self.note)
            .require("Status", &self.status)
            .check(self.temperature_reading.is_finite(), "Temperature must be a number.")
            .check(self.voltage_reading.is_finite(), "Voltage must be a number.")
            .check(self.current_reading.is_finite(), "Current must be a number.")
            .check(self.resistance_reading.is_finite(), "Resistance must be a number.")
            .require("Component Replaced", &self.component_replaced)
            .require("Part Used", &self.part_used)
            .check(self.additional_cost.is_finite(), "Additional Cost must be a number.")
            .check(self.humidity_level.is_finite(), "Humidity Level must be a number.");
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.author.as_str(),
            self.role.as_str(),
            self.note.as_str(),
            self.status.as_str(),
            self.component_replaced.as_str(),
            self.part_used.as_str(),
            self.remarks.as_str(),
        ]
    }

    fn headline(&self) -> String {
        format!(
            "step {} [{}] {}: {}",
            self.step_number, self.status, self.author, self.note
        )
    }
}
