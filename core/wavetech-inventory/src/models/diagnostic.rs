use super::RecordMeta;
use crate::ids::RecordId;
use crate::list::Record;
use crate::validation::Violations;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bench diagnosis of a faulty unit.
///
/// The four electrical readings and the time spent are optional in storage
/// but must all be present for the log to be saved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticLog {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub details: String,
    pub recorded_at: Option<DateTime<Utc>>,
    pub severity: String,
    pub technician: String,
    pub job_id: Option<RecordId>,
    pub device_name: String,
    pub os_version: String,
    pub app_version: String,
    pub temperature: Option<f64>,
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    pub frequency: f64,
    pub notes: String,
    pub category: String,
    pub cause: String,
    pub solution: String,
    pub recommendation: String,
    pub time_spent_minutes: Option<u32>,
    pub status: String,
    pub location: String,
    pub humidity: f64,
    pub test_tools: Vec<String>,
    pub tag: String,
    pub reviewed_by: String,
    pub review_date: Option<DateTime<Utc>>,
    pub approved: bool,
    pub archived: bool,
}

impl Record for DiagnosticLog {
    const STORAGE_KEY: &'static str = "diagnostic_logs";
    const LABEL: &'static str = "diagnostic log";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn check(&self, v: &mut Violations) {
        v.require("Title", &self.title)
            .require("Details", &self.details)
            .require("Severity", &self.severity)
            .require("Technician", &self.technician)
            .require("Device Name", &self.device_name)
            .require_some("Temperature", self.temperature.as_ref())
            .require_some("Voltage", self.voltage.as_ref())
            .require_some("Current", self.current.as_ref())
            .require_some("Resistance", self.resistance.as_ref())
            .require("Notes", &self.notes)
            .require("Category", &self.category)
            .require("Cause", &self.cause)
            .require("Solution", &self.solution)
            .require_some("Time Spent", self.time_spent_minutes.as_ref());
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.details.as_str(),
            self.severity.as_str(),
            self.technician.as_str(),
            self.device_name.as_str(),
            self.category.as_str(),
            self.cause.as_str(),
            self.solution.as_str(),
        ]
    }

    fn headline(&self) -> String {
        format!("[{}] {} on {}", self.severity, self.title, self.device_name)
    }
}
