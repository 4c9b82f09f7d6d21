use super::RecordMeta;
use crate::list::Record;
use crate::validation::Violations;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable maintenance procedure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceTemplate {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub category: String,
    pub model_type: String,
    pub version: String,
    pub steps: Vec<String>,
    pub recommended_interval_days: u32,
    pub estimated_duration_minutes: u32,
    pub difficulty_level: String,
    pub tools_required: Vec<String>,
    pub safety_precautions: Vec<String>,
    pub parts_required: Vec<String>,
    pub created_by: String,
    pub approved_by: String,
    pub approval_date: Option<DateTime<Utc>>,
    pub review_date: Option<DateTime<Utc>>,
    pub rating: i32,
    pub usage_count: u32,
    pub last_used_date: Option<DateTime<Utc>>,
    pub next_review_date: Option<DateTime<Utc>>,
    pub remarks: String,
    pub tag: String,
    pub active: bool,
    pub associated_model: String,
    pub maintenance_type: String,
    pub department: String,
    pub version_notes: String,
    pub language: String,
    pub country: String,
    pub estimated_cost: f64,
    pub warranty_required: bool,
    pub last_updated_by: String,
}

impl Record for MaintenanceTemplate {
    const STORAGE_KEY: &'static str = "maintenance_templates";
    const LABEL: &'static str = "maintenance template";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn check(&self, v: &mut Violations) {
        v.require("Template Name", &self.name)
            .require("Category", &self.category)
            .require("Model Type", &self.model_type)
            .require("Version", &self.version)
            .require("Difficulty Level", &self.difficulty_level)
            .require("Created By", &self.created_by)
            .require("Approved By", &self.approved_by)
            .require("Associated Model", &self.associated_model)
            .require("Maintenance Type", &self.maintenance_type)
            .require("Department", &self.department)
            .require("Language", &self.language)
            .require("Country", &self.country)
            .check(
                self.estimated_cost.is_finite(),
                "Valid Estimated Cost is required.",
            )
            .require("Last Updated By", &self.last_updated_by)
            .check(
                (1..=5).contains(&self.rating),
                "Valid Rating (1-5) is required.",
            );
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.category.as_str(),
            self.model_type.as_str(),
            self.associated_model.as_str(),
            self.maintenance_type.as_str(),
            self.tag.as_str(),
        ];
        fields.extend(self.steps.iter().map(String::as_str));
        fields
    }

    fn headline(&self) -> String {
        format!(
            "{} v{} ({}, {} steps, every {} days)",
            self.name,
            self.version,
            self.difficulty_level,
            self.steps.len(),
            self.recommended_interval_days
        )
    }
}
