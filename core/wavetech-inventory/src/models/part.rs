use super::RecordMeta;
use crate::list::Record;
use crate::validation::Violations;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A spare part stocked for repairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartItem {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub part_number: String,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub manufacturer: String,
    pub model_compatibility: String,
    pub description: String,
    pub material: String,
    pub color: String,
    pub size: String,
    pub weight_grams: i32,
    pub unit_cost: f64,
    pub selling_price: f64,
    pub stock_quantity: i32,
    pub reorder_threshold: i32,
    pub reorder_quantity: i32,
    pub supplier: String,
    pub supplier_contact: String,
    pub location_bin: String,
    pub storage_condition: String,
    pub warranty_months: i32,
    pub warranty_expiry: Option<DateTime<Utc>>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub last_restocked: Option<DateTime<Utc>>,
    pub barcode: String,
    pub notes: String,
    pub serial_tracked: bool,
    pub compatible_models: Vec<String>,
    pub quality_grade: String,
    pub rating: i32,
    pub active: bool,
}

impl PartItem {
    /// Stock has fallen to or below the reorder threshold.
    #[must_use]
    pub fn needs_reorder(&self) -> bool {
        self.stock_quantity <= self.reorder_threshold
    }
}

impl Record for PartItem {
    const STORAGE_KEY: &'static str = "part_items";
    const LABEL: &'static str = "part";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn check(&self, v: &mut Violations) {
        v.require("Part Number", &self.part_number)
            .require("Name", &self.name)
            .require("Category", &self.category)
            .require("Manufacturer", &self.manufacturer)
            .require("Model Compatibility", &self.model_compatibility)
            .require("Description", &self.description)
            .require("Supplier", &self.supplier)
            .require("Location Bin", &self.location_bin)
            .check(
                (1..=5).contains(&self.rating),
                "Rating must be a number between 1 and 5.",
            );
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.part_number.as_str(),
            self.name.as_str(),
            self.category.as_str(),
            self.manufacturer.as_str(),
            self.model_compatibility.as_str(),
            self.supplier.as_str(),
        ];
        fields.extend(self.compatible_models.iter().map(String::as_str));
        fields
    }

    fn headline(&self) -> String {
        let flag = if self.needs_reorder() { " [reorder]" } else { "" };
        format!(
            "{} {} (stock {}/{}){flag}",
            self.part_number, self.name, self.stock_quantity, self.reorder_threshold
        )
    }
}
