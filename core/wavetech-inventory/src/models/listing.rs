use super::RecordMeta;
use crate::list::Record;
use crate::validation::Violations;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A microwave unit held for sale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MicrowaveListing {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub sku: String,
    pub model_name: String,
    pub serial_number: String,
    pub category: String,
    pub brand: String,
    pub wattage: i32,
    pub voltage: i32,
    pub capacity_liters: i32,
    pub color: String,
    pub dimensions: String,
    pub weight_kg: f64,
    pub material: String,
    pub control_type: String,
    pub features: Vec<String>,
    pub energy_rating: String,
    pub warranty_years: i32,
    pub manufacture_date: Option<DateTime<Utc>>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub supplier: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub stock_quantity: i32,
    pub location_bin: String,
    pub condition: String,
    pub notes: String,
    pub power_consumption: f64,
    pub country_of_origin: String,
    pub barcode: String,
    pub maintenance_interval_days: i32,
    pub last_serviced_date: Option<DateTime<Utc>>,
    pub next_service_date: Option<DateTime<Utc>>,
    pub favorite: bool,
    pub tags: Vec<String>,
}

impl Record for MicrowaveListing {
    const STORAGE_KEY: &'static str = "microwave_listings";
    const LABEL: &'static str = "microwave listing";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn check(&self, v: &mut Violations) {
        v.require("SKU", &self.sku)
            .require("Model Name", &self.model_name)
            .require("Serial Number", &self.serial_number)
            .require("Category", &self.category)
            .require("Brand", &self.brand)
            .require("Color", &self.color)
            .require("Dimensions", &self.dimensions)
            .require("Material", &self.material)
            .require("Control Type", &self.control_type)
            .require("Energy Rating", &self.energy_rating)
            .require("Supplier", &self.supplier)
            .require("Location Bin", &self.location_bin)
            .require("Country of Origin", &self.country_of_origin)
            .require("Barcode", &self.barcode);

        v.check(self.wattage > 0, "Wattage must be > 0.")
            .check(self.voltage > 0, "Voltage must be > 0.")
            .check(self.capacity_liters > 0, "Capacity must be > 0.")
            .check(self.warranty_years >= 0, "Warranty must be >= 0.")
            .check(self.selling_price > 0.0, "Selling Price must be > 0.0.")
            .check(self.cost_price > 0.0, "Cost Price must be > 0.0.")
            .check(self.stock_quantity >= 0, "Stock Quantity must be >= 0.")
            .check(
                self.maintenance_interval_days >= 0,
                "Maintenance Interval must be >= 0.",
            );
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.sku.as_str(),
            self.model_name.as_str(),
            self.serial_number.as_str(),
            self.category.as_str(),
            self.brand.as_str(),
            self.supplier.as_str(),
            self.barcode.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn headline(&self) -> String {
        format!(
            "{} {} ({} {}W, stock {})",
            self.sku, self.model_name, self.brand, self.wattage, self.stock_quantity
        )
    }
}
