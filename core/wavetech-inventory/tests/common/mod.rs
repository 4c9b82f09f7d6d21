#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use wavetech_inventory::{DiagnosticLog, InventoryRecord, MicrowaveListing, PartItem, RecordId};
use wavetech_storage::Preferences;

/// A preference file in a fresh temporary directory.
pub struct TempPrefs {
    pub dir: TempDir,
    pub prefs: Arc<Preferences>,
}

impl TempPrefs {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let prefs = Arc::new(Preferences::open(dir.path().join("preferences.json")).unwrap());
        Self { dir, prefs }
    }

    /// Opens the same file again, as a relaunch would.
    pub fn reopen(&self) -> Arc<Preferences> {
        Arc::new(Preferences::open(self.dir.path().join("preferences.json")).unwrap())
    }
}

pub fn listing(sku: &str) -> MicrowaveListing {
    MicrowaveListing {
        sku: sku.to_string(),
        model_name: "WaveChef 20".to_string(),
        serial_number: format!("SN-{sku}"),
        category: "Grill".to_string(),
        brand: "Orbit".to_string(),
        wattage: 800,
        voltage: 230,
        capacity_liters: 23,
        color: "Black".to_string(),
        dimensions: "48x37x28 cm".to_string(),
        weight_kg: 13.0,
        material: "Steel".to_string(),
        control_type: "Dial".to_string(),
        energy_rating: "A".to_string(),
        warranty_years: 1,
        supplier: "Northwind".to_string(),
        cost_price: 80.0,
        selling_price: 129.0,
        stock_quantity: 4,
        location_bin: "B2".to_string(),
        country_of_origin: "Korea".to_string(),
        barcode: format!("BC-{sku}"),
        maintenance_interval_days: 365,
        tags: vec!["Compact".to_string()],
        ..MicrowaveListing::default()
    }
}

pub fn part(number: &str, stock: i32, threshold: i32) -> PartItem {
    PartItem {
        part_number: number.to_string(),
        name: "Magnetron".to_string(),
        category: "Electrical".to_string(),
        manufacturer: "Orbit".to_string(),
        model_compatibility: "WaveChef 20".to_string(),
        description: "2450 MHz magnetron".to_string(),
        supplier: "Northwind".to_string(),
        location_bin: "P4".to_string(),
        stock_quantity: stock,
        reorder_threshold: threshold,
        rating: 4,
        ..PartItem::default()
    }
}

pub fn movement(part_id: RecordId) -> InventoryRecord {
    InventoryRecord {
        part_id: Some(part_id),
        change: -2,
        reason: "Repair".to_string(),
        recorded_by: "Sam".to_string(),
        location: "Bench 3".to_string(),
        department: "Service".to_string(),
        temperature: Some(21.5),
        humidity: Some(38.0),
        ..InventoryRecord::default()
    }
}

pub fn diagnostic(title: &str) -> DiagnosticLog {
    DiagnosticLog {
        title: title.to_string(),
        details: "Arcing near the waveguide cover".to_string(),
        severity: "High".to_string(),
        technician: "Sam".to_string(),
        device_name: "WaveChef 20".to_string(),
        temperature: Some(31.0),
        voltage: Some(229.0),
        current: Some(4.1),
        resistance: Some(2.2),
        notes: "Cover scorched".to_string(),
        category: "Electrical".to_string(),
        cause: "Grease build-up".to_string(),
        solution: "Replaced cover".to_string(),
        time_spent_minutes: Some(25),
        ..DiagnosticLog::default()
    }
}
