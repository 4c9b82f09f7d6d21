//! Sample records written on first launch.

use crate::models::{
    DiagnosticLog, InventoryRecord, MaintenanceTemplate, MicrowaveListing, PartItem, RecordMeta,
    WorkLogEntry,
};
use chrono::{DateTime, Duration, Utc};

/// One sample of every kind, cross-referenced where the kinds allow it.
pub(crate) struct SampleData {
    pub listing: MicrowaveListing,
    pub part: PartItem,
    pub movement: InventoryRecord,
    pub work_log: WorkLogEntry,
    pub template: MaintenanceTemplate,
    pub diagnostic: DiagnosticLog,
}

fn days(n: i64) -> Duration {
    Duration::days(n)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl SampleData {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        let listing = MicrowaveListing {
            meta: RecordMeta::new(),
            sku: "MW-1001".into(),
            model_name: "HeatMaster Pro".into(),
            serial_number: "SN12345".into(),
            category: "Solo".into(),
            brand: "HeatWave".into(),
            wattage: 900,
            voltage: 220,
            capacity_liters: 20,
            color: "Silver".into(),
            dimensions: "45x35x25 cm".into(),
            weight_kg: 12.5,
            material: "Stainless Steel".into(),
            control_type: "Touch".into(),
            features: strings(&["Defrost", "Timer", "Child Lock"]),
            energy_rating: "A+".into(),
            warranty_years: 2,
            manufacture_date: Some(now - days(200)),
            purchase_date: Some(now - days(30)),
            supplier: "ABC Electronics".into(),
            cost_price: 120.0,
            selling_price: 199.0,
            stock_quantity: 10,
            location_bin: "A1".into(),
            condition: "New".into(),
            notes: "Bestseller".into(),
            power_consumption: 0.9,
            country_of_origin: "Japan".into(),
            barcode: "MW1001-ABC".into(),
            maintenance_interval_days: 180,
            last_serviced_date: Some(now - days(90)),
            next_service_date: Some(now + days(90)),
            favorite: true,
            tags: strings(&["Popular", "Energy Efficient"]),
        };

        let part = PartItem {
            meta: RecordMeta::new(),
            part_number: "PT-001".into(),
            name: "Turntable Plate".into(),
            category: "Replacement".into(),
            sub_category: "Glass".into(),
            manufacturer: "HeatWave".into(),
            model_compatibility: "HeatMaster Pro".into(),
            description: "High quality microwave turntable plate.".into(),
            material: "Tempered Glass".into(),
            color: "Transparent".into(),
            size: "27 cm".into(),
            weight_grams: 500,
            unit_cost: 5.0,
            selling_price: 9.9,
            stock_quantity: 50,
            reorder_threshold: 10,
            reorder_quantity: 30,
            supplier: "ABC Electronics".into(),
            supplier_contact: "support@abc.com".into(),
            location_bin: "P1".into(),
            storage_condition: "Room Temp".into(),
            warranty_months: 6,
            warranty_expiry: Some(now + days(180)),
            purchase_date: Some(now - days(30)),
            last_restocked: Some(now),
            barcode: "PT001-ABC".into(),
            notes: "Fits multiple models".into(),
            serial_tracked: false,
            compatible_models: strings(&["HeatMaster Pro"]),
            quality_grade: "A".into(),
            rating: 5,
            active: true,
        };

        let movement = InventoryRecord {
            meta: RecordMeta::new(),
            part_id: Some(part.meta.id),
            change: 5,
            reason: "Restock".into(),
            recorded_by: "Admin".into(),
            recorded_at: Some(now),
            approval_status: "Approved".into(),
            verified_by: "Manager".into(),
            verification_date: Some(now),
            previous_quantity: 45,
            new_quantity: 50,
            location: "Warehouse A".into(),
            batch_number: "B001".into(),
            reference_doc: "INV123".into(),
            cost_impact: 25.0,
            remarks: "Restocked successfully".into(),
            transaction_type: "Inbound".into(),
            department: "Inventory".into(),
            shift: "Morning".into(),
            temperature: Some(25.0),
            humidity: Some(40.0),
            barcode: "INV001".into(),
            supervisor: "Mr. Ali".into(),
            inspection_status: "Passed".into(),
            audit_flag: true,
            category: "Parts".into(),
            storage_area: "Main Shelf".into(),
            shelf_number: "S1".into(),
            label_color: "Blue".into(),
            record_source: "Manual".into(),
            device_name: "iPad".into(),
            session_id: "SID001".into(),
            uploaded: true,
        };

        let work_log = WorkLogEntry {
            meta: RecordMeta::new(),
            job_id: None,
            author: "Technician A".into(),
            role: "Maintenance".into(),
            note: "Replaced heating coil.".into(),
            timestamp: Some(now),
            step_number: 1,
            status: "Completed".into(),
            temperature_reading: 80.0,
            voltage_reading: 220.0,
            current_reading: 1.2,
            resistance_reading: 5.5,
            component_replaced: "Coil".into(),
            part_used: "PT-001".into(),
            time_spent_minutes: 45,
            tools_used: strings(&["Screwdriver", "Multimeter"]),
            customer_feedback: "Good service".into(),
            satisfaction_level: 5,
            warranty_claim: false,
            claim_status: "N/A".into(),
            issue_resolved: true,
            supervisor_name: "Mr. Khan".into(),
            environment_note: "Clean workspace".into(),
            humidity_level: 35.0,
            safety_check_done: true,
            cleaned_after_service: true,
            next_visit_suggested: false,
            next_visit_date: None,
            additional_cost: 0.0,
            remarks: "Job completed".into(),
            signature_name: "TechA".into(),
        };

        let template = MaintenanceTemplate {
            meta: RecordMeta::new(),
            name: "Basic Microwave Check".into(),
            category: "Routine".into(),
            model_type: "Solo".into(),
            version: "1.0".into(),
            steps: strings(&["Inspect exterior", "Check power cord", "Run test cycle"]),
            recommended_interval_days: 180,
            estimated_duration_minutes: 30,
            difficulty_level: "Easy".into(),
            tools_required: strings(&["Multimeter"]),
            safety_precautions: strings(&["Unplug before inspection"]),
            parts_required: strings(&["PT-001"]),
            created_by: "Admin".into(),
            approved_by: "Supervisor".into(),
            approval_date: Some(now),
            review_date: Some(now),
            rating: 5,
            usage_count: 3,
            last_used_date: Some(now),
            next_review_date: Some(now + days(180)),
            remarks: "Standard maintenance routine".into(),
            tag: "Routine".into(),
            active: true,
            associated_model: "HeatMaster Pro".into(),
            maintenance_type: "Preventive".into(),
            department: "Service".into(),
            version_notes: "Initial release".into(),
            language: "English".into(),
            country: "Pakistan".into(),
            estimated_cost: 50.0,
            warranty_required: false,
            last_updated_by: "Admin".into(),
        };

        let diagnostic = DiagnosticLog {
            meta: RecordMeta::new(),
            title: "Voltage Drop Detected".into(),
            details: "Voltage dropped below 200V for 5 seconds.".into(),
            recorded_at: Some(now),
            severity: "Medium".into(),
            technician: "Technician A".into(),
            job_id: None,
            device_name: "iPad".into(),
            os_version: "iOS 14.0".into(),
            app_version: "1.0".into(),
            temperature: Some(28.0),
            voltage: Some(198.0),
            current: Some(1.0),
            resistance: Some(4.8),
            frequency: 50.0,
            notes: "Power fluctuation issue.".into(),
            category: "Electrical".into(),
            cause: "Power supply instability".into(),
            solution: "Recommend voltage stabilizer".into(),
            recommendation: "Monitor usage for 1 week".into(),
            time_spent_minutes: Some(10),
            status: "Logged".into(),
            location: "Workshop".into(),
            humidity: 40.0,
            test_tools: strings(&["Multimeter"]),
            tag: "Voltage".into(),
            reviewed_by: "Supervisor".into(),
            review_date: Some(now),
            approved: true,
            archived: false,
        };

        Self {
            listing,
            part,
            movement,
            work_log,
            template,
            diagnostic,
        }
    }
}
