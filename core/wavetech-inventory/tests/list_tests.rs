mod common;

use common::{TempPrefs, diagnostic, listing, part};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use wavetech_inventory::{
    DiagnosticLog, InventoryError, MicrowaveListing, PartItem, Record, RecordId, RecordList,
};
use wavetech_storage::Preferences;

fn skus(list: &RecordList<MicrowaveListing>) -> Vec<&str> {
    list.items().iter().map(|l| l.sku.as_str()).collect()
}

// ── Loading ─────────────────────────────────────────────────────

#[test]
fn missing_key_loads_empty() {
    let list = RecordList::<PartItem>::load(Arc::new(Preferences::in_memory())).unwrap();
    assert!(list.is_empty());
}

#[test]
fn corrupt_entry_loads_empty() {
    let prefs = Arc::new(Preferences::in_memory());
    prefs
        .set(MicrowaveListing::STORAGE_KEY, serde_json::json!({"not": "a list"}))
        .unwrap();

    let list = RecordList::<MicrowaveListing>::load(prefs).unwrap();
    assert!(list.is_empty());
}

#[test]
fn records_without_bookkeeping_fields_still_load() {
    let prefs = Arc::new(Preferences::in_memory());
    let mut current = serde_json::to_value(listing("MW-1")).unwrap();
    let mut legacy = serde_json::to_value(listing("MW-0")).unwrap();
    let legacy_fields = legacy.as_object_mut().unwrap();
    legacy_fields.remove("id");
    legacy_fields.remove("created_at");
    current["stock_quantity"] = serde_json::json!(7);
    prefs
        .set(MicrowaveListing::STORAGE_KEY, serde_json::json!([legacy, current]))
        .unwrap();

    let list = RecordList::<MicrowaveListing>::load(prefs).unwrap();
    assert_eq!(skus(&list), vec!["MW-0", "MW-1"]);
    assert_ne!(list.items()[0].id(), list.items()[1].id());
    assert_eq!(list.items()[1].stock_quantity, 7);
}

#[test]
fn records_survive_a_reopen() {
    let temp = TempPrefs::new();
    let mut list = RecordList::load(temp.prefs.clone()).unwrap();
    let id = list.add(listing("MW-1")).unwrap();
    list.add(listing("MW-2")).unwrap();

    let reloaded = RecordList::<MicrowaveListing>::load(temp.reopen()).unwrap();
    assert_eq!(skus(&reloaded), vec!["MW-1", "MW-2"]);
    assert_eq!(reloaded.get(id).map(|l| l.sku.as_str()), Some("MW-1"));
}

// ── Adding ──────────────────────────────────────────────────────

#[test]
fn invalid_record_is_not_added() {
    let prefs = Arc::new(Preferences::in_memory());
    let mut list = RecordList::<DiagnosticLog>::load(prefs.clone()).unwrap();

    let err = list.add(DiagnosticLog::default()).unwrap_err();
    assert!(matches!(err, InventoryError::Validation(_)));
    assert!(list.is_empty());
    assert!(!prefs.contains(DiagnosticLog::STORAGE_KEY).unwrap());
}

#[test]
fn add_touches_updated_at() {
    let mut list = RecordList::load(Arc::new(Preferences::in_memory())).unwrap();
    let record = diagnostic("Arcing");
    let created = record.meta.created_at;

    let id = list.add(record).unwrap();
    let stored = list.get(id).unwrap();
    assert_eq!(stored.meta.created_at, created);
    assert!(stored.meta.updated_at >= created);
}

// ── Removing ────────────────────────────────────────────────────

#[test]
fn remove_at_handles_multiple_offsets() {
    let mut list = RecordList::load(Arc::new(Preferences::in_memory())).unwrap();
    for sku in ["A", "B", "C", "D"] {
        list.add(listing(sku)).unwrap();
    }

    list.remove_at(&[3, 0, 3]).unwrap();
    assert_eq!(skus(&list), vec!["B", "C"]);
}

#[test]
fn remove_at_rejects_out_of_range_without_changes() {
    let mut list = RecordList::load(Arc::new(Preferences::in_memory())).unwrap();
    list.add(listing("A")).unwrap();
    list.add(listing("B")).unwrap();

    let err = list.remove_at(&[0, 2]).unwrap_err();
    assert!(matches!(
        err,
        InventoryError::IndexOutOfRange { index: 2, len: 2 }
    ));
    assert_eq!(skus(&list), vec!["A", "B"]);
}

#[test]
fn remove_by_id_persists() {
    let temp = TempPrefs::new();
    let mut list = RecordList::load(temp.prefs.clone()).unwrap();
    let keep = list.add(part("PT-1", 5, 1)).unwrap();
    let drop = list.add(part("PT-2", 5, 1)).unwrap();

    assert!(list.remove(drop).unwrap());
    assert!(!list.remove(RecordId::new()).unwrap());

    let reloaded = RecordList::<PartItem>::load(temp.reopen()).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.get(keep).is_some());
}

// ── Searching ───────────────────────────────────────────────────

#[test]
fn search_keeps_stored_order() {
    let mut list = RecordList::load(Arc::new(Preferences::in_memory())).unwrap();
    list.add(listing("MW-10")).unwrap();
    list.add(MicrowaveListing {
        brand: "Sharp".into(),
        ..listing("XX-1")
    })
    .unwrap();
    list.add(listing("MW-11")).unwrap();

    let hits: Vec<&str> = list.search("mw-1").iter().map(|l| l.sku.as_str()).collect();
    assert_eq!(hits, vec!["MW-10", "MW-11"]);
    assert_eq!(list.search("sharp").len(), 1);
    assert_eq!(list.search("").len(), 3);
}

// ── Failed writes ───────────────────────────────────────────────

#[test]
fn failed_add_leaves_list_and_store_unchanged() {
    let temp = TempPrefs::new();
    let blocker = temp.dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let prefs = Arc::new(Preferences::open(blocker.join("prefs.json")).unwrap());

    let mut list = RecordList::<MicrowaveListing>::load(prefs.clone()).unwrap();
    let err = list.add(listing("MW-1")).unwrap_err();

    assert!(matches!(err, InventoryError::Storage(_)));
    assert!(list.is_empty());
    assert!(!prefs.contains(MicrowaveListing::STORAGE_KEY).unwrap());
}

#[test]
fn failed_remove_keeps_records() {
    let temp = TempPrefs::new();
    let data = temp.dir.path().join("data");
    let prefs = Arc::new(Preferences::open(data.join("prefs.json")).unwrap());
    let mut list = RecordList::load(prefs.clone()).unwrap();
    let id = list.add(listing("MW-1")).unwrap();
    list.add(listing("MW-2")).unwrap();

    std::fs::remove_dir_all(&data).unwrap();
    std::fs::write(&data, "not a directory").unwrap();

    assert!(list.remove_at(&[0]).is_err());
    assert!(list.remove(id).is_err());
    assert_eq!(skus(&list), vec!["MW-1", "MW-2"]);

    let stored: Vec<MicrowaveListing> = prefs.load(MicrowaveListing::STORAGE_KEY).unwrap().unwrap();
    assert_eq!(stored.len(), 2);
}
