use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
    count: u32,
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v").unwrap();
    assert_eq!(b.get("k").as_deref(), Some("v"));
    b.remove("k");
    assert!(!a.contains("k"));
}

#[test]
fn memory_storage_missing_key_is_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("absent"), None);
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_then_load_json_value() {
    let store = MemoryStorage::new();
    let draft = Draft { title: "Neural SDK".to_owned(), count: 3 };
    save_json(&store, "draft", &draft).unwrap();
    let loaded: Option<Draft> = load_json(&store, "draft").unwrap();
    assert_eq!(loaded, Some(draft));
}

#[test]
fn load_json_missing_key_is_ok_none() {
    let store = MemoryStorage::new();
    let loaded: Option<Draft> = load_json(&store, "draft").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn load_json_corrupt_value_reports_key() {
    let store = MemoryStorage::new();
    store.set("draft", "{not json").unwrap();
    let err = load_json::<Draft>(&store, "draft").unwrap_err();
    assert!(matches!(err, StorageError::Deserialize { ref key, .. } if key == "draft"));
    assert!(err.to_string().contains("draft"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage;
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
