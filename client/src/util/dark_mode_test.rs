use super::*;
use crate::util::storage::MemoryStorage;

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_defaults_to_dark() {
    let store = MemoryStorage::new();
    assert!(read_preference(&store));
}

#[test]
fn read_preference_honors_stored_value() {
    let store = MemoryStorage::new();
    store.set(STORAGE_KEY, "false").unwrap();
    assert!(!read_preference(&store));
    store.set(STORAGE_KEY, "true").unwrap();
    assert!(read_preference(&store));
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStorage::new();
    assert!(!toggle(&store, true));
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("false"));
    assert!(toggle(&store, false));
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("true"));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
