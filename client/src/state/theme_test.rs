use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// Persistence
// =============================================================

#[test]
fn toggle_round_trips_through_storage() {
    let store = Arc::new(MemoryStorage::new());
    let mut theme = ThemeState::from_preference(store.clone());
    let initial = theme.dark;
    theme.toggle();
    assert_eq!(theme.dark, !initial);

    let reloaded = ThemeState::from_preference(store);
    assert_eq!(reloaded.dark, !initial);
}
