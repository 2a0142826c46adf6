use super::*;

// =============================================================
// Filtering
// =============================================================

#[test]
fn search_matches_name_or_email() {
    let mut store = UserManagement::default();
    store.filter.search = "JOHN@".to_owned();
    let ids: Vec<_> = store.filtered().into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["2"]);

    store.filter.search = "murphy".to_owned();
    assert_eq!(store.filtered()[0].id, "3");
}

#[test]
fn role_and_status_filters_combine() {
    let mut store = UserManagement::default();
    store.filter.role = Some(UserRole::Admin);
    assert_eq!(store.filtered().len(), 1);
    store.filter.status = Some(UserStatus::Pending);
    assert!(store.filtered().is_empty());
    store.filter = UserFilter { status: Some(UserStatus::Pending), ..UserFilter::default() };
    assert_eq!(store.filtered()[0].name, "Alex Murphy");
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn update_status_changes_only_that_user() {
    let mut store = UserManagement::default();
    let before = store.users.clone();
    assert!(store.update_status("3", UserStatus::Banned));
    assert_eq!(store.users[2].status, UserStatus::Banned);
    assert_eq!(store.users[2].role, before[2].role);
    assert_eq!(store.users[..2], before[..2]);
    assert_eq!(store.banned_count(), 1);
}

#[test]
fn update_role_moves_staff_count() {
    let mut store = UserManagement::default();
    assert_eq!(store.staff_count(), 2);
    assert!(store.update_role("3", UserRole::Mod));
    assert_eq!(store.staff_count(), 3);
    assert!(!store.update_role("missing", UserRole::Admin));
}

#[test]
fn counts_reflect_fixtures() {
    let store = UserManagement::default();
    assert_eq!(store.users.len(), 3);
    assert_eq!(store.verified_count(), 2);
    assert_eq!(store.banned_count(), 0);
}

#[test]
fn selected_user_follows_id() {
    let mut store = UserManagement::default();
    assert!(store.selected_user().is_none());
    store.selected = Some("2".to_owned());
    assert_eq!(store.selected_user().map(|u| u.name.as_str()), Some("John Matrix"));
}
