use super::*;

// =============================================================
// Catalog
// =============================================================

#[test]
fn permissions_group_by_category_in_order() {
    let store = RoleManagement::default();
    let groups = store.grouped_permissions();
    let cats: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(cats, PermissionCategory::ALL.to_vec());
    assert_eq!(groups[0].1.len(), 3);
    assert_eq!(groups[3].1.len(), 2);
}

#[test]
fn permission_name_falls_back_to_id() {
    let store = RoleManagement::default();
    assert_eq!(store.permission_name("user_view"), "View Users");
    assert_eq!(store.permission_name("made_up"), "made_up");
}

#[test]
fn administrator_holds_every_permission() {
    let store = RoleManagement::default();
    let admin = store.role("1").unwrap();
    assert_eq!(admin.permissions.len(), store.permissions.len());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn toggle_permission_adds_then_removes() {
    let mut draft = RoleDraft::default();
    draft.toggle_permission("content_view");
    assert!(draft.has("content_view"));
    draft.toggle_permission("content_view");
    assert!(!draft.has("content_view"));
}

#[test]
fn save_creates_role_with_no_users() {
    let mut store = RoleManagement::default();
    let draft = RoleDraft {
        name: "Support".to_owned(),
        description: "Help desk".to_owned(),
        permissions: vec!["user_view".to_owned()],
    };
    assert_eq!(store.save(None, &draft), Ok("4".to_owned()));
    let role = store.role("4").unwrap();
    assert_eq!(role.users, 0);
    assert_eq!(role.permissions, vec!["user_view".to_owned()]);
}

#[test]
fn save_existing_keeps_user_count() {
    let mut store = RoleManagement::default();
    store.modal = Some(EditTarget::Edit("2".to_owned()));
    let mut draft = store.modal_draft();
    assert_eq!(draft.name, "Moderator");
    draft.toggle_permission("user_manage");

    assert!(store.save(Some("2"), &draft).is_ok());
    let role = store.role("2").unwrap();
    assert_eq!(role.users, 8);
    assert!(role.permissions.contains(&"user_manage".to_owned()));
    assert_eq!(store.roles.len(), 3);
}

#[test]
fn save_rejects_blank_name_and_unknown_id() {
    let mut store = RoleManagement::default();
    assert_eq!(store.save(None, &RoleDraft::default()), Err("Role name is required"));
    let named = RoleDraft { name: "x".to_owned(), ..RoleDraft::default() };
    assert_eq!(store.save(Some("42"), &named), Err("Role not found"));
}

#[test]
fn save_after_remove_does_not_reuse_an_id() {
    let mut store = RoleManagement::default();
    assert!(store.remove("1"));
    let draft = RoleDraft { name: "Support".to_owned(), ..RoleDraft::default() };
    assert_eq!(store.save(None, &draft), Ok("4".to_owned()));
    assert_eq!(store.roles.iter().filter(|r| r.id == "3").count(), 1);

    assert!(store.remove("4"));
    assert_eq!(store.roles.len(), 2);
    assert_eq!(store.role("3").map(|r| r.name.as_str()), Some("Project Manager"));
}

// =============================================================
// Search / remove
// =============================================================

#[test]
fn search_and_remove() {
    let mut store = RoleManagement::default();
    store.search = "oversight".to_owned();
    assert_eq!(store.filtered()[0].name, "Project Manager");
    assert!(store.remove("3"));
    assert!(store.filtered().is_empty());
    assert!(!store.remove("3"));
}
