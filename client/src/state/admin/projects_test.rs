use super::*;

fn draft() -> ManagedProjectDraft {
    ManagedProjectDraft {
        title: "Mesh Router".to_owned(),
        description: "Peer-to-peer routing".to_owned(),
        category: "Networking".to_owned(),
        tags: "Rust, P2P".to_owned(),
        github: "https://github.com/example/mesh".to_owned(),
        ..ManagedProjectDraft::default()
    }
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filters_by_search_category_and_status() {
    let mut store = ProjectManagement::default();
    store.filter.search = "encryption".to_owned();
    assert_eq!(store.filtered().len(), 1);

    store.filter = ProjectFilter { category: Some("AI & ML".to_owned()), ..ProjectFilter::default() };
    assert_eq!(store.filtered()[0].id, "1");

    store.filter = ProjectFilter { status: Some(ProjectStatus::Reported), ..ProjectFilter::default() };
    assert_eq!(store.filtered()[0].id, "2");
}

#[test]
fn categories_are_distinct() {
    let store = ProjectManagement::default();
    assert_eq!(store.categories(), vec!["AI & ML".to_owned(), "Cybersecurity".to_owned()]);
}

// =============================================================
// Create / remove
// =============================================================

#[test]
fn create_appends_pending_admin_project() {
    let mut store = ProjectManagement::default();
    let id = store.create(&draft()).unwrap();
    assert_eq!(id, "3");

    let project = store.projects.last().unwrap();
    assert_eq!(project.status, ProjectStatus::Pending);
    assert_eq!(project.creator.name, "Admin");
    assert_eq!(project.stats, RepoStats::default());
    assert!(project.members.is_empty());
    assert_eq!(project.tags, vec!["Rust".to_owned(), "P2P".to_owned()]);
    assert_eq!(project.links.website, None);
}

#[test]
fn create_rejects_missing_category() {
    let mut store = ProjectManagement::default();
    let bad = ManagedProjectDraft { category: " ".to_owned(), ..draft() };
    assert_eq!(store.create(&bad), Err("Category is required"));
    assert_eq!(store.projects.len(), 2);
}

#[test]
fn create_after_remove_does_not_reuse_an_id() {
    let mut store = ProjectManagement::default();
    assert!(store.remove("1"));
    let id = store.create(&draft()).unwrap();
    assert_eq!(id, "3");
    assert_eq!(store.projects.iter().filter(|p| p.id == id).count(), 1);

    assert!(store.update_status("2", ProjectStatus::Archived));
    assert_eq!(store.projects.iter().find(|p| p.id == "3").unwrap().status, ProjectStatus::Pending);

    assert!(store.remove(&id));
    assert_eq!(store.projects.len(), 1);
}

#[test]
fn remove_clears_selection() {
    let mut store = ProjectManagement::default();
    store.selected = Some("2".to_owned());
    assert!(store.remove("2"));
    assert!(store.selected.is_none());
    assert!(!store.remove("2"));
    assert_eq!(store.reported_count(), 0);
}

// =============================================================
// Status
// =============================================================

#[test]
fn update_status_moves_counts() {
    let mut store = ProjectManagement::default();
    assert_eq!((store.active_count(), store.reported_count()), (1, 1));
    assert!(store.update_status("2", ProjectStatus::Active));
    assert_eq!((store.active_count(), store.reported_count()), (2, 0));
    assert_eq!(store.projects[1].reports.len(), 1);
    assert_eq!(store.member_total(), 3);
}
