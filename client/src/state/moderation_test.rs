use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: String,
    title: String,
    status: ContentStatus,
    reports: u32,
}

impl_moderated!(Row, ContentStatus);

fn rows() -> Vec<Row> {
    ["1", "2", "3"]
        .into_iter()
        .map(|id| Row { id: id.to_owned(), title: format!("post {id}"), status: ContentStatus::Active, reports: 2 })
        .collect()
}

// =============================================================
// Status enums
// =============================================================

#[test]
fn status_strings_round_trip_through_from_str() {
    for status in ContentStatus::ALL {
        assert_eq!(status.as_str().parse::<ContentStatus>(), Ok(*status));
    }
    for status in ThreadStatus::ALL {
        assert_eq!(status.to_string().parse::<ThreadStatus>(), Ok(*status));
    }
}

#[test]
fn unknown_status_is_an_error() {
    let err = "locked".parse::<CourseStatus>().unwrap_err();
    assert_eq!(err, UnknownStatus { kind: "course", value: "locked".to_owned() });
    assert_eq!(err.to_string(), "unknown course status: locked");
}

#[test]
fn each_kind_has_its_own_value_set() {
    assert_eq!(ContentStatus::ALL.len(), 4);
    assert_eq!(ProjectStatus::ALL.len(), 4);
    assert_eq!(CourseStatus::ALL.len(), 3);
    assert_eq!(ThreadStatus::ALL.len(), 3);
    assert_eq!(UserStatus::ALL.len(), 3);
    assert_eq!(ProjectStatus::Reported.label(), "Reported");
}

#[test]
fn labeled_values_resolve_back() {
    assert_eq!(<ThreadStatus as Labeled>::from_value("blocked"), Some(ThreadStatus::Blocked));
    assert_eq!(<ThreadStatus as Labeled>::from_value("locked"), None);
    assert_eq!(<crate::net::types::UserRole as Labeled>::from_value("mod"), Some(crate::net::types::UserRole::Mod));
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&UserStatus::Banned).unwrap(), "\"banned\"");
}

// =============================================================
// update_status
// =============================================================

#[test]
fn update_status_touches_only_matching_item() {
    let mut items = rows();
    let before = items.clone();
    assert!(update_status(&mut items, "2", ContentStatus::Flagged));

    for (old, new) in before.iter().zip(&items) {
        if old.id == "2" {
            assert_eq!(new.status, ContentStatus::Flagged);
            assert_eq!(new.title, old.title);
            assert_eq!(new.reports, old.reports);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn any_status_may_replace_any_other() {
    let mut items = rows();
    update_status(&mut items, "1", ContentStatus::Removed);
    assert!(update_status(&mut items, "1", ContentStatus::Active));
    assert_eq!(items[0].status, ContentStatus::Active);
}

#[test]
fn update_status_unknown_id_changes_nothing() {
    let mut items = rows();
    assert!(!update_status(&mut items, "9", ContentStatus::Locked));
    assert_eq!(items, rows());
}

// =============================================================
// count_with_status / remove_by_id
// =============================================================

#[test]
fn count_with_status_counts_matches() {
    let mut items = rows();
    update_status(&mut items, "3", ContentStatus::Locked);
    assert_eq!(count_with_status(&items, ContentStatus::Active), 2);
    assert_eq!(count_with_status(&items, ContentStatus::Locked), 1);
    assert_eq!(count_with_status(&items, ContentStatus::Flagged), 0);
}

#[test]
fn remove_by_id_deletes_one_item() {
    let mut items = rows();
    assert!(remove_by_id(&mut items, "1"));
    assert!(!remove_by_id(&mut items, "1"));
    assert_eq!(items.len(), 2);
}
