use super::*;

#[test]
fn search_matches_participant_or_last_message() {
    let mut store = MessagingManagement::default();
    store.filter.search = "ripley".to_owned();
    assert_eq!(store.filtered()[0].id, "2");
    store.filter.search = "thanks for the help".to_owned();
    assert_eq!(store.filtered()[0].id, "1");
    store.filter.search = "nobody".to_owned();
    assert!(store.filtered().is_empty());
}

#[test]
fn status_filter_narrows_threads() {
    let mut store = MessagingManagement::default();
    store.filter.status = Some(ThreadStatus::Reported);
    let ids: Vec<_> = store.filtered().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn blocking_a_reported_thread_moves_counts() {
    let mut store = MessagingManagement::default();
    assert_eq!(store.reported_count(), 1);
    assert!(store.update_status("2", ThreadStatus::Blocked));
    assert_eq!(store.reported_count(), 0);
    assert_eq!(store.blocked_count(), 1);
    assert_eq!(store.threads[1].reports.len(), 1);
}

#[test]
fn remove_deletes_thread_and_selection() {
    let mut store = MessagingManagement::default();
    store.selected = Some("1".to_owned());
    assert!(store.remove("1"));
    assert!(store.selected_thread().is_none());
    assert_eq!(store.message_total(), 12);
}

#[test]
fn sender_name_resolves_from_participants() {
    let store = MessagingManagement::default();
    assert_eq!(store.threads[0].sender_name(), Some("John Matrix"));
}
