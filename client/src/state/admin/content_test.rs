use super::*;

#[test]
fn search_covers_title_body_and_author() {
    let mut store = ContentModeration::default();
    store.filter.search = "evolution".to_owned();
    assert_eq!(store.filtered().len(), 1);
    store.filter.search = "spam".to_owned();
    assert_eq!(store.filtered()[0].id, "2");
    store.filter.search = "john matrix".to_owned();
    assert_eq!(store.filtered()[0].id, "2");
}

#[test]
fn untitled_items_still_match_empty_search() {
    let store = ContentModeration::default();
    assert!(store.items[1].title.is_none());
    assert_eq!(store.filtered().len(), 2);
}

#[test]
fn kind_and_status_filters() {
    let mut store = ContentModeration::default();
    store.filter.kind = ContentKind::parse("discussion");
    assert_eq!(store.filtered()[0].id, "1");
    store.filter.status = Some(ContentStatus::Flagged);
    assert!(store.filtered().is_empty());
}

#[test]
fn lock_updates_counts_and_keeps_reports() {
    let mut store = ContentModeration::default();
    assert_eq!(store.flagged_count(), 1);
    assert!(store.update_status("2", ContentStatus::Locked));
    assert_eq!(store.flagged_count(), 0);
    assert_eq!(store.locked_count(), 1);
    assert_eq!(store.reports_for("2").len(), 1);
    assert_eq!(store.report_total(), 1);
}

#[test]
fn reports_for_unknown_id_is_empty() {
    let store = ContentModeration::default();
    assert!(store.reports_for("nope").is_empty());
    assert!(store.reports_for("1").is_empty());
}
