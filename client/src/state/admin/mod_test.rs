use super::*;
use crate::state::moderation::ContentStatus;

// =============================================================
// Filter values
// =============================================================

#[test]
fn all_clears_the_filter() {
    assert_eq!(parse_filter::<ContentStatus>("all"), None);
    assert_eq!(parse_filter::<ContentStatus>("flagged"), Some(ContentStatus::Flagged));
    assert_eq!(parse_filter::<ContentStatus>("bogus"), None);
}

#[test]
fn filter_value_round_trips() {
    assert_eq!(filter_value::<ContentStatus>(None), "all");
    assert_eq!(filter_value(Some(&ContentStatus::Locked)), "locked");
}

// =============================================================
// Form helpers
// =============================================================

#[test]
fn split_list_trims_and_skips_blanks() {
    assert_eq!(split_list(" React, ,TypeScript ,"), vec!["React".to_owned(), "TypeScript".to_owned()]);
    assert!(split_list("").is_empty());
}

#[test]
fn links_drop_blank_fields() {
    let links = Links::from_fields(" https://github.com/x ", "", "  ");
    assert_eq!(links.github.as_deref(), Some("https://github.com/x"));
    assert_eq!(links.website, None);
    assert_eq!(links.documentation, None);
}

#[test]
fn distinct_keeps_first_seen_order() {
    assert_eq!(distinct(["b", "a", "b", "c"]), vec!["b".to_owned(), "a".to_owned(), "c".to_owned()]);
}

// =============================================================
// Ids
// =============================================================

#[test]
fn next_id_is_one_past_the_largest() {
    assert_eq!(next_id(std::iter::empty()), "1");
    assert_eq!(next_id(["1", "3"]), "4");
    assert_eq!(next_id(["2", "draft", "10"]), "11");
}
