use super::*;

// =============================================================
// matches_search
// =============================================================

#[test]
fn empty_term_matches_everything() {
    assert!(matches_search("", &["anything"]));
    assert!(matches_search("", &[]));
}

#[test]
fn whitespace_in_term_is_matched_literally() {
    assert!(!matches_search("   ", &["quantum"]));
    assert!(matches_search(" ", &["quantum computing"]));
    assert!(!matches_search(" quantum", &["quantum computing"]));
    assert!(matches_search("m c", &["Quantum Computing"]));
}

#[test]
fn search_is_case_insensitive_over_any_field() {
    assert!(matches_search("QUANTUM", &["Neural", "quantum computing"]));
    assert!(!matches_search("rust", &["Neural", "quantum computing"]));
}

// =============================================================
// admits / overlaps
// =============================================================

#[test]
fn admits_ignores_case_and_empty_filter_admits_all() {
    let filter = vec!["AI & ML".to_owned()];
    assert!(admits(&filter, "ai & ml"));
    assert!(!admits(&filter, "Cybersecurity"));
    assert!(admits(&[], "Cybersecurity"));
}

#[test]
fn overlaps_needs_one_shared_value() {
    let filter = vec!["Rust".to_owned(), "Go".to_owned()];
    assert!(overlaps(&filter, &["python".to_owned(), "rust".to_owned()]));
    assert!(!overlaps(&filter, &["Python".to_owned()]));
    assert!(overlaps(&[], &[]));
}

// =============================================================
// toggle_selection
// =============================================================

#[test]
fn toggle_selection_adds_then_removes() {
    let mut list = Vec::new();
    toggle_selection(&mut list, "AI");
    toggle_selection(&mut list, "Quantum");
    assert_eq!(list, vec!["AI".to_owned(), "Quantum".to_owned()]);
    toggle_selection(&mut list, "AI");
    assert_eq!(list, vec!["Quantum".to_owned()]);
}

// =============================================================
// paginate
// =============================================================

#[test]
fn paginate_slices_in_order() {
    let items: Vec<u32> = (1..=25).collect();
    let page = paginate(&items, 2, 10);
    assert_eq!(page.items, &items[10..20]);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_prev());
    assert!(page.has_next());
}

#[test]
fn paginate_last_page_is_partial() {
    let items: Vec<u32> = (1..=25).collect();
    let page = paginate(&items, 3, 10);
    assert_eq!(page.items, &[21, 22, 23, 24, 25]);
    assert!(!page.has_next());
}

#[test]
fn paginate_clamps_out_of_range_pages() {
    let items: Vec<u32> = (1..=5).collect();
    assert_eq!(paginate(&items, 0, 10).page, 1);
    assert_eq!(paginate(&items, 9, 2).page, 3);
    assert_eq!(paginate(&items, 9, 2).items, &[5]);
}

#[test]
fn paginate_empty_listing_has_one_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 4, 10);
    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_items, 0);
}
