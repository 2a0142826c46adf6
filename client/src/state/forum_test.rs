use super::*;
use crate::mock::catalog;

fn ids(topics: &[Topic]) -> Vec<&str> {
    topics.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// ForumQuery::filter
// =============================================================

#[test]
fn default_query_returns_all_topics_newest_first() {
    let topics = catalog::topics();
    let out = ForumQuery::default().filter(&topics);
    assert_eq!(out.len(), topics.len());
    assert!(out.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn popular_sort_orders_by_views() {
    let topics = catalog::topics();
    let query = ForumQuery { sort: TopicSort::Popular, ..ForumQuery::default() };
    let out = query.filter(&topics);
    assert!(out.windows(2).all(|w| w[0].views >= w[1].views));
    assert_eq!(out[0].id, "6");
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let topics = catalog::topics();
    let query = ForumQuery { search: "BREAKTHROUGHS".to_owned(), ..ForumQuery::default() };
    assert_eq!(ids(&query.filter(&topics)), vec!["2"]);
}

#[test]
fn filter_is_intersection_of_search_category_and_tags() {
    let topics = catalog::topics();
    let query = ForumQuery {
        search: "quantum".to_owned(),
        categories: vec!["cybersecurity".to_owned()],
        tags: vec!["research".to_owned()],
        ..ForumQuery::default()
    };
    let out = query.filter(&topics);
    assert_eq!(ids(&out), vec!["6"]);
    for topic in &topics {
        let expected = matches_search("quantum", &[&topic.title, &topic.description])
            && topic.category.eq_ignore_ascii_case("cybersecurity")
            && topic.tags.iter().any(|t| t.eq_ignore_ascii_case("research"));
        assert_eq!(out.iter().any(|t| t.id == topic.id), expected, "topic {}", topic.id);
    }
}

#[test]
fn no_match_yields_empty_list() {
    let topics = catalog::topics();
    let query = ForumQuery { search: "blockchain".to_owned(), ..ForumQuery::default() };
    assert!(query.filter(&topics).is_empty());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn pages_slice_filtered_list_without_reordering() {
    let topics = catalog::topics();
    let mut query = ForumQuery::default();
    let filtered = query.filter(&topics);

    let first = query.page_of(&filtered);
    assert_eq!(first.items.len(), TOPICS_PER_PAGE);
    assert_eq!(first.total_pages, 2);

    query.next_page(first.total_pages);
    let second = query.page_of(&filtered);
    assert_eq!(second.page, 2);

    let joined: Vec<&Topic> = first.items.iter().chain(second.items).collect();
    let expected: Vec<&Topic> = filtered.iter().collect();
    assert_eq!(joined, expected);
}

#[test]
fn page_navigation_stays_in_range() {
    let mut query = ForumQuery::default();
    query.prev_page();
    assert_eq!(query.page, 1);
    query.next_page(2);
    query.next_page(2);
    assert_eq!(query.page, 2);
}

#[test]
fn toggling_filters_resets_page() {
    let mut query = ForumQuery { page: 2, ..ForumQuery::default() };
    query.toggle_category("AI & ML");
    assert_eq!(query.page, 1);
    assert_eq!(query.categories, vec!["AI & ML".to_owned()]);

    query.page = 2;
    query.toggle_tag("AI");
    assert_eq!(query.page, 1);
    query.toggle_tag("AI");
    assert!(query.tags.is_empty());
}

#[test]
fn sort_parse_defaults_to_newest() {
    assert_eq!(TopicSort::parse("popular"), TopicSort::Popular);
    assert_eq!(TopicSort::parse("bogus"), TopicSort::Newest);
}

// =============================================================
// TopicDetailState
// =============================================================

#[test]
fn load_unknown_topic_is_none() {
    assert!(TopicDetailState::load("999").is_none());
}

#[test]
fn toggle_like_adjusts_counter() {
    let mut state = TopicDetailState::load("1").unwrap();
    assert_eq!(state.like_count, 89);
    state.toggle_like();
    assert!(state.liked);
    assert_eq!(state.like_count, 90);
    state.toggle_like();
    assert_eq!(state.like_count, 89);
}

#[test]
fn blank_reply_is_rejected() {
    let mut state = TopicDetailState::load("1").unwrap();
    state.draft = "   ".to_owned();
    assert!(!state.submit_reply(catalog::person("2")));
    assert_eq!(state.replies.len(), 2);
}

#[test]
fn reply_is_appended_and_draft_cleared() {
    let mut state = TopicDetailState::load("1").unwrap();
    state.draft = "  Great thread  ".to_owned();
    assert!(state.submit_reply(catalog::person("2")));
    let last = state.replies.last().unwrap();
    assert_eq!(last.content, "Great thread");
    assert_eq!(last.id, "3");
    assert!(state.draft.is_empty());
}

#[test]
fn reply_like_toggles_only_that_reply() {
    let mut state = TopicDetailState::load("1").unwrap();
    state.toggle_reply_like("2");
    assert_eq!(state.replies[1].likes, 7);
    assert!(!state.replies[1].liked);
    assert_eq!(state.replies[0].likes, 12);
}

// =============================================================
// TopicDraft
// =============================================================

#[test]
fn draft_requires_title_description_category() {
    let mut draft = TopicDraft::default();
    assert_eq!(draft.validate("user1", 13), Err("Title is required"));
    draft.title = "Title".to_owned();
    assert_eq!(draft.validate("user1", 13), Err("Description is required"));
    draft.description = "Body".to_owned();
    assert_eq!(draft.validate("user1", 13), Err("Category is required"));
    draft.category = "AI & ML".to_owned();
    draft.toggle_tag("AI");

    let topic = draft.validate("user1", 13).unwrap();
    assert_eq!(topic.id, "13");
    assert_eq!(topic.created_by, "user1");
    assert_eq!(topic.tags, vec!["AI".to_owned()]);
    assert_eq!(topic.views, 0);
}
