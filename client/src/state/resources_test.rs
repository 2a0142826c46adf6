use super::*;
use crate::mock::catalog;

fn viewer() -> Author {
    catalog::person("3")
}

// =============================================================
// ResourceQuery
// =============================================================

#[test]
fn all_category_keeps_every_section() {
    let sections = catalog::resource_sections();
    let out = ResourceQuery::default().filter(&sections);
    assert_eq!(out, sections);
}

#[test]
fn category_keeps_sections_whose_title_contains_it() {
    let sections = catalog::resource_sections();
    for (category, title) in [
        (ResourceCategory::Videos, "Video Tutorials"),
        (ResourceCategory::Documentation, "Documentation"),
        (ResourceCategory::Practice, "Practice & Examples"),
        (ResourceCategory::Articles, "Articles & Blogs"),
    ] {
        let out = ResourceQuery { category, ..ResourceQuery::default() }.filter(&sections);
        assert_eq!(out.len(), 1, "{category:?}");
        assert_eq!(out[0].title, title);
    }
}

#[test]
fn search_trims_items_within_sections() {
    let sections = catalog::resource_sections();
    let query = ResourceQuery { search: "typescript".to_owned(), ..ResourceQuery::default() };
    let out = query.filter(&sections);
    let hits: Vec<&str> = out.iter().flat_map(|s| s.items.iter().map(|i| i.name.as_str())).collect();
    assert_eq!(hits, vec!["TypeScript Handbook"]);
    assert_eq!(out.len(), 4);
}

// =============================================================
// ResourceDetailState
// =============================================================

#[test]
fn load_unknown_resource_is_none() {
    assert!(ResourceDetailState::load("nope").is_none());
}

#[test]
fn new_comment_is_prepended_with_next_id() {
    let mut state = ResourceDetailState::load("1").unwrap();
    state.comment_draft = "Loved it".to_owned();
    assert!(state.add_comment(viewer()));
    assert_eq!(state.comments.len(), 3);
    assert_eq!(state.comments[0].id, "3");
    assert_eq!(state.comments[0].content, "Loved it");
    assert!(state.comment_draft.is_empty());
}

#[test]
fn blank_comment_is_ignored() {
    let mut state = ResourceDetailState::load("1").unwrap();
    state.comment_draft = " ".to_owned();
    assert!(!state.add_comment(viewer()));
    assert_eq!(state.comments.len(), 2);
}

#[test]
fn comment_like_toggles() {
    let mut state = ResourceDetailState::load("1").unwrap();
    state.toggle_comment_like("1");
    assert_eq!(state.comments[0].likes, 46);
    assert!(state.comments[0].liked);
}

#[test]
fn chat_keeps_last_fifty_lines() {
    let mut state = ResourceDetailState::load("1").unwrap();
    for i in 0..60 {
        state.push_chat("John Matrix", &format!("line {i}"));
    }
    assert_eq!(state.chat.len(), CHAT_HISTORY_LIMIT);
    assert_eq!(state.chat[0].message, "line 10");
    assert_eq!(state.chat[49].message, "line 59");
}

#[test]
fn send_chat_uses_draft_and_keeps_blank_draft() {
    let mut state = ResourceDetailState::load("1").unwrap();
    state.chat_draft = "hello".to_owned();
    assert!(state.send_chat());
    assert_eq!(state.chat[0].user, "You");
    assert!(state.chat_draft.is_empty());
    assert!(!state.send_chat());
}

#[test]
fn viewer_chatter_rotates_through_viewers() {
    let mut state = ResourceDetailState::load("1").unwrap();
    assert!(state.viewer_chatter());
    assert!(state.viewer_chatter());
    assert_eq!(state.chat[0].user, state.viewers[0].name);
    assert_eq!(state.chat[1].user, state.viewers[1 % state.viewers.len()].name);

    for _ in 0..CHAT_HISTORY_LIMIT + 6 {
        assert!(state.viewer_chatter());
    }
    assert_eq!(state.chat.len(), CHAT_HISTORY_LIMIT);
    let count = state.viewers.len();
    let tail = &state.chat[CHAT_HISTORY_LIMIT - count..];
    for (line, next) in tail.iter().zip(tail.iter().skip(1)) {
        assert_ne!(line.user, next.user);
    }
    let mut speakers: Vec<&str> = tail.iter().map(|l| l.user.as_str()).collect();
    speakers.sort_unstable();
    speakers.dedup();
    assert_eq!(speakers.len(), count);

    state.viewers.clear();
    assert!(!state.viewer_chatter());
}

#[test]
fn rating_accepts_one_to_five() {
    let mut state = ResourceDetailState::load("1").unwrap();
    assert!(!state.rate(0));
    assert!(!state.rate(6));
    assert!(state.rate(4));
    assert_eq!(state.rating, 4);
}

#[test]
fn assignment_submission_requires_url() {
    let mut state = ResourceDetailState::load("1").unwrap();
    state.toggle_assignment();
    assert!(!state.submit_assignment(viewer()));
    state.submission_url = "https://github.com/me/app".to_owned();
    assert!(state.submit_assignment(viewer()));
    let last = state.assignment.submissions.last().unwrap();
    assert_eq!(last.status, SubmissionStatus::Pending);
    assert_eq!(last.url.as_deref(), Some("https://github.com/me/app"));
    assert!(!state.show_assignment);
    assert!(state.submission_url.is_empty());
}
