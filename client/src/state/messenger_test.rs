use super::*;

// =============================================================
// Panels
// =============================================================

#[test]
fn default_is_closed() {
    let state = MessengerState::default();
    assert!(!state.open);
    assert!(state.active_chat.is_none());
    assert!(state.draft.is_empty());
}

#[test]
fn closing_popup_hides_menus() {
    let mut state = MessengerState::default();
    state.toggle_open();
    state.toggle_emoji_picker();
    state.toggle_chat_options();
    state.toggle_open();
    assert!(!state.open);
    assert!(!state.show_emoji_picker);
    assert!(!state.show_chat_options);
}

#[test]
fn notifications_and_suggestions_are_exclusive() {
    let mut state = MessengerState::default();
    state.toggle_notifications();
    state.toggle_suggestions();
    assert!(state.show_suggestions);
    assert!(!state.show_notifications);
    state.toggle_notifications();
    assert!(!state.show_suggestions);
}

#[test]
fn open_then_close_chat() {
    let mut state = MessengerState::default();
    state.toggle_notifications();
    state.open_chat("chat1");
    assert_eq!(state.active_chat.as_deref(), Some("chat1"));
    assert!(!state.show_notifications);
    state.close_chat();
    assert!(state.active_chat.is_none());
}

// =============================================================
// Composer
// =============================================================

#[test]
fn pick_emoji_appends_and_closes_picker() {
    let mut state = MessengerState { draft: "hi ".to_owned(), ..MessengerState::default() };
    state.toggle_emoji_picker();
    state.pick_emoji(EMOJIS[1]);
    assert_eq!(state.draft, "hi 👍");
    assert!(!state.show_emoji_picker);
}

#[test]
fn take_draft_trims_and_clears() {
    let mut state = MessengerState { draft: "  hello ".to_owned(), ..MessengerState::default() };
    assert_eq!(state.take_draft().as_deref(), Some("hello"));
    assert!(state.draft.is_empty());

    state.draft = "   ".to_owned();
    assert_eq!(state.take_draft(), None);
    assert!(state.draft.is_empty());
}

#[test]
fn edit_lifecycle() {
    let mut state = MessengerState::default();
    state.begin_edit("msg1", "Hello there!");
    assert_eq!(state.editing, Some(EditingMessage { id: "msg1".to_owned(), content: "Hello there!".to_owned() }));
    state.cancel_edit();
    assert!(state.editing.is_none());
}

// =============================================================
// Safety actions
// =============================================================

#[test]
fn after_block_closes_options_and_chat() {
    let mut state = MessengerState::default();
    state.open_chat("chat1");
    state.toggle_chat_options();
    state.after_block();
    assert!(!state.show_chat_options);
    assert!(state.active_chat.is_none());
}

#[test]
fn after_report_keeps_chat_open() {
    let mut state = MessengerState::default();
    state.open_chat("chat1");
    state.toggle_chat_options();
    state.after_report();
    assert!(!state.show_chat_options);
    assert_eq!(state.active_chat.as_deref(), Some("chat1"));
}
