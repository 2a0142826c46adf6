use futures::executor::block_on;

use super::*;
use crate::mock::session::{ADMIN_ID, REGULAR_ID};
use crate::net::api::{AuthApi, LoginRequest, MockApi};
use crate::net::types::{AttachmentKind, Visibility};

fn fresh() -> (MemoryStorage, AuthState) {
    let store = MemoryStorage::new();
    let state = AuthState::new(Arc::new(store.clone()));
    (store, state)
}

fn login(state: &mut AuthState, email: &str) -> User {
    let request = LoginRequest { email: email.to_owned(), password: "pw".to_owned() };
    let user = block_on(MockApi.login(request)).unwrap();
    state.sign_in(user.clone());
    user
}

fn chat(id: &str, participants: &[&str]) -> Chat {
    let mut c = mock::session::chats().remove(0);
    c.id = id.to_owned();
    c.participants = participants.iter().map(|p| (*p).to_owned()).collect();
    c
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn new_state_is_signed_out_with_seeded_chats() {
    let (_, state) = fresh();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.chats.len(), 1);
    assert_eq!(state.notifications.len(), 1);
}

#[test]
fn pending_state_waits_for_restore() {
    let state = AuthState::pending(Arc::new(MemoryStorage::new()));
    assert!(state.loading);
}

#[test]
fn login_authenticates_and_persists_returned_user() {
    let (store, mut state) = fresh();
    let user = login(&mut state, "admin@cybernet.dev");
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    let stored: Option<User> = load_json(&store, SESSION_KEY).unwrap();
    assert_eq!(stored, Some(user));
}

#[test]
fn regular_login_is_not_admin() {
    let (_, mut state) = fresh();
    login(&mut state, "neo@cybernet.dev");
    assert_eq!(state.role(), Some(UserRole::User));
    assert!(!state.is_admin());
}

#[test]
fn logout_clears_user_and_storage_key() {
    let (store, mut state) = fresh();
    login(&mut state, "neo@cybernet.dev");
    state.logout();
    assert!(!state.is_authenticated());
    assert!(!store.contains(SESSION_KEY));
}

#[test]
fn restore_loads_persisted_user() {
    let (store, mut state) = fresh();
    let user = login(&mut state, "admin@cybernet.dev");
    let restored = AuthState::restore(Arc::new(store));
    assert_eq!(restored.user, Some(user));
    assert!(!restored.loading);
}

#[test]
fn restore_discards_corrupt_session() {
    let store = MemoryStorage::new();
    store.set(SESSION_KEY, "{\"id\":").unwrap();
    let state = AuthState::restore(Arc::new(store.clone()));
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(!store.contains(SESSION_KEY));
}

// =============================================================
// Privacy settings
// =============================================================

#[test]
fn update_privacy_is_noop_when_signed_out() {
    let (store, mut state) = fresh();
    state.update_privacy_settings(PrivacySection::Projects, PrivacySettings::with_visibility(Visibility::Private));
    assert!(state.user.is_none());
    assert!(!store.contains(SESSION_KEY));
}

#[test]
fn update_privacy_replaces_one_section_and_persists() {
    let (store, mut state) = fresh();
    login(&mut state, "neo@cybernet.dev");
    state.update_privacy_settings(PrivacySection::Followers, PrivacySettings::with_visibility(Visibility::Friends));

    let user = state.user.as_ref().unwrap();
    assert_eq!(user.privacy.followers.visibility, Visibility::Friends);
    assert_eq!(user.privacy.projects.visibility, Visibility::Public);

    let stored: User = load_json(&store, SESSION_KEY).unwrap().unwrap();
    assert_eq!(stored.privacy.followers.visibility, Visibility::Friends);
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn mark_notification_as_read_sets_exactly_one_flag() {
    let (_, mut state) = fresh();
    let mut extra = state.notifications[0].clone();
    extra.id = "notif2".to_owned();
    state.notifications.push(extra);
    let before = state.notifications.clone();

    state.mark_notification_as_read("notif1");

    assert!(state.notifications[0].read);
    assert_eq!(state.notifications[1], before[1]);
    assert_eq!(state.unread_notification_count(), 1);
}

#[test]
fn mark_unknown_notification_changes_nothing() {
    let (_, mut state) = fresh();
    let before = state.notifications.clone();
    state.mark_notification_as_read("missing");
    assert_eq!(state.notifications, before);
}

// =============================================================
// Chats
// =============================================================

#[test]
fn mark_message_as_read_targets_one_message() {
    let (_, mut state) = fresh();
    login(&mut state, "admin@cybernet.dev");
    assert_eq!(state.unread_message_count(), 1);
    state.mark_message_as_read("chat1", "msg1");
    assert_eq!(state.unread_message_count(), 0);
}

#[test]
fn mark_chat_as_read_skips_viewers_own_messages() {
    let (_, mut state) = fresh();
    state.send_message("chat1", ADMIN_ID, "hi", None);
    if let Some(last) = state.chats[0].messages.last_mut() {
        last.read = false;
    }
    state.mark_chat_as_read("chat1", ADMIN_ID);
    let chat = state.chat("chat1").unwrap();
    assert!(chat.messages[0].read);
    assert!(!chat.messages[1].read);
}

#[test]
fn send_message_appends_with_fresh_id() {
    let (_, mut state) = fresh();
    let id = state.send_message("chat1", ADMIN_ID, "  ping  ", None).unwrap();
    let chat = state.chat("chat1").unwrap();
    let last = chat.last_message().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.content, "ping");
    assert!(last.read);
    assert_eq!(chat.last_activity, last.timestamp);

    let second = state.send_message("chat1", ADMIN_ID, "pong", None).unwrap();
    assert_ne!(id, second);
}

#[test]
fn send_message_rejects_blank_without_attachment() {
    let (_, mut state) = fresh();
    assert!(state.send_message("chat1", ADMIN_ID, "   ", None).is_none());
    assert!(state.send_message("nope", ADMIN_ID, "hi", None).is_none());

    let attachment = Attachment { kind: AttachmentKind::File, url: "blob:1".to_owned(), name: "a.pdf".to_owned() };
    assert!(state.send_message("chat1", ADMIN_ID, "", Some(attachment)).is_some());
    assert_eq!(state.chat("chat1").unwrap().messages.len(), 2);
}

#[test]
fn edit_message_replaces_content() {
    let (_, mut state) = fresh();
    assert!(state.edit_message("chat1", "msg1", "Hello again"));
    assert_eq!(state.chat("chat1").unwrap().messages[0].content, "Hello again");
    assert!(!state.edit_message("chat1", "msg1", " "));
    assert!(!state.edit_message("chat1", "missing", "x"));
}

#[test]
fn toggle_message_like_adds_then_removes() {
    let (_, mut state) = fresh();
    state.toggle_message_like("chat1", "msg1", ADMIN_ID);
    assert_eq!(state.chat("chat1").unwrap().messages[0].likes, vec![ADMIN_ID.to_owned()]);
    state.toggle_message_like("chat1", "msg1", ADMIN_ID);
    assert!(state.chat("chat1").unwrap().messages[0].likes.is_empty());
}

// =============================================================
// Block / report
// =============================================================

#[test]
fn block_user_removes_every_chat_with_that_participant() {
    let (_, mut state) = fresh();
    state.chats.push(chat("chat2", &[ADMIN_ID, "user7"]));
    state.chats.push(chat("chat3", &["user7", REGULAR_ID]));

    state.block_user(REGULAR_ID);

    assert!(state.chats.iter().all(|c| !c.has_participant(REGULAR_ID)));
    assert_eq!(state.chats.len(), 1);
    assert_eq!(state.chats[0].id, "chat2");
    assert_eq!(state.blocked_users, vec![REGULAR_ID.to_owned()]);
}

#[test]
fn block_user_is_idempotent() {
    let (_, mut state) = fresh();
    state.chats.push(chat("chat2", &[ADMIN_ID, "user7"]));
    state.block_user(REGULAR_ID);
    let once = (state.chats.clone(), state.blocked_users.clone());
    state.block_user(REGULAR_ID);
    assert_eq!((state.chats.clone(), state.blocked_users.clone()), once);
}

#[test]
fn report_user_records_once_and_keeps_chats() {
    let (_, mut state) = fresh();
    state.report_user(REGULAR_ID);
    state.report_user(REGULAR_ID);
    assert_eq!(state.reported_users, vec![REGULAR_ID.to_owned()]);
    assert_eq!(state.chats.len(), 1);
}
