use super::*;
use time::macros::datetime;

fn message(id: &str, author: &str, read: bool) -> Message {
    Message {
        id: id.to_owned(),
        content: format!("message {id}"),
        user_id: author.to_owned(),
        timestamp: datetime!(2024-03-20 10:30 UTC),
        read,
        likes: Vec::new(),
        attachments: Vec::new(),
    }
}

fn chat(participants: &[&str], messages: Vec<Message>) -> Chat {
    Chat {
        id: "c1".to_owned(),
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        messages,
        last_activity: datetime!(2024-03-20 10:30 UTC),
        status: ChatPresence { typing: Vec::new(), online: vec!["admin1".to_owned()] },
    }
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_deserializes_sparse_stored_session() {
    let raw = r#"{"id":"user1","name":"Regular User","avatar":"a.png"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.privacy.projects.visibility, Visibility::Public);
    assert!(user.connections.is_empty());
}

#[test]
fn user_serializes_camel_case_privacy_lists() {
    let mut user: User = serde_json::from_str(r#"{"id":"u","name":"n","avatar":"a"}"#).unwrap();
    user.privacy.set(
        PrivacySection::Followers,
        PrivacySettings {
            visibility: Visibility::Custom,
            allowed_users: vec!["2".to_owned()],
            blocked_users: vec!["3".to_owned()],
            message_settings: None,
        },
    );
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["privacy"]["followers"]["visibility"], "custom");
    assert_eq!(json["privacy"]["followers"]["allowedUsers"][0], "2");
    assert_eq!(json["privacy"]["followers"]["blockedUsers"][0], "3");
}

#[test]
fn user_role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(UserRole::Mod).unwrap(), "mod");
    assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
    assert_eq!(UserRole::parse("root"), None);
}

#[test]
fn user_author_copies_byline_fields() {
    let user = crate::mock::session::regular_user();
    let author = user.author();
    assert_eq!(author.id, user.id);
    assert_eq!(author.name, user.name);
    assert_eq!(author.avatar, user.avatar);
}

// =============================================================
// UserPrivacy
// =============================================================

#[test]
fn user_privacy_set_replaces_only_that_section() {
    let mut privacy = UserPrivacy::default();
    privacy.set(PrivacySection::Discussions, PrivacySettings::with_visibility(Visibility::Private));
    assert_eq!(privacy.get(PrivacySection::Discussions).visibility, Visibility::Private);
    for section in [PrivacySection::Projects, PrivacySection::Followers, PrivacySection::Following] {
        assert_eq!(privacy.get(section).visibility, Visibility::Public);
    }
}

// =============================================================
// Chat helpers
// =============================================================

#[test]
fn chat_unread_count_ignores_own_messages() {
    let c = chat(
        &["admin1", "user1"],
        vec![message("m1", "user1", false), message("m2", "admin1", false), message("m3", "user1", true)],
    );
    assert_eq!(c.unread_count(Some("admin1")), 1);
    assert_eq!(c.unread_count(Some("user1")), 1);
}

#[test]
fn chat_other_participant_skips_viewer() {
    let c = chat(&["admin1", "user1"], Vec::new());
    assert_eq!(c.other_participant(Some("admin1")), Some("user1"));
    assert_eq!(c.other_participant(Some("user1")), Some("admin1"));
    assert_eq!(c.other_participant(None), Some("admin1"));
}

#[test]
fn chat_presence_and_membership() {
    let c = chat(&["admin1", "user1"], Vec::new());
    assert!(c.has_participant("user1"));
    assert!(!c.has_participant("user2"));
    assert!(c.is_online("admin1"));
    assert!(!c.is_online("user1"));
}

#[test]
fn notification_kind_serializes_as_type_field() {
    let raw = serde_json::json!({
        "id": "n1",
        "type": "connection_request",
        "content": "hi",
        "fromUser": { "id": "u", "name": "n", "avatar": "a" },
        "read": false,
        "timestamp": serde_json::to_value(datetime!(2024-03-20 10:30 UTC)).unwrap(),
    });
    let n: Notification = serde_json::from_value(raw).unwrap();
    assert_eq!(n.kind, NotificationKind::ConnectionRequest);
    assert!(n.link.is_none());
}
