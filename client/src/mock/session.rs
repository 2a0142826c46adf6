//! Mock accounts, chats and notifications for the session store.

use time::OffsetDateTime;

use super::{AVATAR_ADMIN, AVATAR_JOHN, AVATAR_SARAH, strings};
use crate::net::types::{
    Chat, ChatPresence, Message, Notification, NotificationKind, SuggestedConnection, User, UserPrivacy, UserRole,
};

pub const ADMIN_ID: &str = "admin1";
pub const REGULAR_ID: &str = "user1";

#[must_use]
pub fn admin_user() -> User {
    User {
        id: ADMIN_ID.to_owned(),
        name: "Admin User".to_owned(),
        avatar: AVATAR_ADMIN.to_owned(),
        role: UserRole::Admin,
        privacy: UserPrivacy::default(),
        skills: Vec::new(),
        interests: Vec::new(),
        connections: strings(&[REGULAR_ID]),
        blocked_users: Vec::new(),
    }
}

#[must_use]
pub fn regular_user() -> User {
    User {
        id: REGULAR_ID.to_owned(),
        name: "Regular User".to_owned(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop".to_owned(),
        role: UserRole::User,
        privacy: UserPrivacy::default(),
        skills: Vec::new(),
        interests: Vec::new(),
        connections: strings(&[ADMIN_ID]),
        blocked_users: Vec::new(),
    }
}

/// The account a login with `email` resolves to: any address containing
/// `admin` gets the admin account.
#[must_use]
pub fn user_for_email(email: &str) -> User {
    if email.contains("admin") { admin_user() } else { regular_user() }
}

#[must_use]
pub fn chats() -> Vec<Chat> {
    let now = OffsetDateTime::now_utc();
    vec![Chat {
        id: "chat1".to_owned(),
        participants: strings(&[ADMIN_ID, REGULAR_ID]),
        messages: vec![Message {
            id: "msg1".to_owned(),
            content: "Hello there!".to_owned(),
            user_id: REGULAR_ID.to_owned(),
            timestamp: now,
            read: false,
            likes: Vec::new(),
            attachments: Vec::new(),
        }],
        last_activity: now,
        status: ChatPresence { typing: Vec::new(), online: strings(&[ADMIN_ID]) },
    }]
}

#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![Notification {
        id: "notif1".to_owned(),
        kind: NotificationKind::Message,
        content: "You have a new message".to_owned(),
        from_user: regular_user(),
        read: false,
        timestamp: OffsetDateTime::now_utc(),
        link: Some("/messages".to_owned()),
    }]
}

#[must_use]
pub fn suggested_connections() -> Vec<SuggestedConnection> {
    vec![
        SuggestedConnection {
            id: "1".to_owned(),
            name: "Alice Johnson".to_owned(),
            avatar: AVATAR_SARAH.to_owned(),
            match_reason: "Similar skills in React and TypeScript".to_owned(),
            skills: strings(&["React", "TypeScript", "Node.js"]),
            mutual_projects: 2,
        },
        SuggestedConnection {
            id: "2".to_owned(),
            name: "Bob Smith".to_owned(),
            avatar: AVATAR_JOHN.to_owned(),
            match_reason: "Worked on similar AI projects".to_owned(),
            skills: strings(&["Python", "Machine Learning", "AI"]),
            mutual_projects: 1,
        },
    ]
}
