//! Shared DTOs for the session store and the remote-call boundary.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the persisted `user` object keeps the
//! same JSON layout as earlier builds of the app. Optional collections default
//! to empty on deserialize, which lets sparse stored sessions load cleanly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// USERS & PRIVACY
// =============================================================================

/// Platform role attached to a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Mod,
    Admin,
}

impl UserRole {
    pub const ALL: [Self; 3] = [Self::User, Self::Mod, Self::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Mod => "mod",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "Member",
            Self::Mod => "Moderator",
            Self::Admin => "Administrator",
        }
    }

    /// Parse a `<select>` value; unknown strings fall back to `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

/// Who may see a section of a user's profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Friends,
    Custom,
}

impl Visibility {
    pub const ALL: [Self; 4] = [Self::Public, Self::Private, Self::Friends, Self::Custom];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Friends => "friends",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Friends => "Friends",
            Self::Custom => "Custom",
        }
    }
}

/// Direct-message preferences nested inside a privacy section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSettings {
    pub allow_direct_messages: bool,
    pub only_from_connections: bool,
}

/// Privacy settings for one (user, section) pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_settings: Option<MessageSettings>,
}

impl PrivacySettings {
    #[must_use]
    pub fn with_visibility(visibility: Visibility) -> Self {
        Self { visibility, ..Self::default() }
    }
}

/// Profile sections that carry their own privacy settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacySection {
    Projects,
    Discussions,
    Followers,
    Following,
}

impl PrivacySection {
    pub const ALL: [Self; 4] = [Self::Projects, Self::Discussions, Self::Followers, Self::Following];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Discussions => "discussions",
            Self::Followers => "followers",
            Self::Following => "following",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Discussions => "Discussions",
            Self::Followers => "Followers",
            Self::Following => "Following",
        }
    }
}

/// Per-section privacy settings for a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrivacy {
    pub projects: PrivacySettings,
    pub discussions: PrivacySettings,
    pub followers: PrivacySettings,
    pub following: PrivacySettings,
}

impl UserPrivacy {
    #[must_use]
    pub fn get(&self, section: PrivacySection) -> &PrivacySettings {
        match section {
            PrivacySection::Projects => &self.projects,
            PrivacySection::Discussions => &self.discussions,
            PrivacySection::Followers => &self.followers,
            PrivacySection::Following => &self.following,
        }
    }

    pub fn set(&mut self, section: PrivacySection, settings: PrivacySettings) {
        let slot = match section {
            PrivacySection::Projects => &mut self.projects,
            PrivacySection::Discussions => &mut self.discussions,
            PrivacySection::Followers => &mut self.followers,
            PrivacySection::Following => &mut self.following,
        };
        *slot = settings;
    }
}

/// The signed-in user. This is the only object persisted across reloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub privacy: UserPrivacy,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked_users: Vec<String>,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    #[must_use]
    pub fn is_connected_to(&self, other_id: &str) -> bool {
        self.connections.iter().any(|c| c == other_id)
    }

    /// Byline used when this user posts a reply, comment or submission.
    #[must_use]
    pub fn author(&self) -> Author {
        Author { id: self.id.clone(), name: self.name.clone(), avatar: self.avatar.clone() }
    }
}

/// Lightweight author reference embedded in listings and comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

// =============================================================================
// CHATS & MESSAGES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub url: String,
    pub name: String,
}

/// A single message inside a direct chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub user_id: String,
    pub timestamp: OffsetDateTime,
    pub read: bool,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Presence hints for a chat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPresence {
    #[serde(default)]
    pub typing: Vec<String>,
    #[serde(default)]
    pub online: Vec<String>,
}

/// A direct conversation between participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub participants: Vec<String>,
    pub messages: Vec<Message>,
    pub last_activity: OffsetDateTime,
    pub status: ChatPresence,
}

impl Chat {
    #[must_use]
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// The first participant that is not `viewer_id`.
    #[must_use]
    pub fn other_participant(&self, viewer_id: Option<&str>) -> Option<&str> {
        self.participants
            .iter()
            .map(String::as_str)
            .find(|p| Some(*p) != viewer_id)
    }

    /// Unread messages authored by someone other than the viewer.
    #[must_use]
    pub fn unread_count(&self, viewer_id: Option<&str>) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.read && Some(m.user_id.as_str()) != viewer_id)
            .count()
    }

    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[must_use]
    pub fn is_online(&self, user_id: &str) -> bool {
        self.status.online.iter().any(|u| u == user_id)
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Message,
    Mention,
    Follow,
    Like,
    Comment,
    ConnectionRequest,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub content: String,
    pub from_user: User,
    pub read: bool,
    pub timestamp: OffsetDateTime,
    #[serde(default)]
    pub link: Option<String>,
}

// =============================================================================
// CONNECTION SUGGESTIONS
// =============================================================================

/// Suggested connection shown in the messenger popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestedConnection {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub match_reason: String,
    pub skills: Vec<String>,
    pub mutual_projects: u32,
}
