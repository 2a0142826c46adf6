//! Visibility resolution for per-section privacy settings, plus the editor
//! state behind the privacy modal.
//!
//! Rules, evaluated in order:
//!
//! - The owner always sees their own sections.
//! - `Public`: everyone, including signed-out viewers.
//! - `Private`: owner only.
//! - `Friends`: viewers listed in the owner's `connections`.
//! - `Custom`: viewers in `allowed_users` and not in `blocked_users`. The
//!   block list wins when an id appears in both.

#[cfg(test)]
#[path = "privacy_test.rs"]
mod privacy_test;

use super::listing::toggle_selection;
use crate::net::types::{Author, PrivacySection, PrivacySettings, User, Visibility};

/// Whether `viewer` may see content governed by `settings` on `owner`'s profile.
#[must_use]
pub fn can_view(viewer: Option<&str>, owner: &User, settings: &PrivacySettings) -> bool {
    if viewer == Some(owner.id.as_str()) {
        return true;
    }
    match settings.visibility {
        Visibility::Public => true,
        Visibility::Private => false,
        Visibility::Friends => viewer.is_some_and(|v| owner.is_connected_to(v)),
        Visibility::Custom => viewer.is_some_and(|v| {
            !settings.blocked_users.iter().any(|b| b == v) && settings.allowed_users.iter().any(|a| a == v)
        }),
    }
}

/// `can_view` against the owner's stored settings for `section`.
#[must_use]
pub fn section_visible(viewer: Option<&str>, owner: &User, section: PrivacySection) -> bool {
    can_view(viewer, owner, owner.privacy.get(section))
}

/// People the privacy modal offers when picking custom viewers.
#[must_use]
pub fn candidate_users() -> Vec<Author> {
    vec![
        Author {
            id: "2".to_owned(),
            name: "Jane Smith".to_owned(),
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=50&h=50&fit=crop".to_owned(),
        },
        Author {
            id: "3".to_owned(),
            name: "Alex Johnson".to_owned(),
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=50&h=50&fit=crop".to_owned(),
        },
    ]
}

/// Unsaved edits to one section's settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivacyDraft {
    pub section: PrivacySection,
    pub settings: PrivacySettings,
    pub search: String,
}

impl PrivacyDraft {
    /// Start from the user's current settings (public when signed out).
    #[must_use]
    pub fn for_user(user: Option<&User>, section: PrivacySection) -> Self {
        let settings = user.map(|u| u.privacy.get(section).clone()).unwrap_or_default();
        Self { section, settings, search: String::new() }
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.settings.visibility = visibility;
    }

    /// Toggle `id` in the allow list; an allowed id is never also blocked.
    pub fn toggle_allowed(&mut self, id: &str) {
        toggle_selection(&mut self.settings.allowed_users, id);
        self.settings.blocked_users.retain(|b| b != id);
    }

    /// Toggle `id` in the block list; a blocked id is never also allowed.
    pub fn toggle_blocked(&mut self, id: &str) {
        toggle_selection(&mut self.settings.blocked_users, id);
        self.settings.allowed_users.retain(|a| a != id);
    }

    #[must_use]
    pub fn is_allowed(&self, id: &str) -> bool {
        self.settings.allowed_users.iter().any(|a| a == id)
    }

    #[must_use]
    pub fn is_blocked(&self, id: &str) -> bool {
        self.settings.blocked_users.iter().any(|b| b == id)
    }

    #[must_use]
    pub fn into_settings(self) -> PrivacySettings {
        self.settings
    }
}
