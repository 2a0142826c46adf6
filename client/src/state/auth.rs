//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context by the app root. Route guards,
//! the navbar, the messenger popup and the privacy modal all read and mutate
//! it. It also owns the user's chats and notifications, since both are
//! scoped to the signed-in session.
//!
//! DESIGN
//! ======
//! Every operation is a synchronous state replacement. The only persisted
//! value is the current user, written through the injected `KeyValueStore`
//! under `SESSION_KEY` whenever the user changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use time::OffsetDateTime;

use crate::mock;
use crate::net::types::{Attachment, Chat, Message, Notification, PrivacySection, PrivacySettings, User, UserRole};
use crate::util::storage::{KeyValueStore, MemoryStorage, load_json, save_json};

/// Storage key holding the serialized current user.
pub const SESSION_KEY: &str = "user";

/// Session state: current user, their chats and notifications.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the persisted session has been read on the client.
    pub loading: bool,
    pub chats: Vec<Chat>,
    pub notifications: Vec<Notification>,
    pub blocked_users: Vec<String>,
    pub reported_users: Vec<String>,
    storage: Arc<dyn KeyValueStore>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }
}

impl AuthState {
    /// Signed-out state seeded with the mock chats and notifications.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            user: None,
            loading: false,
            chats: mock::session::chats(),
            notifications: mock::session::notifications(),
            blocked_users: Vec::new(),
            reported_users: Vec::new(),
            storage,
        }
    }

    /// State that waits for `restore_session` before guards may redirect.
    #[must_use]
    pub fn pending(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { loading: true, ..Self::new(storage) }
    }

    /// Build a state and immediately load the persisted user.
    #[must_use]
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut state = Self::pending(storage);
        state.restore_session();
        state
    }

    /// Read the persisted user, if any. A value that no longer decodes is
    /// dropped so the next login starts clean.
    pub fn restore_session(&mut self) {
        match load_json::<User>(self.storage.as_ref(), SESSION_KEY) {
            Ok(user) => self.user = user,
            Err(e) => {
                log::warn!("discarding stored session: {e}");
                self.storage.remove(SESSION_KEY);
                self.user = None;
            }
        }
        self.loading = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(UserRole::Admin)
    }

    /// Install `user` as the session and persist it.
    pub fn sign_in(&mut self, user: User) {
        log::info!("signed in as {}", user.id);
        self.user = Some(user);
        self.loading = false;
        self.persist_user();
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("signed out {}", user.id);
        }
        self.storage.remove(SESSION_KEY);
    }

    /// Replace one privacy section of the current user. No-op when signed out.
    pub fn update_privacy_settings(&mut self, section: PrivacySection, settings: PrivacySettings) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.privacy.set(section, settings);
        self.persist_user();
    }

    fn persist_user(&self) {
        let Some(user) = &self.user else {
            return;
        };
        if let Err(e) = save_json(self.storage.as_ref(), SESSION_KEY, user) {
            log::error!("failed to persist session: {e}");
        }
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    pub fn mark_notification_as_read(&mut self, id: &str) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    #[must_use]
    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    // =========================================================================
    // CHATS
    // =========================================================================

    #[must_use]
    pub fn chat(&self, chat_id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    fn chat_mut(&mut self, chat_id: &str) -> Option<&mut Chat> {
        self.chats.iter_mut().find(|c| c.id == chat_id)
    }

    pub fn mark_message_as_read(&mut self, chat_id: &str, message_id: &str) {
        if let Some(msg) = self
            .chat_mut(chat_id)
            .and_then(|c| c.messages.iter_mut().find(|m| m.id == message_id))
        {
            msg.read = true;
        }
    }

    /// Mark every message in `chat_id` not written by `viewer_id` as read.
    pub fn mark_chat_as_read(&mut self, chat_id: &str, viewer_id: &str) {
        if let Some(chat) = self.chat_mut(chat_id) {
            for msg in chat.messages.iter_mut().filter(|m| m.user_id != viewer_id) {
                msg.read = true;
            }
        }
    }

    /// Total unread messages across all chats for the current user.
    #[must_use]
    pub fn unread_message_count(&self) -> usize {
        let viewer = self.user_id();
        self.chats.iter().map(|c| c.unread_count(viewer)).sum()
    }

    /// Append a message to `chat_id`. Returns the new message id, or `None`
    /// when the chat is unknown or there is nothing to send.
    pub fn send_message(
        &mut self,
        chat_id: &str,
        author_id: &str,
        content: &str,
        attachment: Option<Attachment>,
    ) -> Option<String> {
        let content = content.trim();
        if content.is_empty() && attachment.is_none() {
            return None;
        }
        let now = OffsetDateTime::now_utc();
        let chat = self.chat_mut(chat_id)?;
        let id = uuid::Uuid::new_v4().to_string();
        chat.messages.push(Message {
            id: id.clone(),
            content: content.to_owned(),
            user_id: author_id.to_owned(),
            timestamp: now,
            read: true,
            likes: Vec::new(),
            attachments: attachment.into_iter().collect(),
        });
        chat.last_activity = now;
        Some(id)
    }

    /// Replace the text of a message. Returns whether a message was changed.
    pub fn edit_message(&mut self, chat_id: &str, message_id: &str, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        match self
            .chat_mut(chat_id)
            .and_then(|c| c.messages.iter_mut().find(|m| m.id == message_id))
        {
            Some(msg) => {
                content.clone_into(&mut msg.content);
                true
            }
            None => false,
        }
    }

    pub fn toggle_message_like(&mut self, chat_id: &str, message_id: &str, user_id: &str) {
        if let Some(msg) = self
            .chat_mut(chat_id)
            .and_then(|c| c.messages.iter_mut().find(|m| m.id == message_id))
        {
            if let Some(pos) = msg.likes.iter().position(|u| u == user_id) {
                msg.likes.remove(pos);
            } else {
                msg.likes.push(user_id.to_owned());
            }
        }
    }

    // =========================================================================
    // SAFETY ACTIONS
    // =========================================================================

    /// Block `user_id` and drop every chat they take part in. Idempotent.
    pub fn block_user(&mut self, user_id: &str) {
        if !self.blocked_users.iter().any(|u| u == user_id) {
            self.blocked_users.push(user_id.to_owned());
        }
        self.chats.retain(|c| !c.has_participant(user_id));
        log::info!("blocked user {user_id}");
    }

    /// Record a report against `user_id`. Nothing is sent anywhere.
    pub fn report_user(&mut self, user_id: &str) {
        log::info!("reported user {user_id}");
        if !self.reported_users.iter().any(|u| u == user_id) {
            self.reported_users.push(user_id.to_owned());
        }
    }
}
