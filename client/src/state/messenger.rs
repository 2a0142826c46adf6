//! Floating messenger popup state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chat data lives in `AuthState`; this module only tracks which panels of the
//! popup are open, the active conversation and the composer text. The popup
//! component pairs every mutating action here with the matching `AuthState`
//! call (e.g. `after_block` follows `AuthState::block_user`).

#[cfg(test)]
#[path = "messenger_test.rs"]
mod messenger_test;

/// Emoji palette offered by the composer.
pub const EMOJIS: [&str; 8] = ["😊", "👍", "❤️", "🎉", "🔥", "👋", "💡", "⭐"];

/// Message currently open in the edit modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditingMessage {
    pub id: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessengerState {
    pub open: bool,
    pub active_chat: Option<String>,
    pub draft: String,
    pub show_notifications: bool,
    pub show_emoji_picker: bool,
    pub show_chat_options: bool,
    pub show_suggestions: bool,
    pub show_compose: bool,
    pub editing: Option<EditingMessage>,
}

impl MessengerState {
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        if !self.open {
            self.show_emoji_picker = false;
            self.show_chat_options = false;
        }
    }

    pub fn open_chat(&mut self, chat_id: &str) {
        self.active_chat = Some(chat_id.to_owned());
        self.show_notifications = false;
        self.show_suggestions = false;
    }

    pub fn close_chat(&mut self) {
        self.active_chat = None;
        self.show_chat_options = false;
        self.show_emoji_picker = false;
    }

    pub fn toggle_notifications(&mut self) {
        self.show_notifications = !self.show_notifications;
        if self.show_notifications {
            self.show_suggestions = false;
        }
    }

    pub fn toggle_suggestions(&mut self) {
        self.show_suggestions = !self.show_suggestions;
        if self.show_suggestions {
            self.show_notifications = false;
        }
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.show_emoji_picker = !self.show_emoji_picker;
    }

    pub fn toggle_chat_options(&mut self) {
        self.show_chat_options = !self.show_chat_options;
    }

    /// Append `emoji` to the draft and close the picker.
    pub fn pick_emoji(&mut self, emoji: &str) {
        self.draft.push_str(emoji);
        self.show_emoji_picker = false;
    }

    /// Take the trimmed draft for sending. The draft is cleared either way.
    pub fn take_draft(&mut self) -> Option<String> {
        let draft = std::mem::take(&mut self.draft);
        let trimmed = draft.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }

    pub fn begin_edit(&mut self, id: &str, content: &str) {
        self.editing = Some(EditingMessage { id: id.to_owned(), content: content.to_owned() });
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Close the options menu and the conversation once its peer is blocked.
    pub fn after_block(&mut self) {
        self.show_chat_options = false;
        self.active_chat = None;
    }

    pub fn after_report(&mut self) {
        self.show_chat_options = false;
    }
}
