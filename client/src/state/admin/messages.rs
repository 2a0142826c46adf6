//! Messaging management: direct-message threads under review.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use time::OffsetDateTime;

use crate::mock;
use crate::net::types::Author;
use crate::state::listing::matches_search;
use crate::state::moderation::{self, ThreadStatus, count_with_status, impl_moderated, remove_by_id};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastMessage {
    pub content: String,
    pub timestamp: OffsetDateTime,
    pub sender_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadReport {
    pub reason: String,
    pub reported_by: String,
    pub timestamp: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatThread {
    pub id: String,
    pub participants: Vec<Author>,
    pub last_message: LastMessage,
    pub status: ThreadStatus,
    pub message_count: u32,
    pub reports: Vec<ThreadReport>,
}

impl_moderated!(ChatThread, ThreadStatus);

impl ChatThread {
    #[must_use]
    pub fn sender_name(&self) -> Option<&str> {
        self.participants.iter().find(|p| p.id == self.last_message.sender_id).map(|p| p.name.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThreadFilter {
    pub search: String,
    pub status: Option<ThreadStatus>,
}

impl ThreadFilter {
    #[must_use]
    pub fn matches(&self, thread: &ChatThread) -> bool {
        let names_match = thread.participants.iter().any(|p| matches_search(&self.search, &[&p.name]));
        (names_match || matches_search(&self.search, &[&thread.last_message.content]))
            && self.status.is_none_or(|s| s == thread.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessagingManagement {
    pub threads: Vec<ChatThread>,
    pub filter: ThreadFilter,
    pub selected: Option<String>,
}

impl Default for MessagingManagement {
    fn default() -> Self {
        Self { threads: mock::admin::threads(), filter: ThreadFilter::default(), selected: None }
    }
}

impl MessagingManagement {
    #[must_use]
    pub fn filtered(&self) -> Vec<ChatThread> {
        self.threads.iter().filter(|t| self.filter.matches(t)).cloned().collect()
    }

    #[must_use]
    pub fn selected_thread(&self) -> Option<&ChatThread> {
        let id = self.selected.as_deref()?;
        self.threads.iter().find(|t| t.id == id)
    }

    pub fn update_status(&mut self, id: &str, status: ThreadStatus) -> bool {
        moderation::update_status(&mut self.threads, id, status)
    }

    /// Delete a thread and close its detail modal.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        remove_by_id(&mut self.threads, id)
    }

    #[must_use]
    pub fn reported_count(&self) -> usize {
        count_with_status(&self.threads, ThreadStatus::Reported)
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        count_with_status(&self.threads, ThreadStatus::Blocked)
    }

    #[must_use]
    pub fn message_total(&self) -> u32 {
        self.threads.iter().map(|t| t.message_count).sum()
    }
}
