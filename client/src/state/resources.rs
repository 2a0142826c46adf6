//! Learning-resource catalog and resource viewer state.
//!
//! DESIGN
//! ======
//! The catalog groups items into titled sections; the category filter keeps
//! whole sections and the search term trims items inside them. Item stats are
//! free-form label/value pairs because every section reports different ones.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use time::{Date, OffsetDateTime};

use super::listing::matches_search;
use crate::mock;
use crate::net::types::Author;

/// Live-chat history kept on the resource page.
pub const CHAT_HISTORY_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// `(label, value)` pairs shown under the card.
    pub stats: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceSection {
    pub title: String,
    pub items: Vec<ResourceItem>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResourceCategory {
    #[default]
    All,
    Videos,
    Documentation,
    Practice,
    Articles,
}

impl ResourceCategory {
    pub const ALL: [Self; 5] = [Self::All, Self::Videos, Self::Documentation, Self::Practice, Self::Articles];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Videos => "Videos",
            Self::Documentation => "Documentation",
            Self::Practice => "Practice",
            Self::Articles => "Articles",
        }
    }

    /// Word a section title must contain to belong to this category.
    fn keyword(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            // Section is titled "Video Tutorials".
            Self::Videos => Some("Video"),
            other => Some(other.label()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceQuery {
    pub search: String,
    pub category: ResourceCategory,
}

impl ResourceQuery {
    /// Sections in the selected category, each holding only matching items.
    #[must_use]
    pub fn filter(&self, sections: &[ResourceSection]) -> Vec<ResourceSection> {
        sections
            .iter()
            .filter(|s| self.category.keyword().is_none_or(|k| s.title.contains(k)))
            .map(|s| ResourceSection {
                title: s.title.clone(),
                items: s
                    .items
                    .iter()
                    .filter(|i| matches_search(&self.search, &[&i.name, &i.description]))
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

// =============================================================================
// RESOURCE VIEWER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub time: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instructor {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail: String,
    pub instructor: Instructor,
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
    pub rating: f32,
    pub duration: String,
    pub level: String,
    pub tags: Vec<String>,
    pub chapters: Vec<Chapter>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub timestamp: OffsetDateTime,
    pub likes: u32,
    pub liked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub author: Author,
    pub status: SubmissionStatus,
    pub submitted_at: Date,
    pub feedback: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: Date,
    pub submissions: Vec<Submission>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub user: String,
    pub message: String,
    pub timestamp: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceDetailState {
    pub resource: ResourceDetail,
    pub comments: Vec<Comment>,
    pub assignment: Assignment,
    pub viewers: Vec<Author>,
    pub chat: Vec<ChatLine>,
    pub comment_draft: String,
    pub chat_draft: String,
    pub submission_url: String,
    pub show_assignment: bool,
    /// 0 until the viewer rates, then 1..=5.
    pub rating: u8,
    /// Index of the viewer who speaks next in `viewer_chatter`.
    pub chatter_turn: usize,
}

impl ResourceDetailState {
    #[must_use]
    pub fn load(id: &str) -> Option<Self> {
        let resource = mock::catalog::resource_detail(id)?;
        Some(Self {
            resource,
            comments: mock::catalog::resource_comments(),
            assignment: mock::catalog::resource_assignment(),
            viewers: mock::catalog::resource_viewers(),
            chat: Vec::new(),
            comment_draft: String::new(),
            chat_draft: String::new(),
            submission_url: String::new(),
            show_assignment: false,
            rating: 0,
            chatter_turn: 0,
        })
    }

    /// Prepend the comment draft. New ids continue from the list length.
    pub fn add_comment(&mut self, author: Author) -> bool {
        let content = self.comment_draft.trim();
        if content.is_empty() {
            return false;
        }
        let comment = Comment {
            id: (self.comments.len() + 1).to_string(),
            author,
            content: content.to_owned(),
            timestamp: OffsetDateTime::now_utc(),
            likes: 0,
            liked: false,
        };
        self.comments.insert(0, comment);
        self.comment_draft.clear();
        true
    }

    pub fn toggle_comment_like(&mut self, id: &str) {
        if let Some(c) = self.comments.iter_mut().find(|c| c.id == id) {
            if c.liked {
                c.likes = c.likes.saturating_sub(1);
            } else {
                c.likes += 1;
            }
            c.liked = !c.liked;
        }
    }

    /// Append a chat line, keeping only the most recent `CHAT_HISTORY_LIMIT`.
    pub fn push_chat(&mut self, user: &str, message: &str) -> bool {
        let message = message.trim();
        if message.is_empty() {
            return false;
        }
        self.chat.push(ChatLine {
            user: user.to_owned(),
            message: message.to_owned(),
            timestamp: OffsetDateTime::now_utc(),
        });
        if self.chat.len() > CHAT_HISTORY_LIMIT {
            let excess = self.chat.len() - CHAT_HISTORY_LIMIT;
            self.chat.drain(..excess);
        }
        true
    }

    /// Send the chat draft as the current viewer.
    pub fn send_chat(&mut self) -> bool {
        let draft = std::mem::take(&mut self.chat_draft);
        let sent = self.push_chat("You", &draft);
        if !sent {
            self.chat_draft = draft;
        }
        sent
    }

    /// Post a line from the next active viewer in rotation.
    pub fn viewer_chatter(&mut self) -> bool {
        if self.viewers.is_empty() {
            return false;
        }
        let name = self.viewers[self.chatter_turn % self.viewers.len()].name.clone();
        self.chatter_turn = self.chatter_turn.wrapping_add(1);
        let line = format!("{name} is following along");
        self.push_chat(&name, &line)
    }

    /// Set the star rating; values outside 1..=5 are ignored.
    pub fn rate(&mut self, stars: u8) -> bool {
        if !(1..=5).contains(&stars) {
            return false;
        }
        self.rating = stars;
        true
    }

    pub fn toggle_assignment(&mut self) {
        self.show_assignment = !self.show_assignment;
    }

    /// Submit the drafted URL as a pending submission by `author`.
    pub fn submit_assignment(&mut self, author: Author) -> bool {
        let url = self.submission_url.trim();
        if url.is_empty() {
            return false;
        }
        log::info!("assignment {} submitted: {url}", self.assignment.id);
        self.assignment.submissions.push(Submission {
            author,
            status: SubmissionStatus::Pending,
            submitted_at: OffsetDateTime::now_utc().date(),
            feedback: None,
            url: Some(url.to_owned()),
        });
        self.submission_url.clear();
        self.show_assignment = false;
        true
    }
}
