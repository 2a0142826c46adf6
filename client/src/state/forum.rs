//! Forum listing, topic thread and new-topic form state.
//!
//! DESIGN
//! ======
//! Topics are a fixed mock array; `ForumQuery` is the only thing the listing
//! page mutates. Filtering returns owned rows so the page can hold the result
//! in a memo and paginate it without re-running the predicates.

#[cfg(test)]
#[path = "forum_test.rs"]
mod forum_test;

use time::{Date, OffsetDateTime};

use super::listing::{PageSlice, admits, matches_search, overlaps, paginate, toggle_selection};
use crate::mock;
use crate::net::types::Author;

pub const TOPICS_PER_PAGE: usize = 10;

/// A forum topic as shown in the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: Date,
    pub category: String,
    pub tags: Vec<String>,
    pub views: u32,
    pub replies: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopicSort {
    #[default]
    Newest,
    Popular,
}

impl TopicSort {
    pub const ALL: [Self; 2] = [Self::Newest, Self::Popular];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Popular => "popular",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Popular => "Most popular",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::Popular.as_str() { Self::Popular } else { Self::Newest }
    }
}

/// Search, filter, sort and page selection for the forum listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForumQuery {
    pub search: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub sort: TopicSort,
    pub page: usize,
}

impl Default for ForumQuery {
    fn default() -> Self {
        Self { search: String::new(), categories: Vec::new(), tags: Vec::new(), sort: TopicSort::Newest, page: 1 }
    }
}

impl ForumQuery {
    pub fn toggle_category(&mut self, category: &str) {
        toggle_selection(&mut self.categories, category);
        self.page = 1;
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_selection(&mut self.tags, tag);
        self.page = 1;
    }

    #[must_use]
    pub fn matches(&self, topic: &Topic) -> bool {
        matches_search(&self.search, &[&topic.title, &topic.description])
            && admits(&self.categories, &topic.category)
            && overlaps(&self.tags, &topic.tags)
    }

    /// Matching topics in display order.
    #[must_use]
    pub fn filter(&self, topics: &[Topic]) -> Vec<Topic> {
        let mut out: Vec<Topic> = topics.iter().filter(|t| self.matches(t)).cloned().collect();
        match self.sort {
            TopicSort::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            TopicSort::Popular => out.sort_by(|a, b| b.views.cmp(&a.views)),
        }
        out
    }

    #[must_use]
    pub fn page_of<'a>(&self, filtered: &'a [Topic]) -> PageSlice<'a, Topic> {
        paginate(filtered, self.page, TOPICS_PER_PAGE)
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }
}

// =============================================================================
// TOPIC THREAD
// =============================================================================

/// Full body of a topic as shown on its thread page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: Date,
    pub views: u32,
    pub likes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub author: Author,
    pub timestamp: OffsetDateTime,
    pub likes: u32,
    pub liked: bool,
}

/// Like flag, replies and reply draft for one topic thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicDetailState {
    pub topic: TopicDetail,
    pub replies: Vec<Reply>,
    pub liked: bool,
    pub like_count: u32,
    pub draft: String,
}

impl TopicDetailState {
    /// Thread state for topic `id`, or `None` when no such topic exists.
    #[must_use]
    pub fn load(id: &str) -> Option<Self> {
        let topic = mock::catalog::topic_detail(id)?;
        Some(Self {
            like_count: topic.likes,
            replies: mock::catalog::topic_replies(id),
            topic,
            liked: false,
            draft: String::new(),
        })
    }

    pub fn toggle_like(&mut self) {
        if self.liked {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count += 1;
        }
        self.liked = !self.liked;
    }

    pub fn toggle_reply_like(&mut self, reply_id: &str) {
        if let Some(reply) = self.replies.iter_mut().find(|r| r.id == reply_id) {
            if reply.liked {
                reply.likes = reply.likes.saturating_sub(1);
            } else {
                reply.likes += 1;
            }
            reply.liked = !reply.liked;
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Append the draft as a reply by `author`. Returns false for a blank draft.
    pub fn submit_reply(&mut self, author: Author) -> bool {
        if !self.can_submit() {
            return false;
        }
        let content = std::mem::take(&mut self.draft).trim().to_owned();
        self.replies.push(Reply {
            id: (self.replies.len() + 1).to_string(),
            content,
            author,
            timestamp: OffsetDateTime::now_utc(),
            likes: 0,
            liked: false,
        });
        true
    }
}

// =============================================================================
// NEW TOPIC FORM
// =============================================================================

/// Create-topic form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl TopicDraft {
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_selection(&mut self.tags, tag);
    }

    /// Build the topic to publish, or the first missing required field.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when title, description or category is blank.
    pub fn validate(&self, author_id: &str, next_id: usize) -> Result<Topic, &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.description.trim().is_empty() {
            return Err("Description is required");
        }
        if self.category.trim().is_empty() {
            return Err("Category is required");
        }
        Ok(Topic {
            id: next_id.to_string(),
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            created_by: author_id.to_owned(),
            created_at: OffsetDateTime::now_utc().date(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            views: 0,
            replies: 0,
        })
    }
}
