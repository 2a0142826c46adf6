//! Content moderation queue for posts, comments and discussions.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use time::Date;

use super::Report;
use crate::mock;
use crate::net::types::Author;
use crate::state::listing::matches_search;
use crate::state::moderation::{self, ContentStatus, Labeled, count_with_status, impl_moderated};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Comment,
    Discussion,
}

impl ContentKind {
    pub const ALL: [Self; 3] = [Self::Post, Self::Comment, Self::Discussion];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Discussion => "discussion",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Comment => "Comment",
            Self::Discussion => "Discussion",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

impl Labeled for ContentKind {
    const VALUES: &'static [Self] = &Self::ALL;

    fn value(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        Self::label(self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentStats {
    pub views: Option<u32>,
    pub likes: u32,
    pub replies: u32,
}

/// Thread a comment or post belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentRef {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub kind: ContentKind,
    pub title: Option<String>,
    pub body: String,
    pub author: Author,
    pub created_at: Date,
    pub status: ContentStatus,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub stats: ContentStats,
    pub reports: Vec<Report>,
    pub parent: Option<ParentRef>,
}

impl_moderated!(ContentItem, ContentStatus);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub search: String,
    pub kind: Option<ContentKind>,
    pub status: Option<ContentStatus>,
}

impl ContentFilter {
    #[must_use]
    pub fn matches(&self, item: &ContentItem) -> bool {
        let title = item.title.as_deref().unwrap_or_default();
        matches_search(&self.search, &[title, &item.body, &item.author.name])
            && self.kind.is_none_or(|k| k == item.kind)
            && self.status.is_none_or(|s| s == item.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentModeration {
    pub items: Vec<ContentItem>,
    pub filter: ContentFilter,
    pub selected: Option<String>,
}

impl Default for ContentModeration {
    fn default() -> Self {
        Self { items: mock::admin::content(), filter: ContentFilter::default(), selected: None }
    }
}

impl ContentModeration {
    #[must_use]
    pub fn filtered(&self) -> Vec<ContentItem> {
        self.items.iter().filter(|c| self.filter.matches(c)).cloned().collect()
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&ContentItem> {
        let id = self.selected.as_deref()?;
        self.items.iter().find(|c| c.id == id)
    }

    pub fn update_status(&mut self, id: &str, status: ContentStatus) -> bool {
        moderation::update_status(&mut self.items, id, status)
    }

    /// Reports filed against one item, empty for unknown ids.
    #[must_use]
    pub fn reports_for(&self, id: &str) -> &[Report] {
        self.items.iter().find(|c| c.id == id).map_or(&[], |c| c.reports.as_slice())
    }

    #[must_use]
    pub fn flagged_count(&self) -> usize {
        count_with_status(&self.items, ContentStatus::Flagged)
    }

    #[must_use]
    pub fn locked_count(&self) -> usize {
        count_with_status(&self.items, ContentStatus::Locked)
    }

    #[must_use]
    pub fn report_total(&self) -> usize {
        self.items.iter().map(|c| c.reports.len()).sum()
    }
}
