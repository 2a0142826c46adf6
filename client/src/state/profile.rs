//! Profile dashboard data and tab selection.
//!
//! DESIGN
//! ======
//! The dashboard is read-only mock data. Tabs that expose a privacy-governed
//! section (projects, discussions) are gated through `privacy::section_visible`
//! before they render, so a profile viewed by someone else honors the owner's
//! settings.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use time::{Date, OffsetDateTime};

use super::privacy::section_visible;
use crate::mock;
use crate::net::types::{Author, PrivacySection, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Overview,
    Projects,
    Discussions,
    Achievements,
}

impl ProfileTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Projects, Self::Discussions, Self::Achievements];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Projects => "Projects",
            Self::Discussions => "Discussions",
            Self::Achievements => "Achievements",
        }
    }

    /// Privacy section governing this tab, if any.
    #[must_use]
    pub fn section(self) -> Option<PrivacySection> {
        match self {
            Self::Projects => Some(PrivacySection::Projects),
            Self::Discussions => Some(PrivacySection::Discussions),
            Self::Overview | Self::Achievements => None,
        }
    }

    /// Whether `viewer` may open this tab on `owner`'s profile.
    #[must_use]
    pub fn visible_to(self, viewer: Option<&str>, owner: &User) -> bool {
        self.section().is_none_or(|s| section_visible(viewer, owner, s))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub projects: u32,
    pub active_projects: u32,
    pub completed_projects: u32,
    pub discussions: u32,
    pub contributions: u32,
    pub connections: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Project,
    Discussion,
    Connection,
    Achievement,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: OffsetDateTime,
    pub link: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverviewStatus {
    Active,
    Completed,
    OnHold,
}

impl OverviewStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectOverview {
    pub id: String,
    pub name: String,
    pub role: String,
    pub progress: u8,
    pub status: OverviewStatus,
    pub last_activity: OffsetDateTime,
    pub team: Vec<Author>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub earned_at: Date,
    /// `(current, total)` towards the next tier.
    pub progress: Option<(u32, u32)>,
}

impl Achievement {
    /// Completion in percent, capped at 100.
    #[must_use]
    pub fn percent(&self) -> u32 {
        match self.progress {
            Some((_, 0)) | None => 100,
            Some((current, total)) => (current.saturating_mul(100) / total).min(100),
        }
    }
}

/// Everything the profile page renders besides the user record itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDashboard {
    pub tab: ProfileTab,
    pub stats: DashboardStats,
    pub activity: Vec<Activity>,
    pub projects: Vec<ProjectOverview>,
    pub achievements: Vec<Achievement>,
}

impl Default for ProfileDashboard {
    fn default() -> Self {
        Self {
            tab: ProfileTab::Overview,
            stats: mock::profile::stats(),
            activity: mock::profile::activity(),
            projects: mock::profile::projects(),
            achievements: mock::profile::achievements(),
        }
    }
}

impl ProfileDashboard {
    /// Switch tabs unless the viewer may not see the target tab.
    pub fn select(&mut self, tab: ProfileTab, viewer: Option<&str>, owner: &User) -> bool {
        if !tab.visible_to(viewer, owner) {
            return false;
        }
        self.tab = tab;
        true
    }
}
