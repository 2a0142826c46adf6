//! Project management: moderation queue plus the admin "create project" form.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use time::{Date, OffsetDateTime};

use super::{Links, Report, distinct, next_id, split_list};
use crate::mock;
use crate::net::types::Author;
use crate::state::listing::matches_search;
use crate::state::moderation::{self, ProjectStatus, count_with_status, impl_moderated, remove_by_id};
use crate::state::projects::Member;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub stars: u32,
    pub forks: u32,
    pub issues: u32,
    pub discussions: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagedProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub creator: Author,
    pub status: ProjectStatus,
    pub created_at: Date,
    pub last_updated: Date,
    pub category: String,
    pub tags: Vec<String>,
    pub members: Vec<Member>,
    pub stats: RepoStats,
    pub reports: Vec<Report>,
    pub links: Links,
    pub thumbnail: Option<String>,
}

impl_moderated!(ManagedProject, ProjectStatus);

/// Tabs of the project detail modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectDetailTab {
    #[default]
    Details,
    Members,
    Reports,
}

impl ProjectDetailTab {
    pub const ALL: [Self; 3] = [Self::Details, Self::Members, Self::Reports];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Members => "Members",
            Self::Reports => "Reports",
        }
    }
}

/// Fields of the "create project" modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManagedProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Comma-separated.
    pub tags: String,
    pub github: String,
    pub website: String,
    pub documentation: String,
    pub thumbnail: String,
}

impl ManagedProjectDraft {
    /// # Errors
    ///
    /// Returns the message for the first missing required field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Project title is required");
        }
        if self.description.trim().is_empty() {
            return Err("Description is required");
        }
        if self.category.trim().is_empty() {
            return Err("Category is required");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    #[must_use]
    pub fn matches(&self, project: &ManagedProject) -> bool {
        matches_search(&self.search, &[&project.title, &project.description])
            && self.category.as_ref().is_none_or(|c| *c == project.category)
            && self.status.is_none_or(|s| s == project.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectManagement {
    pub projects: Vec<ManagedProject>,
    pub filter: ProjectFilter,
    pub selected: Option<String>,
    pub show_create: bool,
}

impl Default for ProjectManagement {
    fn default() -> Self {
        Self { projects: mock::admin::projects(), filter: ProjectFilter::default(), selected: None, show_create: false }
    }
}

impl ProjectManagement {
    #[must_use]
    pub fn filtered(&self) -> Vec<ManagedProject> {
        self.projects.iter().filter(|p| self.filter.matches(p)).cloned().collect()
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&ManagedProject> {
        let id = self.selected.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        distinct(self.projects.iter().map(|p| p.category.as_str()))
    }

    pub fn update_status(&mut self, id: &str, status: ProjectStatus) -> bool {
        moderation::update_status(&mut self.projects, id, status)
    }

    /// Append a project from the admin form. New projects start pending,
    /// owned by the admin account, with no members and zeroed stats.
    ///
    /// # Errors
    ///
    /// Returns the validation message when a required field is blank.
    pub fn create(&mut self, draft: &ManagedProjectDraft) -> Result<String, &'static str> {
        draft.validate()?;
        let id = next_id(self.projects.iter().map(|p| p.id.as_str()));
        let today = OffsetDateTime::now_utc().date();
        let thumbnail = draft.thumbnail.trim();
        self.projects.push(ManagedProject {
            id: id.clone(),
            title: draft.title.trim().to_owned(),
            description: draft.description.trim().to_owned(),
            creator: mock::admin::admin_author(),
            status: ProjectStatus::Pending,
            created_at: today,
            last_updated: today,
            category: draft.category.clone(),
            tags: split_list(&draft.tags),
            members: Vec::new(),
            stats: RepoStats::default(),
            reports: Vec::new(),
            links: Links::from_fields(&draft.github, &draft.website, &draft.documentation),
            thumbnail: (!thumbnail.is_empty()).then(|| thumbnail.to_owned()),
        });
        log::info!("created project {id}");
        Ok(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        remove_by_id(&mut self.projects, id)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        count_with_status(&self.projects, ProjectStatus::Active)
    }

    #[must_use]
    pub fn reported_count(&self) -> usize {
        count_with_status(&self.projects, ProjectStatus::Reported)
    }

    #[must_use]
    pub fn member_total(&self) -> usize {
        self.projects.iter().map(|p| p.members.len()).sum()
    }
}
