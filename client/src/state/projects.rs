//! Project listing, project workspace and new-project form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/projects` filters the mock project list through `ProjectQuery`.
//! `/projects/:id` owns a `ProjectDetailState` whose mutators mirror the
//! workspace actions (progress slider, join/leave, edit modal, discussion).
//! `/projects/create` edits a `ProjectDraft`.
//!
//! DESIGN
//! ======
//! Permission checks (owner-only progress, owner cannot leave) live here
//! rather than in the view so they hold regardless of which buttons render.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use time::{Date, OffsetDateTime};

use super::listing::{matches_search, overlaps, toggle_selection};
use crate::mock;
use crate::net::types::{Author, User};

/// Project categories offered by the create form.
pub const PROJECT_CATEGORIES: [&str; 10] = [
    "AI & ML",
    "Web Development",
    "Mobile Apps",
    "Blockchain",
    "IoT",
    "Game Development",
    "Cybersecurity",
    "DevOps",
    "Data Science",
    "Other",
];

/// Team roles offered when inviting members from the create form.
pub const TEAM_ROLES: [&str; 7] =
    ["Developer", "Designer", "Project Manager", "DevOps Engineer", "QA Engineer", "Technical Writer", "Other"];

/// A project card in the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub progress: u8,
    pub created_by: String,
    pub members: Vec<String>,
    pub created_at: Date,
    pub image: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectSort {
    #[default]
    Newest,
    Oldest,
}

impl ProjectSort {
    pub const ALL: [Self; 2] = [Self::Newest, Self::Oldest];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::Oldest.as_str() { Self::Oldest } else { Self::Newest }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search: String,
    pub technologies: Vec<String>,
    pub sort: ProjectSort,
}

impl ProjectQuery {
    pub fn toggle_technology(&mut self, tech: &str) {
        toggle_selection(&mut self.technologies, tech);
    }

    #[must_use]
    pub fn filter(&self, projects: &[Project]) -> Vec<Project> {
        let mut out: Vec<Project> = projects
            .iter()
            .filter(|p| matches_search(&self.search, &[&p.title, &p.description]) && overlaps(&self.technologies, &p.tags))
            .cloned()
            .collect();
        match self.sort {
            ProjectSort::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ProjectSort::Oldest => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        out
    }
}

// =============================================================================
// PROJECT WORKSPACE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub role: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub stars: u32,
    pub forks: u32,
    pub issues: u32,
    pub contributors: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: String,
    pub website: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub title: String,
    pub date: Date,
    pub completed: bool,
}

/// A discussion comment, optionally carrying one level of replies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discussion {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub timestamp: OffsetDateTime,
    pub likes: u32,
    pub liked: bool,
    pub replies: Vec<Discussion>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub progress: u8,
    pub owner: Author,
    pub members: Vec<Member>,
    pub stats: ProjectStats,
    pub readme: String,
    pub tags: Vec<String>,
    pub category: String,
    pub links: ProjectLinks,
    pub milestones: Vec<Milestone>,
    pub discussions: Vec<Discussion>,
}

/// Fields the owner can change through the edit modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEdit {
    pub title: String,
    pub description: String,
    pub progress: u8,
    pub category: String,
    /// Comma-separated, as typed.
    pub tags: String,
    pub github: String,
    pub website: String,
}

impl ProjectEdit {
    #[must_use]
    pub fn from_project(project: &ProjectDetail) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            progress: project.progress,
            category: project.category.clone(),
            tags: project.tags.join(", "),
            github: project.links.github.clone(),
            website: project.links.website.clone(),
        }
    }

    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetailState {
    pub project: ProjectDetail,
    pub expanded_comments: Vec<String>,
    pub comment_draft: String,
    pub invite_email: String,
    pub invites_sent: Vec<String>,
}

impl ProjectDetailState {
    #[must_use]
    pub fn load(id: &str) -> Option<Self> {
        Some(Self::new(mock::catalog::project_detail(id)?))
    }

    #[must_use]
    pub fn new(project: ProjectDetail) -> Self {
        Self {
            project,
            expanded_comments: Vec::new(),
            comment_draft: String::new(),
            invite_email: String::new(),
            invites_sent: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_owner(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.id == self.project.owner.id)
    }

    #[must_use]
    pub fn is_member(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| self.project.members.iter().any(|m| m.id == u.id))
    }

    /// Owner-only; the value is clamped to 0..=100.
    pub fn set_progress(&mut self, user: Option<&User>, value: i32) -> bool {
        if !self.is_owner(user) {
            return false;
        }
        self.project.progress = u8::try_from(value.clamp(0, 100)).unwrap_or(100);
        true
    }

    pub fn join(&mut self, user: Option<&User>) -> bool {
        let Some(user) = user else {
            return false;
        };
        if self.is_member(Some(user)) {
            return false;
        }
        self.project.members.push(Member {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            role: "Member".to_owned(),
        });
        true
    }

    /// Remove `user` from the team. The owner cannot leave.
    pub fn leave(&mut self, user: Option<&User>) -> bool {
        let Some(user) = user else {
            return false;
        };
        if self.is_owner(Some(user)) {
            return false;
        }
        let before = self.project.members.len();
        self.project.members.retain(|m| m.id != user.id);
        self.project.members.len() != before
    }

    pub fn apply_edit(&mut self, edit: &ProjectEdit) {
        let p = &mut self.project;
        p.title = edit.title.trim().to_owned();
        p.description = edit.description.trim().to_owned();
        p.progress = edit.progress.min(100);
        p.category = edit.category.trim().to_owned();
        p.tags = edit.tag_list();
        p.links = ProjectLinks { github: edit.github.trim().to_owned(), website: edit.website.trim().to_owned() };
    }

    /// Post the comment draft as a top-level discussion by `user`.
    pub fn add_comment(&mut self, user: Option<&User>) -> bool {
        let Some(user) = user else {
            return false;
        };
        let content = self.comment_draft.trim();
        if content.is_empty() {
            return false;
        }
        let discussion = Discussion {
            id: (self.project.discussions.len() + 1).to_string(),
            author: user.author(),
            content: content.to_owned(),
            timestamp: OffsetDateTime::now_utc(),
            likes: 0,
            liked: false,
            replies: Vec::new(),
        };
        self.project.discussions.push(discussion);
        self.comment_draft.clear();
        true
    }

    pub fn toggle_comment_expansion(&mut self, id: &str) {
        toggle_selection(&mut self.expanded_comments, id);
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_comments.iter().any(|c| c == id)
    }

    /// Record an invitation for the drafted email. Nothing is delivered.
    pub fn invite(&mut self) -> bool {
        let email = self.invite_email.trim().to_owned();
        if email.is_empty() {
            return false;
        }
        log::info!("invited {email} to project {}", self.project.id);
        self.invites_sent.push(email);
        self.invite_email.clear();
        true
    }

    /// README rendered from Markdown to HTML.
    #[must_use]
    pub fn readme_html(&self) -> String {
        render_markdown(&self.project.readme)
    }
}

#[must_use]
pub fn render_markdown(source: &str) -> String {
    let parser = pulldown_cmark::Parser::new(source);
    let mut html = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

// =============================================================================
// NEW PROJECT FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MilestoneDraft {
    pub title: String,
    pub date: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMemberDraft {
    pub email: String,
    pub role: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneField {
    Title,
    Date,
    Description,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub cover_image: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub tag_input: String,
    pub github: String,
    pub website: String,
    pub milestones: Vec<MilestoneDraft>,
    pub team: Vec<TeamMemberDraft>,
    pub readme: String,
}

impl ProjectDraft {
    /// Commit `tag_input` as a tag (Enter key). Duplicates are ignored.
    pub fn commit_tag(&mut self) -> bool {
        let tag = self.tag_input.trim().to_owned();
        self.tag_input.clear();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn add_milestone(&mut self) {
        self.milestones.push(MilestoneDraft::default());
    }

    pub fn update_milestone(&mut self, index: usize, field: MilestoneField, value: String) {
        if let Some(m) = self.milestones.get_mut(index) {
            match field {
                MilestoneField::Title => m.title = value,
                MilestoneField::Date => m.date = value,
                MilestoneField::Description => m.description = value,
            }
        }
    }

    pub fn remove_milestone(&mut self, index: usize) {
        if index < self.milestones.len() {
            self.milestones.remove(index);
        }
    }

    pub fn add_team_member(&mut self) {
        self.team.push(TeamMemberDraft { email: String::new(), role: TEAM_ROLES[0].to_owned() });
    }

    pub fn update_team_email(&mut self, index: usize, email: String) {
        if let Some(m) = self.team.get_mut(index) {
            m.email = email;
        }
    }

    pub fn update_team_role(&mut self, index: usize, role: String) {
        if let Some(m) = self.team.get_mut(index) {
            m.role = role;
        }
    }

    pub fn remove_team_member(&mut self, index: usize) {
        if index < self.team.len() {
            self.team.remove(index);
        }
    }

    /// # Errors
    ///
    /// Returns a user-facing message for the first blank required field.
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
