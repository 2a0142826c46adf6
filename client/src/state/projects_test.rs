use super::*;
use crate::mock::{catalog, session};
use crate::net::types::{UserPrivacy, UserRole};

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: format!("User {id}"),
        avatar: String::new(),
        role: UserRole::User,
        privacy: UserPrivacy::default(),
        skills: Vec::new(),
        interests: Vec::new(),
        connections: Vec::new(),
        blocked_users: Vec::new(),
    }
}

fn workspace() -> ProjectDetailState {
    ProjectDetailState::load("1").unwrap()
}

// =============================================================
// ProjectQuery
// =============================================================

#[test]
fn newest_and_oldest_sorts_are_reversed() {
    let projects = catalog::projects();
    let newest = ProjectQuery::default().filter(&projects);
    let oldest = ProjectQuery { sort: ProjectSort::Oldest, ..ProjectQuery::default() }.filter(&projects);
    assert_eq!(newest[0].id, "1");
    assert_eq!(oldest[0].id, "2");
}

#[test]
fn technology_filter_matches_any_tag() {
    let projects = catalog::projects();
    let mut query = ProjectQuery::default();
    query.toggle_technology("Rust");
    let out = query.filter(&projects);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Quantum Encryption");
}

#[test]
fn search_covers_description() {
    let projects = catalog::projects();
    let query = ProjectQuery { search: "secure communication".to_owned(), ..ProjectQuery::default() };
    assert_eq!(query.filter(&projects).len(), 1);
}

// =============================================================
// Ownership and membership
// =============================================================

#[test]
fn only_owner_can_set_progress() {
    let mut state = workspace();
    assert!(!state.set_progress(Some(&user("2")), 90));
    assert!(!state.set_progress(None, 90));
    assert_eq!(state.project.progress, 65);

    assert!(state.set_progress(Some(&user("1")), 90));
    assert_eq!(state.project.progress, 90);
}

#[test]
fn progress_is_clamped() {
    let mut state = workspace();
    let owner = user("1");
    state.set_progress(Some(&owner), 250);
    assert_eq!(state.project.progress, 100);
    state.set_progress(Some(&owner), -5);
    assert_eq!(state.project.progress, 0);
}

#[test]
fn join_requires_user_and_is_once_only() {
    let mut state = workspace();
    assert!(!state.join(None));
    let newcomer = session::regular_user();
    assert!(state.join(Some(&newcomer)));
    assert!(state.is_member(Some(&newcomer)));
    assert!(!state.join(Some(&newcomer)));
    assert_eq!(state.project.members.len(), 4);
    assert_eq!(state.project.members[3].role, "Member");
}

#[test]
fn owner_cannot_leave() {
    let mut state = workspace();
    assert!(!state.leave(Some(&user("1"))));
    assert!(state.leave(Some(&user("2"))));
    assert!(!state.is_member(Some(&user("2"))));
    assert!(!state.leave(Some(&user("2"))));
}

// =============================================================
// Edits, comments, invites
// =============================================================

#[test]
fn apply_edit_replaces_editable_fields() {
    let mut state = workspace();
    let mut edit = ProjectEdit::from_project(&state.project);
    assert_eq!(edit.tags, "Neural Networks, SDK, Hardware");
    edit.title = "Neural SDK".to_owned();
    edit.tags = "Rust, , WASM ".to_owned();
    edit.progress = 80;
    state.apply_edit(&edit);
    assert_eq!(state.project.title, "Neural SDK");
    assert_eq!(state.project.tags, vec!["Rust".to_owned(), "WASM".to_owned()]);
    assert_eq!(state.project.progress, 80);
    assert_eq!(state.project.members.len(), 3);
}

#[test]
fn add_comment_needs_user_and_text() {
    let mut state = workspace();
    state.comment_draft = "Looks good".to_owned();
    assert!(!state.add_comment(None));
    let commenter = user("3");
    assert!(state.add_comment(Some(&commenter)));
    assert_eq!(state.project.discussions.len(), 2);
    assert_eq!(state.project.discussions[1].author.id, "3");
    assert!(state.comment_draft.is_empty());
    assert!(!state.add_comment(Some(&commenter)));
}

#[test]
fn comment_expansion_toggles() {
    let mut state = workspace();
    state.toggle_comment_expansion("1");
    assert!(state.is_expanded("1"));
    state.toggle_comment_expansion("1");
    assert!(!state.is_expanded("1"));
}

#[test]
fn invite_requires_email() {
    let mut state = workspace();
    assert!(!state.invite());
    state.invite_email = " neo@zion.net ".to_owned();
    assert!(state.invite());
    assert_eq!(state.invites_sent, vec!["neo@zion.net".to_owned()]);
    assert!(state.invite_email.is_empty());
}

#[test]
fn readme_renders_markdown() {
    let html = workspace().readme_html();
    assert!(html.contains("<h1>Neural Interface SDK</h1>"));
    assert!(html.contains("<li>Low-level hardware drivers</li>"));
}

// =============================================================
// ProjectDraft
// =============================================================

#[test]
fn commit_tag_ignores_blank_and_duplicate() {
    let mut draft = ProjectDraft { tag_input: " Rust ".to_owned(), ..ProjectDraft::default() };
    assert!(draft.commit_tag());
    draft.tag_input = "Rust".to_owned();
    assert!(!draft.commit_tag());
    draft.tag_input = "  ".to_owned();
    assert!(!draft.commit_tag());
    assert_eq!(draft.tags, vec!["Rust".to_owned()]);
    assert!(draft.tag_input.is_empty());
    draft.remove_tag("Rust");
    assert!(draft.tags.is_empty());
}

#[test]
fn milestones_and_team_are_editable_lists() {
    let mut draft = ProjectDraft::default();
    draft.add_milestone();
    draft.add_milestone();
    draft.update_milestone(1, MilestoneField::Title, "Beta".to_owned());
    draft.remove_milestone(0);
    assert_eq!(draft.milestones.len(), 1);
    assert_eq!(draft.milestones[0].title, "Beta");

    draft.add_team_member();
    assert_eq!(draft.team[0].role, "Developer");
    draft.update_team_email(0, "a@b.c".to_owned());
    draft.update_team_role(0, "Designer".to_owned());
    assert_eq!(draft.team[0], TeamMemberDraft { email: "a@b.c".to_owned(), role: "Designer".to_owned() });
    draft.remove_team_member(5);
    assert_eq!(draft.team.len(), 1);
}

#[test]
fn draft_validation_reports_first_missing_field() {
    let mut draft = ProjectDraft::default();
    assert_eq!(draft.validate(), Err("Project title is required"));
    draft.title = "X".to_owned();
    draft.description = "Y".to_owned();
    assert_eq!(draft.validate(), Err("Category is required"));
    draft.category = PROJECT_CATEGORIES[0].to_owned();
    assert_eq!(draft.validate(), Ok(()));
}
