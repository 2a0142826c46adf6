use super::*;
use crate::mock::session;
use crate::net::types::{PrivacySettings, Visibility};

// =============================================================
// Tab visibility
// =============================================================

#[test]
fn overview_and_achievements_are_never_gated() {
    let mut owner = session::regular_user();
    owner.privacy.projects = PrivacySettings::with_visibility(Visibility::Private);
    assert!(ProfileTab::Overview.visible_to(None, &owner));
    assert!(ProfileTab::Achievements.visible_to(None, &owner));
    assert!(!ProfileTab::Projects.visible_to(None, &owner));
    assert!(ProfileTab::Projects.visible_to(Some("user1"), &owner));
}

#[test]
fn select_refuses_hidden_tab() {
    let mut owner = session::regular_user();
    owner.privacy.discussions = PrivacySettings::with_visibility(Visibility::Private);
    let mut dashboard = ProfileDashboard::default();
    assert!(!dashboard.select(ProfileTab::Discussions, Some("stranger"), &owner));
    assert_eq!(dashboard.tab, ProfileTab::Overview);
    assert!(dashboard.select(ProfileTab::Projects, Some("stranger"), &owner));
    assert_eq!(dashboard.tab, ProfileTab::Projects);
}

// =============================================================
// Achievements
// =============================================================

#[test]
fn achievement_percent_is_capped() {
    let achievements = mock::profile::achievements();
    assert_eq!(achievements[0].percent(), 70);
    assert_eq!(achievements[2].percent(), 100);
}
