use super::*;
use crate::mock::session;

fn owner_with(settings: PrivacySettings) -> User {
    let mut owner = session::regular_user();
    owner.connections = vec!["friend".to_owned()];
    owner.privacy.set(PrivacySection::Projects, settings);
    owner
}

fn custom(allowed: &[&str], blocked: &[&str]) -> PrivacySettings {
    PrivacySettings {
        visibility: Visibility::Custom,
        allowed_users: allowed.iter().map(|s| (*s).to_owned()).collect(),
        blocked_users: blocked.iter().map(|s| (*s).to_owned()).collect(),
        message_settings: None,
    }
}

// =============================================================
// can_view
// =============================================================

#[test]
fn owner_always_sees_own_content() {
    for visibility in Visibility::ALL {
        let owner = owner_with(PrivacySettings::with_visibility(visibility));
        assert!(can_view(Some("user1"), &owner, owner.privacy.get(PrivacySection::Projects)), "{visibility:?}");
    }
    let owner = owner_with(custom(&[], &["user1"]));
    assert!(section_visible(Some("user1"), &owner, PrivacySection::Projects));
}

#[test]
fn public_is_visible_to_everyone() {
    let owner = owner_with(PrivacySettings::with_visibility(Visibility::Public));
    assert!(section_visible(None, &owner, PrivacySection::Projects));
    assert!(section_visible(Some("stranger"), &owner, PrivacySection::Projects));
}

#[test]
fn private_hides_from_everyone_else() {
    let owner = owner_with(PrivacySettings::with_visibility(Visibility::Private));
    assert!(!section_visible(None, &owner, PrivacySection::Projects));
    assert!(!section_visible(Some("friend"), &owner, PrivacySection::Projects));
}

#[test]
fn friends_requires_connection() {
    let owner = owner_with(PrivacySettings::with_visibility(Visibility::Friends));
    assert!(section_visible(Some("friend"), &owner, PrivacySection::Projects));
    assert!(!section_visible(Some("stranger"), &owner, PrivacySection::Projects));
    assert!(!section_visible(None, &owner, PrivacySection::Projects));
}

#[test]
fn custom_uses_allow_list() {
    let owner = owner_with(custom(&["alice"], &[]));
    assert!(section_visible(Some("alice"), &owner, PrivacySection::Projects));
    assert!(!section_visible(Some("friend"), &owner, PrivacySection::Projects));
    assert!(!section_visible(None, &owner, PrivacySection::Projects));
}

#[test]
fn custom_block_list_wins_over_allow_list() {
    let owner = owner_with(custom(&["alice"], &["alice"]));
    assert!(!section_visible(Some("alice"), &owner, PrivacySection::Projects));
}

#[test]
fn sections_are_independent() {
    let owner = owner_with(PrivacySettings::with_visibility(Visibility::Private));
    assert!(section_visible(None, &owner, PrivacySection::Discussions));
}

// =============================================================
// PrivacyDraft
// =============================================================

#[test]
fn draft_starts_from_user_settings() {
    let owner = owner_with(PrivacySettings::with_visibility(Visibility::Friends));
    let draft = PrivacyDraft::for_user(Some(&owner), PrivacySection::Projects);
    assert_eq!(draft.settings.visibility, Visibility::Friends);
    let anon = PrivacyDraft::for_user(None, PrivacySection::Projects);
    assert_eq!(anon.settings.visibility, Visibility::Public);
}

#[test]
fn allow_and_block_are_mutually_exclusive() {
    let mut draft = PrivacyDraft::for_user(None, PrivacySection::Followers);
    draft.set_visibility(Visibility::Custom);
    draft.toggle_allowed("2");
    assert!(draft.is_allowed("2"));
    draft.toggle_blocked("2");
    assert!(draft.is_blocked("2"));
    assert!(!draft.is_allowed("2"));
    draft.toggle_allowed("2");
    assert!(!draft.is_blocked("2"));

    let settings = draft.into_settings();
    assert_eq!(settings.visibility, Visibility::Custom);
    assert_eq!(settings.allowed_users, vec!["2".to_owned()]);
    assert!(settings.blocked_users.is_empty());
}
