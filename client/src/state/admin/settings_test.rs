use futures::executor::block_on;

use super::*;
use crate::net::api::{MockApi, SettingsApi};

// =============================================================
// Save lifecycle
// =============================================================

#[test]
fn save_through_mock_api_reports_success() {
    let mut editor = SettingsEditor::default();
    editor.settings.branding.site_name = "NEO_NET".to_owned();

    let snapshot = editor.begin_save().unwrap();
    assert!(editor.saving);
    assert_eq!(snapshot.branding.site_name, "NEO_NET");

    editor.finish_save(block_on(MockApi.save_settings(&snapshot)));
    assert!(!editor.saving);
    assert_eq!(editor.status, Some(SaveStatus::Success));
}

#[test]
fn second_save_while_in_flight_is_refused() {
    let mut editor = SettingsEditor::default();
    assert!(editor.begin_save().is_some());
    assert!(editor.begin_save().is_none());
}

#[test]
fn failed_save_shows_error_until_cleared() {
    let mut editor = SettingsEditor::default();
    editor.begin_save();
    editor.finish_save(Err(ApiError::Unavailable("timeout".to_owned())));
    assert_eq!(editor.status, Some(SaveStatus::Error));
    assert_eq!(SaveStatus::Error.message(), "Error saving settings");
    editor.clear_status();
    assert_eq!(editor.status, None);
}

// =============================================================
// Fields
// =============================================================

#[test]
fn defaults_match_fixture() {
    let editor = SettingsEditor::default();
    assert_eq!(editor.tab, SettingsTab::Branding);
    assert_eq!(editor.settings.security.password_policy.min_length, 12);
    assert_eq!(editor.settings.notifications.digest, DigestFrequency::Daily);
    assert_eq!(editor.settings.localization.time_format, TimeFormat::TwentyFourHour);
}

#[test]
fn toggle_language_adds_and_removes() {
    let mut editor = SettingsEditor::default();
    editor.toggle_language("ja");
    assert!(!editor.settings.localization.available_languages.contains(&"ja".to_owned()));
    editor.toggle_language("pt");
    assert_eq!(editor.settings.localization.available_languages.last().map(String::as_str), Some("pt"));
}

#[test]
fn settings_serialize_camel_case() {
    let json = serde_json::to_value(SettingsEditor::default().settings).unwrap();
    assert_eq!(json["branding"]["siteName"], "CYBER_NET");
    assert_eq!(json["localization"]["timeFormat"], "24h");
    assert_eq!(json["notifications"]["digest"], "daily");
}

#[test]
fn select_values_parse_with_fallback() {
    assert_eq!(DigestFrequency::parse("weekly"), DigestFrequency::Weekly);
    assert_eq!(DigestFrequency::parse("hourly"), DigestFrequency::Daily);
    assert_eq!(TimeFormat::parse("12h"), TimeFormat::TwelveHour);
}
