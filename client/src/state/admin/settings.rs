//! System settings editor.
//!
//! The whole settings object is edited locally and sent in one
//! `SettingsApi::save_settings` call. The page shows the outcome for a few
//! seconds and then clears it.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::mock;
use crate::net::api::ApiError;

/// How long a save outcome stays on screen.
pub const STATUS_DISPLAY_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub site_name: String,
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub dark_mode: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplates {
    pub welcome: bool,
    pub verification: bool,
    pub password_reset: bool,
    pub notification: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
    pub provider: String,
    pub from_email: String,
    pub from_name: String,
    pub templates: EmailTemplates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub min_length: u8,
    pub require_numbers: bool,
    pub require_symbols: bool,
    pub require_uppercase: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    pub password_policy: PasswordPolicy,
    /// Minutes.
    pub session_timeout: u32,
    pub max_login_attempts: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestFrequency {
    Never,
    #[default]
    Daily,
    Weekly,
}

impl DigestFrequency {
    pub const ALL: [Self; 3] = [Self::Never, Self::Daily, Self::Weekly];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|d| d.as_str() == value).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub in_app: bool,
    pub desktop: bool,
    pub digest: DigestFrequency,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSettings {
    pub enabled: bool,
    pub message: String,
    pub scheduled_start: Option<OffsetDateTime>,
    pub scheduled_end: Option<OffsetDateTime>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    pub const ALL: [Self; 2] = [Self::TwelveHour, Self::TwentyFourHour];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwelveHour => "12h",
            Self::TwentyFourHour => "24h",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|t| t.as_str() == value).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationSettings {
    pub default_language: String,
    pub available_languages: Vec<String>,
    pub date_format: String,
    pub time_format: TimeFormat,
    pub timezone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySettings {
    pub terms_last_updated: Date,
    pub privacy_policy_last_updated: Date,
    pub cookie_consent: bool,
    /// Days.
    pub data_retention: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub branding: Branding,
    pub email: EmailSettings,
    pub security: SecuritySettings,
    pub notifications: NotificationSettings,
    pub maintenance: MaintenanceSettings,
    pub localization: LocalizationSettings,
    pub privacy: PolicySettings,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Branding,
    Email,
    Security,
    Notifications,
    Maintenance,
    Localization,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [Self; 7] = [
        Self::Branding,
        Self::Email,
        Self::Security,
        Self::Notifications,
        Self::Maintenance,
        Self::Localization,
        Self::Privacy,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Branding => "Branding",
            Self::Email => "Email",
            Self::Security => "Security",
            Self::Notifications => "Notifications",
            Self::Maintenance => "Maintenance",
            Self::Localization => "Localization",
            Self::Privacy => "Privacy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveStatus {
    Success,
    Error,
}

impl SaveStatus {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "Settings saved successfully",
            Self::Error => "Error saving settings",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsEditor {
    pub settings: SystemSettings,
    pub tab: SettingsTab,
    pub saving: bool,
    pub status: Option<SaveStatus>,
}

impl Default for SettingsEditor {
    fn default() -> Self {
        Self { settings: mock::admin::system_settings(), tab: SettingsTab::default(), saving: false, status: None }
    }
}

impl SettingsEditor {
    /// Mark a save as in flight and hand back the snapshot to send.
    /// Returns `None` while a previous save is still running.
    pub fn begin_save(&mut self) -> Option<SystemSettings> {
        if self.saving {
            return None;
        }
        self.saving = true;
        self.status = None;
        Some(self.settings.clone())
    }

    pub fn finish_save(&mut self, result: Result<(), ApiError>) {
        self.saving = false;
        self.status = Some(match result {
            Ok(()) => SaveStatus::Success,
            Err(err) => {
                log::error!("saving settings failed: {err}");
                SaveStatus::Error
            }
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn toggle_language(&mut self, code: &str) {
        let languages = &mut self.settings.localization.available_languages;
        crate::state::listing::toggle_selection(languages, code);
    }
}

