//! Back-office stores behind the `/admin` routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one store seeded from `mock::admin`. A store holds its rows,
//! the current search/filter inputs and the selected row for the detail
//! modal. Mutations replace rows in place; nothing is sent anywhere except
//! the settings save, which goes through `SettingsApi`.

pub mod content;
pub mod courses;
pub mod dashboard;
pub mod messages;
pub mod projects;
pub mod roles;
pub mod settings;
pub mod users;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::str::FromStr;

use time::Date;

use super::moderation::ReportStatus;
use crate::net::types::Author;

/// `<select>` value meaning "no filter".
pub const ALL_FILTER: &str = "all";

/// Parse a filter `<select>` value. `"all"` and unknown values clear the filter.
#[must_use]
pub fn parse_filter<S: FromStr>(value: &str) -> Option<S> {
    if value == ALL_FILTER {
        return None;
    }
    value.parse().ok()
}

/// `<select>` value for an optional filter.
#[must_use]
pub fn filter_value<S: std::fmt::Display>(filter: Option<&S>) -> String {
    filter.map_or_else(|| ALL_FILTER.to_owned(), ToString::to_string)
}

/// Split a comma-separated form field into trimmed, non-empty entries.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

/// Which record a create/edit modal is working on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Create,
    Edit(String),
}

impl EditTarget {
    /// Id to pass to a store's `save`.
    #[must_use]
    pub fn existing(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Abuse report attached to a project or a piece of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub id: String,
    pub reason: String,
    pub description: String,
    pub reported_by: Author,
    pub submitted_at: Date,
    pub status: ReportStatus,
}

/// External links shown on managed projects and courses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Links {
    pub github: Option<String>,
    pub website: Option<String>,
    pub documentation: Option<String>,
}

impl Links {
    /// Build from form fields, dropping blank entries.
    #[must_use]
    pub fn from_fields(github: &str, website: &str, documentation: &str) -> Self {
        let keep = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        };
        Self { github: keep(github), website: keep(website), documentation: keep(documentation) }
    }
}

/// Distinct values in first-seen order, for category `<select>` options.
#[must_use]
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_owned());
        }
    }
    out
}

/// Next numeric id: one past the largest id in use, so ids stay unique after
/// deletes. Non-numeric ids are ignored.
#[must_use]
pub fn next_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let max = ids.into_iter().filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}
