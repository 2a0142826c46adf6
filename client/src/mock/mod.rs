//! Literal mock data standing in for a backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every store seeds itself from these constructors when it is created and
//! mutates its own copy afterwards. Nothing here is shared mutable state, so a
//! page reload always starts from the same fixtures.

pub mod admin;
pub mod catalog;
pub mod profile;
pub mod session;

/// Unsplash avatar used for people without a dedicated picture.
pub(crate) const AVATAR_SARAH: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=50&h=50&fit=crop";
pub(crate) const AVATAR_JOHN: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=50&h=50&fit=crop";
pub(crate) const AVATAR_ALEX: &str =
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=50&h=50&fit=crop";
pub(crate) const AVATAR_ADMIN: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100&h=100&fit=crop";

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
