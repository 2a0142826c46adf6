//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (navbar, admin sidebar), the floating messenger and the
//! small widgets shared by list pages. Components read and write shared
//! state through the Leptos context providers installed by `app::App`.

pub mod admin_layout;
pub mod messenger_popup;
pub mod navbar;
pub mod pagination;
pub mod privacy_settings_modal;
pub mod status_badge;
