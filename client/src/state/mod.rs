//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `forum`, `admin`, etc.) so individual
//! pages can depend on small focused models. Only `auth`, `theme` and
//! `messenger` live in app-wide contexts; every other store is created by the
//! page that renders it.

pub mod admin;
pub mod auth;
pub mod forum;
pub mod listing;
pub mod messenger;
pub mod moderation;
pub mod privacy;
pub mod profile;
pub mod projects;
pub mod resources;
pub mod theme;
