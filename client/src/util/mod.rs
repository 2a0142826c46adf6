//! Helpers shared by pages and state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access (local storage, the color-scheme media query) sits behind
//! these modules so state types can be tested without a DOM.

pub mod auth;
pub mod dark_mode;
pub mod format;
pub mod storage;
