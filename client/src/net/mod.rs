//! Remote-call boundary and shared DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the call traits and their mock implementation; `types`
//! defines the records that cross that boundary and the persisted session.

pub mod api;
pub mod types;
