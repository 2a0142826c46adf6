use std::sync::Arc;

use super::*;
use crate::mock::session;
use crate::util::storage::MemoryStorage;

fn signed_out() -> AuthState {
    AuthState::new(Arc::new(MemoryStorage::new()))
}

fn signed_in(user: crate::net::types::User) -> AuthState {
    let mut state = signed_out();
    state.sign_in(user);
    state
}

// =============================================================
// Session guard
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&signed_out()));
    assert_eq!(redirect_target(&signed_out(), false), Some("/login"));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::pending(Arc::new(MemoryStorage::new()));
    assert!(!should_redirect_unauth(&state));
    assert_eq!(redirect_target(&state, true), None);
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in(session::regular_user())));
}

// =============================================================
// Admin guard
// =============================================================

#[test]
fn admin_guard_sends_regular_users_home() {
    assert_eq!(redirect_target(&signed_in(session::regular_user()), true), Some("/"));
}

#[test]
fn admin_guard_admits_admins() {
    assert_eq!(redirect_target(&signed_in(session::admin_user()), true), None);
}

#[test]
fn admin_guard_sends_signed_out_to_login() {
    assert_eq!(redirect_target(&signed_out(), true), Some("/login"));
}
