//! Route guards shared by page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session restore runs after hydration, so guards stay quiet while
//! `AuthState::loading` is set and only redirect once the outcome is known.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where a guarded route should send the current session, if anywhere.
///
/// Signed-out visitors go to `/login`. With `require_admin`, signed-in
/// non-admins go to `/`.
#[must_use]
pub fn redirect_target(state: &AuthState, require_admin: bool) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if !state.is_authenticated() {
        return Some("/login");
    }
    (require_admin && !state.is_admin()).then_some("/")
}

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    redirect_target(state, false).is_some()
}

fn install_redirect<F>(auth: RwSignal<AuthState>, navigate: F, require_admin: bool)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.with(|state| redirect_target(state, require_admin)) {
            log::debug!("guard redirect to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, false);
}

/// Like `install_unauth_redirect`, and also send non-admins home.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, true);
}
