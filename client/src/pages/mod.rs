//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Detail pages load their state from the `:id` segment
//! through `detail_state`.

pub mod admin;
pub mod create_project;
pub mod create_topic;
pub mod forum;
pub mod home;
pub mod login;
pub mod profile;
pub mod project_details;
pub mod projects;
pub mod register;
pub mod resource_detail;
pub mod resources;
pub mod topic_detail;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// The current `:id` route segment, empty when absent.
pub(crate) fn route_id() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()))
}

/// Page state loaded from the `:id` segment and reloaded when it changes.
/// `None` means the id names no record.
pub(crate) fn detail_state<T>(load: fn(&str) -> Option<T>) -> (Memo<String>, RwSignal<Option<T>>)
where
    T: Send + Sync + 'static,
{
    let id = route_id();
    let state = RwSignal::new(load(&id.get_untracked()));
    Effect::new(move |prev: Option<String>| {
        let current = id.get();
        if prev.is_some_and(|p| p != current) {
            state.set(load(&current));
        }
        current
    });
    (id, state)
}

/// Mutate loaded detail state; a no-op while nothing is loaded.
pub(crate) fn update_loaded<T>(state: RwSignal<Option<T>>, f: impl FnOnce(&mut T))
where
    T: Send + Sync + 'static,
{
    state.update(|s| {
        if let Some(s) = s {
            f(s);
        }
    });
}

/// Shown when a detail route names an unknown record.
#[component]
pub(crate) fn NotFound(what: &'static str, back: &'static str) -> impl IntoView {
    view! {
        <div class="cyber-card not-found">
            <h2 class="cyber-heading">{format!("{what} not found")}</h2>
            <a href=back class="cyber-button">
                "Go back"
            </a>
        </div>
    }
}
