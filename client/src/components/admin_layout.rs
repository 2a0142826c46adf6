//! Back-office shell: sidebar navigation around the routed admin page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/admin/*` route renders inside this layout, which installs the
//! admin guard. Pages only render once the session is known to be an admin.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::install_admin_redirect;

/// `(path, label, accent)` for each back-office section.
const MENU_ITEMS: [(&str, &str, &str); 8] = [
    ("/admin", "Dashboard", "blue"),
    ("/admin/users", "User Management", "pink"),
    ("/admin/projects", "Project Management", "purple"),
    ("/admin/posts", "Content Moderation", "yellow"),
    ("/admin/courses", "Course Management", "blue"),
    ("/admin/messages", "Message Management", "pink"),
    ("/admin/roles", "Role Management", "purple"),
    ("/admin/settings", "System Settings", "yellow"),
];

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    install_admin_redirect(auth, use_navigate());

    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_avatar = move || auth.with(|a| a.user.as_ref().map(|u| u.avatar.clone()).unwrap_or_default());

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <div class="admin-sidebar__header">
                    <h1 class="cyber-heading">"Admin Panel"</h1>
                </div>
                <div class="admin-sidebar__body">
                    <div class="cyber-card admin-sidebar__user">
                        <img class="avatar avatar--md" src=user_avatar alt=user_name/>
                        <div>
                            <div class="admin-sidebar__user-name">{user_name}</div>
                            <div class="muted muted--small">"Administrator"</div>
                        </div>
                    </div>
                    <nav class="admin-sidebar__nav">
                        {MENU_ITEMS
                            .into_iter()
                            .map(|(path, label, accent)| {
                                view! {
                                    <a
                                        href=path
                                        class=move || {
                                            if pathname.with(|p| p == path) {
                                                format!("admin-link admin-link--active admin-link--{accent}")
                                            } else {
                                                "admin-link".to_owned()
                                            }
                                        }
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
                <div class="admin-sidebar__footer">
                    <button class="cyber-button cyber-button--block" on:click=move |_| auth.update(AuthState::logout)>
                        "Logout"
                    </button>
                </div>
            </aside>

            <main class="admin-layout__content">
                <Show
                    when=move || auth.with(AuthState::is_admin)
                    fallback=|| view! { <p class="muted">"Checking access..."</p> }
                >
                    <Outlet/>
                </Show>
            </main>
        </div>
    }
}
