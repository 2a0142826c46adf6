//! Collapsible side navigation with a mobile overlay and bottom bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the main layout on every non-admin route. Reads the session
//! for the profile card and login/logout button, and the theme context for
//! the light/dark toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::theme::ThemeState;

/// `(path, label, short label, accent)` for each primary section.
const NAV_ITEMS: [(&str, &str, &str, &str); 4] = [
    ("/", "Home", "Home", "blue"),
    ("/forum", "Forum", "Forum", "pink"),
    ("/projects", "Projects", "Projects", "purple"),
    ("/resources", "Resources", "Learn", "yellow"),
];

fn link_class(base: &str, accent: &str, active: bool) -> String {
    if active {
        format!("{base} {base}--active {base}--{accent}")
    } else {
        base.to_owned()
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let pathname = use_location().pathname;

    let expanded = RwSignal::new(true);
    let mobile_open = RwSignal::new(false);

    let is_active = move |path: &str| pathname.with(|p| p == path);
    let signed_in = move || auth.with(AuthState::is_authenticated);
    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_avatar = move || auth.with(|a| a.user.as_ref().map(|u| u.avatar.clone()).unwrap_or_default());

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        mobile_open.set(false);
    };
    let on_toggle_theme = move |_| theme.update(ThemeState::toggle);
    let theme_label = move || if theme.with(|t| t.dark) { "☀ Light Mode" } else { "☾ Dark Mode" };

    let nav_links = move || {
        NAV_ITEMS
            .into_iter()
            .map(|(path, label, _, accent)| {
                view! {
                    <a
                        href=path
                        class=move || link_class("nav-link", accent, is_active(path))
                        on:click=move |_| mobile_open.set(false)
                    >
                        <span class="nav-link__dot"></span>
                        <Show when=move || expanded.get()>
                            <span class="nav-link__label">{label}</span>
                        </Show>
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" class:navbar--collapsed=move || !expanded.get()>
            <div class="navbar__header">
                <h1 class="cyber-heading">{move || if expanded.get() { "CYBER_NET" } else { "CN" }}</h1>
                <button class="cyber-button navbar__collapse" on:click=move |_| expanded.update(|e| *e = !*e)>
                    {move || if expanded.get() { "‹" } else { "›" }}
                </button>
            </div>

            <div class="navbar__links">{nav_links}</div>

            <div class="navbar__footer">
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <a href="/login" class="cyber-button navbar__auth">
                                {move || if expanded.get() { "Login" } else { "→" }}
                            </a>
                        }
                    }
                >
                    <a href="/profile" class="navbar__profile">
                        <img class="avatar avatar--sm" src=user_avatar alt=user_name/>
                        <Show when=move || expanded.get()>
                            <span class="navbar__profile-name">{user_name}</span>
                        </Show>
                    </a>
                    <Show when=move || auth.with(AuthState::is_admin)>
                        <a href="/admin" class="cyber-button navbar__auth">
                            {move || if expanded.get() { "Admin" } else { "⚙" }}
                        </a>
                    </Show>
                    <button class="cyber-button navbar__auth" on:click=on_logout>
                        {move || if expanded.get() { "Logout" } else { "←" }}
                    </button>
                </Show>
                <button class="cyber-button navbar__theme" on:click=on_toggle_theme>
                    {theme_label}
                </button>
            </div>
        </nav>

        <button class="cyber-button navbar__mobile-toggle" on:click=move |_| mobile_open.update(|o| *o = !*o)>
            {move || if mobile_open.get() { "✕" } else { "☰" }}
        </button>

        <Show when=move || mobile_open.get()>
            <div class="navbar-mobile">
                <h1 class="cyber-heading">"CYBER_NET"</h1>
                <div class="navbar-mobile__links">{nav_links}</div>
                <div class="navbar-mobile__footer">
                    <Show
                        when=signed_in
                        fallback=move || {
                            view! {
                                <a href="/login" class="cyber-button" on:click=move |_| mobile_open.set(false)>
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <a href="/profile" class="navbar__profile" on:click=move |_| mobile_open.set(false)>
                            <img class="avatar avatar--sm" src=user_avatar alt=user_name/>
                            <span class="navbar__profile-name">{user_name}</span>
                        </a>
                        <button class="cyber-button" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                    <button class="cyber-button" on:click=on_toggle_theme>
                        {theme_label}
                    </button>
                </div>
            </div>
        </Show>

        <nav class="navbar-bottom">
            {NAV_ITEMS
                .into_iter()
                .map(|(path, _, short, accent)| {
                    view! {
                        <a href=path class=move || link_class("navbar-bottom__link", accent, is_active(path))>
                            {short}
                        </a>
                    }
                })
                .collect_view()}
            <Show when=signed_in>
                <a
                    href="/profile"
                    class=move || link_class("navbar-bottom__link", "blue", is_active("/profile"))
                >
                    "Profile"
                </a>
            </Show>
        </nav>
    }
}
