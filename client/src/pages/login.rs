//! Login page: email + password against the mock account service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api::{LoginRequest, RegisterRequest};
#[cfg(feature = "hydrate")]
use crate::net::api::{AuthApi, MockApi};
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

/// Where a successful login or registration lands.
pub const AFTER_AUTH_PATH: &str = "/forum";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Trim username and email and require all three fields.
pub(crate) fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Username, email and password are all required.");
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match MockApi.login(request).await {
                    Ok(user) => {
                        auth.update(|a| a.sign_in(user));
                        navigate(AFTER_AUTH_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("login failed: {e}");
                        info.set(format!("Login failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__inner">
                <h2 class="cyber-heading auth-page__title">"Access Terminal"</h2>
                <p class="muted auth-page__subtitle">"Enter your credentials to connect"</p>
                <form class="cyber-card auth-form" on:submit=on_submit>
                    <input
                        class="cyber-input"
                        type="email"
                        autocomplete="email"
                        required
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="cyber-input"
                        type="password"
                        autocomplete="current-password"
                        required
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="cyber-button cyber-button--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connecting..." } else { "Connect" }}
                    </button>
                    <Show when=move || !info.get().is_empty()>
                        <p class="form-message">{move || info.get()}</p>
                    </Show>
                    <p class="auth-form__switch">
                        <span class="muted">"No terminal access? "</span>
                        <a href="/register">"Initialize connection"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
