//! Registration page. The mock service signs the new account straight in.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use super::login::validate_register_input;
#[cfg(feature = "hydrate")]
use super::login::AFTER_AUTH_PATH;
#[cfg(feature = "hydrate")]
use crate::net::api::{AuthApi, MockApi};
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&username.get(), &email.get(), &password.get()) {
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
                match MockApi.register(request).await {
                    Ok(user) => {
                        auth.update(|a| a.sign_in(user));
                        navigate(AFTER_AUTH_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("registration failed: {e}");
                        info.set(format!("Registration failed: {e}"));
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
                <h2 class="cyber-heading auth-page__title">"Create Access Terminal"</h2>
                <p class="muted auth-page__subtitle">"Initialize your connection to the network"</p>
                <form class="cyber-card auth-form" on:submit=on_submit>
                    <input
                        class="cyber-input"
                        type="text"
                        required
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                        autocomplete="new-password"
                        required
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="cyber-button cyber-button--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Initializing..." } else { "Initialize Connection →" }}
                    </button>
                    <Show when=move || !info.get().is_empty()>
                        <p class="form-message">{move || info.get()}</p>
                    </Show>
                    <p class="auth-form__switch">
                        <span class="muted">"Already connected? "</span>
                        <a href="/login">"Access terminal"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
