//! New-topic form. Publishing is a logged no-op that returns to the forum.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::mock::catalog::{FORUM_CATEGORIES, FORUM_TAGS, topics};
use crate::state::auth::AuthState;
use crate::state::forum::TopicDraft;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CreateTopicPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let draft = RwSignal::new(TopicDraft::default());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let author = auth.with_untracked(|a| a.user_id().unwrap_or_default().to_owned());
        match draft.with_untracked(|d| d.validate(&author, topics().len() + 1)) {
            Ok(topic) => {
                log::info!("published topic {} \"{}\"", topic.id, topic.title);
                navigate("/forum", NavigateOptions::default());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <div class="form-page">
            <h1 class="cyber-heading">"Create New Topic"</h1>
            <form class="cyber-card form-card" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Title"</span>
                    <input
                        class="cyber-input"
                        type="text"
                        required
                        placeholder="Enter topic title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="cyber-input"
                        required
                        placeholder="Describe your topic..."
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        class="cyber-input"
                        required
                        on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {FORUM_CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c selected=move || draft.with(|d| d.category == c)>{c}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="field">
                    <span class="field__label">"Tags"</span>
                    <div class="tag-list">
                        {FORUM_TAGS
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <button
                                        type="button"
                                        class="chip"
                                        class:chip--active=move || draft.with(|d| d.tags.iter().any(|t| t == tag))
                                        on:click=move |_| draft.update(|d| d.toggle_tag(tag))
                                    >
                                        {tag}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="form-card__actions">
                    <a href="/forum" class="cyber-button cyber-button--muted">
                        "Cancel"
                    </a>
                    <button type="submit" class="cyber-button">
                        "Create Topic"
                    </button>
                </div>
            </form>
        </div>
    }
}
