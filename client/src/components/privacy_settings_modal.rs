//! Modal editor for one profile section's visibility.

use leptos::prelude::*;

use crate::net::types::{Author, PrivacySection, Visibility};
use crate::state::auth::AuthState;
use crate::state::listing::matches_search;
use crate::state::privacy::{PrivacyDraft, candidate_users};

#[component]
pub fn PrivacySettingsModal(section: PrivacySection, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = RwSignal::new(auth.with_untracked(|a| PrivacyDraft::for_user(a.user.as_ref(), section)));
    let candidates = StoredValue::new(candidate_users());

    let lookup = move |id: &str| candidates.with_value(|c| c.iter().find(|a| a.id == id).cloned());

    let on_save = move |_| {
        let settings = draft.get_untracked().into_settings();
        auth.update(|a| a.update_privacy_settings(section, settings));
        on_close.run(());
    };

    let search_results = move || {
        let term = draft.with(|d| d.search.clone());
        if term.trim().is_empty() {
            return Vec::new();
        }
        candidates.with_value(|c| c.iter().filter(|a| matches_search(&term, &[a.name.as_str()])).cloned().collect::<Vec<_>>())
    };

    let person_row = move |id: String, person: Option<Author>, blocked: bool| {
        let label = person.as_ref().map_or_else(|| id.clone(), |p| p.name.clone());
        view! {
            <div class="privacy-modal__person">
                {person.map(|p| view! { <img class="avatar avatar--xs" src=p.avatar alt=p.name/> })}
                <span>{label}</span>
                <button
                    class="icon-button"
                    title="Remove"
                    on:click=move |_| {
                        draft.update(|d| if blocked { d.toggle_blocked(&id) } else { d.toggle_allowed(&id) });
                    }
                >
                    "✕"
                </button>
            </div>
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="cyber-card modal privacy-modal">
                <div class="modal__head">
                    <h2 class="cyber-heading">{format!("{} Privacy Settings", section.label())}</h2>
                    <button class="icon-button" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <div class="field">
                    <span class="field__label">{format!("Who can see your {}?", section.as_str())}</span>
                    {Visibility::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="privacy-modal__option"
                                    class:privacy-modal__option--active=move || {
                                        draft.with(|d| d.settings.visibility == option)
                                    }
                                    on:click=move |_| draft.update(|d| d.set_visibility(option))
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || draft.with(|d| d.settings.visibility == Visibility::Custom)>
                    <div class="field">
                        <span class="field__label">"Add specific users"</span>
                        <input
                            class="cyber-input"
                            type="text"
                            placeholder="Search users..."
                            prop:value=move || draft.with(|d| d.search.clone())
                            on:input=move |ev| draft.update(|d| d.search = event_target_value(&ev))
                        />
                        <div class="privacy-modal__results">
                            {move || {
                                search_results()
                                    .into_iter()
                                    .map(|person| {
                                        let allow_id = person.id.clone();
                                        let block_id = person.id.clone();
                                        let check_id = person.id.clone();
                                        view! {
                                            <div class="privacy-modal__person">
                                                <img class="avatar avatar--xs" src=person.avatar alt=person.name.clone()/>
                                                <span>{person.name.clone()}</span>
                                                <button
                                                    class="icon-button"
                                                    class:text-blue=move || draft.with(|d| d.is_allowed(&check_id))
                                                    title="Allow"
                                                    on:click=move |_| draft.update(|d| d.toggle_allowed(&allow_id))
                                                >
                                                    "+"
                                                </button>
                                                <button
                                                    class="icon-button icon-button--pink"
                                                    title="Block"
                                                    on:click=move |_| draft.update(|d| d.toggle_blocked(&block_id))
                                                >
                                                    "⦸"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>

                    <Show when=move || draft.with(|d| !d.settings.allowed_users.is_empty())>
                        <div class="field">
                            <span class="field__label">"Allowed Users"</span>
                            {move || {
                                draft
                                    .with(|d| d.settings.allowed_users.clone())
                                    .into_iter()
                                    .map(|id| {
                                        let person = lookup(&id);
                                        person_row(id, person, false)
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>

                    <Show when=move || draft.with(|d| !d.settings.blocked_users.is_empty())>
                        <div class="field">
                            <span class="field__label">"Blocked Users"</span>
                            {move || {
                                draft
                                    .with(|d| d.settings.blocked_users.clone())
                                    .into_iter()
                                    .map(|id| {
                                        let person = lookup(&id);
                                        person_row(id, person, true)
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>

                <div class="modal__actions">
                    <button class="cyber-button cyber-button--muted" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="cyber-button" on:click=on_save>
                        "Save Changes"
                    </button>
                </div>
            </div>
        </div>
    }
}
