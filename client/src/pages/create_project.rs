//! New-project form: cover, details, tags, links, team, milestones and a
//! Markdown README with live preview.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::projects::{MilestoneField, PROJECT_CATEGORIES, ProjectDraft, TEAM_ROLES, render_markdown};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let draft = RwSignal::new(ProjectDraft::default());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(ProjectDraft::validate) {
            Ok(()) => {
                draft.with_untracked(|d| {
                    log::info!("initialized project \"{}\" with {} team invites", d.title.trim(), d.team.len());
                });
                navigate("/projects", NavigateOptions::default());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let milestones = move || {
        let count = draft.with(|d| d.milestones.len());
        (0..count)
            .map(|i| {
                let value = move |field: MilestoneField| {
                    draft.with(|d| {
                        d.milestones.get(i).map_or_else(String::new, |m| match field {
                            MilestoneField::Title => m.title.clone(),
                            MilestoneField::Date => m.date.clone(),
                            MilestoneField::Description => m.description.clone(),
                        })
                    })
                };
                view! {
                    <div class="cyber-card form-row">
                        <input
                            class="cyber-input"
                            type="text"
                            placeholder="Milestone title"
                            prop:value=move || value(MilestoneField::Title)
                            on:input=move |ev| {
                                draft.update(|d| d.update_milestone(i, MilestoneField::Title, event_target_value(&ev)))
                            }
                        />
                        <input
                            class="cyber-input"
                            type="date"
                            prop:value=move || value(MilestoneField::Date)
                            on:input=move |ev| {
                                draft.update(|d| d.update_milestone(i, MilestoneField::Date, event_target_value(&ev)))
                            }
                        />
                        <textarea
                            class="cyber-input"
                            placeholder="Milestone description"
                            prop:value=move || value(MilestoneField::Description)
                            on:input=move |ev| {
                                draft
                                    .update(|d| {
                                        d.update_milestone(i, MilestoneField::Description, event_target_value(&ev))
                                    })
                            }
                        ></textarea>
                        <button type="button" class="icon-button" on:click=move |_| draft.update(|d| d.remove_milestone(i))>
                            "✕"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    let team = move || {
        let count = draft.with(|d| d.team.len());
        (0..count)
            .map(|i| {
                view! {
                    <div class="form-row">
                        <input
                            class="cyber-input"
                            type="email"
                            placeholder="team@member.com"
                            prop:value=move || draft.with(|d| d.team.get(i).map(|m| m.email.clone()).unwrap_or_default())
                            on:input=move |ev| draft.update(|d| d.update_team_email(i, event_target_value(&ev)))
                        />
                        <select
                            class="cyber-input"
                            on:change=move |ev| draft.update(|d| d.update_team_role(i, event_target_value(&ev)))
                        >
                            {TEAM_ROLES
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <option
                                            value=role
                                            selected=move || draft.with(|d| d.team.get(i).is_some_and(|m| m.role == role))
                                        >
                                            {role}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <button type="button" class="icon-button" on:click=move |_| draft.update(|d| d.remove_team_member(i))>
                            "✕"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="form-page">
            <div class="cyber-card form-card">
                <h1 class="cyber-heading">"Initialize New Project"</h1>
                <form on:submit=on_submit>
                    <div class="cover-picker" class:cover-picker--empty=move || draft.with(|d| d.cover_image.is_empty())>
                        <Show when=move || draft.with(|d| !d.cover_image.is_empty())>
                            <img src=move || draft.with(|d| d.cover_image.clone()) alt="Cover"/>
                        </Show>
                        <input
                            class="cyber-input"
                            type="url"
                            placeholder="Cover image URL"
                            prop:value=move || draft.with(|d| d.cover_image.clone())
                            on:input=move |ev| draft.update(|d| d.cover_image = event_target_value(&ev))
                        />
                    </div>

                    <label class="field">
                        <span class="field__label">"Project Title"</span>
                        <input
                            class="cyber-input"
                            type="text"
                            required
                            placeholder="Enter project title"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Description"</span>
                        <textarea
                            class="cyber-input"
                            required
                            placeholder="Describe your project"
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
                            {PROJECT_CATEGORIES
                                .into_iter()
                                .map(|c| view! { <option value=c selected=move || draft.with(|d| d.category == c)>{c}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="field">
                        <span class="field__label">"Tags"</span>
                        <div class="tag-list">
                            {move || {
                                draft
                                    .with(|d| d.tags.clone())
                                    .into_iter()
                                    .map(|tag| {
                                        let remove = tag.clone();
                                        view! {
                                            <span class="tag tag--blue">
                                                {tag}
                                                <button
                                                    type="button"
                                                    class="tag__remove"
                                                    on:click=move |_| draft.update(|d| d.remove_tag(&remove))
                                                >
                                                    "✕"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <input
                            class="cyber-input"
                            type="text"
                            placeholder="Add tags (press Enter)"
                            prop:value=move || draft.with(|d| d.tag_input.clone())
                            on:input=move |ev| draft.update(|d| d.tag_input = event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    draft.update(|d| {
                                        d.commit_tag();
                                    });
                                }
                            }
                        />
                    </div>

                    <h2 class="cyber-heading">"Project Links"</h2>
                    <div class="form-grid">
                        <label class="field">
                            <span class="field__label">"GitHub Repository"</span>
                            <input
                                class="cyber-input"
                                type="url"
                                placeholder="https://github.com/username/repo"
                                prop:value=move || draft.with(|d| d.github.clone())
                                on:input=move |ev| draft.update(|d| d.github = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Website"</span>
                            <input
                                class="cyber-input"
                                type="url"
                                placeholder="https://yourproject.com"
                                prop:value=move || draft.with(|d| d.website.clone())
                                on:input=move |ev| draft.update(|d| d.website = event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="form-section">
                        <div class="form-section__head">
                            <h2 class="cyber-heading">"Team Members"</h2>
                            <button type="button" class="cyber-button" on:click=move |_| draft.update(ProjectDraft::add_team_member)>
                                "+ Add Member"
                            </button>
                        </div>
                        {team}
                    </div>

                    <div class="form-section">
                        <div class="form-section__head">
                            <h2 class="cyber-heading">"Milestones"</h2>
                            <button type="button" class="cyber-button" on:click=move |_| draft.update(ProjectDraft::add_milestone)>
                                "+ Add Milestone"
                            </button>
                        </div>
                        {milestones}
                    </div>

                    <div class="form-section">
                        <h2 class="cyber-heading">"README"</h2>
                        <div class="form-grid">
                            <textarea
                                class="cyber-input readme-editor"
                                placeholder="# Project Name\n\nDescribe your project in Markdown..."
                                prop:value=move || draft.with(|d| d.readme.clone())
                                on:input=move |ev| draft.update(|d| d.readme = event_target_value(&ev))
                            ></textarea>
                            <div class="prose readme-preview" inner_html=move || draft.with(|d| render_markdown(&d.readme))></div>
                        </div>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="form-card__actions">
                        <a href="/projects" class="cyber-button cyber-button--muted">
                            "Cancel"
                        </a>
                        <button type="submit" class="cyber-button">
                            "Create Project"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
