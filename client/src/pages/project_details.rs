//! Project workspace: progress, stats, README, team, milestones and
//! discussions, plus the owner's edit and invite modals.

use leptos::prelude::*;

use super::{NotFound, detail_state, update_loaded};
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::projects::{Discussion, ProjectDetail, ProjectDetailState, ProjectEdit, render_markdown};
use crate::util::format;

fn stat_tile(value: u32, label: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="cyber-card stat-tile">
            <div class=format!("stat-tile__value text-{accent}")>{value}</div>
            <div class="muted">{label}</div>
        </div>
    }
}

fn discussion_body(d: &Discussion) -> impl IntoView + use<> {
    view! {
        <img class="avatar avatar--md" src=d.author.avatar.clone() alt=d.author.name.clone()/>
        <div class="discussion__body">
            <div class="discussion__head">
                <span class="discussion__author">{d.author.name.clone()}</span>
                <span class="muted muted--small">{format::date_time(d.timestamp)}</span>
                <span class="cyber-button cyber-button--small" class:text-pink=d.liked>
                    {format!("👍 {}", d.likes)}
                </span>
            </div>
            <p>{d.content.clone()}</p>
        </div>
    }
}

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let (_, workspace) = detail_state(ProjectDetailState::load);
    let edit = RwSignal::new(None::<ProjectEdit>);
    let show_invite = RwSignal::new(false);

    let project = Memo::new(move |_| workspace.with(|w| w.as_ref().map(|w| w.project.clone())));
    let with_user = move |f: &dyn Fn(&ProjectDetailState, Option<&User>) -> bool| {
        workspace.with(|w| w.as_ref().is_some_and(|w| auth.with(|a| f(w, a.user.as_ref()))))
    };
    let is_owner = move || with_user(&|w, u| w.is_owner(u));
    let is_member = move || with_user(&|w, u| w.is_member(u));

    // Run a mutation that needs the signed-in user.
    let act = move |f: fn(&mut ProjectDetailState, Option<&User>) -> bool| {
        let user = auth.with_untracked(|a| a.user.clone());
        update_loaded(workspace, |w| {
            f(w, user.as_ref());
        });
    };

    let header = move || {
        project.get().map(|p: ProjectDetail| {
            view! {
                <div class="project-hero">
                    <img class="project-hero__image" src=p.image alt=p.title.clone()/>
                    <div class="project-hero__overlay">
                        <div>
                            <h1 class="cyber-heading">{p.title}</h1>
                            <p>{p.description}</p>
                        </div>
                        <Show when=is_owner>
                            <button
                                class="cyber-button"
                                on:click=move |_| {
                                    edit.set(workspace.with_untracked(|w| w.as_ref().map(|w| ProjectEdit::from_project(&w.project))))
                                }
                            >
                                "✎ Edit Project"
                            </button>
                        </Show>
                    </div>
                </div>
            }
        })
    };

    let main_column = move || {
        project.get().map(|p| {
            let progress = p.progress;
            view! {
                <div class="cyber-card">
                    <div class="section-head">
                        <h2 class="cyber-heading">"Project Progress"</h2>
                        <span class="text-blue">{format!("{progress}%")}</span>
                    </div>
                    <Show
                        when=is_owner
                        fallback=move || {
                            view! {
                                <div class="progress">
                                    <div class="progress__bar" style=format!("width: {progress}%")></div>
                                </div>
                            }
                        }
                    >
                        <input
                            class="progress-range"
                            type="range"
                            min="0"
                            max="100"
                            prop:value=progress.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse::<i32>().unwrap_or(i32::from(progress));
                                let user = auth.with_untracked(|a| a.user.clone());
                                update_loaded(workspace, |w| {
                                    w.set_progress(user.as_ref(), value);
                                });
                            }
                        />
                    </Show>
                </div>
                <div class="stat-grid">
                    {stat_tile(p.stats.stars, "Stars", "blue")}
                    {stat_tile(p.stats.forks, "Forks", "pink")}
                    {stat_tile(p.stats.issues, "Issues", "purple")}
                    {stat_tile(p.stats.contributors, "Contributors", "yellow")}
                </div>
                <div class="cyber-card">
                    <h2 class="cyber-heading">"README.md"</h2>
                    <div class="prose" inner_html=render_markdown(&p.readme)></div>
                </div>
            }
        })
    };

    let sidebar = move || {
        project.get().map(|p| {
            view! {
                <div class="cyber-card">
                    <h3 class="cyber-heading">"Links"</h3>
                    <a class="link-row" href=p.links.github.clone() target="_blank" rel="noopener">
                        "GitHub Repository"
                    </a>
                    <a class="link-row" href=p.links.website.clone() target="_blank" rel="noopener">
                        "Project Website"
                    </a>
                </div>
                <div class="cyber-card">
                    <div class="section-head">
                        <h3 class="cyber-heading">"Members"</h3>
                        <Show when=is_owner>
                            <button class="cyber-button cyber-button--small" on:click=move |_| show_invite.set(true)>
                                "+ Invite"
                            </button>
                        </Show>
                    </div>
                    {p
                        .members
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class="member-row">
                                    <img class="avatar avatar--sm" src=m.avatar alt=m.name.clone()/>
                                    <div>
                                        <div class="member-row__name">{m.name}</div>
                                        <div class="muted muted--small">{m.role}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                    <Show when=move || auth.with(AuthState::is_authenticated) && !is_owner()>
                        <Show
                            when=is_member
                            fallback=move || {
                                view! {
                                    <button class="cyber-button cyber-button--block" on:click=move |_| act(ProjectDetailState::join)>
                                        "Join Project"
                                    </button>
                                }
                            }
                        >
                            <button class="cyber-button cyber-button--block cyber-button--muted" on:click=move |_| act(ProjectDetailState::leave)>
                                "Leave Project"
                            </button>
                        </Show>
                    </Show>
                </div>
                <div class="cyber-card">
                    <h3 class="cyber-heading">"Tags & Category"</h3>
                    <span class="tag tag--purple">{p.category}</span>
                    <div class="tag-list">
                        {p.tags.into_iter().map(|t| view! { <span class="tag tag--blue">{t}</span> }).collect_view()}
                    </div>
                </div>
                <div class="cyber-card">
                    <h3 class="cyber-heading">"Milestones"</h3>
                    {p
                        .milestones
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class="milestone" class:milestone--done=m.completed>
                                    <span class="milestone__mark">{if m.completed { "✓" } else { "○" }}</span>
                                    <div>
                                        <div>{m.title}</div>
                                        <div class="muted muted--small">{format::date(m.date)}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    };

    let discussions = move || {
        let expanded = workspace.with(|w| w.as_ref().map(|w| w.expanded_comments.clone()).unwrap_or_default());
        project
            .get()
            .map(|p| p.discussions)
            .unwrap_or_default()
            .into_iter()
            .map(|d| {
                let open = expanded.contains(&d.id);
                let toggle_id = d.id.clone();
                let reply_count = d.replies.len();
                view! {
                    <div class="cyber-card discussion">
                        {discussion_body(&d)}
                        <Show when=move || { reply_count > 0 }>
                            <button
                                class="link-button"
                                on:click={
                                    let toggle_id = toggle_id.clone();
                                    move |_| update_loaded(workspace, |w| w.toggle_comment_expansion(&toggle_id))
                                }
                            >
                                {if open { "Hide Replies".to_owned() } else { format!("Show Replies ({reply_count})") }}
                            </button>
                        </Show>
                        {open
                            .then(|| {
                                view! {
                                    <div class="discussion__replies">
                                        {d
                                            .replies
                                            .iter()
                                            .map(|r| view! { <div class="discussion">{discussion_body(r)}</div> })
                                            .collect_view()}
                                    </div>
                                }
                            })}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || project.with(Option::is_some) fallback=|| view! { <NotFound what="Project" back="/projects"/> }>
            <div class="project-page">
                {header}
                <div class="project-page__grid">
                    <div class="project-page__main">{main_column}</div>
                    <div class="project-page__side">{sidebar}</div>
                </div>

                <section class="discussions">
                    <h2 class="cyber-heading">"Discussions"</h2>
                    <Show when=is_member>
                        <form
                            class="cyber-card"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                act(ProjectDetailState::add_comment);
                            }
                        >
                            <textarea
                                class="cyber-input"
                                placeholder="Start a new discussion..."
                                prop:value=move || workspace.with(|w| w.as_ref().map(|w| w.comment_draft.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    update_loaded(workspace, |w| w.comment_draft = value);
                                }
                            ></textarea>
                            <button
                                type="submit"
                                class="cyber-button"
                                disabled=move || workspace.with(|w| w.as_ref().is_none_or(|w| w.comment_draft.trim().is_empty()))
                            >
                                "Post Discussion"
                            </button>
                        </form>
                    </Show>
                    {discussions}
                </section>
            </div>

            <Show when=move || edit.with(Option::is_some)>
                <EditProjectModal edit=edit workspace=workspace/>
            </Show>

            <Show when=move || show_invite.get()>
                <div class="modal-backdrop">
                    <div class="cyber-card modal">
                        <h2 class="cyber-heading">"Invite Member"</h2>
                        <form
                            class="modal__form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                let mut sent = false;
                                update_loaded(workspace, |w| sent = w.invite());
                                if sent {
                                    show_invite.set(false);
                                }
                            }
                        >
                            <input
                                class="cyber-input"
                                type="email"
                                required
                                placeholder="member@example.com"
                                prop:value=move || workspace.with(|w| w.as_ref().map(|w| w.invite_email.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    update_loaded(workspace, |w| w.invite_email = value);
                                }
                            />
                            <div class="modal__actions">
                                <button type="button" class="cyber-button cyber-button--muted" on:click=move |_| show_invite.set(false)>
                                    "Cancel"
                                </button>
                                <button type="submit" class="cyber-button">
                                    "Send Invite"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

/// Owner edit form over a copy of the editable fields.
#[component]
fn EditProjectModal(edit: RwSignal<Option<ProjectEdit>>, workspace: RwSignal<Option<ProjectDetailState>>) -> impl IntoView {
    let field = move |get: fn(&ProjectEdit) -> String| move || edit.with(|e| e.as_ref().map(get).unwrap_or_default());
    let set = move |apply: fn(&mut ProjectEdit, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            edit.update(|e| {
                if let Some(e) = e {
                    apply(e, value);
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(changes) = edit.get_untracked() {
            update_loaded(workspace, |w| w.apply_edit(&changes));
        }
        edit.set(None);
    };

    view! {
        <div class="modal-backdrop">
            <div class="cyber-card modal">
                <h2 class="cyber-heading">"Edit Project"</h2>
                <form class="modal__form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Title"</span>
                        <input class="cyber-input" type="text" prop:value=field(|e| e.title.clone()) on:input=set(|e, v| e.title = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Description"</span>
                        <textarea
                            class="cyber-input"
                            prop:value=field(|e| e.description.clone())
                            on:input=set(|e, v| e.description = v)
                        ></textarea>
                    </label>
                    <label class="field">
                        <span class="field__label">"Progress (%)"</span>
                        <input
                            class="cyber-input"
                            type="number"
                            min="0"
                            max="100"
                            prop:value=field(|e| e.progress.to_string())
                            on:input=set(|e, v| e.progress = v.parse::<u8>().map_or(e.progress, |p| p.min(100)))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Category"</span>
                        <input class="cyber-input" type="text" prop:value=field(|e| e.category.clone()) on:input=set(|e, v| e.category = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Tags (comma-separated)"</span>
                        <input class="cyber-input" type="text" prop:value=field(|e| e.tags.clone()) on:input=set(|e, v| e.tags = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"GitHub Link"</span>
                        <input class="cyber-input" type="url" prop:value=field(|e| e.github.clone()) on:input=set(|e, v| e.github = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Website Link"</span>
                        <input class="cyber-input" type="url" prop:value=field(|e| e.website.clone()) on:input=set(|e, v| e.website = v)/>
                    </label>
                    <div class="modal__actions">
                        <button type="button" class="cyber-button cyber-button--muted" on:click=move |_| edit.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="cyber-button">
                            "Save Changes"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
