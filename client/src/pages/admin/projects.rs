//! Project management: moderation table, detail modal with members and
//! reports, and the admin "create project" form.

use leptos::prelude::*;

use super::{
    AdminModal, badge, category_filter, category_options, filter_options, labeled_options, page_header, report_list,
    stat_card,
};
use crate::state::admin::projects::{ManagedProject, ManagedProjectDraft, ProjectDetailTab, ProjectManagement};
use crate::state::admin::{filter_value, parse_filter};
use crate::state::moderation::ProjectStatus;
use crate::state::projects::PROJECT_CATEGORIES;
use crate::util::format;

fn details_tab(project: ManagedProject, store: RwSignal<ProjectManagement>) -> impl IntoView {
    let id = project.id.clone();
    let links = [
        ("GitHub", project.links.github),
        ("Website", project.links.website),
        ("Documentation", project.links.documentation),
    ];
    view! {
        <div class="admin-page__split">
            <div>
                {project.thumbnail.map(|src| view! { <img class="modal__image" src=src alt=""/> })}
                <p>{project.description}</p>
                <div class="tag-list">
                    <span class="tag tag--purple">{project.category}</span>
                    {project.tags.into_iter().map(|t| view! { <span class="tag tag--blue">{t}</span> }).collect_view()}
                </div>
                <div class="field">
                    <span class="field__label">"Creator"</span>
                    <div class="table-user">
                        <img class="avatar avatar--xs" src=project.creator.avatar alt=project.creator.name.clone()/>
                        <span>{project.creator.name}</span>
                    </div>
                </div>
                <div class="muted muted--small">
                    {format!(
                        "Created {} · Updated {}",
                        format::date(project.created_at),
                        format::date(project.last_updated),
                    )}
                </div>
            </div>
            <div>
                <label class="field">
                    <span class="field__label">"Status"</span>
                    <select
                        class="cyber-input"
                        on:change=move |ev| {
                            if let Ok(status) = event_target_value(&ev).parse::<ProjectStatus>() {
                                store.update(|s| {
                                    s.update_status(&id, status);
                                });
                            }
                        }
                    >
                        {labeled_options(project.status)}
                    </select>
                </label>
                <div class="stat-grid">
                    {stat_card("Stars", project.stats.stars.to_string(), "yellow")}
                    {stat_card("Forks", project.stats.forks.to_string(), "purple")}
                    {stat_card("Issues", project.stats.issues.to_string(), "pink")}
                    {stat_card("Discussions", project.stats.discussions.to_string(), "blue")}
                </div>
                <span class="field__label">"Links"</span>
                {links
                    .into_iter()
                    .filter_map(|(label, href)| href.map(|href| (label, href)))
                    .map(|(label, href)| {
                        view! {
                            <a class="link-row" href=href target="_blank" rel="noopener">
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn members_tab(project: &ManagedProject) -> impl IntoView + use<> {
    if project.members.is_empty() {
        return view! { <p class="muted">"No members yet."</p> }.into_any();
    }
    project
        .members
        .iter()
        .map(|m| {
            view! {
                <div class="member-row">
                    <img class="avatar avatar--sm" src=m.avatar.clone() alt=m.name.clone()/>
                    <div>
                        <div class="member-row__name">{m.name.clone()}</div>
                        <div class="muted muted--small">{m.role.clone()}</div>
                    </div>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

/// Admin form for a new project; starts pending.
#[component]
fn CreateProjectModal(store: RwSignal<ProjectManagement>) -> impl IntoView {
    let draft = RwSignal::new(ManagedProjectDraft::default());
    let error = RwSignal::new(None::<&'static str>);
    let close = Callback::new(move |()| store.update(|s| s.show_create = false));

    let field = move |get: fn(&ManagedProjectDraft) -> String| move || draft.with(get);
    let set = move |apply: fn(&mut ManagedProjectDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| apply(d, value));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = store.try_update(|s| {
            let result = draft.with_untracked(|d| s.create(d));
            if result.is_ok() {
                s.show_create = false;
            }
            result
        });
        if let Some(Err(message)) = result {
            error.set(Some(message));
        }
    };

    view! {
        <AdminModal title=String::from("Create New Project") on_close=close>
            <form class="modal__form" on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <label class="field">
                    <span class="field__label">"Project Title"</span>
                    <input class="cyber-input" type="text" prop:value=field(|d| d.title.clone()) on:input=set(|d, v| d.title = v)/>
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea class="cyber-input" prop:value=field(|d| d.description.clone()) on:input=set(|d, v| d.description = v)></textarea>
                </label>
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select class="cyber-input" on:change=set(|d, v| d.category = v)>
                        <option value="">"Select a category"</option>
                        {PROJECT_CATEGORIES.map(|c| view! { <option value=c>{c}</option> }).into_iter().collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Tags (comma-separated)"</span>
                    <input class="cyber-input" type="text" prop:value=field(|d| d.tags.clone()) on:input=set(|d, v| d.tags = v)/>
                </label>
                <label class="field">
                    <span class="field__label">"Thumbnail URL"</span>
                    <input class="cyber-input" type="url" prop:value=field(|d| d.thumbnail.clone()) on:input=set(|d, v| d.thumbnail = v)/>
                </label>
                <label class="field">
                    <span class="field__label">"GitHub"</span>
                    <input class="cyber-input" type="url" prop:value=field(|d| d.github.clone()) on:input=set(|d, v| d.github = v)/>
                </label>
                <label class="field">
                    <span class="field__label">"Website"</span>
                    <input class="cyber-input" type="url" prop:value=field(|d| d.website.clone()) on:input=set(|d, v| d.website = v)/>
                </label>
                <label class="field">
                    <span class="field__label">"Documentation"</span>
                    <input
                        class="cyber-input"
                        type="url"
                        prop:value=field(|d| d.documentation.clone())
                        on:input=set(|d, v| d.documentation = v)
                    />
                </label>
                <div class="modal__actions">
                    <button type="button" class="cyber-button cyber-button--muted" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="cyber-button">
                        "Create Project"
                    </button>
                </div>
            </form>
        </AdminModal>
    }
}

#[component]
pub fn ProjectManagementPage() -> impl IntoView {
    let store = RwSignal::new(ProjectManagement::default());
    let tab = RwSignal::new(ProjectDetailTab::default());
    let filtered = Memo::new(move |_| store.with(ProjectManagement::filtered));
    let selected = Memo::new(move |_| store.with(|s| s.selected_project().cloned()));
    let close = Callback::new(move |()| store.update(|s| s.selected = None));

    let rows = move || {
        filtered
            .get()
            .into_iter()
            .map(|p| {
                let view_id = p.id.clone();
                let delete_id = p.id.clone();
                view! {
                    <tr>
                        <td>
                            <div class="text-blue">{p.title}</div>
                            <div class="muted muted--small">{p.creator.name}</div>
                        </td>
                        <td>{p.category}</td>
                        <td>{badge(p.status)}</td>
                        <td>{p.members.len()}</td>
                        <td>{p.reports.len()}</td>
                        <td class="muted">{format::date(p.last_updated)}</td>
                        <td class="table-actions">
                            <button
                                class="cyber-button cyber-button--small"
                                on:click=move |_| {
                                    tab.set(ProjectDetailTab::default());
                                    store.update(|s| s.selected = Some(view_id.clone()));
                                }
                            >
                                "View"
                            </button>
                            <button
                                class="cyber-button cyber-button--small cyber-button--danger"
                                on:click=move |_| {
                                    store.update(|s| {
                                        s.remove(&delete_id);
                                    });
                                }
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="admin-page">
            <div class="section-head">
                {page_header("Project Management", "Review, moderate and create projects")}
                <button class="cyber-button" on:click=move |_| store.update(|s| s.show_create = true)>
                    "+ New Project"
                </button>
            </div>

            <div class="stat-grid">
                {move || {
                    store
                        .with(|s| {
                            view! {
                                {stat_card("Total Projects", s.projects.len().to_string(), "blue")}
                                {stat_card("Active", s.active_count().to_string(), "purple")}
                                {stat_card("Reported", s.reported_count().to_string(), "pink")}
                                {stat_card("Members", s.member_total().to_string(), "yellow")}
                            }
                        })
                }}
            </div>

            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search projects..."
                    prop:value=move || store.with(|s| s.filter.search.clone())
                    on:input=move |ev| store.update(|s| s.filter.search = event_target_value(&ev))
                />
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.category = category_filter(event_target_value(&ev)))
                >
                    {move || store.with(|s| category_options(s.categories(), s.filter.category.clone()))}
                </select>
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.status = parse_filter(&event_target_value(&ev)))
                >
                    {move || filter_options::<ProjectStatus>("All Status", store.with(|s| filter_value(s.filter.status.as_ref())))}
                </select>
            </div>

            <div class="cyber-card table-card">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Project"</th>
                            <th>"Category"</th>
                            <th>"Status"</th>
                            <th>"Members"</th>
                            <th>"Reports"</th>
                            <th>"Updated"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || selected.with(Option::is_some)>
                <AdminModal
                    title=Signal::derive(move || selected.with(|p| p.as_ref().map(|p| p.title.clone()).unwrap_or_default()))
                    on_close=close
                >
                    <div class="modal-tabs">
                        {ProjectDetailTab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class="profile-tab"
                                        class:profile-tab--active=move || tab.get() == t
                                        on:click=move |_| tab.set(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        let project = selected.get()?;
                        Some(match tab.get() {
                            ProjectDetailTab::Details => details_tab(project, store).into_any(),
                            ProjectDetailTab::Members => members_tab(&project).into_any(),
                            ProjectDetailTab::Reports => report_list(project.reports).into_any(),
                        })
                    }}
                </AdminModal>
            </Show>

            <Show when=move || store.with(|s| s.show_create)>
                <CreateProjectModal store=store/>
            </Show>
        </div>
    }
}
