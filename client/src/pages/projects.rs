//! Project listing with search, technology filter and date sort.

use leptos::prelude::*;

use crate::mock::catalog::{TECHNOLOGIES, projects};
use crate::state::auth::AuthState;
use crate::state::projects::{Project, ProjectQuery, ProjectSort};
use crate::util::format;

fn project_card(project: Project) -> impl IntoView {
    view! {
        <a href=format!("/projects/{}", project.id) class="cyber-card project-card">
            <div class="project-card__image">
                <img src=project.image alt=project.title.clone()/>
            </div>
            <div class="project-card__body">
                <h3 class="cyber-heading project-card__title">{project.title}</h3>
                <p class="muted project-card__description">{project.description}</p>
                <div class="tag-list">
                    {project.tags.into_iter().map(|tag| view! { <span class="tag tag--blue">{tag}</span> }).collect_view()}
                </div>
                <div class="project-card__meta">
                    <span class="text-yellow">"★ 128"</span>
                    <span class="text-purple">"⑂ 45"</span>
                    <span class="text-pink">{format!("👥 {}", project.members.len())}</span>
                    <span class="muted">{format::date(project.created_at)}</span>
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let all_projects = StoredValue::new(projects());
    let query = RwSignal::new(ProjectQuery::default());
    let show_filters = RwSignal::new(false);

    let filtered = Memo::new(move |_| query.with(|q| all_projects.with_value(|p| q.filter(p))));

    view! {
        <div class="listing-page">
            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search projects..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <div class="listing-toolbar__actions">
                    <button class="cyber-button" on:click=move |_| show_filters.update(|s| *s = !*s)>
                        "Filter"
                    </button>
                    <Show when=move || auth.with(AuthState::is_authenticated)>
                        <a href="/projects/create" class="cyber-button">
                            "+ New Project"
                        </a>
                    </Show>
                </div>
            </div>

            <Show when=move || show_filters.get()>
                <div class="cyber-card filter-panel">
                    <div class="filter-panel__group">
                        <div class="field__label">"Technologies"</div>
                        {TECHNOLOGIES
                            .into_iter()
                            .map(|tech| {
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--active=move || query.with(|q| q.technologies.iter().any(|t| t == tech))
                                        on:click=move |_| query.update(|q| q.toggle_technology(tech))
                                    >
                                        {tech}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="filter-panel__group">
                        <div class="field__label">"Sort by"</div>
                        <select
                            class="cyber-input"
                            on:change=move |ev| query.update(|q| q.sort = ProjectSort::parse(&event_target_value(&ev)))
                        >
                            {ProjectSort::ALL
                                .into_iter()
                                .map(|sort| {
                                    view! {
                                        <option value=sort.as_str() selected=move || query.with(|q| q.sort == sort)>
                                            {sort.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </Show>

            <Show
                when=move || filtered.with(|f| !f.is_empty())
                fallback=|| view! { <p class="muted listing__empty">"No projects match your filters."</p> }
            >
                <div class="card-grid">{move || filtered.get().into_iter().map(project_card).collect_view()}</div>
            </Show>
        </div>
    }
}
