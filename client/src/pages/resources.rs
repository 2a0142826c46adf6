//! Learning-resource catalog grouped into sections.

use leptos::prelude::*;

use crate::mock::catalog::resource_sections;
use crate::state::resources::{ResourceCategory, ResourceItem, ResourceQuery};

fn resource_card(item: ResourceItem) -> impl IntoView {
    view! {
        <a href=format!("/resources/{}", item.id) class="cyber-card resource-card">
            <div class="resource-card__image">
                <img src=item.image alt=item.name.clone()/>
            </div>
            <div class="resource-card__body">
                <h3 class="cyber-heading">{item.name}</h3>
                <p class="muted">{item.description}</p>
                <div class="resource-card__stats">
                    {item
                        .stats
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="resource-card__stat">
                                    <span class="muted muted--small">{label}</span>
                                    <span class="text-blue">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let sections = StoredValue::new(resource_sections());
    let query = RwSignal::new(ResourceQuery::default());

    let filtered = Memo::new(move |_| query.with(|q| sections.with_value(|s| q.filter(s))));

    view! {
        <div class="listing-page">
            <h1 class="cyber-heading">"Learning Resources"</h1>
            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search resources..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <div class="chip-row">
                    {ResourceCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || query.with(|q| q.category == category)
                                    on:click=move |_| query.update(|q| q.category = category)
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                filtered
                    .get()
                    .into_iter()
                    .filter(|s| !s.items.is_empty())
                    .map(|section| {
                        view! {
                            <section class="resource-section">
                                <h2 class="cyber-heading">{section.title}</h2>
                                <div class="card-grid">
                                    {section.items.into_iter().map(resource_card).collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()
            }}

            <Show when=move || filtered.with(|s| s.iter().all(|s| s.items.is_empty()))>
                <p class="muted empty-state">"No resources match your search."</p>
            </Show>
        </div>
    }
}
