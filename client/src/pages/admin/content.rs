//! Content moderation: posts, comments and discussions with their reports.

use leptos::prelude::*;

use super::{AdminModal, badge, filter_options, labeled_options, page_header, report_list, stat_card};
use crate::state::admin::content::{ContentItem, ContentKind, ContentModeration};
use crate::state::admin::{ALL_FILTER, filter_value, parse_filter};
use crate::state::moderation::{ContentStatus, Labeled};
use crate::util::format;

/// Quick actions offered in the table, `(target status, label)`.
const QUICK_ACTIONS: [(ContentStatus, &str); 3] =
    [(ContentStatus::Flagged, "Flag"), (ContentStatus::Locked, "Lock"), (ContentStatus::Removed, "Remove")];

fn headline(item: &ContentItem) -> String {
    item.title.clone().unwrap_or_else(|| item.body.chars().take(60).collect())
}

fn detail(item: ContentItem, store: RwSignal<ContentModeration>) -> impl IntoView {
    let id = item.id.clone();
    let report_count = store.with_untracked(|s| s.reports_for(&item.id).len());
    view! {
        <div class="admin-page__split">
            <div>
                <div class="table-user">
                    <img class="avatar avatar--sm" src=item.author.avatar alt=item.author.name.clone()/>
                    <div>
                        <div class="text-blue">{item.author.name}</div>
                        <div class="muted muted--small">{format::date(item.created_at)}</div>
                    </div>
                </div>
                {item
                    .parent
                    .map(|p| {
                        view! {
                            <div class="muted muted--small">{format!("In {} \"{}\"", p.kind.as_str(), p.title)}</div>
                        }
                    })}
                <p class="pre-line">{item.body}</p>
                <div class="tag-list">
                    {item.category.map(|c| view! { <span class="tag tag--purple">{c}</span> })}
                    {item.tags.into_iter().map(|t| view! { <span class="tag tag--blue">{t}</span> }).collect_view()}
                </div>
                <div class="resource-meta">
                    {item.stats.views.map(|v| view! { <span class="text-blue">{format!("👁 {v}")}</span> })}
                    <span class="text-pink">{format!("👍 {}", item.stats.likes)}</span>
                    <span class="text-purple">{format!("💬 {}", item.stats.replies)}</span>
                </div>
            </div>
            <div>
                <label class="field">
                    <span class="field__label">"Status"</span>
                    <select
                        class="cyber-input"
                        on:change=move |ev| {
                            if let Ok(status) = event_target_value(&ev).parse::<ContentStatus>() {
                                store.update(|s| {
                                    s.update_status(&id, status);
                                });
                            }
                        }
                    >
                        {labeled_options(item.status)}
                    </select>
                </label>
                <span class="field__label">{format!("Reports ({report_count})")}</span>
                {report_list(item.reports)}
            </div>
        </div>
    }
}

#[component]
pub fn ContentModerationPage() -> impl IntoView {
    let store = RwSignal::new(ContentModeration::default());
    let filtered = Memo::new(move |_| store.with(ContentModeration::filtered));
    let selected = Memo::new(move |_| store.with(|s| s.selected_item().cloned()));
    let close = Callback::new(move |()| store.update(|s| s.selected = None));

    let rows = move || {
        filtered
            .get()
            .into_iter()
            .map(|item| {
                let view_id = item.id.clone();
                let actions = QUICK_ACTIONS
                    .into_iter()
                    .filter(|(status, _)| *status != item.status)
                    .map(|(status, label)| {
                        let id = item.id.clone();
                        view! {
                            <button
                                class="cyber-button cyber-button--small"
                                on:click=move |_| {
                                    store.update(|s| {
                                        s.update_status(&id, status);
                                    });
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view();
                view! {
                    <tr>
                        <td>
                            <div class="text-blue">{headline(&item)}</div>
                            <div class="muted muted--small">{item.author.name.clone()}</div>
                        </td>
                        <td>{badge(item.kind)}</td>
                        <td>{badge(item.status)}</td>
                        <td>{item.reports.len()}</td>
                        <td class="muted">{format::date(item.created_at)}</td>
                        <td class="table-actions">
                            <button
                                class="cyber-button cyber-button--small"
                                on:click=move |_| store.update(|s| s.selected = Some(view_id.clone()))
                            >
                                "View"
                            </button>
                            {actions}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="admin-page">
            {page_header("Content Moderation", "Review reported posts, comments and discussions")}

            <div class="stat-grid">
                {move || {
                    store
                        .with(|s| {
                            view! {
                                {stat_card("Total Content", s.items.len().to_string(), "blue")}
                                {stat_card("Flagged", s.flagged_count().to_string(), "pink")}
                                {stat_card("Locked", s.locked_count().to_string(), "purple")}
                                {stat_card("Reports", s.report_total().to_string(), "yellow")}
                            }
                        })
                }}
            </div>

            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search content..."
                    prop:value=move || store.with(|s| s.filter.search.clone())
                    on:input=move |ev| store.update(|s| s.filter.search = event_target_value(&ev))
                />
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.kind = ContentKind::from_value(&event_target_value(&ev)))
                >
                    {move || {
                        let current = store.with(|s| s.filter.kind.map_or(ALL_FILTER, ContentKind::as_str).to_owned());
                        filter_options::<ContentKind>("All Types", current)
                    }}
                </select>
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.status = parse_filter(&event_target_value(&ev)))
                >
                    {move || filter_options::<ContentStatus>("All Status", store.with(|s| filter_value(s.filter.status.as_ref())))}
                </select>
            </div>

            <div class="cyber-card table-card">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Content"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th>"Reports"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || selected.with(Option::is_some)>
                <AdminModal
                    title=Signal::derive(move || selected.with(|i| i.as_ref().map(headline).unwrap_or_default()))
                    on_close=close
                >
                    {move || selected.get().map(|item| detail(item, store))}
                </AdminModal>
            </Show>
        </div>
    }
}
