//! Messaging management: direct-message threads, their reports and status.

use leptos::prelude::*;

use super::{AdminModal, badge, filter_options, labeled_options, page_header, stat_card};
use crate::state::admin::messages::{ChatThread, MessagingManagement};
use crate::state::admin::{filter_value, parse_filter};
use crate::state::moderation::ThreadStatus;
use crate::util::format;

fn participant_names(thread: &ChatThread) -> String {
    thread.participants.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(" ↔ ")
}

fn thread_detail(thread: ChatThread, store: RwSignal<MessagingManagement>) -> impl IntoView {
    let status_id = thread.id.clone();
    let delete_id = thread.id.clone();
    view! {
        <div class="admin-page__split">
            <div>
                <label class="field">
                    <span class="field__label">"Status"</span>
                    <select
                        class="cyber-input"
                        on:change=move |ev| {
                            if let Ok(status) = event_target_value(&ev).parse::<ThreadStatus>() {
                                store.update(|s| {
                                    s.update_status(&status_id, status);
                                });
                            }
                        }
                    >
                        {labeled_options(thread.status)}
                    </select>
                </label>
                <span class="field__label">"Participants"</span>
                {thread
                    .participants
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div class="cyber-card table-user">
                                <img class="avatar avatar--sm" src=p.avatar alt=p.name.clone()/>
                                <div>
                                    <div class="text-blue">{p.name}</div>
                                    <div class="muted muted--small">{format!("ID: {}", p.id)}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
                <span class="field__label">"Thread Stats"</span>
                <div class="cyber-card">
                    <div class="section-head">
                        <span class="muted">"Messages"</span>
                        <span class="text-blue">{thread.message_count}</span>
                    </div>
                    <div class="section-head">
                        <span class="muted">"Last Activity"</span>
                        <span class="text-blue">{format::date_time(thread.last_message.timestamp)}</span>
                    </div>
                </div>
            </div>
            <div>
                <span class="field__label">"Reports"</span>
                {if thread.reports.is_empty() {
                    view! { <p class="muted">"No reports filed."</p> }.into_any()
                } else {
                    thread
                        .reports
                        .into_iter()
                        .map(|r| {
                            view! {
                                <div class="cyber-card report">
                                    <div class="text-pink">{r.reason}</div>
                                    <div class="muted muted--small">{format!("Reported by: {}", r.reported_by)}</div>
                                    <div class="muted muted--small">{format::date_time(r.timestamp)}</div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                <span class="field__label">"Actions"</span>
                <button
                    class="cyber-button cyber-button--block cyber-button--danger"
                    on:click=move |_| {
                        store.update(|s| {
                            s.remove(&delete_id);
                        });
                    }
                >
                    "Delete Thread"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn MessagingManagementPage() -> impl IntoView {
    let store = RwSignal::new(MessagingManagement::default());
    let filtered = Memo::new(move |_| store.with(MessagingManagement::filtered));
    let selected = Memo::new(move |_| store.with(|s| s.selected_thread().cloned()));
    let close = Callback::new(move |()| store.update(|s| s.selected = None));

    let rows = move || {
        filtered
            .get()
            .into_iter()
            .map(|thread| {
                let id = thread.id.clone();
                let sender = thread.sender_name().unwrap_or("Unknown").to_owned();
                view! {
                    <tr>
                        <td>
                            <div class="avatar-stack">
                                {thread
                                    .participants
                                    .iter()
                                    .map(|p| view! { <img class="avatar avatar--xs" src=p.avatar.clone() alt=p.name.clone()/> })
                                    .collect_view()}
                            </div>
                            <div class="text-blue">{participant_names(&thread)}</div>
                        </td>
                        <td>
                            <div class="muted muted--small">{sender}</div>
                            <div class="truncate">{thread.last_message.content.clone()}</div>
                        </td>
                        <td>{badge(thread.status)}</td>
                        <td>{thread.message_count}</td>
                        <td>{thread.reports.len()}</td>
                        <td class="muted">{format::date_time(thread.last_message.timestamp)}</td>
                        <td>
                            <button
                                class="cyber-button cyber-button--small"
                                on:click=move |_| store.update(|s| s.selected = Some(id.clone()))
                            >
                                "View"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="admin-page">
            {page_header("Messaging Management", "Monitor direct-message threads and reports")}

            <div class="stat-grid">
                {move || {
                    store
                        .with(|s| {
                            view! {
                                {stat_card("Total Threads", s.threads.len().to_string(), "blue")}
                                {stat_card("Messages", s.message_total().to_string(), "purple")}
                                {stat_card("Reported", s.reported_count().to_string(), "pink")}
                                {stat_card("Blocked", s.blocked_count().to_string(), "yellow")}
                            }
                        })
                }}
            </div>

            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search by participant or message..."
                    prop:value=move || store.with(|s| s.filter.search.clone())
                    on:input=move |ev| store.update(|s| s.filter.search = event_target_value(&ev))
                />
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.status = parse_filter(&event_target_value(&ev)))
                >
                    {move || filter_options::<ThreadStatus>("All Status", store.with(|s| filter_value(s.filter.status.as_ref())))}
                </select>
            </div>

            <div class="cyber-card table-card">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Participants"</th>
                            <th>"Last Message"</th>
                            <th>"Status"</th>
                            <th>"Messages"</th>
                            <th>"Reports"</th>
                            <th>"Last Activity"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || selected.with(Option::is_some)>
                <AdminModal title=String::from("Chat Thread Details") on_close=close>
                    {move || selected.get().map(|t| thread_detail(t, store))}
                </AdminModal>
            </Show>
        </div>
    }
}
