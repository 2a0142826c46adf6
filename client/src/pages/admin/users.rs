//! User management: account table with role/status filters and a tabbed
//! detail modal for status, role, verification and activity.

use leptos::prelude::*;

use super::{AdminModal, badge, filter_options, labeled_options, page_header, stat_card};
use crate::net::types::UserRole;
use crate::state::admin::users::{AccountEventKind, ManagedUser, UserDetailTab, UserManagement};
use crate::state::admin::{ALL_FILTER, filter_value, parse_filter};
use crate::state::moderation::{Labeled, UserStatus};
use crate::util::format;

fn user_row(user: ManagedUser, store: RwSignal<UserManagement>, tab: RwSignal<UserDetailTab>) -> impl IntoView {
    let id = user.id.clone();
    view! {
        <tr>
            <td>
                <div class="table-user">
                    <img class="avatar avatar--sm" src=user.avatar alt=user.name.clone()/>
                    <div>
                        <div class="text-blue">{user.name} {user.verified.then_some(" ✓")}</div>
                        <div class="muted muted--small">{user.email}</div>
                    </div>
                </div>
            </td>
            <td>{badge(user.role)}</td>
            <td>{badge(user.status)}</td>
            <td class="muted">{format::date(user.joined_at)}</td>
            <td>
                <button
                    class="cyber-button cyber-button--small"
                    on:click=move |_| {
                        tab.set(UserDetailTab::default());
                        store.update(|s| s.selected = Some(id.clone()));
                    }
                >
                    "View"
                </button>
            </td>
        </tr>
    }
}

fn profile_tab(user: ManagedUser, store: RwSignal<UserManagement>) -> impl IntoView {
    let status_id = user.id.clone();
    let role_id = user.id.clone();
    view! {
        <div class="admin-page__split">
            <div>
                <label class="field">
                    <span class="field__label">"Status"</span>
                    <select
                        class="cyber-input"
                        on:change=move |ev| {
                            if let Ok(status) = event_target_value(&ev).parse::<UserStatus>() {
                                store.update(|s| {
                                    s.update_status(&status_id, status);
                                });
                            }
                        }
                    >
                        {labeled_options(user.status)}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Role"</span>
                    <select
                        class="cyber-input"
                        on:change=move |ev| {
                            if let Some(role) = UserRole::parse(&event_target_value(&ev)) {
                                store.update(|s| {
                                    s.update_role(&role_id, role);
                                });
                            }
                        }
                    >
                        {labeled_options(user.role)}
                    </select>
                </label>
                <div class="field">
                    <span class="field__label">"Location"</span>
                    <span class="text-blue">{user.location}</span>
                </div>
                <div class="field">
                    <span class="field__label">"Joined"</span>
                    <span class="text-blue">{format::date(user.joined_at)}</span>
                </div>
                <div class="field">
                    <span class="field__label">"Skills"</span>
                    <div class="tag-list">
                        {user.skills.into_iter().map(|s| view! { <span class="tag tag--purple">{s}</span> }).collect_view()}
                    </div>
                </div>
            </div>
            <div>
                <span class="field__label">"Statistics"</span>
                <div class="stat-grid">
                    {stat_card("Projects", user.stats.projects.to_string(), "blue")}
                    {stat_card("Discussions", user.stats.discussions.to_string(), "purple")}
                    {stat_card("Connections", user.stats.connections.to_string(), "pink")}
                </div>
            </div>
        </div>
    }
}

fn verification_tab(user: &ManagedUser) -> impl IntoView + use<> {
    let Some(verification) = user.verification.clone() else {
        return view! { <p class="muted">"No verification submitted."</p> }.into_any();
    };
    let check = |ok: bool| if ok { view! { <span class="text-blue">"✓"</span> } } else { view! { <span class="text-pink">"✕"</span> } };
    view! {
        <div class="admin-page__split">
            <div>
                <span class="field__label">"Identity Verification"</span>
                <div class="cyber-card section-head">
                    <span>"ID Card"</span>
                    {check(verification.id_card)}
                </div>
                <div class="cyber-card section-head">
                    <span>"LinkedIn Profile"</span>
                    {check(verification.linkedin)}
                </div>
            </div>
            <div>
                <span class="field__label">"Document History"</span>
                {verification
                    .documents
                    .into_iter()
                    .map(|doc| {
                        view! {
                            <div class="cyber-card">
                                <div class="section-head">
                                    <span class="text-blue">{doc.name}</span>
                                    {badge(doc.status)}
                                </div>
                                <div class="muted muted--small">{format!("Submitted: {}", format::date(doc.submitted_at))}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

fn activity_tab(user: &ManagedUser) -> impl IntoView + use<> {
    user.activity
        .iter()
        .map(|event| {
            let accent = match event.kind {
                AccountEventKind::Login => "text-blue",
                AccountEventKind::Project => "text-purple",
                AccountEventKind::Discussion => "text-pink",
                AccountEventKind::Report => "text-yellow",
            };
            view! {
                <div class="cyber-card activity-row">
                    <span class=format!("activity-row__icon {accent}")>"●"</span>
                    <p class="activity-row__body">{event.description.clone()}</p>
                    <span class="muted muted--small">{format::date_time(event.timestamp)}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let store = RwSignal::new(UserManagement::default());
    let tab = RwSignal::new(UserDetailTab::default());
    let filtered = Memo::new(move |_| store.with(UserManagement::filtered));
    let selected = Memo::new(move |_| store.with(|s| s.selected_user().cloned()));
    let close = Callback::new(move |()| store.update(|s| s.selected = None));

    view! {
        <div class="admin-page">
            {page_header("User Management", "Manage and monitor user accounts")}

            <div class="stat-grid">
                {move || {
                    store
                        .with(|s| {
                            view! {
                                {stat_card("Total Users", s.users.len().to_string(), "blue")}
                                {stat_card("Verified Users", s.verified_count().to_string(), "purple")}
                                {stat_card("Moderators", s.staff_count().to_string(), "pink")}
                                {stat_card("Banned Users", s.banned_count().to_string(), "yellow")}
                            }
                        })
                }}
            </div>

            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search users..."
                    prop:value=move || store.with(|s| s.filter.search.clone())
                    on:input=move |ev| store.update(|s| s.filter.search = event_target_value(&ev))
                />
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.role = UserRole::from_value(&event_target_value(&ev)))
                >
                    {move || {
                        let current = store.with(|s| s.filter.role.map_or(ALL_FILTER, UserRole::as_str).to_owned());
                        filter_options::<UserRole>("All Roles", current)
                    }}
                </select>
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.status = parse_filter(&event_target_value(&ev)))
                >
                    {move || filter_options::<UserStatus>("All Status", store.with(|s| filter_value(s.filter.status.as_ref())))}
                </select>
            </div>

            <div class="cyber-card table-card">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th>"Joined"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{move || filtered.get().into_iter().map(|u| user_row(u, store, tab)).collect_view()}</tbody>
                </table>
            </div>

            <Show when=move || selected.with(Option::is_some)>
                <AdminModal
                    title=Signal::derive(move || selected.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default()))
                    on_close=close
                >
                    <div class="modal-tabs">
                        {UserDetailTab::ALL
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
                        let user = selected.get()?;
                        Some(match tab.get() {
                            UserDetailTab::Profile => profile_tab(user, store).into_any(),
                            UserDetailTab::Verification => verification_tab(&user).into_any(),
                            UserDetailTab::Activity => activity_tab(&user).into_any(),
                        })
                    }}
                </AdminModal>
            </Show>
        </div>
    }
}
