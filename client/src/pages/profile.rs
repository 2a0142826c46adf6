//! Signed-in user's profile dashboard with privacy-gated tabs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::privacy_settings_modal::PrivacySettingsModal;
use crate::net::types::{PrivacySection, User};
use crate::state::auth::AuthState;
use crate::state::privacy::section_visible;
use crate::state::profile::{
    Achievement, Activity, ActivityKind, DashboardStats, OverviewStatus, ProfileDashboard, ProfileTab, ProjectOverview,
};
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

fn stat_card(value: u32, label: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="cyber-card stat-tile">
            <div class=format!("stat-tile__value text-{accent}")>{value}</div>
            <div class="muted">{label}</div>
        </div>
    }
}

fn progress_bar(percent: u32) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress__bar" style=format!("width: {percent}%")></div>
        </div>
    }
}

fn activity_row(activity: Activity) -> impl IntoView {
    let (icon, accent) = match activity.kind {
        ActivityKind::Project => ("▣", "blue"),
        ActivityKind::Discussion => ("✉", "pink"),
        ActivityKind::Connection => ("👥", "purple"),
        ActivityKind::Achievement => ("★", "yellow"),
    };
    let title = match activity.link {
        Some(href) => view! { <a href=href class="text-blue">{activity.title}</a> }.into_any(),
        None => view! { <span class="text-blue">{activity.title}</span> }.into_any(),
    };
    view! {
        <div class="cyber-card activity-row">
            <span class=format!("activity-row__icon text-{accent}")>{icon}</span>
            <div class="activity-row__body">
                {title}
                <p class="muted muted--small">{activity.description}</p>
            </div>
            <span class="muted muted--small">{format::date_time(activity.timestamp)}</span>
        </div>
    }
}

fn overview_card(project: ProjectOverview) -> impl IntoView {
    let status_class = match project.status {
        OverviewStatus::Active => "tag tag--blue",
        OverviewStatus::Completed => "tag tag--purple",
        OverviewStatus::OnHold => "tag tag--yellow",
    };
    view! {
        <div class="cyber-card timeline-card">
            <div class="section-head">
                <div>
                    <h4 class="text-blue">{project.name}</h4>
                    <div class="muted muted--small">{project.role}</div>
                </div>
                <div class="avatar-stack">
                    {project
                        .team
                        .into_iter()
                        .map(|m| view! { <img class="avatar avatar--sm" src=m.avatar title=m.name.clone() alt=m.name/> })
                        .collect_view()}
                </div>
            </div>
            <div class="section-head muted--small">
                <span class="muted">"Progress"</span>
                <span class="text-blue">{format!("{}%", project.progress)}</span>
            </div>
            {progress_bar(u32::from(project.progress))}
            <div class="section-head muted--small">
                <span class="muted">{format!("Last activity: {}", format::date(project.last_activity.date()))}</span>
                <span class=status_class>{project.status.label()}</span>
            </div>
        </div>
    }
}

fn achievement_card(achievement: Achievement) -> impl IntoView {
    let percent = achievement.percent();
    view! {
        <div class="cyber-card achievement">
            <h4 class="text-blue">{achievement.title}</h4>
            <p class="muted muted--small">{achievement.description}</p>
            {achievement
                .progress
                .map(|(current, total)| {
                    view! {
                        <div class="section-head muted--small">
                            <span class="muted">"Progress"</span>
                            <span class="text-blue">{format!("{current} / {total}")}</span>
                        </div>
                        {progress_bar(percent)}
                    }
                })}
            <div class="muted muted--small">{format!("Earned: {}", format::date(achievement.earned_at))}</div>
        </div>
    }
}

fn tab_content(tab: ProfileTab, dashboard: ProfileDashboard, owner: &User) -> impl IntoView + use<> {
    let stats: DashboardStats = dashboard.stats;
    let viewer = Some(owner.id.as_str());
    let followers_visible = section_visible(viewer, owner, PrivacySection::Followers);
    match tab {
        ProfileTab::Overview => view! {
            <div class="stat-grid">
                <div class="cyber-card">
                    <h3 class="text-blue">"Projects"</h3>
                    <div class="stat-tile__value text-blue">{stats.projects}</div>
                    <div class="section-head"><span class="muted">"Active"</span><span>{stats.active_projects}</span></div>
                    <div class="section-head"><span class="muted">"Completed"</span><span>{stats.completed_projects}</span></div>
                </div>
                <div class="cyber-card">
                    <h3 class="text-pink">"Activity"</h3>
                    <div class="stat-tile__value text-pink">{stats.contributions}</div>
                    <div class="section-head"><span class="muted">"Discussions"</span><span>{stats.discussions}</span></div>
                    {followers_visible
                        .then(|| {
                            view! {
                                <div class="section-head">
                                    <span class="muted">"Connections"</span>
                                    <span class="text-yellow">{stats.connections}</span>
                                </div>
                            }
                        })}
                </div>
            </div>
            <div class="cyber-card">
                <h3 class="cyber-heading">"Recent Activity"</h3>
                {dashboard.activity.into_iter().map(activity_row).collect_view()}
            </div>
        }
        .into_any(),
        ProfileTab::Projects => view! {
            <div class="stat-grid">
                {stat_card(stats.active_projects, "Active Projects", "blue")}
                {stat_card(stats.completed_projects, "Completed", "purple")}
                {stat_card(stats.contributions, "Contributions", "pink")}
            </div>
            <div class="cyber-card">
                <h3 class="cyber-heading">"Project Timeline"</h3>
                {dashboard.projects.into_iter().map(overview_card).collect_view()}
            </div>
        }
        .into_any(),
        ProfileTab::Discussions => view! {
            <div class="stat-grid">
                {stat_card(stats.discussions, "Total Discussions", "blue")}
                {followers_visible.then(|| stat_card(stats.connections, "Connections", "purple"))}
            </div>
        }
        .into_any(),
        ProfileTab::Achievements => view! {
            <div class="card-grid">{dashboard.achievements.into_iter().map(achievement_card).collect_view()}</div>
        }
        .into_any(),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let dashboard = RwSignal::new(ProfileDashboard::default());
    let privacy_section = RwSignal::new(None::<PrivacySection>);
    let user = Memo::new(move |_| auth.with(|a| a.user.clone()));

    let select_tab = move |tab: ProfileTab| {
        let Some(owner) = user.get_untracked() else {
            return;
        };
        dashboard.update(|d| {
            if !d.select(tab, Some(owner.id.as_str()), &owner) {
                log::debug!("profile tab {} hidden by privacy settings", tab.label());
            }
        });
    };

    let header = move || {
        user.get().map(|u| {
            view! {
                <div class="cyber-card profile-header">
                    <div class="profile-header__identity">
                        <img class="avatar avatar--lg" src=u.avatar alt=u.name.clone()/>
                        <div>
                            <h1 class="cyber-heading">{u.name}</h1>
                            <div class="muted">{u.role.label()}</div>
                            <div class="tag-list">
                                {u.skills.into_iter().map(|s| view! { <span class="tag tag--blue">{s}</span> }).collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="profile-header__privacy">
                        <span class="field__label">"Privacy"</span>
                        {PrivacySection::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="cyber-button cyber-button--small"
                                        on:click=move |_| privacy_section.set(Some(section))
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    };

    let tabs = move || {
        let Some(owner) = user.get() else {
            return ().into_any();
        };
        ProfileTab::ALL
            .into_iter()
            .filter(|tab| tab.visible_to(Some(owner.id.as_str()), &owner))
            .map(|tab| {
                view! {
                    <button
                        class="profile-tab"
                        class:profile-tab--active=move || dashboard.with(|d| d.tab == tab)
                        on:click=move |_| select_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    let content = move || {
        let owner = user.get()?;
        let current = dashboard.get();
        Some(tab_content(current.tab, current, &owner))
    };

    view! {
        <Show when=move || user.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading profile..."</p> }>
            <div class="profile-page">
                {header}
                <nav class="profile-tabs">{tabs}</nav>
                {content}
            </div>
        </Show>
        {move || {
            privacy_section
                .get()
                .map(|section| {
                    view! { <PrivacySettingsModal section=section on_close=Callback::new(move |()| privacy_section.set(None))/> }
                })
        }}
    }
}
