//! Admin dashboard: headline totals, bar charts, audience breakdown and the
//! recent activity feed.

use leptos::prelude::*;

use super::{page_header, stat_card};
use crate::components::status_badge::select_options;
use crate::state::admin::dashboard::{Chart, DashboardState, DateRange, FeedKind};
use crate::util::format;

const SERIES_ACCENTS: [&str; 3] = ["blue", "pink", "purple"];

fn growth_card(label: &'static str, total: u32, growth: f32, accent: &'static str) -> impl IntoView {
    view! {
        <div class="cyber-card stat-tile">
            <div class="muted muted--small">{label}</div>
            <div class=format!("stat-tile__value text-{accent}")>{format::count(u64::from(total))}</div>
            <div class:text-blue={growth >= 0.0} class:text-pink={growth < 0.0}>
                {format!("{} vs previous period", format::growth(growth))}
            </div>
        </div>
    }
}

fn bar_chart(chart: Chart) -> impl IntoView {
    let series = chart.series.clone();
    view! {
        <div class="cyber-card chart">
            <h3 class="cyber-heading">{chart.title.clone()}</h3>
            <div class="chart__legend">
                {series
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| {
                        view! { <span class=format!("chart__key text-{}", SERIES_ACCENTS[i % SERIES_ACCENTS.len()])>{name}</span> }
                    })
                    .collect_view()}
            </div>
            <div class="chart__bars">
                {chart
                    .points
                    .iter()
                    .map(|point| {
                        view! {
                            <div class="chart__group">
                                <div class="chart__stack">
                                    {point
                                        .values
                                        .iter()
                                        .enumerate()
                                        .map(|(i, value)| {
                                            view! {
                                                <div
                                                    class=format!("chart__bar chart__bar--{}", SERIES_ACCENTS[i % SERIES_ACCENTS.len()])
                                                    style=format!("height: {}%", chart.percent(*value))
                                                    title=value.to_string()
                                                ></div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <span class="muted muted--small">{point.label.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState::default());
    let analytics = move || dashboard.with(|d| d.analytics.clone());

    view! {
        <div class="admin-page">
            <div class="section-head">
                {page_header("Dashboard", "Platform analytics and recent activity")}
                <select
                    class="cyber-input"
                    on:change=move |ev| dashboard.update(|d| d.select_range(&event_target_value(&ev)))
                >
                    {move || {
                        let current = dashboard.with(|d| d.range.as_str().to_owned());
                        select_options(DateRange::ALL.map(|r| (r.as_str(), r.label())), current)
                    }}
                </select>
            </div>

            {move || {
                let a = analytics();
                view! {
                    <div class="stat-grid">
                        {growth_card("Total Users", a.total_users, a.growth.users, "blue")}
                        {growth_card("Total Projects", a.total_projects, a.growth.projects, "pink")}
                        {growth_card("Total Posts", a.total_posts, a.growth.posts, "purple")}
                        {growth_card("Total Courses", a.total_courses, a.growth.courses, "yellow")}
                    </div>
                }
            }}

            <div class="chart-grid">{move || dashboard.with(|d| d.charts.clone()).into_iter().map(bar_chart).collect_view()}</div>

            {move || {
                let a = analytics();
                let stickiness = a.stickiness();
                view! {
                    <div class="stat-grid">
                        {stat_card("Daily Active Users", format::count(u64::from(a.daily_active_users)), "blue")}
                        {stat_card("Monthly Active Users", format::count(u64::from(a.monthly_active_users)), "pink")}
                        {stat_card("DAU / MAU", format!("{stickiness}%"), "purple")}
                    </div>
                    <div class="admin-page__split">
                        <div class="cyber-card">
                            <h3 class="cyber-heading">"Devices"</h3>
                            {[("Desktop", a.devices.desktop), ("Mobile", a.devices.mobile), ("Tablet", a.devices.tablet)]
                                .into_iter()
                                .map(|(label, share)| {
                                    view! {
                                        <div class="section-head">
                                            <span class="muted">{label}</span>
                                            <span class="text-blue">{format!("{share}%")}</span>
                                        </div>
                                        <div class="progress">
                                            <div class="progress__bar" style=format!("width: {share}%")></div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="cyber-card">
                            <h3 class="cyber-heading">"Top Countries"</h3>
                            {a
                                .countries
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <div class="section-head">
                                            <span>{c.country}</span>
                                            <span class="text-purple">{format::count(u64::from(c.users))}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="cyber-card">
                        <h3 class="cyber-heading">"Recent Activity"</h3>
                        {a
                            .recent_activity
                            .into_iter()
                            .map(|entry| {
                                let accent = match entry.kind {
                                    FeedKind::User => "text-blue",
                                    FeedKind::Project => "text-purple",
                                    FeedKind::Report => "text-pink",
                                };
                                view! {
                                    <div class="activity-row">
                                        <span class=format!("activity-row__icon {accent}")>"●"</span>
                                        <div class="activity-row__body">
                                            <div>{entry.action}</div>
                                            <div class="muted muted--small">{entry.details}</div>
                                        </div>
                                        <span class="muted muted--small">{format::date_time(entry.timestamp)}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            }}
        </div>
    }
}
