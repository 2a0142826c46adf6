//! Back-office pages mounted under `/admin`.
//!
//! Every page owns one store from `state::admin` in an `RwSignal` and renders
//! a header, a stats row, a filter toolbar, a table and an optional modal.
//! The helpers below keep those pieces uniform across pages.

pub mod content;
pub mod courses;
pub mod dashboard;
pub mod messages;
pub mod projects;
pub mod roles;
pub mod settings;
pub mod users;

use leptos::prelude::*;

use crate::components::status_badge::{StatusBadge, select_options};
use crate::state::admin::{ALL_FILTER, Report};
use crate::state::moderation::Labeled;
use crate::util::format;

pub(crate) fn page_header(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="admin-page__header">
            <h1 class="cyber-heading">{title}</h1>
            <p class="muted">{subtitle}</p>
        </div>
    }
}

pub(crate) fn stat_card(label: &'static str, value: String, accent: &'static str) -> impl IntoView {
    view! {
        <div class="cyber-card stat-tile">
            <div class="muted muted--small">{label}</div>
            <div class=format!("stat-tile__value text-{accent}")>{value}</div>
        </div>
    }
}

/// Badge coloured by the value's `<select>` string.
pub(crate) fn badge<L: Labeled>(value: L) -> impl IntoView {
    view! { <StatusBadge value=value.value() label=value.label()/> }
}

/// Every value of `L`, with `current` selected.
pub(crate) fn labeled_options<L: Labeled>(current: L) -> impl IntoView {
    select_options(L::VALUES.iter().map(|v| (v.value(), v.label())), current.value().to_owned())
}

/// An "all" option followed by every value of `L`. `current` is the
/// `<select>` value, `ALL_FILTER` when no filter is set.
pub(crate) fn filter_options<L: Labeled>(all_label: &'static str, current: String) -> impl IntoView {
    let values = L::VALUES.iter().map(|v| (v.value(), v.label()));
    select_options(std::iter::once((ALL_FILTER, all_label)).chain(values), current)
}

/// Category `<select>` options built from the store's distinct values.
pub(crate) fn category_options(categories: Vec<String>, current: Option<String>) -> impl IntoView {
    let current = current.unwrap_or_else(|| ALL_FILTER.to_owned());
    view! {
        <option value=ALL_FILTER selected={current == ALL_FILTER}>
            "All Categories"
        </option>
        {categories
            .into_iter()
            .map(|c| {
                let selected = c == current;
                let value = c.clone();
                view! {
                    <option value=value selected=selected>
                        {c}
                    </option>
                }
            })
            .collect_view()}
    }
}

/// Category filter value; `ALL_FILTER` clears it.
pub(crate) fn category_filter(value: String) -> Option<String> {
    (value != ALL_FILTER).then_some(value)
}

pub(crate) fn report_list(reports: Vec<Report>) -> impl IntoView {
    if reports.is_empty() {
        return view! { <p class="muted">"No reports filed."</p> }.into_any();
    }
    reports
        .into_iter()
        .map(|r| {
            view! {
                <div class="cyber-card report">
                    <div class="section-head">
                        <span class="text-pink">{r.reason}</span>
                        {badge(r.status)}
                    </div>
                    <p class="muted--small">{r.description}</p>
                    <div class="muted muted--small">
                        {format!("Reported by {} on {}", r.reported_by.name, format::date(r.submitted_at))}
                    </div>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

/// Centered dialog with a title bar and close button.
#[component]
pub(crate) fn AdminModal(#[prop(into)] title: Signal<String>, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="cyber-card modal modal--wide">
                <div class="modal__head">
                    <h2 class="cyber-heading">{move || title.get()}</h2>
                    <button class="icon-button" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
