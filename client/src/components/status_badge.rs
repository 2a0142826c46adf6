//! Pill label for moderation statuses, roles and other enum values.

use leptos::prelude::*;

/// `value` picks the colour through the `status-badge--{value}` modifier.
#[component]
pub fn StatusBadge(value: &'static str, label: &'static str) -> impl IntoView {
    view! { <span class=format!("status-badge status-badge--{value}")>{label}</span> }
}

/// Select options for every `(value, label)` pair, marking `current`.
pub fn select_options(options: impl IntoIterator<Item = (&'static str, &'static str)>, current: String) -> impl IntoView {
    options
        .into_iter()
        .map(|(value, label)| view! { <option value=value selected={current == value}>{label}</option> })
        .collect_view()
}
