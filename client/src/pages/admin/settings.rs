//! System settings: one tab per settings section, saved as a whole.

use leptos::prelude::*;

use super::page_header;
use crate::state::admin::settings::{DigestFrequency, SettingsEditor, SettingsTab, SystemSettings, TimeFormat};
#[cfg(feature = "hydrate")]
use crate::state::admin::settings::STATUS_DISPLAY_MS;
use crate::util::format;

/// Languages offered by the localization tab, as `(code, name)`.
const LANGUAGES: [(&str, &str); 8] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ja", "Japanese"),
    ("pt", "Portuguese"),
    ("zh", "Chinese"),
    ("ko", "Korean"),
];

const DATE_FORMATS: [&str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];
const TIMEZONES: [&str; 4] = ["UTC", "America/New_York", "Europe/London", "Asia/Tokyo"];

/// Reads one field out of the settings.
type FieldRead<T> = fn(&SystemSettings) -> T;
type FieldWrite<T> = fn(&mut SystemSettings, T);

fn text_field(editor: RwSignal<SettingsEditor>, label: &'static str, get: FieldRead<String>, set: FieldWrite<String>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="cyber-input"
                type="text"
                prop:value=move || editor.with(|e| get(&e.settings))
                on:input=move |ev| editor.update(|e| set(&mut e.settings, event_target_value(&ev)))
            />
        </label>
    }
}

fn number_field(editor: RwSignal<SettingsEditor>, label: &'static str, get: FieldRead<u32>, set: FieldWrite<u32>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="cyber-input"
                type="number"
                min="0"
                prop:value=move || editor.with(|e| get(&e.settings)).to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse() {
                        editor.update(|e| set(&mut e.settings, value));
                    }
                }
            />
        </label>
    }
}

fn toggle_field(editor: RwSignal<SettingsEditor>, label: &'static str, get: FieldRead<bool>, set: FieldWrite<bool>) -> impl IntoView {
    view! {
        <label class="toggle-field">
            <input
                type="checkbox"
                prop:checked=move || editor.with(|e| get(&e.settings))
                on:change=move |ev| editor.update(|e| set(&mut e.settings, event_target_checked(&ev)))
            />
            <span>{label}</span>
        </label>
    }
}

fn choice_field(
    editor: RwSignal<SettingsEditor>,
    label: &'static str,
    choices: &'static [&'static str],
    get: FieldRead<String>,
    set: FieldWrite<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="cyber-input"
                prop:value=move || editor.with(|e| get(&e.settings))
                on:change=move |ev| editor.update(|e| set(&mut e.settings, event_target_value(&ev)))
            >
                {choices.iter().map(|c| view! { <option value={*c}>{*c}</option> }).collect_view()}
            </select>
        </label>
    }
}

fn scheduled(value: Option<time::OffsetDateTime>) -> String {
    value.map_or_else(|| "Not scheduled".to_owned(), format::date_time)
}

fn tab_body(editor: RwSignal<SettingsEditor>, tab: SettingsTab) -> AnyView {
    match tab {
        SettingsTab::Branding => view! {
            <div class="settings-section">
                {text_field(editor, "Site Name", |s| s.branding.site_name.clone(), |s, v| s.branding.site_name = v)}
                {text_field(editor, "Logo URL", |s| s.branding.logo.clone(), |s, v| s.branding.logo = v)}
                {text_field(editor, "Primary Color", |s| s.branding.primary_color.clone(), |s, v| s.branding.primary_color = v)}
                {text_field(
                    editor,
                    "Secondary Color",
                    |s| s.branding.secondary_color.clone(),
                    |s, v| s.branding.secondary_color = v,
                )}
                {toggle_field(editor, "Dark mode by default", |s| s.branding.dark_mode, |s, v| s.branding.dark_mode = v)}
            </div>
        }
        .into_any(),
        SettingsTab::Email => view! {
            <div class="settings-section">
                {text_field(editor, "Provider", |s| s.email.provider.clone(), |s, v| s.email.provider = v)}
                {text_field(editor, "From Email", |s| s.email.from_email.clone(), |s, v| s.email.from_email = v)}
                {text_field(editor, "From Name", |s| s.email.from_name.clone(), |s, v| s.email.from_name = v)}
                <h4 class="text-blue">"Templates"</h4>
                {toggle_field(editor, "Welcome", |s| s.email.templates.welcome, |s, v| s.email.templates.welcome = v)}
                {toggle_field(
                    editor,
                    "Verification",
                    |s| s.email.templates.verification,
                    |s, v| s.email.templates.verification = v,
                )}
                {toggle_field(
                    editor,
                    "Password Reset",
                    |s| s.email.templates.password_reset,
                    |s, v| s.email.templates.password_reset = v,
                )}
                {toggle_field(
                    editor,
                    "Notification",
                    |s| s.email.templates.notification,
                    |s, v| s.email.templates.notification = v,
                )}
            </div>
        }
        .into_any(),
        SettingsTab::Security => view! {
            <div class="settings-section">
                {toggle_field(
                    editor,
                    "Two-factor authentication",
                    |s| s.security.two_factor_auth,
                    |s, v| s.security.two_factor_auth = v,
                )}
                {number_field(
                    editor,
                    "Minimum password length",
                    |s| u32::from(s.security.password_policy.min_length),
                    |s, v| s.security.password_policy.min_length = u8::try_from(v).unwrap_or(u8::MAX),
                )}
                {toggle_field(
                    editor,
                    "Require numbers",
                    |s| s.security.password_policy.require_numbers,
                    |s, v| s.security.password_policy.require_numbers = v,
                )}
                {toggle_field(
                    editor,
                    "Require symbols",
                    |s| s.security.password_policy.require_symbols,
                    |s, v| s.security.password_policy.require_symbols = v,
                )}
                {toggle_field(
                    editor,
                    "Require uppercase",
                    |s| s.security.password_policy.require_uppercase,
                    |s, v| s.security.password_policy.require_uppercase = v,
                )}
                {number_field(
                    editor,
                    "Session timeout (minutes)",
                    |s| s.security.session_timeout,
                    |s, v| s.security.session_timeout = v,
                )}
                {number_field(
                    editor,
                    "Max login attempts",
                    |s| s.security.max_login_attempts,
                    |s, v| s.security.max_login_attempts = v,
                )}
            </div>
        }
        .into_any(),
        SettingsTab::Notifications => view! {
            <div class="settings-section">
                {toggle_field(editor, "Email notifications", |s| s.notifications.email, |s, v| s.notifications.email = v)}
                {toggle_field(editor, "In-app notifications", |s| s.notifications.in_app, |s, v| s.notifications.in_app = v)}
                {toggle_field(
                    editor,
                    "Desktop notifications",
                    |s| s.notifications.desktop,
                    |s, v| s.notifications.desktop = v,
                )}
                <label class="field">
                    <span class="field__label">"Digest"</span>
                    <select
                        class="cyber-input"
                        prop:value=move || editor.with(|e| e.settings.notifications.digest.as_str())
                        on:change=move |ev| {
                            let digest = DigestFrequency::parse(&event_target_value(&ev));
                            editor.update(|e| e.settings.notifications.digest = digest);
                        }
                    >
                        {DigestFrequency::ALL
                            .into_iter()
                            .map(|d| view! { <option value=d.as_str()>{d.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
        }
        .into_any(),
        SettingsTab::Maintenance => view! {
            <div class="settings-section">
                {toggle_field(editor, "Maintenance mode", |s| s.maintenance.enabled, |s, v| s.maintenance.enabled = v)}
                <label class="field">
                    <span class="field__label">"Message"</span>
                    <textarea
                        class="cyber-input"
                        prop:value=move || editor.with(|e| e.settings.maintenance.message.clone())
                        on:input=move |ev| editor.update(|e| e.settings.maintenance.message = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="detail-grid">
                    <div>
                        <span class="field__label">"Scheduled Start"</span>
                        <p>{move || editor.with(|e| scheduled(e.settings.maintenance.scheduled_start))}</p>
                    </div>
                    <div>
                        <span class="field__label">"Scheduled End"</span>
                        <p>{move || editor.with(|e| scheduled(e.settings.maintenance.scheduled_end))}</p>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        SettingsTab::Localization => view! {
            <div class="settings-section">
                <label class="field">
                    <span class="field__label">"Default Language"</span>
                    <select
                        class="cyber-input"
                        prop:value=move || editor.with(|e| e.settings.localization.default_language.clone())
                        on:change=move |ev| {
                            editor.update(|e| e.settings.localization.default_language = event_target_value(&ev));
                        }
                    >
                        {move || {
                            editor
                                .with(|e| e.settings.localization.available_languages.clone())
                                .into_iter()
                                .map(|code| {
                                    let value = code.clone();
                                    view! { <option value=value>{code}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <div class="field">
                    <span class="field__label">"Available Languages"</span>
                    {LANGUAGES
                        .into_iter()
                        .map(|(code, name)| {
                            view! {
                                <label class="toggle-field">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            editor.with(|e| e.settings.localization.available_languages.iter().any(|l| l == code))
                                        }
                                        on:change=move |_| editor.update(|e| e.toggle_language(code))
                                    />
                                    <span>{format!("{name} ({code})")}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                {choice_field(
                    editor,
                    "Date Format",
                    &DATE_FORMATS,
                    |s| s.localization.date_format.clone(),
                    |s, v| s.localization.date_format = v,
                )}
                <label class="field">
                    <span class="field__label">"Time Format"</span>
                    <select
                        class="cyber-input"
                        prop:value=move || editor.with(|e| e.settings.localization.time_format.as_str())
                        on:change=move |ev| {
                            let format = TimeFormat::parse(&event_target_value(&ev));
                            editor.update(|e| e.settings.localization.time_format = format);
                        }
                    >
                        {TimeFormat::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                {choice_field(
                    editor,
                    "Timezone",
                    &TIMEZONES,
                    |s| s.localization.timezone.clone(),
                    |s, v| s.localization.timezone = v,
                )}
            </div>
        }
        .into_any(),
        SettingsTab::Privacy => view! {
            <div class="settings-section">
                <div class="detail-grid">
                    <div>
                        <span class="field__label">"Terms Last Updated"</span>
                        <p>{move || editor.with(|e| format::date(e.settings.privacy.terms_last_updated))}</p>
                    </div>
                    <div>
                        <span class="field__label">"Privacy Policy Last Updated"</span>
                        <p>{move || editor.with(|e| format::date(e.settings.privacy.privacy_policy_last_updated))}</p>
                    </div>
                </div>
                {toggle_field(
                    editor,
                    "Cookie consent banner",
                    |s| s.privacy.cookie_consent,
                    |s, v| s.privacy.cookie_consent = v,
                )}
                {number_field(
                    editor,
                    "Data retention (days)",
                    |s| s.privacy.data_retention,
                    |s, v| s.privacy.data_retention = v,
                )}
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn SystemSettingsPage() -> impl IntoView {
    let editor = RwSignal::new(SettingsEditor::default());
    let active_tab = Memo::new(move |_| editor.with(|e| e.tab));

    let on_save = move |_| {
        let Some(snapshot) = editor.try_update(SettingsEditor::begin_save).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{MockApi, SettingsApi};

            let result = MockApi.save_settings(&snapshot).await;
            editor.update(|e| e.finish_save(result));
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(STATUS_DISPLAY_MS))).await;
            editor.update(SettingsEditor::clear_status);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    };

    view! {
        <div class="admin-page">
            <div class="section-head">
                {page_header("System Settings", "Configure platform-wide behavior")}
                <button class="cyber-button" disabled=move || editor.with(|e| e.saving) on:click=on_save>
                    {move || if editor.with(|e| e.saving) { "Saving..." } else { "Save Changes" }}
                </button>
            </div>

            {move || {
                editor
                    .with(|e| e.status)
                    .map(|status| {
                        view! {
                            <div class={format!("save-status save-status--{status:?}").to_lowercase()}>{status.message()}</div>
                        }
                    })
            }}

            <div class="profile-tabs">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="profile-tab"
                                class:profile-tab--active=move || editor.with(|e| e.tab == tab)
                                on:click=move |_| editor.update(|e| e.tab = tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="cyber-card">{move || tab_body(editor, active_tab.get())}</div>
        </div>
    }
}
