//! Floating messenger: chat list, conversation view, notifications and
//! connection suggestions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chats and notifications come from the session (`AuthState`); which panel
//! is open and the composer text come from `MessengerState`. Both are app
//! contexts, so the popup keeps its state across route changes.

use leptos::prelude::*;

use crate::components::privacy_settings_modal::PrivacySettingsModal;
use crate::mock;
use crate::net::types::PrivacySection;
use crate::state::auth::AuthState;
use crate::state::messenger::{EMOJIS, MessengerState};
use crate::util::format;

#[component]
pub fn MessengerPopup() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let messenger = expect_context::<RwSignal<MessengerState>>();
    let show_privacy = RwSignal::new(false);

    let viewer = move || auth.with(|a| a.user_id().map(str::to_owned));
    let unread_notifications = move || auth.with(AuthState::unread_notification_count);
    let active_chat = move || messenger.with(|m| m.active_chat.clone());

    // Peer of the open conversation, used by block and report.
    let active_peer = move || {
        let chat_id = active_chat()?;
        let viewer = viewer();
        auth.with(|a| a.chat(&chat_id)?.other_participant(viewer.as_deref()).map(str::to_owned))
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(chat_id) = active_chat() else {
            return;
        };
        let Some(content) = messenger.try_update(MessengerState::take_draft).flatten() else {
            return;
        };
        let author = viewer().unwrap_or_else(|| mock::session::REGULAR_ID.to_owned());
        auth.update(|a| {
            a.send_message(&chat_id, &author, &content, None);
        });
    };

    let on_block = move |_| {
        if let Some(peer) = active_peer() {
            auth.update(|a| a.block_user(&peer));
        }
        messenger.update(MessengerState::after_block);
    };

    let on_report = move |_| {
        if let Some(peer) = active_peer() {
            auth.update(|a| a.report_user(&peer));
        }
        messenger.update(MessengerState::after_report);
    };

    let suggestions_panel = move || {
        mock::session::suggested_connections()
            .into_iter()
            .map(|connection| {
                view! {
                    <div class="messenger-suggestion">
                        <img class="avatar avatar--md" src=connection.avatar.clone() alt=connection.name.clone()/>
                        <div class="messenger-suggestion__body">
                            <div class="messenger-suggestion__name">{connection.name.clone()}</div>
                            <div class="muted">{connection.match_reason.clone()}</div>
                            <div class="tag-list">
                                {connection
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <span class="tag tag--purple">{skill.clone()}</span> })
                                    .collect_view()}
                            </div>
                            <div class="muted muted--small">
                                {format!("{} mutual projects", connection.mutual_projects)}
                            </div>
                        </div>
                        <button
                            class="cyber-button cyber-button--block"
                            on:click=move |_| log::info!("connection requested with {}", connection.id)
                        >
                            "Connect"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    let notifications_panel = move || {
        let notifications = auth.with(|a| a.notifications.clone());
        if notifications.is_empty() {
            return view! { <div class="messenger__empty">"No notifications"</div> }.into_any();
        }
        notifications
            .into_iter()
            .map(|n| {
                let id = n.id.clone();
                view! {
                    <button
                        class="messenger-notification"
                        class:messenger-notification--unread=!n.read
                        on:click=move |_| auth.update(|a| a.mark_notification_as_read(&id))
                    >
                        <img class="avatar avatar--sm" src=n.from_user.avatar.clone() alt=n.from_user.name.clone()/>
                        <div class="messenger-notification__body">
                            <p>{n.content.clone()}</p>
                            <span class="muted muted--small">{format::date_time(n.timestamp)}</span>
                        </div>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    let chat_list = move || {
        let viewer = viewer();
        let chats = auth.with(|a| a.chats.clone());
        if chats.is_empty() {
            return view! { <div class="messenger__empty">"No conversations yet"</div> }.into_any();
        }
        chats
            .into_iter()
            .map(|chat| {
                let peer = chat.other_participant(viewer.as_deref()).unwrap_or_default().to_owned();
                let unread = chat.unread_count(viewer.as_deref());
                let preview = chat.last_message().map(|m| m.content.clone()).unwrap_or_default();
                let chat_id = chat.id.clone();
                let viewer = viewer.clone();
                view! {
                    <button
                        class="messenger-chat"
                        on:click=move |_| {
                            messenger.update(|m| m.open_chat(&chat_id));
                            if let Some(viewer) = viewer.as_deref() {
                                auth.update(|a| a.mark_chat_as_read(&chat_id, viewer));
                            }
                        }
                    >
                        <div class="messenger-chat__head">
                            <span class="messenger-chat__peer">{peer}</span>
                            <Show when=move || unread != 0>
                                <span class="badge badge--pink">{unread}</span>
                            </Show>
                        </div>
                        <p class="messenger-chat__preview">{preview.clone()}</p>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    let conversation = move || {
        let Some(chat_id) = active_chat() else {
            return ().into_any();
        };
        let viewer = viewer();
        let messages = auth.with(|a| a.chat(&chat_id).map(|c| c.messages.clone()).unwrap_or_default());
        messages
            .into_iter()
            .map(|message| {
                let own = viewer.as_deref() == Some(message.user_id.as_str());
                let like_chat = chat_id.clone();
                let like_id = message.id.clone();
                let liker = viewer.clone().unwrap_or_else(|| mock::session::REGULAR_ID.to_owned());
                let edit_id = message.id.clone();
                let edit_content = message.content.clone();
                view! {
                    <div class="messenger-message" class:messenger-message--own=own>
                        <div class="messenger-message__bubble">
                            <p>{message.content.clone()}</p>
                            <span class="muted muted--small">{format::date_time(message.timestamp)}</span>
                            <div class="messenger-message__actions">
                                <Show when=move || own>
                                    <button
                                        class="icon-button"
                                        title="Edit"
                                        on:click={
                                            let edit_id = edit_id.clone();
                                            let edit_content = edit_content.clone();
                                            move |_| messenger.update(|m| m.begin_edit(&edit_id, &edit_content))
                                        }
                                    >
                                        "✎"
                                    </button>
                                </Show>
                                <button
                                    class="icon-button icon-button--pink"
                                    title="Like"
                                    on:click=move |_| auth.update(|a| a.toggle_message_like(&like_chat, &like_id, &liker))
                                >
                                    {format!("♥ {}", message.likes.len())}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="messenger">
            <Show when=move || messenger.with(|m| m.show_suggestions)>
                <div class="cyber-card messenger__panel messenger__panel--raised">
                    <div class="messenger__panel-head">
                        <h3 class="cyber-heading">"Suggested Connections"</h3>
                        <button class="icon-button" on:click=move |_| messenger.update(MessengerState::toggle_suggestions)>
                            "✕"
                        </button>
                    </div>
                    <div class="messenger__panel-body">{suggestions_panel}</div>
                </div>
            </Show>

            <div class="messenger__buttons">
                <button
                    class="cyber-button"
                    title="Suggested connections"
                    on:click=move |_| {
                        messenger.update(|m| {
                            m.toggle_suggestions();
                            m.open = false;
                        })
                    }
                >
                    "👤"
                </button>
                <button
                    class="cyber-button messenger__bell"
                    title="Notifications"
                    on:click=move |_| {
                        messenger.update(|m| {
                            m.toggle_notifications();
                            m.open = false;
                        })
                    }
                >
                    "🔔"
                    <Show when=move || { unread_notifications() > 0 }>
                        <span class="badge badge--pink badge--corner">{unread_notifications}</span>
                    </Show>
                </button>
                <button
                    class="cyber-button"
                    title="Messages"
                    on:click=move |_| {
                        messenger.update(|m| {
                            m.toggle_open();
                            m.show_notifications = false;
                            m.show_suggestions = false;
                        })
                    }
                >
                    "💬"
                </button>
            </div>

            <Show when=move || messenger.with(|m| m.show_notifications)>
                <div class="cyber-card messenger__panel">
                    <div class="messenger__panel-head">
                        <h3 class="cyber-heading">"Notifications"</h3>
                        <button class="icon-button" on:click=move |_| messenger.update(MessengerState::toggle_notifications)>
                            "✕"
                        </button>
                    </div>
                    <div class="messenger__panel-body">{notifications_panel}</div>
                </div>
            </Show>

            <Show when=move || messenger.with(|m| m.open)>
                <div class="cyber-card messenger__panel">
                    <div class="messenger__panel-head">
                        <h3 class="cyber-heading">"Messages"</h3>
                        <button class="cyber-button" title="New message" on:click=move |_| messenger.update(|m| m.show_compose = true)>
                            "+"
                        </button>
                        <button class="icon-button" on:click=move |_| messenger.update(MessengerState::toggle_open)>
                            "✕"
                        </button>
                    </div>
                    <Show
                        when=move || active_chat().is_some()
                        fallback=move || view! { <div class="messenger__panel-body">{chat_list}</div> }
                    >
                        <div class="messenger-conversation">
                            <div class="messenger-conversation__head">
                                <button class="link-button" on:click=move |_| messenger.update(MessengerState::close_chat)>
                                    "‹ Back"
                                </button>
                                <button class="icon-button" on:click=move |_| messenger.update(MessengerState::toggle_chat_options)>
                                    "⋮"
                                </button>
                                <Show when=move || messenger.with(|m| m.show_chat_options)>
                                    <div class="cyber-card messenger-options">
                                        <button class="messenger-options__item text-pink" on:click=on_block>
                                            "Block User"
                                        </button>
                                        <button class="messenger-options__item text-yellow" on:click=on_report>
                                            "Report User"
                                        </button>
                                        <button
                                            class="messenger-options__item text-blue"
                                            on:click=move |_| {
                                                show_privacy.set(true);
                                                messenger.update(|m| m.show_chat_options = false);
                                            }
                                        >
                                            "Privacy Settings"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                            <div class="messenger-conversation__messages">{conversation}</div>
                            <form class="messenger-composer" on:submit=on_send>
                                <input
                                    class="cyber-input"
                                    type="text"
                                    placeholder="Type a message..."
                                    prop:value=move || messenger.with(|m| m.draft.clone())
                                    on:input=move |ev| messenger.update(|m| m.draft = event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="icon-button"
                                    on:click=move |_| messenger.update(MessengerState::toggle_emoji_picker)
                                >
                                    "☺"
                                </button>
                                <button type="submit" class="cyber-button">
                                    "Send"
                                </button>
                                <Show when=move || messenger.with(|m| m.show_emoji_picker)>
                                    <div class="cyber-card emoji-picker">
                                        {EMOJIS
                                            .into_iter()
                                            .map(|emoji| {
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="emoji-picker__item"
                                                        on:click=move |_| messenger.update(|m| m.pick_emoji(emoji))
                                                    >
                                                        {emoji}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </form>
                        </div>
                    </Show>
                </div>
            </Show>

            <Show when=move || messenger.with(|m| m.show_compose)>
                <MessageModal
                    title="New Message"
                    initial=String::new()
                    submit_label="Send Message"
                    on_close=Callback::new(move |()| messenger.update(|m| m.show_compose = false))
                    on_save=Callback::new(move |content: String| {
                        let author = viewer().unwrap_or_else(|| mock::session::REGULAR_ID.to_owned());
                        match active_chat() {
                            Some(chat_id) => auth.update(|a| {
                                a.send_message(&chat_id, &author, &content, None);
                            }),
                            None => log::info!("new message drafted without a conversation"),
                        }
                        messenger.update(|m| m.show_compose = false);
                    })
                />
            </Show>

            <Show when=move || messenger.with(|m| m.editing.is_some())>
                <MessageModal
                    title="Edit Message"
                    initial=messenger.with_untracked(|m| m.editing.as_ref().map(|e| e.content.clone()).unwrap_or_default())
                    submit_label="Update Message"
                    on_close=Callback::new(move |()| messenger.update(MessengerState::cancel_edit))
                    on_save=Callback::new(move |content: String| {
                        let editing = messenger.with_untracked(|m| m.editing.clone());
                        if let (Some(chat_id), Some(editing)) = (active_chat(), editing) {
                            auth.update(|a| {
                                a.edit_message(&chat_id, &editing.id, &content);
                            });
                        }
                        messenger.update(MessengerState::cancel_edit);
                    })
                />
            </Show>

            <Show when=move || show_privacy.get()>
                <PrivacySettingsModal
                    section=PrivacySection::Followers
                    on_close=Callback::new(move |()| show_privacy.set(false))
                />
            </Show>
        </div>
    }
}

/// Compose or edit a single message.
#[component]
fn MessageModal(
    title: &'static str,
    initial: String,
    submit_label: &'static str,
    on_close: Callback<()>,
    on_save: Callback<String>,
) -> impl IntoView {
    let content = RwSignal::new(initial);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        if text.trim().is_empty() {
            return;
        }
        on_save.run(text);
    };

    view! {
        <div class="modal-backdrop">
            <div class="cyber-card modal">
                <div class="modal__head">
                    <h2 class="cyber-heading">{title}</h2>
                    <button class="icon-button" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form class="modal__form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Message Content"</span>
                        <textarea
                            class="cyber-input"
                            placeholder="Type your message..."
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="modal__actions">
                        <button type="button" class="cyber-button cyber-button--muted" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="cyber-button" disabled=move || content.with(|c| c.trim().is_empty())>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
