//! Topic thread: body, like toggle, replies and the reply form.

use leptos::prelude::*;

use super::{NotFound, detail_state};
use crate::state::auth::AuthState;
use crate::state::forum::TopicDetailState;
use crate::util::format;

#[component]
pub fn TopicDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let (_, thread) = detail_state(TopicDetailState::load);

    let on_reply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(author) = auth.with_untracked(|a| a.user.as_ref().map(crate::net::types::User::author)) else {
            return;
        };
        thread.update(|t| {
            if let Some(t) = t {
                t.submit_reply(author);
            }
        });
    };

    let replies = move || {
        thread
            .with(|t| t.as_ref().map(|t| t.replies.clone()).unwrap_or_default())
            .into_iter()
            .map(|reply| {
                let id = reply.id.clone();
                view! {
                    <div class="cyber-card reply">
                        <img class="avatar avatar--md" src=reply.author.avatar alt=reply.author.name.clone()/>
                        <div class="reply__body">
                            <div class="reply__head">
                                <span class="reply__author">{reply.author.name.clone()}</span>
                                <span class="muted muted--small">{format::date_time(reply.timestamp)}</span>
                                <button
                                    class="cyber-button cyber-button--small"
                                    class:text-pink=reply.liked
                                    on:click=move |_| {
                                        thread.update(|t| {
                                            if let Some(t) = t {
                                                t.toggle_reply_like(&id);
                                            }
                                        })
                                    }
                                >
                                    {format!("👍 {}", reply.likes)}
                                </button>
                            </div>
                            <p>{reply.content}</p>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || thread.with(Option::is_some)
            fallback=|| view! { <NotFound what="Topic" back="/forum"/> }
        >
            {move || {
                thread
                    .with(|t| t.as_ref().map(|t| (t.topic.clone(), t.liked, t.like_count)))
                    .map(|(topic, liked, likes)| {
                        view! {
                            <div class="cyber-card topic">
                                <div class="topic__head">
                                    <div class="topic__author">
                                        <img class="avatar avatar--md" src=topic.author.avatar alt=topic.author.name.clone()/>
                                        <div>
                                            <div class="topic__author-name">{topic.author.name.clone()}</div>
                                            <div class="muted muted--small">{format::date(topic.created_at)}</div>
                                        </div>
                                    </div>
                                    <div class="topic__actions">
                                        <span class="muted">{format!("{} views", topic.views)}</span>
                                        <button
                                            class="cyber-button cyber-button--small"
                                            class:text-pink=liked
                                            on:click=move |_| {
                                                thread.update(|t| {
                                                    if let Some(t) = t {
                                                        t.toggle_like();
                                                    }
                                                })
                                            }
                                        >
                                            {format!("👍 {likes}")}
                                        </button>
                                    </div>
                                </div>
                                <h1 class="cyber-heading">{topic.title}</h1>
                                <div class="tag-list">
                                    <span class="tag tag--purple">{topic.category}</span>
                                    {topic
                                        .tags
                                        .into_iter()
                                        .map(|tag| view! { <span class="tag tag--pink">{tag}</span> })
                                        .collect_view()}
                                </div>
                                <div class="prose">
                                    {topic
                                        .content
                                        .split('\n')
                                        .map(|line| view! { <p>{line.to_owned()}</p> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="replies">
                <h2 class="cyber-heading">
                    {move || format!("Replies ({})", thread.with(|t| t.as_ref().map_or(0, |t| t.replies.len())))}
                </h2>
                {replies}
                <Show when=move || auth.with(AuthState::is_authenticated)>
                    <form class="cyber-card reply-form" on:submit=on_reply>
                        <textarea
                            class="cyber-input"
                            placeholder="Write your reply..."
                            prop:value=move || thread.with(|t| t.as_ref().map(|t| t.draft.clone()).unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                thread.update(|t| {
                                    if let Some(t) = t {
                                        t.draft = value;
                                    }
                                });
                            }
                        ></textarea>
                        <button
                            type="submit"
                            class="cyber-button"
                            disabled=move || !thread.with(|t| t.as_ref().is_some_and(TopicDetailState::can_submit))
                        >
                            "Reply"
                        </button>
                    </form>
                </Show>
            </div>
        </Show>
    }
}
