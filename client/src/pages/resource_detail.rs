//! Resource viewer: video, chapters, comments, rating, live chat and the
//! attached assignment.

use leptos::prelude::*;

use super::{NotFound, detail_state, update_loaded};
use crate::state::auth::AuthState;
use crate::state::resources::{ResourceDetail, ResourceDetailState, SubmissionStatus};
use crate::util::format;

/// Seconds between simulated viewer chat lines.
#[cfg(feature = "hydrate")]
const VIEWER_CHATTER_SECS: u64 = 30;

fn status_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Pending => "tag tag--yellow",
        SubmissionStatus::Approved => "tag tag--blue",
        SubmissionStatus::Rejected => "tag tag--pink",
    }
}

fn overview(resource: ResourceDetail) -> impl IntoView {
    let has_video = !resource.video_url.is_empty();
    let chapters = resource.chapters;
    view! {
        <div class="cyber-card video-frame">
            {if has_video {
                view! { <iframe src=resource.video_url allowfullscreen=true></iframe> }.into_any()
            } else {
                view! { <img src=resource.thumbnail alt=resource.title.clone()/> }.into_any()
            }}
        </div>
        <div class="cyber-card">
            <h1 class="cyber-heading">{resource.title}</h1>
            <div class="resource-meta">
                <span class="text-blue">{format!("👁 {} views", format::count(u64::from(resource.views)))}</span>
                <span class="text-pink">{format!("⏱ {}", resource.duration)}</span>
                <span class="text-purple">{format!("📖 {}", resource.level)}</span>
                <span class="cyber-button cyber-button--small">{format!("👍 {}", resource.likes)}</span>
            </div>
            <div class="tag-list">
                {resource.tags.into_iter().map(|t| view! { <span class="tag tag--blue">{t}</span> }).collect_view()}
            </div>
            <p class="pre-line">{resource.description}</p>
            <div class="instructor">
                <img class="avatar avatar--md" src=resource.instructor.avatar alt=resource.instructor.name.clone()/>
                <div>
                    <div class="text-blue">{resource.instructor.name}</div>
                    <div class="muted muted--small">{resource.instructor.bio}</div>
                </div>
            </div>
        </div>
        {(!chapters.is_empty())
            .then(|| {
                view! {
                    <div class="cyber-card">
                        <h2 class="cyber-heading">"Chapters"</h2>
                        {chapters
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <div class="chapter-row">
                                        <span>{c.title}</span>
                                        <span class="text-blue">{c.time}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}
    }
}

#[component]
pub fn ResourceDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let (_, viewer) = detail_state(ResourceDetailState::load);

    let resource = Memo::new(move |_| viewer.with(|v| v.as_ref().map(|v| v.resource.clone())));
    let read = move |f: fn(&ResourceDetailState) -> String| move || viewer.with(|v| v.as_ref().map(f).unwrap_or_default());
    let signed_in = move || auth.with(AuthState::is_authenticated);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(VIEWER_CHATTER_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                viewer.try_update(|v| {
                    if let Some(v) = v {
                        v.viewer_chatter();
                    }
                });
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(author) = auth.with_untracked(|a| a.user.as_ref().map(|u| u.author())) else {
            return;
        };
        update_loaded(viewer, |v| {
            v.add_comment(author);
        });
    };

    let on_chat = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        update_loaded(viewer, |v| {
            v.send_chat();
        });
    };

    let on_submit_assignment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(author) = auth.with_untracked(|a| a.user.as_ref().map(|u| u.author())) else {
            return;
        };
        update_loaded(viewer, |v| {
            v.submit_assignment(author);
        });
    };

    let comments = move || {
        viewer
            .with(|v| v.as_ref().map(|v| v.comments.clone()).unwrap_or_default())
            .into_iter()
            .map(|c| {
                let id = c.id.clone();
                view! {
                    <div class="comment">
                        <img class="avatar avatar--sm" src=c.author.avatar alt=c.author.name.clone()/>
                        <div class="comment__body">
                            <div class="comment__head">
                                <span class="text-blue">{c.author.name}</span>
                                <span class="muted muted--small">{format::date_time(c.timestamp)}</span>
                                <button
                                    class="cyber-button cyber-button--small"
                                    class:text-pink=c.liked
                                    on:click=move |_| update_loaded(viewer, |v| v.toggle_comment_like(&id))
                                >
                                    {format!("👍 {}", c.likes)}
                                </button>
                            </div>
                            <p>{c.content}</p>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let stars = move || {
        let rating = viewer.with(|v| v.as_ref().map_or(0, |v| v.rating));
        (1..=5u8)
            .map(|star| {
                view! {
                    <button
                        class="star"
                        class:text-yellow=star <= rating
                        on:click=move |_| update_loaded(viewer, |v| {
                            v.rate(star);
                        })
                    >
                        "★"
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || resource.with(Option::is_some) fallback=|| view! { <NotFound what="Resource" back="/resources"/> }>
            <div class="resource-page">
                <div class="resource-page__main">
                    {move || resource.get().map(overview)}

                    <div class="cyber-card">
                        <h2 class="cyber-heading">
                            {move || format!("Comments ({})", viewer.with(|v| v.as_ref().map_or(0, |v| v.comments.len())))}
                        </h2>
                        <Show
                            when=signed_in
                            fallback=|| view! { <p class="muted">"Log in to join the discussion."</p> }
                        >
                            <form class="comment-form" on:submit=on_comment>
                                <textarea
                                    class="cyber-input"
                                    placeholder="Add a comment..."
                                    prop:value=read(|v| v.comment_draft.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        update_loaded(viewer, |v| v.comment_draft = value);
                                    }
                                ></textarea>
                                <button
                                    type="submit"
                                    class="cyber-button"
                                    disabled=move || viewer.with(|v| v.as_ref().is_none_or(|v| v.comment_draft.trim().is_empty()))
                                >
                                    "Post Comment"
                                </button>
                            </form>
                        </Show>
                        {comments}
                    </div>
                </div>

                <aside class="resource-page__side">
                    <div class="cyber-card">
                        <h3 class="cyber-heading">"Rate this Tutorial"</h3>
                        <div class="star-row">{stars}</div>
                        <div class="muted muted--small">
                            {move || resource.with(|r| r.as_ref().map(|r| format!("Average rating: {}/5", r.rating)).unwrap_or_default())}
                        </div>
                    </div>

                    <div class="cyber-card">
                        <h3 class="cyber-heading">"Active Viewers"</h3>
                        {move || {
                            viewer
                                .with(|v| v.as_ref().map(|v| v.viewers.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|a| {
                                    view! {
                                        <div class="viewer-row">
                                            <span class="avatar-status">
                                                <img class="avatar avatar--sm" src=a.avatar alt=a.name.clone()/>
                                                <span class="avatar-status__dot"></span>
                                            </span>
                                            <span>{a.name}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <div class="cyber-card">
                        <h3 class="cyber-heading">"Live Chat"</h3>
                        <div class="live-chat">
                            {move || {
                                viewer
                                    .with(|v| v.as_ref().map(|v| v.chat.clone()).unwrap_or_default())
                                    .into_iter()
                                    .map(|line| {
                                        view! {
                                            <div class="live-chat__line">
                                                <span class="text-blue">{format!("{}: ", line.user)}</span>
                                                <span>{line.message}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <form class="live-chat__form" on:submit=on_chat>
                            <input
                                class="cyber-input"
                                type="text"
                                placeholder="Type a message..."
                                prop:value=read(|v| v.chat_draft.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    update_loaded(viewer, |v| v.chat_draft = value);
                                }
                            />
                            <button type="submit" class="cyber-button">
                                "➤"
                            </button>
                        </form>
                    </div>

                    <div class="cyber-card">
                        <div class="section-head">
                            <h3 class="cyber-heading">"Assignment"</h3>
                            <button
                                class="cyber-button cyber-button--small"
                                on:click=move |_| update_loaded(viewer, ResourceDetailState::toggle_assignment)
                            >
                                {move || if viewer.with(|v| v.as_ref().is_some_and(|v| v.show_assignment)) { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        <Show when=move || viewer.with(|v| v.as_ref().is_some_and(|v| v.show_assignment))>
                            {move || {
                                viewer
                                    .with(|v| v.as_ref().map(|v| v.assignment.clone()))
                                    .map(|a| {
                                        view! {
                                            <h4 class="text-blue">{a.title}</h4>
                                            <p class="pre-line muted--small">{a.description}</p>
                                            <div class="muted muted--small">{format!("Due: {}", format::date(a.due_date))}</div>
                                            <div class="submissions">
                                                {a
                                                    .submissions
                                                    .into_iter()
                                                    .map(|s| {
                                                        view! {
                                                            <div class="submission">
                                                                <img class="avatar avatar--xs" src=s.author.avatar alt=s.author.name.clone()/>
                                                                <span>{s.author.name}</span>
                                                                <span class=status_class(s.status)>{s.status.label()}</span>
                                                                {s.feedback.map(|f| view! { <p class="muted muted--small">{f}</p> })}
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })
                            }}
                            <Show
                                when=signed_in
                                fallback=|| view! { <p class="muted">"Log in to submit your work."</p> }
                            >
                                <form class="assignment-form" on:submit=on_submit_assignment>
                                    <input
                                        class="cyber-input"
                                        type="url"
                                        placeholder="Enter GitHub repository URL"
                                        prop:value=read(|v| v.submission_url.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            update_loaded(viewer, |v| v.submission_url = value);
                                        }
                                    />
                                    <button type="submit" class="cyber-button">
                                        "Submit Assignment"
                                    </button>
                                </form>
                            </Show>
                        </Show>
                    </div>
                </aside>
            </div>
        </Show>
    }
}
