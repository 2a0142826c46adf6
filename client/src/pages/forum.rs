//! Forum listing with search, category/tag filters, sort and pagination.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::mock::catalog::{FORUM_CATEGORIES, FORUM_TAGS, topics};
use crate::state::auth::AuthState;
use crate::state::forum::{ForumQuery, Topic, TopicSort};
use crate::state::listing::total_pages;
use crate::util::format;

fn chip_class(selected: bool, accent: &str) -> String {
    if selected { format!("chip chip--active chip--{accent}") } else { "chip".to_owned() }
}

fn topic_row(topic: Topic) -> impl IntoView {
    view! {
        <a href=format!("/forum/{}", topic.id) class="cyber-card topic-row">
            <div class="topic-row__main">
                <h3 class="topic-row__title">{topic.title}</h3>
                <p class="muted topic-row__description">{topic.description}</p>
                <div class="tag-list">
                    <span class="tag tag--purple">{topic.category}</span>
                    {topic.tags.into_iter().map(|tag| view! { <span class="tag tag--pink">{tag}</span> }).collect_view()}
                </div>
            </div>
            <div class="topic-row__stats">
                <div class="muted">{format!("{} views", format::count(u64::from(topic.views)))}</div>
                <div class="text-blue">{format!("{} replies", topic.replies)}</div>
                <div class="muted muted--small">{format::date(topic.created_at)}</div>
            </div>
        </a>
    }
}

#[component]
pub fn ForumPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let all_topics = StoredValue::new(topics());
    let query = RwSignal::new(ForumQuery::default());
    let show_filters = RwSignal::new(false);

    let filtered = Memo::new(move |_| query.with(|q| all_topics.with_value(|t| q.filter(t))));
    let pages = Signal::derive(move || filtered.with(|f| total_pages(f.len(), crate::state::forum::TOPICS_PER_PAGE)));
    let page = Signal::derive(move || filtered.with(|f| query.with(|q| q.page_of(f).page)));

    let visible = move || {
        filtered.with(|f| query.with(|q| q.page_of(f).items.to_vec())).into_iter().map(topic_row).collect_view()
    };

    view! {
        <div class="listing-page">
            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search topics..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        query
                            .update(|q| {
                                q.search = event_target_value(&ev);
                                q.page = 1;
                            })
                    }
                />
                <div class="listing-toolbar__actions">
                    <button class="cyber-button" on:click=move |_| show_filters.update(|s| *s = !*s)>
                        "Filter"
                    </button>
                    <Show when=move || auth.with(AuthState::is_authenticated)>
                        <a href="/forum/create" class="cyber-button">
                            "+ New Topic"
                        </a>
                    </Show>
                </div>
            </div>

            <Show when=move || show_filters.get()>
                <div class="cyber-card filter-panel">
                    <div class="filter-panel__group">
                        <div class="field__label">"Categories"</div>
                        {FORUM_CATEGORIES
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <button
                                        class=move || {
                                            chip_class(query.with(|q| q.categories.iter().any(|c| c == category)), "blue")
                                        }
                                        on:click=move |_| query.update(|q| q.toggle_category(category))
                                    >
                                        {category}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="filter-panel__group">
                        <div class="field__label">"Tags"</div>
                        {FORUM_TAGS
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <button
                                        class=move || chip_class(query.with(|q| q.tags.iter().any(|t| t == tag)), "pink")
                                        on:click=move |_| query.update(|q| q.toggle_tag(tag))
                                    >
                                        {tag}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="filter-panel__group">
                        <div class="field__label">"Sort by"</div>
                        <select
                            class="cyber-input"
                            on:change=move |ev| query.update(|q| q.sort = TopicSort::parse(&event_target_value(&ev)))
                        >
                            {TopicSort::ALL
                                .into_iter()
                                .map(|sort| {
                                    view! {
                                        <option value=sort.as_str() selected=move || query.with(|q| q.sort == sort)>
                                            {sort.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </Show>

            <div class="listing">
                <Show
                    when=move || filtered.with(|f| !f.is_empty())
                    fallback=|| view! { <p class="muted listing__empty">"No topics match your filters."</p> }
                >
                    {visible}
                </Show>
            </div>

            <Pagination
                page=page
                total_pages=pages
                on_prev=Callback::new(move |()| query.update(ForumQuery::prev_page))
                on_next=Callback::new(move |()| {
                    let total = pages.get_untracked();
                    query.update(|q| q.next_page(total));
                })
            />
        </div>
    }
}
