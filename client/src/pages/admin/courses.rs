//! Course management: catalog table plus the create/edit modal with its
//! syllabus editor.

use leptos::prelude::*;

use super::{AdminModal, category_filter, category_options, filter_options, labeled_options, page_header, stat_card};
use crate::components::status_badge::select_options;
use crate::state::admin::courses::{Course, CourseDraft, CourseLevel, CourseManagement, SyllabusField};
use crate::state::admin::{EditTarget, filter_value, parse_filter};
use crate::state::moderation::CourseStatus;
use crate::util::format;

fn course_row(course: Course, store: RwSignal<CourseManagement>, draft: RwSignal<CourseDraft>) -> impl IntoView {
    let edit_id = course.id.clone();
    let status_id = course.id.clone();
    let delete_id = course.id.clone();
    view! {
        <tr>
            <td>
                <div class="table-user">
                    {course.thumbnail.map(|src| view! { <img class="table-thumb" src=src alt=""/> })}
                    <div>
                        <div class="text-blue">{course.title}</div>
                        <div class="muted muted--small">
                            {format!("{} · {} · {}", course.instructor.author.name, course.level.as_str(), course.duration)}
                        </div>
                    </div>
                </div>
            </td>
            <td>{course.category}</td>
            <td>
                <select
                    class="cyber-input cyber-input--small"
                    on:change=move |ev| {
                        if let Ok(status) = event_target_value(&ev).parse::<CourseStatus>() {
                            store.update(|s| {
                                s.update_status(&status_id, status);
                            });
                        }
                    }
                >
                    {labeled_options(course.status)}
                </select>
            </td>
            <td>{course.stats.students}</td>
            <td>{format!("{}%", course.stats.completion_rate)}</td>
            <td class="text-yellow">{format!("★ {:.1}", course.stats.rating)}</td>
            <td class="muted">{format::date(course.last_updated)}</td>
            <td class="table-actions">
                <button
                    class="cyber-button cyber-button--small"
                    on:click=move |_| {
                        store.update(|s| s.modal = Some(EditTarget::Edit(edit_id.clone())));
                        draft.set(store.with_untracked(CourseManagement::modal_draft));
                    }
                >
                    "Edit"
                </button>
                <button
                    class="cyber-button cyber-button--small cyber-button--danger"
                    on:click=move |_| {
                        store.update(|s| {
                            s.remove(&delete_id);
                        });
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn CourseModal(store: RwSignal<CourseManagement>, draft: RwSignal<CourseDraft>) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);
    let close = Callback::new(move |()| store.update(|s| s.modal = None));
    let title = Signal::derive(move || {
        let editing = store.with(|s| matches!(s.modal, Some(EditTarget::Edit(_))));
        String::from(if editing { "Edit Course" } else { "Create New Course" })
    });

    let field = move |get: fn(&CourseDraft) -> String| move || draft.with(get);
    let set = move |apply: fn(&mut CourseDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| apply(d, value));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = store.try_update(|s| {
            let target = s.modal.clone();
            let existing = target.as_ref().and_then(EditTarget::existing);
            let result = draft.with_untracked(|d| s.save(existing, d));
            if result.is_ok() {
                s.modal = None;
            }
            result
        });
        if let Some(Err(message)) = result {
            error.set(Some(message));
        }
    };

    let section_input = move |index: usize, field: SyllabusField, placeholder: &'static str| {
        let value = move || {
            draft.with(|d| {
                d.syllabus
                    .get(index)
                    .map(|s| match field {
                        SyllabusField::Title => s.title.clone(),
                        SyllabusField::Duration => s.duration.clone(),
                        SyllabusField::Topics => s.topics.join(", "),
                    })
                    .unwrap_or_default()
            })
        };
        view! {
            <input
                class="cyber-input"
                type="text"
                placeholder=placeholder
                prop:value=value
                on:change=move |ev| draft.update(|d| d.update_section(index, field, &event_target_value(&ev)))
            />
        }
    };

    view! {
        <AdminModal title=title on_close=close>
            <form class="modal__form" on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <label class="field">
                    <span class="field__label">"Course Title"</span>
                    <input class="cyber-input" type="text" prop:value=field(|d| d.title.clone()) on:input=set(|d, v| d.title = v)/>
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea class="cyber-input" prop:value=field(|d| d.description.clone()) on:input=set(|d, v| d.description = v)></textarea>
                </label>
                <div class="form-grid">
                    <label class="field">
                        <span class="field__label">"Category"</span>
                        <input class="cyber-input" type="text" prop:value=field(|d| d.category.clone()) on:input=set(|d, v| d.category = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Level"</span>
                        <select class="cyber-input" on:change=set(|d, v| d.level = CourseLevel::parse(&v))>
                            {move || {
                                let current = draft.with(|d| d.level.as_str().to_owned());
                                select_options(CourseLevel::ALL.map(|l| (l.as_str(), l.as_str())), current)
                            }}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Duration"</span>
                        <input
                            class="cyber-input"
                            type="text"
                            placeholder="e.g. 8 weeks"
                            prop:value=field(|d| d.duration.clone())
                            on:input=set(|d, v| d.duration = v)
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Thumbnail URL"</span>
                        <input class="cyber-input" type="url" prop:value=field(|d| d.thumbnail.clone()) on:input=set(|d, v| d.thumbnail = v)/>
                    </label>
                </div>
                <label class="field">
                    <span class="field__label">"Prerequisites (comma-separated)"</span>
                    <input
                        class="cyber-input"
                        type="text"
                        prop:value=field(|d| d.prerequisites.clone())
                        on:input=set(|d, v| d.prerequisites = v)
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Tags (comma-separated)"</span>
                    <input class="cyber-input" type="text" prop:value=field(|d| d.tags.clone()) on:input=set(|d, v| d.tags = v)/>
                </label>
                <label class="field">
                    <span class="field__label">"Website"</span>
                    <input class="cyber-input" type="url" prop:value=field(|d| d.website.clone()) on:input=set(|d, v| d.website = v)/>
                </label>

                <div class="field">
                    <div class="section-head">
                        <span class="field__label">"Syllabus"</span>
                        <button type="button" class="cyber-button cyber-button--small" on:click=move |_| draft.update(CourseDraft::add_section)>
                            "+ Add Section"
                        </button>
                    </div>
                    {move || {
                        (0..draft.with(|d| d.syllabus.len()))
                            .map(|index| {
                                view! {
                                    <div class="cyber-card syllabus-row">
                                        {section_input(index, SyllabusField::Title, "Section title")}
                                        {section_input(index, SyllabusField::Duration, "Duration")}
                                        {section_input(index, SyllabusField::Topics, "Topics (comma-separated)")}
                                        <button
                                            type="button"
                                            class="icon-button icon-button--pink"
                                            on:click=move |_| draft.update(|d| d.remove_section(index))
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="modal__actions">
                    <button type="button" class="cyber-button cyber-button--muted" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="cyber-button">
                        "Save Course"
                    </button>
                </div>
            </form>
        </AdminModal>
    }
}

#[component]
pub fn CourseManagementPage() -> impl IntoView {
    let store = RwSignal::new(CourseManagement::default());
    let draft = RwSignal::new(CourseDraft::default());
    let filtered = Memo::new(move |_| store.with(CourseManagement::filtered));

    let open_create = move |_| {
        store.update(|s| s.modal = Some(EditTarget::Create));
        draft.set(CourseDraft::default());
    };

    view! {
        <div class="admin-page">
            <div class="section-head">
                {page_header("Course Management", "Curate courses, syllabi and instructors")}
                <button class="cyber-button" on:click=open_create>
                    "+ New Course"
                </button>
            </div>

            <div class="stat-grid">
                {move || {
                    store
                        .with(|s| {
                            view! {
                                {stat_card("Total Courses", s.courses.len().to_string(), "blue")}
                                {stat_card("Active", s.active_count().to_string(), "purple")}
                                {stat_card("Pending Review", s.pending_count().to_string(), "pink")}
                                {stat_card("Average Rating", format!("{:.1}", s.average_rating()), "yellow")}
                            }
                        })
                }}
            </div>

            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search courses..."
                    prop:value=move || store.with(|s| s.filter.search.clone())
                    on:input=move |ev| store.update(|s| s.filter.search = event_target_value(&ev))
                />
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.category = category_filter(event_target_value(&ev)))
                >
                    {move || store.with(|s| category_options(s.categories(), s.filter.category.clone()))}
                </select>
                <select
                    class="cyber-input"
                    on:change=move |ev| store.update(|s| s.filter.status = parse_filter(&event_target_value(&ev)))
                >
                    {move || filter_options::<CourseStatus>("All Status", store.with(|s| filter_value(s.filter.status.as_ref())))}
                </select>
            </div>

            <div class="cyber-card table-card">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Course"</th>
                            <th>"Category"</th>
                            <th>"Status"</th>
                            <th>"Students"</th>
                            <th>"Completion"</th>
                            <th>"Rating"</th>
                            <th>"Updated"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{move || filtered.get().into_iter().map(|c| course_row(c, store, draft)).collect_view()}</tbody>
                </table>
            </div>

            <Show when=move || store.with(|s| s.modal.is_some())>
                <CourseModal store=store draft=draft/>
            </Show>
        </div>
    }
}
