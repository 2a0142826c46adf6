//! Role management: role cards with their permissions and a create/edit
//! modal over the grouped permission catalog.

use leptos::prelude::*;

use super::{AdminModal, page_header};
use crate::state::admin::EditTarget;
use crate::state::admin::roles::{Role, RoleDraft, RoleManagement};
use crate::util::format;

fn role_card(role: Role, store: RwSignal<RoleManagement>, draft: RwSignal<RoleDraft>) -> impl IntoView {
    let edit_id = role.id.clone();
    let delete_id = role.id.clone();
    let permission_names =
        store.with_untracked(|s| role.permissions.iter().map(|p| s.permission_name(p).to_owned()).collect::<Vec<_>>());
    view! {
        <div class="cyber-card role-card">
            <div class="section-head">
                <div>
                    <h3 class="cyber-heading">{role.name}</h3>
                    <p class="muted muted--small">{role.description}</p>
                </div>
                <div class="table-actions">
                    <button
                        class="cyber-button cyber-button--small"
                        on:click=move |_| {
                            store.update(|s| s.modal = Some(EditTarget::Edit(edit_id.clone())));
                            draft.set(store.with_untracked(RoleManagement::modal_draft));
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
                </div>
            </div>
            <div class="tag-list">
                {permission_names.into_iter().map(|p| view! { <span class="tag tag--blue">{p}</span> }).collect_view()}
            </div>
            <div class="section-head muted muted--small">
                <span>{format!("{} users", role.users)}</span>
                <span>{format!("Updated {}", format::date(role.updated_at))}</span>
            </div>
        </div>
    }
}

#[component]
fn RoleModal(store: RwSignal<RoleManagement>, draft: RwSignal<RoleDraft>) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);
    let close = Callback::new(move |()| store.update(|s| s.modal = None));
    let title = Signal::derive(move || {
        let editing = store.with(|s| matches!(s.modal, Some(EditTarget::Edit(_))));
        String::from(if editing { "Edit Role" } else { "Create New Role" })
    });
    let groups = store.with_untracked(RoleManagement::grouped_permissions);

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

    view! {
        <AdminModal title=title on_close=close>
            <form class="modal__form" on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <label class="field">
                    <span class="field__label">"Role Name"</span>
                    <input
                        class="cyber-input"
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="cyber-input"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="field">
                    <span class="field__label">"Permissions"</span>
                    {groups
                        .into_iter()
                        .map(|(category, permissions)| {
                            view! {
                                <div class="permission-group">
                                    <h4 class="text-blue">{category.label()}</h4>
                                    {permissions
                                        .into_iter()
                                        .map(|p| {
                                            let id = p.id;
                                            view! {
                                                <label class="permission">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || draft.with(|d| d.has(id))
                                                        on:change=move |_| draft.update(|d| d.toggle_permission(id))
                                                    />
                                                    <div>
                                                        <div>{p.name}</div>
                                                        <div class="muted muted--small">{p.description}</div>
                                                    </div>
                                                </label>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="modal__actions">
                    <button type="button" class="cyber-button cyber-button--muted" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="cyber-button">
                        "Save Role"
                    </button>
                </div>
            </form>
        </AdminModal>
    }
}

#[component]
pub fn RoleManagementPage() -> impl IntoView {
    let store = RwSignal::new(RoleManagement::default());
    let draft = RwSignal::new(RoleDraft::default());
    let filtered = Memo::new(move |_| store.with(RoleManagement::filtered));

    let open_create = move |_| {
        store.update(|s| s.modal = Some(EditTarget::Create));
        draft.set(RoleDraft::default());
    };

    view! {
        <div class="admin-page">
            <div class="section-head">
                {page_header("Role Management", "Define roles and the permissions they grant")}
                <button class="cyber-button" on:click=open_create>
                    "+ New Role"
                </button>
            </div>

            <div class="listing-toolbar">
                <input
                    class="cyber-input listing-toolbar__search"
                    type="text"
                    placeholder="Search roles..."
                    prop:value=move || store.with(|s| s.search.clone())
                    on:input=move |ev| store.update(|s| s.search = event_target_value(&ev))
                />
            </div>

            <div class="card-grid">{move || filtered.get().into_iter().map(|r| role_card(r, store, draft)).collect_view()}</div>

            <Show when=move || store.with(|s| s.modal.is_some())>
                <RoleModal store=store draft=draft/>
            </Show>
        </div>
    }
}
