//! Subject management: paged table, search, create/edit/delete, CSV import.

use leptos::prelude::*;

use super::paged_list;
use crate::components::banner::BannerView;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::csv_upload::CsvUpload;
use crate::components::layout::Layout;
use crate::components::pagination_bar::PaginationBar;
use crate::components::search_box::SearchBox;
use crate::components::subject_form::SubjectFormModal;
use crate::net::api::{self, Resource};
use crate::net::types::Subject;
use crate::state::banner::Banner;
use crate::state::list::ListState;
use crate::state::session::Segment;

#[component]
pub fn SubjectsPage() -> impl IntoView {
    let (list, refresh) = paged_list(|query| async move { api::list_subjects(&query).await });
    let banner = RwSignal::new(None::<Banner>);
    // None: closed. Some(None): create. Some(Some(_)): edit.
    let editing = RwSignal::new(None::<Option<Subject>>);
    let pending_delete = RwSignal::new(None::<Subject>);
    let deleting = RwSignal::new(false);

    let on_saved = Callback::new(move |subject: Subject| {
        let verb = if editing.get_untracked().flatten().is_some() { "Updated" } else { "Created" };
        banner.set(Some(Banner::success(format!("{verb} {}.", subject.name))));
        editing.set(None);
        refresh.update(|n| *n += 1);
    });
    let on_close = Callback::new(move |()| editing.set(None));

    let on_confirm_delete = Callback::new(move |()| {
        let Some(subject) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::delete_subject(subject.id).await;
            deleting.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    banner.set(Some(Banner::success(format!("Deleted {}.", subject.name))));
                    list.update(ListState::after_delete);
                    refresh.update(|n| *n += 1);
                }
                Err(e) => banner.set(Some(Banner::from_api(&e))),
            }
        });
    });

    view! {
        <Layout segment=Segment::School title="Subjects">
            <BannerView banner/>
            <div class="list-toolbar">
                <SearchBox
                    placeholder="Search subjects..."
                    on_search=Callback::new(move |text: String| list.update(|s| s.set_search(text)))
                />
                <select
                    class="field__input list-toolbar__filter"
                    on:change=move |ev| {
                        let active = match event_target_value(&ev).as_str() {
                            "active" => Some(true),
                            "inactive" => Some(false),
                            _ => None,
                        };
                        list.update(|s| s.set_active_filter(active));
                    }
                >
                    <option value="">"All"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
                <span class="list-toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>"+ New Subject"</button>
            </div>
            <CsvUpload
                resource=Resource::Subjects
                hint="Columns: name, code, description"
                on_done=Callback::new(move |()| refresh.update(|n| *n += 1))
            />
            <Show when=move || list.get().error.is_some()>
                <p class="banner banner--error">{move || list.get().error.unwrap_or_default()}</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Code"</th>
                        <th>"Description"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = list.get();
                        if state.loading && state.items.is_empty() {
                            return view! { <tr><td colspan="5">"Loading subjects..."</td></tr> }.into_any();
                        }
                        if state.items.is_empty() {
                            return view! { <tr><td colspan="5">"No subjects yet."</td></tr> }.into_any();
                        }
                        state
                            .items
                            .into_iter()
                            .map(|subject| {
                                let edit = subject.clone();
                                let remove = subject.clone();
                                view! {
                                    <tr>
                                        <td>{subject.name}</td>
                                        <td class="table__mono">{subject.code}</td>
                                        <td>{subject.description.unwrap_or_default()}</td>
                                        <td>{status_badge(subject.is_active)}</td>
                                        <td class="table__actions">
                                            <button class="btn btn--small" on:click=move |_| editing.set(Some(Some(edit.clone())))>
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| pending_delete.set(Some(remove.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <PaginationBar
                pagination=Signal::derive(move || list.get().pagination())
                on_page=Callback::new(move |page| list.update(|s| s.go_to(page)))
            />
            {move || {
                editing
                    .get()
                    .map(|initial| view! { <SubjectFormModal initial on_saved on_close/> })
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete subject"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|s| format!("Delete {} ({})? This cannot be undone.", s.name, s.code))
                            .unwrap_or_default()
                    })
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </Layout>
    }
}

/// Active/inactive pill shared by the CRUD tables.
pub(crate) fn status_badge(active: bool) -> impl IntoView {
    let (class, label) = if active { ("badge badge--active", "Active") } else { ("badge badge--inactive", "Inactive") };
    view! { <span class=class>{label}</span> }
}
