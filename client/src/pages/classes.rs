//! Class management: paged table, search, create/edit/delete, CSV import.

use leptos::prelude::*;

use super::subjects::status_badge;
use super::{load_once, paged_list};
use crate::components::banner::BannerView;
use crate::components::class_form::ClassFormModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::csv_upload::CsvUpload;
use crate::components::layout::Layout;
use crate::components::pagination_bar::PaginationBar;
use crate::components::search_box::SearchBox;
use crate::net::api::{self, ALL_ROWS_PAGE_SIZE, ListQuery, Resource};
use crate::net::types::{ClassRoom, Staff};
use crate::state::banner::Banner;
use crate::state::list::ListState;
use crate::state::session::Segment;

/// Name of the assigned class teacher, if known.
fn teacher_name(teachers: &[Staff], id: Option<i64>) -> String {
    id.and_then(|id| teachers.iter().find(|t| t.id == id))
        .map_or_else(|| "—".to_owned(), Staff::full_name)
}

#[component]
pub fn ClassesPage() -> impl IntoView {
    let (list, refresh) = paged_list(|query| async move { api::list_classes(&query).await });
    let teachers = RwSignal::new(None::<Vec<Staff>>);
    let teacher_error = RwSignal::new(None::<String>);
    load_once(teachers, teacher_error, || async {
        let query = ListQuery { page_size: ALL_ROWS_PAGE_SIZE, active: Some(true), ..ListQuery::default() };
        api::list_staff(&query).await.map(|page| page.results)
    });
    let teacher_options = Signal::derive(move || teachers.get().unwrap_or_default());

    let banner = RwSignal::new(None::<Banner>);
    let editing = RwSignal::new(None::<Option<ClassRoom>>);
    let pending_delete = RwSignal::new(None::<ClassRoom>);
    let deleting = RwSignal::new(false);

    let on_saved = Callback::new(move |class: ClassRoom| {
        let verb = if editing.get_untracked().flatten().is_some() { "Updated" } else { "Created" };
        banner.set(Some(Banner::success(format!("{verb} {}.", class.name))));
        editing.set(None);
        refresh.update(|n| *n += 1);
    });
    let on_close = Callback::new(move |()| editing.set(None));

    let on_confirm_delete = Callback::new(move |()| {
        let Some(class) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::delete_class(class.id).await;
            deleting.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    banner.set(Some(Banner::success(format!("Deleted {}.", class.name))));
                    list.update(ListState::after_delete);
                    refresh.update(|n| *n += 1);
                }
                Err(e) => banner.set(Some(Banner::from_api(&e))),
            }
        });
    });

    view! {
        <Layout segment=Segment::School title="Classes">
            <BannerView banner/>
            <div class="list-toolbar">
                <SearchBox
                    placeholder="Search classes..."
                    on_search=Callback::new(move |text: String| list.update(|s| s.set_search(text)))
                />
                <span class="list-toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>"+ New Class"</button>
            </div>
            <CsvUpload
                resource=Resource::Classes
                hint="Columns: name, code, capacity, description"
                on_done=Callback::new(move |()| refresh.update(|n| *n += 1))
            />
            <Show when=move || list.get().error.is_some() || teacher_error.get().is_some()>
                <p class="banner banner--error">
                    {move || list.get().error.or_else(|| teacher_error.get()).unwrap_or_default()}
                </p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Code"</th>
                        <th>"Capacity"</th>
                        <th>"Students"</th>
                        <th>"Class teacher"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = list.get();
                        if state.loading && state.items.is_empty() {
                            return view! { <tr><td colspan="7">"Loading classes..."</td></tr> }.into_any();
                        }
                        if state.items.is_empty() {
                            return view! { <tr><td colspan="7">"No classes yet."</td></tr> }.into_any();
                        }
                        let staff = teacher_options.get();
                        state
                            .items
                            .into_iter()
                            .map(|class| {
                                let edit = class.clone();
                                let remove = class.clone();
                                let students = class.student_count.map_or_else(|| "—".to_owned(), |n| n.to_string());
                                view! {
                                    <tr>
                                        <td>{class.name}</td>
                                        <td class="table__mono">{class.code}</td>
                                        <td>{class.capacity}</td>
                                        <td>{students}</td>
                                        <td>{teacher_name(&staff, class.class_teacher)}</td>
                                        <td>{status_badge(class.is_active)}</td>
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
                    .map(|initial| {
                        view! { <ClassFormModal initial teachers=teacher_options on_saved on_close/> }
                    })
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete class"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|c| format!("Delete {} ({})? Students stay enrolled in the school.", c.name, c.code))
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
