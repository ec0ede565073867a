//! Read-only student roster with search and class filter.

use leptos::prelude::*;

use super::{load_once, paged_list};
use crate::components::layout::Layout;
use crate::components::pagination_bar::PaginationBar;
use crate::components::search_box::SearchBox;
use crate::net::api;
use crate::net::types::ClassRoom;
use crate::state::session::Segment;

#[component]
pub fn StudentsPage() -> impl IntoView {
    let (list, _refresh) = paged_list(|query| async move { api::list_students(&query).await });
    let classes = RwSignal::new(None::<Vec<ClassRoom>>);
    let class_error = RwSignal::new(None::<String>);
    load_once(classes, class_error, || api::list_all_classes(Segment::School));

    view! {
        <Layout segment=Segment::School title="Students">
            <div class="list-toolbar">
                <SearchBox
                    placeholder="Search by name or admission number..."
                    on_search=Callback::new(move |text: String| list.update(|s| s.set_search(text)))
                />
                <select
                    class="field__input list-toolbar__filter"
                    on:change=move |ev| {
                        let class_id = event_target_value(&ev).parse::<i64>().ok();
                        list.update(|s| s.set_class_filter(class_id));
                    }
                >
                    <option value="">"All classes"</option>
                    {move || {
                        classes
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <Show when=move || list.get().error.is_some() || class_error.get().is_some()>
                <p class="banner banner--error">
                    {move || list.get().error.or_else(|| class_error.get()).unwrap_or_default()}
                </p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Admission no."</th>
                        <th>"Name"</th>
                        <th>"Class"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = list.get();
                        if state.loading && state.items.is_empty() {
                            return view! { <tr><td colspan="4">"Loading students..."</td></tr> }.into_any();
                        }
                        if state.items.is_empty() {
                            return view! { <tr><td colspan="4">"No students found."</td></tr> }.into_any();
                        }
                        state
                            .items
                            .into_iter()
                            .map(|student| {
                                view! {
                                    <tr>
                                        <td class="table__mono">{student.admission_number.clone()}</td>
                                        <td>{student.full_name()}</td>
                                        <td>{student.class_name.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                        <td>{super::subjects::status_badge(student.is_active)}</td>
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
        </Layout>
    }
}
