//! Staff management: paged table, search, create/edit/delete.

use leptos::prelude::*;

use super::paged_list;
use super::subjects::status_badge;
use crate::components::banner::BannerView;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::Layout;
use crate::components::pagination_bar::PaginationBar;
use crate::components::search_box::SearchBox;
use crate::components::staff_form::StaffFormModal;
use crate::net::api;
use crate::net::types::Staff;
use crate::state::banner::Banner;
use crate::state::list::ListState;
use crate::state::session::Segment;

#[component]
pub fn StaffPage() -> impl IntoView {
    let (list, refresh) = paged_list(|query| async move { api::list_staff(&query).await });
    let banner = RwSignal::new(None::<Banner>);
    let editing = RwSignal::new(None::<Option<Staff>>);
    let pending_delete = RwSignal::new(None::<Staff>);
    let deleting = RwSignal::new(false);

    let on_saved = Callback::new(move |staff: Staff| {
        let verb = if editing.get_untracked().flatten().is_some() { "Updated" } else { "Added" };
        banner.set(Some(Banner::success(format!("{verb} {}.", staff.full_name()))));
        editing.set(None);
        refresh.update(|n| *n += 1);
    });
    let on_close = Callback::new(move |()| editing.set(None));

    let on_confirm_delete = Callback::new(move |()| {
        let Some(staff) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::delete_staff(staff.id).await;
            deleting.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    banner.set(Some(Banner::success(format!("Removed {}.", staff.full_name()))));
                    list.update(ListState::after_delete);
                    refresh.update(|n| *n += 1);
                }
                Err(e) => banner.set(Some(Banner::from_api(&e))),
            }
        });
    });

    view! {
        <Layout segment=Segment::School title="Staff">
            <BannerView banner/>
            <div class="list-toolbar">
                <SearchBox
                    placeholder="Search by name or email..."
                    on_search=Callback::new(move |text: String| list.update(|s| s.set_search(text)))
                />
                <span class="list-toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>"+ Add Staff"</button>
            </div>
            <Show when=move || list.get().error.is_some()>
                <p class="banner banner--error">{move || list.get().error.unwrap_or_default()}</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = list.get();
                        if state.loading && state.items.is_empty() {
                            return view! { <tr><td colspan="6">"Loading staff..."</td></tr> }.into_any();
                        }
                        if state.items.is_empty() {
                            return view! { <tr><td colspan="6">"No staff yet."</td></tr> }.into_any();
                        }
                        state
                            .items
                            .into_iter()
                            .map(|staff| {
                                let edit = staff.clone();
                                let remove = staff.clone();
                                view! {
                                    <tr>
                                        <td>{staff.full_name()}</td>
                                        <td>{staff.email}</td>
                                        <td>{staff.phone.unwrap_or_else(|| "—".to_owned())}</td>
                                        <td>{staff.role.label()}</td>
                                        <td>{status_badge(staff.is_active)}</td>
                                        <td class="table__actions">
                                            <button class="btn btn--small" on:click=move |_| editing.set(Some(Some(edit.clone())))>
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| pending_delete.set(Some(remove.clone()))
                                            >
                                                "Remove"
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
                    .map(|initial| view! { <StaffFormModal initial on_saved on_close/> })
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Remove staff member"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|s| format!("Remove {} from the school?", s.full_name()))
                            .unwrap_or_default()
                    })
                    busy=deleting
                    confirm_label="Remove"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </Layout>
    }
}
