//! Staff portal: classes the signed-in staff member teaches.

use leptos::prelude::*;

use super::load_once;
use crate::components::layout::Layout;
use crate::net::types::StaffClass;
use crate::state::session::Segment;

#[component]
pub fn StaffPortalPage() -> impl IntoView {
    let classes = RwSignal::new(None::<Vec<StaffClass>>);
    let error = RwSignal::new(None::<String>);
    load_once(classes, error, crate::net::api::fetch_staff_classes);

    view! {
        <Layout segment=Segment::Staff title="My Classes">
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="card-grid">
                {move || match classes.get() {
                    None => view! { <p>"Loading..."</p> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! { <p>"You have no classes assigned yet."</p> }.into_any()
                    }
                    Some(list) => {
                        list.into_iter()
                            .map(|class| {
                                let href = format!("/staff/analytics?class={}", class.id);
                                let subjects = if class.subjects.is_empty() {
                                    "No subjects assigned".to_owned()
                                } else {
                                    class.subjects.join(", ")
                                };
                                view! {
                                    <div class="class-card">
                                        <h2>{class.name}</h2>
                                        <p class="table__mono">{class.code}</p>
                                        {class.is_class_teacher.then(|| view! { <span class="badge badge--active">"Class teacher"</span> })}
                                        <p>{subjects}</p>
                                        {class.student_count.map(|n| view! { <p>{format!("{n} students")}</p> })}
                                        <a class="btn btn--small" href=href>"View analytics"</a>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </Layout>
    }
}
