//! Parent portal: linked children and the school's fee instructions.

#[cfg(test)]
#[path = "parent_portal_test.rs"]
mod parent_portal_test;

use leptos::prelude::*;

use super::load_once;
use crate::components::layout::Layout;
use crate::net::error::ApiError;
use crate::net::types::{FeeInstructions, ParentChild};
use crate::state::session::Segment;
use crate::util::chart::format_score;
use crate::util::markdown::render_markdown_html;

/// A school that never saved instructions answers `404`; show it as unpublished.
pub(crate) fn unpublished_as_empty(result: Result<FeeInstructions, ApiError>) -> Result<FeeInstructions, ApiError> {
    match result {
        Err(ApiError::NotFound) => Ok(FeeInstructions::default()),
        other => other,
    }
}

#[component]
pub fn ParentPortalPage() -> impl IntoView {
    let children = RwSignal::new(None::<Vec<ParentChild>>);
    let fees = RwSignal::new(None::<FeeInstructions>);
    let children_error = RwSignal::new(None::<String>);
    let fees_error = RwSignal::new(None::<String>);

    load_once(children, children_error, crate::net::api::fetch_parent_children);
    load_once(fees, fees_error, || async {
        unpublished_as_empty(crate::net::api::fetch_fee_instructions(Segment::Parent).await)
    });

    view! {
        <Layout segment=Segment::Parent title="My Children">
            <Show when=move || children_error.get().is_some()>
                <p class="banner banner--error">{move || children_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="card-grid">
                {move || match children.get() {
                    None => view! { <p>"Loading..."</p> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! { <p>"No children are linked to this account yet."</p> }.into_any()
                    }
                    Some(list) => {
                        list.into_iter()
                            .map(|child| {
                                let name = format!("{} {}", child.first_name, child.last_name);
                                view! {
                                    <div class="child-card">
                                        <h2>{name}</h2>
                                        <p class="table__mono">{child.admission_number}</p>
                                        <p>{child.class_name.unwrap_or_else(|| "No class assigned".to_owned())}</p>
                                        {child.school_name.map(|s| view! { <p class="child-card__school">{s}</p> })}
                                        <p class="child-card__average">
                                            "Latest average: "
                                            {child.latest_average.map_or_else(|| "—".to_owned(), format_score)}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <section class="fees__preview">
                <h2>"Fee payment"</h2>
                {move || {
                    if let Some(message) = fees_error.get() {
                        return view! { <p class="banner banner--error">{message}</p> }.into_any();
                    }
                    match fees.get() {
                        None => view! { <p>"Loading..."</p> }.into_any(),
                        Some(f) if f.bank_name.is_empty() && f.instructions.is_empty() => {
                            view! { <p>"Your school has not published fee instructions yet."</p> }.into_any()
                        }
                        Some(f) => {
                            let html = render_markdown_html(&f.instructions);
                            view! {
                                <dl class="fees__account">
                                    <dt>"Bank"</dt>
                                    <dd>{f.bank_name}</dd>
                                    <dt>"Account name"</dt>
                                    <dd>{f.account_name}</dd>
                                    <dt>"Account number"</dt>
                                    <dd class="table__mono">{f.account_number}</dd>
                                </dl>
                                <div class="markdown" inner_html=html></div>
                            }
                                .into_any()
                        }
                    }
                }}
            </section>
        </Layout>
    }
}
