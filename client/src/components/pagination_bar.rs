//! Page navigation for list tables.

use leptos::prelude::*;

use crate::util::pagination::Pagination;

/// Buttons shown around the current page.
const WINDOW: u32 = 5;

#[component]
pub fn PaginationBar(#[prop(into)] pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pagination">
            <span class="pagination__summary">{move || pagination.get().range_label()}</span>
            <div class="pagination__buttons">
                <button
                    class="btn pagination__prev"
                    disabled=move || !pagination.get().has_prev()
                    on:click=move |_| on_page.run(pagination.get_untracked().page.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                {move || {
                    let current = pagination.get();
                    current
                        .page_window(WINDOW)
                        .into_iter()
                        .map(|page| {
                            let active = page == current.page;
                            view! {
                                <button
                                    class="btn pagination__page"
                                    class:pagination__page--active=active
                                    aria-current=if active { Some("page") } else { None }
                                    on:click=move |_| on_page.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="btn pagination__next"
                    disabled=move || !pagination.get().has_next()
                    on:click=move |_| on_page.run(pagination.get_untracked().page + 1)
                >
                    "Next"
                </button>
            </div>
        </nav>
    }
}
