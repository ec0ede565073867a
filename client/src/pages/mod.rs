//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, busy flags, banners)
//! and delegates rendering details to `components`.

pub mod class_analytics;
pub mod classes;
pub mod fees;
pub mod landing;
pub mod login;
pub mod parent_portal;
pub mod register;
pub mod school_dashboard;
pub mod staff;
pub mod staff_portal;
pub mod students;
pub mod subject_analytics;
pub mod subjects;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ListQuery;
use crate::net::error::ApiError;
use crate::net::types::Page;
use crate::state::list::ListState;

/// List state that refetches whenever its query changes or `refresh` is bumped.
/// Only the newest fetch's response is applied.
///
/// Effects only run in the browser, so server renders show the empty state.
pub(crate) fn paged_list<T, F, Fut>(fetch: F) -> (RwSignal<ListState<T>>, RwSignal<u32>)
where
    T: Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let list = RwSignal::new(ListState::default());
    let refresh = RwSignal::new(0_u32);
    let query = Memo::new(move |_| list.with(ListState::query));

    Effect::new(move || {
        let next = query.get();
        refresh.track();
        let mut seq = 0;
        list.update(|s| seq = s.begin_load());
        let pending = fetch(next);
        leptos::task::spawn_local(async move {
            match pending.await {
                Ok(page) => list.update(|s| {
                    s.apply_page_if_current(seq, page);
                }),
                Err(e) => list.update(|s| {
                    s.fail_if_current(seq, e.user_message());
                }),
            }
        });
    });

    (list, refresh)
}

/// Fetch once when the page mounts in the browser.
pub(crate) fn load_once<T, Fut>(target: RwSignal<Option<T>>, error: RwSignal<Option<String>>, fetch: impl FnOnce() -> Fut + 'static)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut fetch = Some(fetch);
    Effect::new(move || {
        let Some(fetch) = fetch.take() else {
            return;
        };
        let pending = fetch();
        leptos::task::spawn_local(async move {
            match pending.await {
                Ok(value) => target.set(Some(value)),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });
}
