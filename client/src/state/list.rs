//! Paged list state for CRUD screens.
//!
//! DESIGN
//! ======
//! Pages hold one `RwSignal<ListState<T>>` and derive the next request from it
//! via `query()`. Responses are applied whole; the backend owns filtering and
//! ordering. Each load gets a sequence number and only the newest load's
//! response is applied, so out-of-order replies never overwrite fresher rows.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::api::{DEFAULT_PAGE_SIZE, ListQuery};
use crate::net::types::Page;
use crate::util::pagination::Pagination;

/// Rows, paging position, and filters for one backend collection.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub count: u64,
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub active: Option<bool>,
    pub class_id: Option<i64>,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence number of the newest load.
    request_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            active: None,
            class_id: None,
            loading: false,
            error: None,
            request_seq: 0,
        }
    }
}

impl<T> ListState<T> {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.count)
    }

    /// Request parameters for the current position and filters.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            search: self.search.clone(),
            active: self.active,
            class_id: self.class_id,
        }
    }

    /// Start a load and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply `page` only if `seq` is the newest load. Returns whether it was.
    pub fn apply_page_if_current(&mut self, seq: u64, page: Page<T>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.apply_page(page);
        true
    }

    /// Record a failure only if `seq` is the newest load.
    pub fn fail_if_current(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.fail(message);
        true
    }

    /// Replace rows with a fetched page.
    pub fn apply_page(&mut self, page: Page<T>) {
        self.items = page.results;
        self.count = page.count;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// New search text; paging restarts at the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_active_filter(&mut self, active: Option<bool>) {
        if active != self.active {
            self.active = active;
            self.page = 1;
        }
    }

    pub fn set_class_filter(&mut self, class_id: Option<i64>) {
        if class_id != self.class_id {
            self.class_id = class_id;
            self.page = 1;
        }
    }

    /// Move to `page`, clamped to the known page range.
    pub fn go_to(&mut self, page: u32) {
        self.page = self.pagination().clamp_page(page);
    }

    /// Account for one deleted row so the next fetch stays in range.
    pub fn after_delete(&mut self) {
        self.page = self.pagination().page_after_removal(1);
        self.count = self.count.saturating_sub(1);
    }
}
