//! Pagination math for list screens.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Position within a paginated backend collection. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub count: u64,
}

impl Pagination {
    #[must_use]
    pub fn new(page: u32, page_size: u32, count: u64) -> Self {
        Self { page: page.max(1), page_size: page_size.max(1), count }
    }

    /// Number of pages; an empty collection still has one (empty) page.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.count.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Clamp `page` into `[1, total_pages]`.
    #[must_use]
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages())
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 1-based index of the first and last row on the current page.
    #[must_use]
    pub fn row_range(&self) -> Option<(u64, u64)> {
        if self.count == 0 {
            return None;
        }
        let page = u64::from(self.clamp_page(self.page));
        let size = u64::from(self.page_size.max(1));
        let first = (page - 1) * size + 1;
        let last = (page * size).min(self.count);
        Some((first, last))
    }

    /// "Showing 11–20 of 45", or "No results".
    #[must_use]
    pub fn range_label(&self) -> String {
        match self.row_range() {
            Some((first, last)) => format!("Showing {first}–{last} of {}", self.count),
            None => "No results".to_owned(),
        }
    }

    /// Up to `width` consecutive page numbers around the current page.
    ///
    /// The window is shifted rather than shrunk near either end so the number
    /// of buttons stays stable while paging.
    #[must_use]
    pub fn page_window(&self, width: u32) -> Vec<u32> {
        let total = self.total_pages();
        let width = width.clamp(1, total);
        let current = self.clamp_page(self.page);
        let half = width / 2;
        let mut start = current.saturating_sub(half).max(1);
        if start + width - 1 > total {
            start = total - width + 1;
        }
        (start..start + width).collect()
    }

    /// Page to show after `removed` rows disappear from the collection.
    #[must_use]
    pub fn page_after_removal(&self, removed: u64) -> u32 {
        let next = Self::new(self.page, self.page_size, self.count.saturating_sub(removed));
        next.clamp_page(self.page)
    }
}
