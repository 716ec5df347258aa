//! Pagination Utilities
//!
//! Window arithmetic for the leads table and the truncated page list shown
//! under it.

/// Current page and page size over a list of `total_items`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

/// Partial update, merged field by field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationUpdate {
    pub current_page: Option<usize>,
    pub items_per_page: Option<usize>,
    pub total_items: Option<usize>,
}

impl PaginationUpdate {
    pub fn page(current_page: usize) -> Self {
        Self {
            current_page: Some(current_page),
            ..Default::default()
        }
    }
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Last page that can be shown; 1 even for an empty list
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn merge(&mut self, update: PaginationUpdate) {
        if let Some(per_page) = update.items_per_page {
            self.items_per_page = per_page.max(1);
        }
        if let Some(total) = update.total_items {
            self.total_items = total;
        }
        if let Some(page) = update.current_page {
            self.current_page = page;
        }
        self.clamp();
    }

    /// Pull `current_page` back into `1..=last_page()`
    pub fn clamp(&mut self) {
        self.current_page = self.current_page.clamp(1, self.last_page());
    }

    /// Index range of the current page, clipped to `len`
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.current_page.saturating_sub(1) * self.items_per_page).min(len);
        let end = (start + self.items_per_page).min(len);
        start..end
    }

    /// 1-based `(first, last)` item numbers for "Showing X to Y of Z"
    pub fn display_range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let start = (self.current_page - 1) * self.items_per_page + 1;
        let end = (self.current_page * self.items_per_page).min(self.total_items);
        (start, end)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }
}

/// Entry in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page numbers to render. Up to five pages are listed in full; beyond that
/// the first and last page and the current page +/- 1 are kept, with an
/// ellipsis standing in for each gap.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<PageItem> {
    if total_pages <= 5 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut pages = vec![PageItem::Page(1)];
    if current_page > 3 {
        pages.push(PageItem::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages - 1);
    pages.extend((start..=end).map(PageItem::Page));

    if current_page + 2 < total_pages {
        pages.push(PageItem::Ellipsis);
    }
    pages.push(PageItem::Page(total_pages));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn window(current_page: usize, total_items: usize) -> Pagination {
        Pagination {
            current_page,
            items_per_page: 7,
            total_items,
        }
    }

    #[test]
    fn test_range_last_partial_page() {
        assert_eq!(window(3, 20).range(20), 14..20);
        assert_eq!(window(1, 20).range(20), 0..7);
    }

    #[test]
    fn test_range_past_end_is_empty() {
        assert_eq!(window(5, 20).range(20), 20..20);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(window(1, 0).total_pages(), 0);
        assert_eq!(window(1, 7).total_pages(), 1);
        assert_eq!(window(1, 8).total_pages(), 2);
        assert_eq!(window(1, 100).total_pages(), 15);
    }

    #[test]
    fn test_display_range() {
        assert_eq!(window(1, 20).display_range(), (1, 7));
        assert_eq!(window(3, 20).display_range(), (15, 20));
        assert_eq!(window(1, 0).display_range(), (0, 0));
    }

    #[test]
    fn test_merge_clamps_after_shrink() {
        let mut p = window(10, 100);
        p.merge(PaginationUpdate { total_items: Some(15), ..Default::default() });
        assert_eq!(p.current_page, 3);

        p.merge(PaginationUpdate { total_items: Some(0), ..Default::default() });
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn test_merge_clamps_requested_page() {
        let mut p = window(1, 20);
        p.merge(PaginationUpdate::page(0));
        assert_eq!(p.current_page, 1);
        p.merge(PaginationUpdate::page(9));
        assert_eq!(p.current_page, 3);
        p.merge(PaginationUpdate::page(2));
        assert_eq!(p.current_page, 2);
    }

    #[test]
    fn test_prev_next_bounds() {
        assert!(!window(1, 20).has_previous());
        assert!(window(1, 20).has_next());
        assert!(window(3, 20).has_previous());
        assert!(!window(3, 20).has_next());
    }

    #[test]
    fn test_page_numbers_small() {
        assert_eq!(page_numbers(0, 1), vec![]);
        assert_eq!(page_numbers(3, 2), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_numbers(5, 5).len(), 5);
    }

    #[test]
    fn test_page_numbers_middle() {
        assert_eq!(
            page_numbers(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_page_numbers_edges() {
        assert_eq!(page_numbers(10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_numbers(10, 3), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
        assert_eq!(page_numbers(10, 8), vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
        assert_eq!(page_numbers(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }
}
