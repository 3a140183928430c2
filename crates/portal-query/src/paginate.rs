//! Pagination over filtered snapshots.

use serde::{Deserialize, Serialize};

/// Width of the page-button window.
const WINDOW: i64 = 10;

/// Pagination state derived from a filtered count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed, clamped into range).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages, always at least 1.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination state.
    ///
    /// A page requested past the end clamps to the last page rather than
    /// producing a dangling view; an empty list is one empty page.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total = total.max(0);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// First item number on this page (1-indexed, 0 when empty).
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Last item number on this page.
    pub fn end_item(&self) -> i64 {
        (self.page * self.per_page).min(self.total)
    }

    /// Page numbers to render as buttons.
    ///
    /// At most ten: every page when they all fit; the first ten near the
    /// start; the last ten near the end; otherwise a window from four
    /// before the current page to five after it.
    pub fn page_window(&self) -> Vec<i64> {
        if self.total_pages <= WINDOW {
            (1..=self.total_pages).collect()
        } else if self.page <= WINDOW / 2 {
            (1..=WINDOW).collect()
        } else if self.page >= self.total_pages - 4 {
            (self.total_pages - WINDOW + 1..=self.total_pages).collect()
        } else {
            (self.page - 4..=self.page + 5).collect()
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}

/// One visible page of a filtered list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// The visible slice.
    pub items: Vec<T>,
    /// Pagination state the slice was computed under.
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice one page out of an already-filtered list.
pub fn paginate<T: Clone>(items: &[T], page: i64, per_page: i64) -> Page<T> {
    let pagination = Pagination::new(page, per_page, items.len() as i64);
    let start = pagination.offset() as usize;
    let end = (start + pagination.per_page as usize).min(items.len());
    Page {
        items: items[start.min(items.len())..end].to_vec(),
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let p = Pagination::new(1, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_empty_list_is_one_page() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let p = Pagination::new(99, 10, 45);
        assert_eq!(p.page, 5);
        assert!(p.is_last());

        let p = Pagination::new(0, 10, 45);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_slice_bounds() {
        let items: Vec<i64> = (1..=45).collect();
        let page = paginate(&items, 5, 10);
        assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
        assert_eq!(page.pagination.start_item(), 41);
        assert_eq!(page.pagination.end_item(), 45);
    }

    #[test]
    fn test_slice_empty_input() {
        let items: Vec<i64> = vec![];
        let page = paginate(&items, 3, 10);
        assert!(page.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_window_all_pages_when_few() {
        let p = Pagination::new(2, 10, 80);
        assert_eq!(p.page_window(), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_start() {
        let p = Pagination::new(1, 10, 150);
        assert_eq!(p.page_window(), (1..=10).collect::<Vec<_>>());

        let p = Pagination::new(5, 10, 150);
        assert_eq!(p.page_window(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_end() {
        let p = Pagination::new(15, 10, 150);
        assert_eq!(p.page_window(), (6..=15).collect::<Vec<_>>());

        let p = Pagination::new(11, 10, 150);
        assert_eq!(p.page_window(), (6..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_centered() {
        let p = Pagination::new(8, 10, 150);
        assert_eq!(p.page_window(), (4..=13).collect::<Vec<_>>());
    }
}
