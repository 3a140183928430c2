//! View state for listing pages: filter, then paginate.

use crate::criteria::{Criteria, Queryable, Selection, StatusFilter};
use crate::paginate::{paginate, Page};
use portal_i18n::Locale;

/// The state one listing page owns: an entity snapshot, the active
/// criteria, and the current page.
///
/// Any change to the criteria resets the page to 1, so a filter edit can
/// never leave the view pointing past the new last page. Rendering is a
/// full synchronous filter-and-paginate pass over the snapshot.
#[derive(Debug, Clone)]
pub struct TableView<T> {
    items: Vec<T>,
    criteria: Criteria,
    page: i64,
    per_page: i64,
}

impl<T: Queryable + Clone> TableView<T> {
    /// Create a view over a fetched snapshot.
    pub fn new(items: Vec<T>, per_page: i64) -> Self {
        Self {
            items,
            criteria: Criteria::default(),
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Replace the whole criteria set. Resets to page 1.
    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Update the search query. Resets to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.criteria.search = query.into();
        self.page = 1;
    }

    /// Set a categorical selector, replacing any selector on the same
    /// field. Resets to page 1.
    pub fn set_selection(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if let Some(existing) = self.criteria.selections.iter_mut().find(|s| s.field == field) {
            existing.value = value;
        } else {
            self.criteria.selections.push(Selection::new(field, value));
        }
        self.page = 1;
    }

    /// Set the status selector. Resets to page 1.
    pub fn set_status(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.page = 1;
    }

    /// Navigate to a page. Values past the end clamp when rendered.
    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    /// Swap in a fresh snapshot, keeping criteria and page; the page
    /// clamps against the new filtered count at render time.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Compute the visible page under the active criteria.
    pub fn visible(&self, locale: Locale) -> Page<T> {
        let filtered = self.criteria.apply(&self.items, locale);
        paginate(&filtered, self.page, self.per_page)
    }
}
