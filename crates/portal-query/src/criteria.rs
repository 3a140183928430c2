//! Filter criteria and the predicate contract entities implement.

use portal_domain::orders::PaymentStatus;
use portal_i18n::Locale;
use serde::{Deserialize, Serialize};

/// Sentinel selector value meaning "no constraint".
pub const SELECT_ALL: &str = "all";

/// An entity the filter pipeline can evaluate.
///
/// Each entity declares its searchable fields and selector wiring in one
/// place ([`crate::entities`]) instead of every page carrying its own
/// predicate chain.
pub trait Queryable {
    /// Resolved text of the entity's searchable fields for this locale.
    ///
    /// Absent or malformed localized fields contribute `""`.
    fn search_haystack(&self, locale: Locale) -> Vec<String>;

    /// Value of a named categorical field.
    ///
    /// Relation fields yield the nested id. `None` means the entity has no
    /// such field and never matches a constrained selection on it.
    fn select_value(&self, field: &str) -> Option<String>;

    /// Evaluate a named status against the entity's boolean fields.
    ///
    /// Statuses an entity does not model match everything, as does
    /// [`StatusFilter::All`].
    fn matches_status(&self, status: &StatusFilter) -> bool {
        let _ = status;
        true
    }

    /// Numeric value of a named field, for range filters.
    ///
    /// Dates are their Unix timestamps; prices are decimal amounts.
    fn range_value(&self, field: &str) -> Option<f64> {
        let _ = field;
        None
    }
}

/// A categorical selector: exact match on a named field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    /// Field name the selector constrains.
    pub field: String,
    /// Selected value, or [`SELECT_ALL`].
    pub value: String,
}

impl Selection {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether this selector is the no-constraint sentinel.
    pub fn is_all(&self) -> bool {
        self.value == SELECT_ALL
    }

    fn matches<T: Queryable>(&self, entity: &T) -> bool {
        if self.is_all() {
            return true;
        }
        match entity.select_value(&self.field) {
            Some(value) => value == self.value,
            None => false,
        }
    }
}

/// An inclusive numeric/date range over a named field.
///
/// Open bounds are unconstrained; an entity without the field never
/// matches a bounded range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeFilter {
    pub field: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(field: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            field: field.into(),
            min,
            max,
        }
    }

    fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    fn matches<T: Queryable>(&self, entity: &T) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match entity.range_value(&self.field) {
            Some(value) => {
                self.min.map_or(true, |min| value >= min)
                    && self.max.map_or(true, |max| value <= max)
            }
            None => false,
        }
    }
}

/// A named status selector mapped onto boolean entity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// No status constraint.
    #[default]
    All,
    Published,
    Unpublished,
    Featured,
    Available,
    Unavailable,
    /// Order payment state.
    Payment(PaymentStatus),
}

impl StatusFilter {
    /// Parse a UI status string. Unknown strings mean "no constraint".
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "" | "all" => StatusFilter::All,
            "published" => StatusFilter::Published,
            "unpublished" => StatusFilter::Unpublished,
            "featured" => StatusFilter::Featured,
            "available" => StatusFilter::Available,
            "unavailable" => StatusFilter::Unavailable,
            other => PaymentStatus::from_str(other)
                .map(StatusFilter::Payment)
                .unwrap_or(StatusFilter::All),
        }
    }
}

/// The active filter set of a listing page.
///
/// An entity is kept iff every predicate matches (logical AND). An empty
/// search and `"all"` selectors match everything, so the default criteria
/// keep the full list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Criteria {
    /// Case-insensitive substring search over the entity's haystack.
    #[serde(default)]
    pub search: String,
    /// Categorical selectors.
    #[serde(default)]
    pub selections: Vec<Selection>,
    /// Numeric/date range filters.
    #[serde(default)]
    pub ranges: Vec<RangeFilter>,
    /// Status selector.
    #[serde(default)]
    pub status: StatusFilter,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Add a categorical selector.
    pub fn with_selection(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.selections.push(Selection::new(field, value));
        self
    }

    /// Add a numeric/date range filter.
    pub fn with_range(
        mut self,
        field: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        self.ranges.push(RangeFilter::new(field, min, max));
        self
    }

    /// Set the status selector.
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Whether these criteria keep every entity.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.status == StatusFilter::All
            && self.selections.iter().all(Selection::is_all)
            && self.ranges.iter().all(RangeFilter::is_unbounded)
    }

    /// Evaluate all predicates against one entity.
    pub fn matches<T: Queryable>(&self, entity: &T, locale: Locale) -> bool {
        self.matches_search(entity, locale)
            && self.selections.iter().all(|s| s.matches(entity))
            && self.ranges.iter().all(|r| r.matches(entity))
            && entity.matches_status(&self.status)
    }

    /// Filter a snapshot, preserving input order.
    pub fn apply<T: Queryable + Clone>(&self, items: &[T], locale: Locale) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item, locale))
            .cloned()
            .collect()
    }

    fn matches_search<T: Queryable>(&self, entity: &T, locale: Locale) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        entity
            .search_haystack(locale)
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}
