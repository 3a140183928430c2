//! Client-side filtering, pagination and faceting.
//!
//! Every listing page in the portal works the same way: fetch a full entity
//! array, filter it in memory against the active criteria, paginate the
//! result, render. This crate is that pipeline, factored out once:
//!
//! - [`Criteria`]: AND-composed search/selector/status predicates
//! - [`paginate`] / [`Pagination`]: page slicing and the page-button window
//! - [`facet`]: carousel bucketing with the featured-else-everything rule
//! - [`TableView`]: filter-then-paginate state, resetting the page on
//!   filter change
//!
//! All functions are pure and total: malformed records never panic, they
//! just don't match.

pub mod criteria;
pub mod entities;
pub mod facet;
pub mod paginate;
pub mod view;

pub use criteria::{Criteria, Queryable, RangeFilter, Selection, StatusFilter, SELECT_ALL};
pub use facet::{facet, facet_counts, BucketDef, FacetBucket, ALL_BUCKET};
pub use paginate::{paginate, Page, Pagination};
pub use view::TableView;
