//! Catalog entities: what the portal lists and sells.

mod center;
mod course;
mod laboratory;
mod product;

pub use center::{CenterRef, CenterType, ServiceCenter};
pub use course::Course;
pub use laboratory::{Equipment, Laboratory};
pub use product::Product;

/// Current Unix timestamp, used when constructing new records.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
