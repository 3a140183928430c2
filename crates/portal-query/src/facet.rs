//! Carousel and tab bucketing.
//!
//! Buckets are a display facet selector, not a strict partition: each
//! bucket's predicate runs over the full item list, so buckets may overlap.

/// The distinguished bucket shown first on carousels.
pub const ALL_BUCKET: &str = "all";

/// A named bucket definition.
pub struct BucketDef<T> {
    /// Bucket identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    predicate: Box<dyn Fn(&T) -> bool>,
}

impl<T> BucketDef<T> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        predicate: impl Fn(&T) -> bool + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The [`ALL_BUCKET`] definition; its contents come from the featured
    /// rule rather than this predicate.
    pub fn all(label: impl Into<String>) -> Self {
        Self::new(ALL_BUCKET, label, |_| true)
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

/// A computed bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetBucket<T> {
    pub id: String,
    pub label: String,
    pub items: Vec<T>,
    pub count: usize,
}

/// Partition items into the defined buckets.
///
/// The [`ALL_BUCKET`] holds the `featured`-matching subset when any item is
/// featured, and the full unfiltered list otherwise; the default tab never
/// renders empty while items exist. Every other bucket filters the full
/// list with its own predicate.
pub fn facet<T: Clone>(
    items: &[T],
    defs: &[BucketDef<T>],
    featured: impl Fn(&T) -> bool,
) -> Vec<FacetBucket<T>> {
    defs.iter()
        .map(|def| {
            let bucket_items: Vec<T> = if def.id == ALL_BUCKET {
                let highlighted: Vec<T> = items
                    .iter()
                    .filter(|item| featured(item))
                    .cloned()
                    .collect();
                if highlighted.is_empty() {
                    items.to_vec()
                } else {
                    highlighted
                }
            } else {
                items
                    .iter()
                    .filter(|item| def.matches(item))
                    .cloned()
                    .collect()
            };
            FacetBucket {
                id: def.id.clone(),
                label: def.label.clone(),
                count: bucket_items.len(),
                items: bucket_items,
            }
        })
        .collect()
}

/// Bucket counts without materializing the items.
pub fn facet_counts<T: Clone>(
    items: &[T],
    defs: &[BucketDef<T>],
    featured: impl Fn(&T) -> bool,
) -> Vec<(String, usize)> {
    defs.iter()
        .map(|def| {
            let count = if def.id == ALL_BUCKET {
                let highlighted = items.iter().filter(|item| featured(item)).count();
                if highlighted == 0 {
                    items.len()
                } else {
                    highlighted
                }
            } else {
                items.iter().filter(|item| def.matches(item)).count()
            };
            (def.id.clone(), count)
        })
        .collect()
}
