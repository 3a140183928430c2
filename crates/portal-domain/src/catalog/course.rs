//! Course catalog entries.

use crate::catalog::{current_timestamp, CenterRef};
use crate::ids::CourseId;
use crate::money::Money;
use portal_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Course title.
    pub name: LocalizedText,
    /// Full description.
    #[serde(default)]
    pub description: LocalizedText,
    /// Subject category (e.g., "Engineering").
    #[serde(default)]
    pub category: Option<String>,
    /// Center offering the course.
    #[serde(default)]
    pub service_center: Option<CenterRef>,
    /// Price in the stored currency.
    #[serde(default)]
    pub price: Money,
    /// Free courses contribute nothing to checkout totals regardless
    /// of any price value present on the record.
    #[serde(default)]
    pub is_free: bool,
    /// Visible in the public catalog.
    #[serde(default)]
    pub is_published: bool,
    /// Highlighted on landing carousels.
    #[serde(default)]
    pub is_featured: bool,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
}

impl Course {
    /// Create a new unpublished course.
    pub fn new(name: impl Into<LocalizedText>, price: Money) -> Self {
        Self {
            id: CourseId::generate(),
            name: name.into(),
            description: LocalizedText::default(),
            category: None,
            service_center: None,
            price,
            is_free: false,
            is_published: false,
            is_featured: false,
            created_at: current_timestamp(),
        }
    }

    /// Whether the course can be added to a checkout selection.
    pub fn is_purchasable(&self) -> bool {
        self.is_published
    }

    /// The price shown on cards; free courses display as zero.
    pub fn display_price(&self) -> Money {
        if self.is_free {
            Money::zero(self.price.currency)
        } else {
            self.price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_new_course_is_unpublished() {
        let course = Course::new("Intro", Money::new(5000, Currency::USD));
        assert!(!course.is_purchasable());
    }

    #[test]
    fn test_free_course_displays_zero() {
        let mut course = Course::new("Open seminar", Money::new(5000, Currency::USD));
        course.is_free = true;
        assert!(course.display_price().is_zero());
    }

    #[test]
    fn test_decodes_sparse_backend_json() {
        let course: Course = serde_json::from_str(
            r#"{"id": "c-1", "name": {"en": "Intro to Drilling", "ar": "مقدمة"}}"#,
        )
        .unwrap();
        assert!(!course.is_published);
        assert!(course.category.is_none());
        assert!(course.price.is_zero());
    }
}
