//! The wishlist selection carried into checkout.

use portal_domain::catalog::Course;
use portal_domain::ids::CourseId;
use portal_domain::money::Money;
use serde::{Deserialize, Serialize};

/// One selected course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionItem {
    /// The selected course.
    pub id: CourseId,
    /// Price as stored on the record. Ignored for free items.
    pub price: Money,
    /// Free items contribute nothing to totals.
    pub is_free: bool,
}

impl SelectionItem {
    pub fn new(id: impl Into<CourseId>, price: Money, is_free: bool) -> Self {
        Self {
            id: id.into(),
            price,
            is_free,
        }
    }

    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            price: course.price,
            is_free: course.is_free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_domain::money::Currency;

    #[test]
    fn test_from_course_carries_free_flag() {
        let mut course = Course::new("Seminar", Money::new(5000, Currency::USD));
        course.is_free = true;
        let item = SelectionItem::from_course(&course);
        assert!(item.is_free);
        assert_eq!(item.price.amount_cents, 5000);
    }
}
