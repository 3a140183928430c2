//! Per-entity filter wiring.
//!
//! One impl per entity replaces the per-page predicate chains: the
//! searchable-field list, the selector fields (relations compare the nested
//! center id), and which named statuses the entity models.

use crate::criteria::{Queryable, StatusFilter};
use portal_domain::catalog::{Course, Equipment, Laboratory, Product};
use portal_domain::events::Event;
use portal_domain::orders::Order;
use portal_i18n::Locale;

impl Queryable for Course {
    fn search_haystack(&self, locale: Locale) -> Vec<String> {
        vec![
            self.name.resolve(locale).to_string(),
            self.description.resolve(locale).to_string(),
        ]
    }

    fn select_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => self.category.clone(),
            "service_center" => self
                .service_center
                .as_ref()
                .map(|c| c.id.as_str().to_string()),
            _ => None,
        }
    }

    fn matches_status(&self, status: &StatusFilter) -> bool {
        match status {
            StatusFilter::Published => self.is_published,
            StatusFilter::Unpublished => !self.is_published,
            StatusFilter::Featured => self.is_featured,
            _ => true,
        }
    }

    fn range_value(&self, field: &str) -> Option<f64> {
        match field {
            "price" => Some(self.price.to_decimal()),
            "created_at" => Some(self.created_at as f64),
            _ => None,
        }
    }
}

impl Queryable for Product {
    fn search_haystack(&self, locale: Locale) -> Vec<String> {
        vec![
            self.name.resolve(locale).to_string(),
            self.description.resolve(locale).to_string(),
            self.sku.clone(),
        ]
    }

    fn select_value(&self, field: &str) -> Option<String> {
        match field {
            "service_center" => self
                .service_center
                .as_ref()
                .map(|c| c.id.as_str().to_string()),
            _ => None,
        }
    }

    fn matches_status(&self, status: &StatusFilter) -> bool {
        match status {
            StatusFilter::Available => self.is_available,
            StatusFilter::Unavailable => !self.is_available,
            StatusFilter::Featured => self.is_featured,
            _ => true,
        }
    }
}

impl Queryable for Laboratory {
    fn search_haystack(&self, locale: Locale) -> Vec<String> {
        vec![
            self.name.resolve(locale).to_string(),
            self.description.resolve(locale).to_string(),
        ]
    }

    fn select_value(&self, field: &str) -> Option<String> {
        match field {
            "service_center" => self
                .service_center
                .as_ref()
                .map(|c| c.id.as_str().to_string()),
            _ => None,
        }
    }

    fn matches_status(&self, status: &StatusFilter) -> bool {
        match status {
            StatusFilter::Published => self.is_published,
            StatusFilter::Unpublished => !self.is_published,
            _ => true,
        }
    }
}

impl Queryable for Equipment {
    fn search_haystack(&self, locale: Locale) -> Vec<String> {
        let mut haystack = vec![self.name.resolve(locale).to_string()];
        haystack.extend(self.tags.iter().cloned());
        haystack
    }

    fn select_value(&self, field: &str) -> Option<String> {
        match field {
            "center_type" => self.center_type.map(|t| t.as_str().to_string()),
            _ => None,
        }
    }

    fn matches_status(&self, status: &StatusFilter) -> bool {
        match status {
            StatusFilter::Featured => self.is_featured,
            _ => true,
        }
    }
}

impl Queryable for Order {
    fn search_haystack(&self, _locale: Locale) -> Vec<String> {
        vec![
            self.transaction_id.clone(),
            self.buyer_name.clone(),
            self.buyer_email.clone(),
        ]
    }

    fn select_value(&self, _field: &str) -> Option<String> {
        None
    }

    fn matches_status(&self, status: &StatusFilter) -> bool {
        match status {
            StatusFilter::Payment(state) => self.payment_status == *state,
            _ => true,
        }
    }

    fn range_value(&self, field: &str) -> Option<f64> {
        match field {
            "total" => Some(self.total.to_decimal()),
            "created_at" => Some(self.created_at as f64),
            _ => None,
        }
    }
}

impl Queryable for Event {
    fn search_haystack(&self, locale: Locale) -> Vec<String> {
        vec![
            self.name.resolve(locale).to_string(),
            self.description.resolve(locale).to_string(),
        ]
    }

    fn select_value(&self, _field: &str) -> Option<String> {
        None
    }

    fn matches_status(&self, status: &StatusFilter) -> bool {
        match status {
            StatusFilter::Published => self.is_published,
            StatusFilter::Unpublished => !self.is_published,
            _ => true,
        }
    }

    fn range_value(&self, field: &str) -> Option<f64> {
        match field {
            "starts_at" => Some(self.starts_at as f64),
            _ => None,
        }
    }
}
