//! Shop products sold by the service centers.

use crate::catalog::CenterRef;
use crate::ids::ProductId;
use crate::money::Money;
use portal_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// A physical or digital product in the shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: String,
    /// Product name.
    pub name: LocalizedText,
    /// Full description.
    #[serde(default)]
    pub description: LocalizedText,
    /// Center selling the product.
    #[serde(default)]
    pub service_center: Option<CenterRef>,
    /// Price in the stored currency.
    #[serde(default)]
    pub price: Money,
    /// In stock and orderable.
    #[serde(default)]
    pub is_available: bool,
    /// Highlighted on the shop carousel.
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<LocalizedText>, price: Money) -> Self {
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            description: LocalizedText::default(),
            service_center: None,
            price,
            is_available: true,
            is_featured: false,
        }
    }
}
