//! Laboratories and the equipment they house.

use crate::catalog::{CenterRef, CenterType};
use crate::ids::{EquipmentId, LaboratoryId};
use portal_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// A laboratory page entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Laboratory {
    /// Unique laboratory identifier.
    pub id: LaboratoryId,
    /// Laboratory name.
    pub name: LocalizedText,
    /// Full description.
    #[serde(default)]
    pub description: LocalizedText,
    /// Center the lab belongs to.
    #[serde(default)]
    pub service_center: Option<CenterRef>,
    /// Visible on the public laboratories page.
    #[serde(default)]
    pub is_published: bool,
}

/// A piece of equipment listed under the labs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Equipment {
    /// Unique equipment identifier.
    pub id: EquipmentId,
    /// Equipment name.
    pub name: LocalizedText,
    /// Free-form tags used for carousel bucketing.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Kind of center the equipment serves.
    #[serde(default)]
    pub center_type: Option<CenterType>,
    /// Highlighted on the equipment carousel.
    #[serde(default)]
    pub is_featured: bool,
}

impl Equipment {
    /// Case-insensitive tag membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tag_case_insensitive() {
        let eq = Equipment {
            id: EquipmentId::new("eq-1"),
            name: LocalizedText::plain("Centrifuge"),
            tags: vec!["Spectroscopy".to_string()],
            center_type: None,
            is_featured: false,
        };
        assert!(eq.has_tag("spectroscopy"));
        assert!(!eq.has_tag("drilling"));
    }
}
