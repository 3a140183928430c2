//! Service centers operating the institute's labs, courses and shops.

use crate::ids::CenterId;
use portal_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// The kind of work a service center does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CenterType {
    #[default]
    Research,
    Training,
    Analysis,
}

impl CenterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CenterType::Research => "research",
            CenterType::Training => "training",
            CenterType::Analysis => "analysis",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "research" => Some(CenterType::Research),
            "training" => Some(CenterType::Training),
            "analysis" => Some(CenterType::Analysis),
            _ => None,
        }
    }
}

/// A service center record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCenter {
    /// Unique center identifier.
    pub id: CenterId,
    /// Center name.
    pub name: LocalizedText,
    /// What kind of center this is.
    #[serde(default)]
    pub center_type: CenterType,
}

/// A lightweight reference to a center embedded in other entities.
///
/// Categorical filters on a relation compare this nested id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CenterRef {
    pub id: CenterId,
    #[serde(default)]
    pub name: Option<LocalizedText>,
}

impl CenterRef {
    pub fn new(id: impl Into<CenterId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

impl From<&ServiceCenter> for CenterRef {
    fn from(center: &ServiceCenter) -> Self {
        Self {
            id: center.id.clone(),
            name: Some(center.name.clone()),
        }
    }
}
