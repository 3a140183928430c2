//! User profile snapshot consumed by locale and currency selection.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// A signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Stored country, preferred over IP geolocation for currency selection.
    #[serde(default)]
    pub country: Option<String>,
    /// Stored locale preference (language code).
    #[serde(default)]
    pub preferred_locale: Option<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            country: None,
            preferred_locale: None,
        }
    }
}
