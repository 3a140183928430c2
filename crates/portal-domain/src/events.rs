//! Institute events managed from the back office.

use crate::ids::EventId;
use portal_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// A conference, workshop or open day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title.
    pub name: LocalizedText,
    /// Full description.
    #[serde(default)]
    pub description: LocalizedText,
    /// Unix timestamp the event starts at.
    #[serde(default)]
    pub starts_at: i64,
    /// Visible on the public events page.
    #[serde(default)]
    pub is_published: bool,
}

impl Event {
    /// Whether the event is still ahead of the given instant.
    pub fn is_upcoming(&self, now: i64) -> bool {
        self.starts_at >= now
    }
}
