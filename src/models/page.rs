//! Page visit record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single captured page visit. Immutable once captured; every analysis in
/// the crate works from these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageEvent {
    pub url: String,
    pub title: String,
    pub domain: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_foreground: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl PageEvent {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        domain: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            domain: domain.into(),
            timestamp,
            was_foreground: None,
            referrer: None,
        }
    }

    pub fn with_foreground(mut self, was_foreground: bool) -> Self {
        self.was_foreground = Some(was_foreground);
        self
    }
}
