use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PageEvent;

/// A browsing session produced by the host's segmentation layer.
///
/// Pages are ordered by visit time. The engine only ever writes
/// `inferred_title`; `label_id` and `project_id` belong to the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub pages: Vec<PageEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Session {
    /// Build a session whose bounds are taken from its first and last page.
    /// An empty page list yields a zero-length session at `fallback`.
    pub fn from_pages(id: impl Into<String>, pages: Vec<PageEvent>, fallback: DateTime<Utc>) -> Self {
        let start_time = pages.first().map(|p| p.timestamp).unwrap_or(fallback);
        let end_time = pages.last().map(|p| p.timestamp).unwrap_or(fallback);
        Self {
            id: id.into(),
            start_time,
            end_time,
            pages,
            inferred_title: None,
            label_id: None,
            project_id: None,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        (self.end_time - self.start_time).num_milliseconds()
    }
}
