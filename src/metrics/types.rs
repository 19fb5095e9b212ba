use serde::{Deserialize, Serialize};

/// Per-page statistics, recomputed from the owning session's page list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPageMetrics {
    /// Gap to the next page; the last page gets the dwell ceiling. `None`
    /// when the next page is timestamped earlier than this one.
    pub dwell_time_ms: Option<i64>,
    /// `index / (count - 1)`, `0.0` for a single page.
    pub position_in_session: f64,
    pub is_entry_page: bool,
    pub is_exit_page: bool,
    /// Earlier pages in the same session with the exact same URL.
    pub revisit_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSessionMetrics {
    pub session_duration_ms: i64,
    pub page_count: usize,
    pub unique_domain_count: usize,
    /// Only present when at least one page reported foreground state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsConfig {
    /// Dwell assigned to the final page of a session.
    pub max_dwell_ms: i64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            max_dwell_ms: 600_000,
        }
    }
}
