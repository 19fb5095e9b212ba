use serde::{Deserialize, Serialize};

/// Configuration for project candidate scoring and lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateConfig {
    /// Score at which a watched candidate becomes ready to surface.
    pub ready_threshold: u8,

    /// Candidates not seen for this many days are dropped.
    pub expiry_days: i64,

    /// Visit count at the midpoint of the visit sigmoid.
    pub visit_midpoint: f64,
    /// Sessions needed for a full session factor.
    pub session_saturation: f64,
    /// Days of activity needed for a full span factor.
    pub span_saturation_days: f64,

    /// Scoring weights (should sum to 1.0)
    pub weight_visits: f64,
    pub weight_sessions: f64,
    pub weight_span: f64,
    pub weight_specificity: f64,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            ready_threshold: 60,
            expiry_days: 14,
            visit_midpoint: 8.0,
            session_saturation: 5.0,
            span_saturation_days: 7.0,
            weight_visits: 0.30,
            weight_sessions: 0.30,
            weight_span: 0.20,
            weight_specificity: 0.20,
        }
    }
}
