pub mod aggregate;
pub mod extract;
pub mod filter;

use serde::{Deserialize, Serialize};

pub use aggregate::{aggregate_resources_across_sessions, build_resource_map};
pub use extract::extract_resource_identifier;
pub use filter::{filter_meaningful_resources, is_routine_resource, select_project_signals};

/// Thresholds deciding which resources count as project signals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceFilterConfig {
    pub min_visits: usize,
    pub min_sessions: usize,
    /// Average visits per day above which a resource is habitual.
    pub routine_visits_per_day: f64,
    /// Shortest observed span, in days, on which routineness is judged.
    pub routine_min_span_days: f64,
}

impl Default for ResourceFilterConfig {
    fn default() -> Self {
        Self {
            min_visits: 2,
            min_sessions: 2,
            routine_visits_per_day: 10.0,
            routine_min_span_days: 1.0,
        }
    }
}
