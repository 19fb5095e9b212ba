pub mod classify;
pub mod rules;
pub mod threads;

use serde::{Deserialize, Serialize};

pub use classify::{classify_page_context, is_same_context};
pub use rules::{CategoryRule, ContextCategory, ContextRules};
pub use threads::{group_activity_threads, ActivityThread, ThreadInterruption};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadConfig {
    /// A→B→A: B is folded into A when its dwell is at most this long.
    pub sandwich_max_duration_ms: i64,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            sandwich_max_duration_ms: 60_000,
        }
    }
}
