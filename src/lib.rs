//! Signal extraction and retrieval over browsing history.
//!
//! Callers hand in page visits and sessions; the engine returns ranked search
//! results, resource identities, project candidates and session annotations.
//! Nothing here performs I/O except [`settings::SettingsStore`], and no state
//! survives between calls.

mod annotate;
pub mod candidates;
pub mod context;
pub mod metrics;
pub mod models;
pub mod resources;
pub mod search;
pub mod settings;
pub mod titles;
mod utils;

pub use annotate::{annotate_session, dominant_context, SessionAnnotation};
pub use candidates::{detect_candidates, is_expired, merge_candidates, CandidateConfig};
pub use context::{
    classify_page_context, group_activity_threads, is_same_context, ActivityThread, ContextCategory,
    ContextRules, ThreadConfig,
};
pub use metrics::{derive_page_metrics, derive_session_metrics, DerivedPageMetrics, DerivedSessionMetrics, MetricsConfig};
pub use models::{
    CandidateStatus, ExtractedResource, PageEvent, ProjectCandidate, ResourceIdentifier, Session, Specificity,
};
pub use resources::{
    aggregate_resources_across_sessions, build_resource_map, extract_resource_identifier,
    filter_meaningful_resources, is_routine_resource, select_project_signals, ResourceFilterConfig,
};
pub use search::{
    search_by_keywords, search_semantic, tokenize, KeywordMatchResult, SearchConfig, SemanticMatchResult,
    TitleIndex,
};
pub use settings::{EngineConfig, SettingsStore};
pub use titles::{apply_inferred_title, infer_session_title, TitleConfig};

/// Install `env_logger` as the log backend (reads `RUST_LOG`, defaults to
/// `info`). Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}
