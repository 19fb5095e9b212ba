use super::ResourceFilterConfig;
use crate::log_debug;
use crate::models::{ResourceIdentifier, Specificity};

const ENABLE_LOGS: bool = true;

/// Keep resources that can signal a project: never homepages, and only those
/// seen at least `min_visits` times across at least `min_sessions` sessions.
pub fn filter_meaningful_resources(
    resources: &[ResourceIdentifier],
    min_visits: usize,
    min_sessions: usize,
) -> Vec<ResourceIdentifier> {
    resources
        .iter()
        .filter(|r| r.specificity != Specificity::Homepage)
        .filter(|r| r.visit_count >= min_visits && r.session_count() >= min_sessions)
        .cloned()
        .collect()
}

/// Whether `resource` looks habitual rather than project work.
///
/// Spans shorter than `routine_min_span_days` never count as routine; there
/// is not enough history to tell. Beyond that, an average above
/// `routine_visits_per_day` is routine. A zero span has no rate and is never
/// routine, whatever the configured minimum.
pub fn is_routine_resource(resource: &ResourceIdentifier, config: &ResourceFilterConfig) -> bool {
    let span_days = resource.span_days();
    if span_days <= 0.0 || span_days < config.routine_min_span_days {
        return false;
    }

    let visits_per_day = resource.visit_count as f64 / span_days;
    let routine = visits_per_day > config.routine_visits_per_day;
    if routine {
        log_debug!(
            "{} is routine ({visits_per_day:.1} visits/day over {span_days:.1} days)",
            resource.identifier
        );
    }
    routine
}

/// Meaningful, non-routine resources under `config`.
pub fn select_project_signals(
    resources: &[ResourceIdentifier],
    config: &ResourceFilterConfig,
) -> Vec<ResourceIdentifier> {
    filter_meaningful_resources(resources, config.min_visits, config.min_sessions)
        .into_iter()
        .filter(|r| !is_routine_resource(r, config))
        .collect()
}
