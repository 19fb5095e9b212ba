use super::config::CandidateConfig;
use crate::models::resource::MS_PER_DAY;
use crate::models::ResourceIdentifier;

/// Factor breakdown of a candidate score, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub visits: f64,
    pub sessions: f64,
    pub span: f64,
    pub specificity: f64,
}

impl ScoreBreakdown {
    /// Weighted average scaled to `[0, 100]`.
    pub fn total(&self, config: &CandidateConfig) -> u8 {
        let weighted = config.weight_visits * self.visits
            + config.weight_sessions * self.sessions
            + config.weight_span * self.span
            + config.weight_specificity * self.specificity;
        (weighted * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Score a domain's resource group using a 4-factor weighted average.
pub fn score_resource_group(resources: &[&ResourceIdentifier], config: &CandidateConfig) -> ScoreBreakdown {
    if resources.is_empty() {
        return ScoreBreakdown {
            visits: 0.0,
            sessions: 0.0,
            span: 0.0,
            specificity: 0.0,
        };
    }

    let visits: usize = resources.iter().map(|r| r.visit_count).sum();
    let sessions = resources
        .iter()
        .flat_map(|r| r.session_ids.iter())
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let first = resources.iter().map(|r| r.first_visit).min();
    let last = resources.iter().map(|r| r.last_visit).max();
    let span_days = match (first, last) {
        (Some(first), Some(last)) => (last - first).num_milliseconds() as f64 / MS_PER_DAY,
        _ => 0.0,
    };
    let pinpoint = resources.iter().filter(|r| r.specificity.is_pinpoint()).count();

    ScoreBreakdown {
        visits: score_visits(visits, config),
        sessions: ratio(sessions as f64, config.session_saturation),
        span: ratio(span_days, config.span_saturation_days),
        specificity: pinpoint as f64 / resources.len() as f64,
    }
}

/// Sigmoid: 1.0 / (1.0 + e^(-0.3 * (visits - midpoint)))
fn score_visits(visits: usize, config: &CandidateConfig) -> f64 {
    1.0 / (1.0 + (-0.3 * (visits as f64 - config.visit_midpoint)).exp())
}

fn ratio(value: f64, saturation: f64) -> f64 {
    if saturation <= 0.0 {
        return 1.0;
    }
    (value / saturation).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Specificity;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::BTreeSet;

    fn resource(id: &str, specificity: Specificity, visits: usize, sessions: &[&str], days: i64) -> ResourceIdentifier {
        let first = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        ResourceIdentifier {
            domain: "example.com".into(),
            specificity,
            identifier: id.into(),
            visit_count: visits,
            first_visit: first,
            last_visit: first + Duration::days(days),
            session_ids: sessions.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            page_events: Vec::new(),
        }
    }

    #[test]
    fn visit_sigmoid_is_half_at_midpoint() {
        let config = CandidateConfig::default();
        assert!((score_visits(8, &config) - 0.5).abs() < 1e-12);
        assert!(score_visits(20, &config) > 0.95);
        assert!(score_visits(1, &config) < 0.15);
    }

    #[test]
    fn breakdown_combines_group() {
        let config = CandidateConfig::default();
        let a = resource("a", Specificity::Specific, 4, &["s1", "s2"], 2);
        let b = resource("b", Specificity::Category, 4, &["s2", "s3"], 7);
        let breakdown = score_resource_group(&[&a, &b], &config);

        assert!((breakdown.visits - 0.5).abs() < 1e-12);
        assert!((breakdown.sessions - 0.6).abs() < 1e-12);
        assert!((breakdown.span - 1.0).abs() < 1e-12);
        assert!((breakdown.specificity - 0.5).abs() < 1e-12);
        // 0.3*0.5 + 0.3*0.6 + 0.2*1.0 + 0.2*0.5 = 0.63
        assert_eq!(breakdown.total(&config), 63);
    }

    #[test]
    fn total_is_clamped() {
        let config = CandidateConfig {
            weight_visits: 2.0,
            ..CandidateConfig::default()
        };
        let full = ScoreBreakdown {
            visits: 1.0,
            sessions: 1.0,
            span: 1.0,
            specificity: 1.0,
        };
        assert_eq!(full.total(&config), 100);
    }

    #[test]
    fn empty_group_scores_zero() {
        let config = CandidateConfig::default();
        assert_eq!(score_resource_group(&[], &config).total(&config), 0);
    }
}
