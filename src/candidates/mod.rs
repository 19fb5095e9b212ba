//! Project candidate detection.
//!
//! Recurring, non-routine resources are grouped per domain and scored; the
//! host keeps the resulting candidates and feeds them back through
//! [`merge_candidates`] as new sessions complete.

pub mod config;
pub mod scoring;

pub use config::CandidateConfig;
pub use scoring::{score_resource_group, ScoreBreakdown};

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{CandidateStatus, ProjectCandidate, ResourceIdentifier, Session};
use crate::resources::{aggregate_resources_across_sessions, select_project_signals, ResourceFilterConfig};
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Build fresh candidates from `sessions`, sorted by score then domain.
pub fn detect_candidates(
    sessions: &[Session],
    now: DateTime<Utc>,
    filter: &ResourceFilterConfig,
    config: &CandidateConfig,
) -> Vec<ProjectCandidate> {
    let resources = aggregate_resources_across_sessions(sessions);
    let signals = select_project_signals(&resources, filter);

    let mut by_domain: BTreeMap<&str, Vec<&ResourceIdentifier>> = BTreeMap::new();
    for resource in &signals {
        by_domain.entry(resource.domain.as_str()).or_default().push(resource);
    }

    let mut candidates: Vec<ProjectCandidate> = by_domain
        .into_iter()
        .filter_map(|(domain, group)| build_candidate(domain, &group, now, config))
        .collect();
    sort_candidates(&mut candidates);

    log_info!(
        "{} candidates from {} signals ({} resources)",
        candidates.len(),
        signals.len(),
        resources.len()
    );
    candidates
}

fn build_candidate(
    domain: &str,
    group: &[&ResourceIdentifier],
    now: DateTime<Utc>,
    config: &CandidateConfig,
) -> Option<ProjectCandidate> {
    let first_seen = group.iter().map(|r| r.first_visit).min()?;
    let last_seen = group.iter().map(|r| r.last_visit).max()?;
    let score = score_resource_group(group, config).total(config);

    let mut session_ids: Vec<&String> = group.iter().flat_map(|r| r.session_ids.iter()).collect();
    session_ids.sort();
    session_ids.dedup();

    Some(ProjectCandidate {
        id: Uuid::new_v4().to_string(),
        domain: domain.to_string(),
        resource_identifiers: group.iter().map(|r| r.identifier.clone()).collect(),
        score,
        visit_count: group.iter().map(|r| r.visit_count).sum(),
        session_count: session_ids.len(),
        first_seen,
        last_seen,
        status: status_for(score, config),
        updated_at: now,
    })
}

fn status_for(score: u8, config: &CandidateConfig) -> CandidateStatus {
    if score >= config.ready_threshold {
        CandidateStatus::Ready
    } else {
        CandidateStatus::Watching
    }
}

fn sort_candidates(candidates: &mut [ProjectCandidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.domain.cmp(&b.domain)));
}

/// Whether `candidate` has gone unseen for longer than `expiry_days`.
pub fn is_expired(candidate: &ProjectCandidate, now: DateTime<Utc>, config: &CandidateConfig) -> bool {
    now - candidate.last_seen > Duration::days(config.expiry_days)
}

/// Reconcile stored candidates with a fresh detection pass.
///
/// Matching is by domain. Dismissed candidates keep their status; others take
/// the fresh score and may move from watching to ready but never back.
/// Expired candidates are dropped.
pub fn merge_candidates(
    existing: Vec<ProjectCandidate>,
    fresh: Vec<ProjectCandidate>,
    now: DateTime<Utc>,
    config: &CandidateConfig,
) -> Vec<ProjectCandidate> {
    let mut by_domain: BTreeMap<String, ProjectCandidate> = existing
        .into_iter()
        .map(|c| (c.domain.clone(), c))
        .collect();

    for incoming in fresh {
        match by_domain.get_mut(&incoming.domain) {
            Some(current) => {
                let status = match current.status {
                    CandidateStatus::Dismissed => CandidateStatus::Dismissed,
                    CandidateStatus::Ready => CandidateStatus::Ready,
                    CandidateStatus::Watching => status_for(incoming.score, config),
                };
                if current.status != status {
                    log_info!(
                        "candidate {} ({}) {} -> {}",
                        current.id,
                        current.domain,
                        current.status.as_str(),
                        status.as_str()
                    );
                }
                current.resource_identifiers = incoming.resource_identifiers;
                current.score = incoming.score;
                current.visit_count = incoming.visit_count;
                current.session_count = incoming.session_count;
                current.first_seen = current.first_seen.min(incoming.first_seen);
                current.last_seen = current.last_seen.max(incoming.last_seen);
                current.status = status;
                current.updated_at = now;
            }
            None => {
                by_domain.insert(incoming.domain.clone(), incoming);
            }
        }
    }

    let mut merged: Vec<ProjectCandidate> = by_domain
        .into_values()
        .filter(|c| {
            let expired = is_expired(c, now, config);
            if expired {
                log_debug!("candidate {} ({}) expired", c.id, c.domain);
            }
            !expired
        })
        .collect();
    sort_candidates(&mut merged);
    merged
}
