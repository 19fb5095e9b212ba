//! Project candidate data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a candidate: it is watched until its score crosses the ready
/// threshold, and the user can dismiss it at any point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Watching,
    Ready,
    Dismissed,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Watching => "watching",
            CandidateStatus::Ready => "ready",
            CandidateStatus::Dismissed => "dismissed",
        }
    }
}

/// A cluster of recurring resources on one domain that may be a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCandidate {
    pub id: String,
    pub domain: String,
    pub resource_identifiers: Vec<String>,
    /// Always within `[0, 100]`.
    pub score: u8,
    pub visit_count: usize,
    pub session_count: usize,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub status: CandidateStatus,
    pub updated_at: DateTime<Utc>,
}

impl ProjectCandidate {
    pub fn dismiss(&mut self, now: DateTime<Utc>) {
        self.status = CandidateStatus::Dismissed;
        self.updated_at = now;
    }
}
