//! Resource identity records.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PageEvent;

/// How precisely an identifier pins down a piece of content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Specificity {
    Homepage,
    Category,
    Specific,
    Deep,
}

impl Specificity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specificity::Homepage => "homepage",
            Specificity::Category => "category",
            Specificity::Specific => "specific",
            Specificity::Deep => "deep",
        }
    }

    /// Specific and deep identifiers point at one piece of content rather
    /// than a section of a site.
    pub fn is_pinpoint(&self) -> bool {
        matches!(self, Specificity::Specific | Specificity::Deep)
    }
}

/// Result of normalising a single URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResource {
    pub domain: String,
    pub specificity: Specificity,
    pub identifier: String,
}

/// One unique normalised URL identity and every visit that resolved to it.
///
/// Invariants after aggregation: `first_visit <= last_visit`,
/// `visit_count == page_events.len()`, and `session_ids` holds exactly the
/// sessions that contributed a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    pub domain: String,
    pub specificity: Specificity,
    pub identifier: String,
    pub visit_count: usize,
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
    pub session_ids: BTreeSet<String>,
    pub page_events: Vec<PageEvent>,
}

impl ResourceIdentifier {
    /// Start a record from its first visit.
    pub fn from_visit(resource: ExtractedResource, page: &PageEvent, session_id: &str) -> Self {
        let mut session_ids = BTreeSet::new();
        session_ids.insert(session_id.to_string());
        Self {
            domain: resource.domain,
            specificity: resource.specificity,
            identifier: resource.identifier,
            visit_count: 1,
            first_visit: page.timestamp,
            last_visit: page.timestamp,
            session_ids,
            page_events: vec![page.clone()],
        }
    }

    pub fn record_visit(&mut self, page: &PageEvent, session_id: &str) {
        self.visit_count += 1;
        self.first_visit = self.first_visit.min(page.timestamp);
        self.last_visit = self.last_visit.max(page.timestamp);
        self.session_ids.insert(session_id.to_string());
        insert_by_time(&mut self.page_events, page.clone());
    }

    /// Fold `other` (same identifier) into `self`.
    ///
    /// Commutative and associative: counts add, the time window widens,
    /// session sets union and page events stay ordered by timestamp.
    pub fn merge(&mut self, other: ResourceIdentifier) {
        self.visit_count += other.visit_count;
        self.first_visit = self.first_visit.min(other.first_visit);
        self.last_visit = self.last_visit.max(other.last_visit);
        self.session_ids.extend(other.session_ids);
        for page in other.page_events {
            insert_by_time(&mut self.page_events, page);
        }
    }

    pub fn session_count(&self) -> usize {
        self.session_ids.len()
    }

    /// Observed span between first and last visit, in fractional days.
    pub fn span_days(&self) -> f64 {
        (self.last_visit - self.first_visit).num_milliseconds() as f64 / MS_PER_DAY
    }
}

pub(crate) const MS_PER_DAY: f64 = 86_400_000.0;

/// Total order over page events: timestamp first, then every other field, so
/// the merged event list does not depend on which side arrived first.
fn event_key(p: &PageEvent) -> (DateTime<Utc>, &str, &str, &str, Option<bool>, Option<&str>) {
    (
        p.timestamp,
        p.url.as_str(),
        p.title.as_str(),
        p.domain.as_str(),
        p.was_foreground,
        p.referrer.as_deref(),
    )
}

fn insert_by_time(pages: &mut Vec<PageEvent>, page: PageEvent) {
    let key = event_key(&page);
    let idx = pages.partition_point(|p| event_key(p) <= key);
    pages.insert(idx, page);
}
