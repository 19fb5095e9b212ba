use std::collections::HashMap;

use super::extract::extract_resource_identifier;
use crate::models::{PageEvent, ResourceIdentifier, Session};
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Group one session's pages by resource identity. Pages whose URL cannot be
/// normalised are skipped.
pub fn build_resource_map(
    page_events: &[PageEvent],
    session_id: &str,
) -> HashMap<String, ResourceIdentifier> {
    let mut map: HashMap<String, ResourceIdentifier> = HashMap::new();

    for page in page_events {
        let Some(resource) = extract_resource_identifier(&page.url) else {
            log_debug!("session {session_id}: untrackable url {}", page.url);
            continue;
        };

        match map.get_mut(&resource.identifier) {
            Some(existing) => existing.record_visit(page, session_id),
            None => {
                let key = resource.identifier.clone();
                map.insert(key, ResourceIdentifier::from_visit(resource, page, session_id));
            }
        }
    }

    map
}

/// Merge per-session resource maps into one record per identifier.
///
/// The result does not depend on session order. It is sorted by visit count
/// (descending), then identifier.
pub fn aggregate_resources_across_sessions(sessions: &[Session]) -> Vec<ResourceIdentifier> {
    let mut merged: HashMap<String, ResourceIdentifier> = HashMap::new();

    for session in sessions {
        for (key, resource) in build_resource_map(&session.pages, &session.id) {
            match merged.get_mut(&key) {
                Some(existing) => existing.merge(resource),
                None => {
                    merged.insert(key, resource);
                }
            }
        }
    }

    let mut resources: Vec<ResourceIdentifier> = merged.into_values().collect();
    resources.sort_by(|a, b| {
        b.visit_count
            .cmp(&a.visit_count)
            .then_with(|| a.identifier.cmp(&b.identifier))
    });

    log_info!(
        "aggregated {} resources from {} sessions",
        resources.len(),
        sessions.len()
    );
    resources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Specificity;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn page(url: &str, secs: i64) -> PageEvent {
        PageEvent::new(url, "title", "", at(secs))
    }

    fn session(id: &str, pages: Vec<PageEvent>) -> Session {
        Session::from_pages(id, pages, at(0))
    }

    // =========================================================================
    // Per-session map
    // =========================================================================

    #[test]
    fn build_resource_map_groups_by_identifier() {
        let pages = vec![
            page("https://github.com/rust-lang/rust", 0),
            page("https://www.github.com/rust-lang/rust?tab=readme", 60),
            page("https://github.com/", 120),
            page("about:blank", 130),
        ];
        let map = build_resource_map(&pages, "s1");

        assert_eq!(map.len(), 2);
        let repo = &map["github.com/rust-lang/rust"];
        assert_eq!(repo.visit_count, 2);
        assert_eq!(repo.first_visit, at(0));
        assert_eq!(repo.last_visit, at(60));
        assert_eq!(repo.page_events.len(), 2);
        assert!(repo.session_ids.contains("s1"));
        assert_eq!(map["github.com/"].specificity, Specificity::Homepage);
    }

    #[test]
    fn build_resource_map_handles_out_of_order_pages() {
        let pages = vec![
            page("https://example.com/a/b", 500),
            page("https://example.com/a/b", 100),
        ];
        let map = build_resource_map(&pages, "s1");
        let r = &map["example.com/a/b"];
        assert_eq!(r.first_visit, at(100));
        assert_eq!(r.last_visit, at(500));
        assert!(r.first_visit <= r.last_visit);
    }

    // =========================================================================
    // Cross-session aggregation
    // =========================================================================

    #[test]
    fn aggregate_sums_and_unions() {
        let sessions = vec![
            session("a", vec![page("https://docs.rs/serde/latest", 0), page("https://docs.rs/serde/latest", 10)]),
            session("b", vec![page("https://docs.rs/serde/latest", 86_400)]),
        ];
        let resources = aggregate_resources_across_sessions(&sessions);
        assert_eq!(resources.len(), 1);
        let r = &resources[0];
        assert_eq!(r.visit_count, 3);
        assert_eq!(r.visit_count, r.page_events.len());
        assert_eq!(r.session_count(), 2);
        assert_eq!(r.first_visit, at(0));
        assert_eq!(r.last_visit, at(86_400));
    }

    #[test]
    fn aggregate_is_order_independent() {
        let a = session(
            "a",
            vec![
                page("https://github.com/tokio-rs/tokio", 300),
                page("https://youtube.com/watch?v=xyz", 400),
            ],
        );
        let b = session(
            "b",
            vec![
                page("https://github.com/tokio-rs/tokio", 100),
                page("https://github.com/tokio-rs/tokio/issues", 200),
            ],
        );

        let forward = aggregate_resources_across_sessions(&[a.clone(), b.clone()]);
        let backward = aggregate_resources_across_sessions(&[b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        assert!(aggregate_resources_across_sessions(&[]).is_empty());
        assert!(aggregate_resources_across_sessions(&[session("x", vec![])]).is_empty());
    }
}
