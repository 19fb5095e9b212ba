mod types;

pub use types::{DerivedPageMetrics, DerivedSessionMetrics, MetricsConfig};

use std::collections::{HashMap, HashSet};

use crate::models::{PageEvent, Session};

/// Dwell per page: the gap to the next page, `max_dwell_ms` for the last one.
/// Out-of-order neighbours yield `None`.
pub(crate) fn dwell_times(pages: &[PageEvent], max_dwell_ms: i64) -> Vec<Option<i64>> {
    pages
        .iter()
        .enumerate()
        .map(|(i, page)| match pages.get(i + 1) {
            Some(next) => {
                let gap = (next.timestamp - page.timestamp).num_milliseconds();
                (gap >= 0).then_some(gap)
            }
            None => Some(max_dwell_ms),
        })
        .collect()
}

/// Dwell per page with unknown gaps counted as zero.
pub(crate) fn page_dwell_times(pages: &[PageEvent], max_dwell_ms: i64) -> Vec<i64> {
    dwell_times(pages, max_dwell_ms)
        .into_iter()
        .map(|d| d.unwrap_or(0))
        .collect()
}

pub fn derive_page_metrics(session: &Session, config: &MetricsConfig) -> Vec<DerivedPageMetrics> {
    let count = session.pages.len();
    let dwell = dwell_times(&session.pages, config.max_dwell_ms);
    let mut seen_urls: HashMap<&str, usize> = HashMap::new();

    session
        .pages
        .iter()
        .zip(dwell)
        .enumerate()
        .map(|(index, (page, dwell_time_ms))| {
            let seen = seen_urls.entry(page.url.as_str()).or_insert(0);
            let revisit_count = *seen;
            *seen += 1;

            let position_in_session = if count > 1 {
                index as f64 / (count - 1) as f64
            } else {
                0.0
            };

            DerivedPageMetrics {
                dwell_time_ms,
                position_in_session,
                is_entry_page: index == 0,
                is_exit_page: index + 1 == count,
                revisit_count,
            }
        })
        .collect()
}

pub fn derive_session_metrics(session: &Session) -> DerivedSessionMetrics {
    let unique_domains: HashSet<&str> = session.pages.iter().map(|p| p.domain.as_str()).collect();

    let instrumented = session.pages.iter().filter(|p| p.was_foreground.is_some()).count();
    let foreground_ratio = (instrumented > 0).then(|| {
        let foreground = session
            .pages
            .iter()
            .filter(|p| p.was_foreground == Some(true))
            .count();
        foreground as f64 / session.pages.len() as f64
    });

    DerivedSessionMetrics {
        session_duration_ms: session.duration_ms(),
        page_count: session.pages.len(),
        unique_domain_count: unique_domains.len(),
        foreground_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn page(url: &str, domain: &str, secs: i64) -> PageEvent {
        PageEvent::new(url, "t", domain, t0() + Duration::seconds(secs))
    }

    #[test]
    fn single_page_session() {
        let s = Session::from_pages("s", vec![page("https://a.com/", "a.com", 0)], t0());
        let metrics = derive_page_metrics(&s, &MetricsConfig::default());
        assert_eq!(metrics.len(), 1);
        let m = &metrics[0];
        assert_eq!(m.position_in_session, 0.0);
        assert!(m.is_entry_page);
        assert!(m.is_exit_page);
        assert_eq!(m.dwell_time_ms, Some(600_000));
        assert_eq!(m.revisit_count, 0);
    }

    #[test]
    fn dwell_position_and_revisits() {
        let s = Session::from_pages(
            "s",
            vec![
                page("https://a.com/x", "a.com", 0),
                page("https://b.com/y", "b.com", 30),
                page("https://a.com/x", "a.com", 90),
            ],
            t0(),
        );
        let metrics = derive_page_metrics(&s, &MetricsConfig::default());
        let dwell: Vec<Option<i64>> = metrics.iter().map(|m| m.dwell_time_ms).collect();
        assert_eq!(dwell, vec![Some(30_000), Some(60_000), Some(600_000)]);
        assert_eq!(metrics[1].position_in_session, 0.5);
        assert_eq!(metrics[2].position_in_session, 1.0);
        assert!(!metrics[1].is_entry_page && !metrics[1].is_exit_page);
        assert_eq!(metrics[2].revisit_count, 1);
        assert_eq!(metrics[1].revisit_count, 0);
    }

    #[test]
    fn dwell_ceiling_is_configurable() {
        let s = Session::from_pages("s", vec![page("https://a.com/", "a.com", 0)], t0());
        let metrics = derive_page_metrics(&s, &MetricsConfig { max_dwell_ms: 5_000 });
        assert_eq!(metrics[0].dwell_time_ms, Some(5_000));
    }

    #[test]
    fn out_of_order_gap_is_unknown() {
        let s = Session::from_pages(
            "s",
            vec![page("https://a.com/", "a.com", 50), page("https://a.com/b", "a.com", 10)],
            t0(),
        );
        let metrics = derive_page_metrics(&s, &MetricsConfig::default());
        assert_eq!(metrics[0].dwell_time_ms, None);
    }

    #[test]
    fn empty_session_metrics() {
        let s = Session::from_pages("s", vec![], t0());
        assert!(derive_page_metrics(&s, &MetricsConfig::default()).is_empty());
        let m = derive_session_metrics(&s);
        assert_eq!(m.page_count, 0);
        assert_eq!(m.session_duration_ms, 0);
        assert_eq!(m.unique_domain_count, 0);
        assert_eq!(m.foreground_ratio, None);
    }

    #[test]
    fn session_metrics_counts_domains_and_duration() {
        let s = Session::from_pages(
            "s",
            vec![
                page("https://a.com/", "a.com", 0),
                page("https://b.com/", "b.com", 60),
                page("https://a.com/z", "a.com", 120),
            ],
            t0(),
        );
        let m = derive_session_metrics(&s);
        assert_eq!(m.session_duration_ms, 120_000);
        assert_eq!(m.page_count, 3);
        assert_eq!(m.unique_domain_count, 2);
        assert_eq!(m.foreground_ratio, None);
    }

    #[test]
    fn foreground_ratio_only_when_instrumented() {
        let s = Session::from_pages(
            "s",
            vec![
                page("https://a.com/", "a.com", 0).with_foreground(true),
                page("https://a.com/1", "a.com", 1).with_foreground(false),
                page("https://a.com/2", "a.com", 2),
                page("https://a.com/3", "a.com", 3).with_foreground(true),
            ],
            t0(),
        );
        let ratio = derive_session_metrics(&s).foreground_ratio.expect("instrumented");
        assert!((ratio - 0.5).abs() < 1e-12);
    }
}
