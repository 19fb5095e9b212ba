use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classify::classify_page_context;
use super::rules::{ContextCategory, ContextRules};
use super::ThreadConfig;
use crate::metrics::page_dwell_times;
use crate::models::{PageEvent, Session};

/// A run of consecutive pages sharing one context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityThread {
    pub context: ContextCategory,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub page_count: usize,
    pub pages: Vec<PageEvent>,
    pub interruptions: Vec<ThreadInterruption>,
    /// Summed dwell of the thread's pages, excluding interruptions.
    pub dwell_ms: i64,
}

/// A short excursion into another context that was folded into a thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThreadInterruption {
    pub context: ContextCategory,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: i64,
    pub page_count: usize,
}

/// Split a session into activity threads.
///
/// Consecutive pages with the same context form a thread. Then A→B→A runs
/// where B lasted at most `sandwich_max_duration_ms` collapse into one A
/// thread with B recorded as an interruption, repeated until stable.
pub fn group_activity_threads(
    session: &Session,
    rules: &ContextRules,
    config: &ThreadConfig,
    max_dwell_ms: i64,
) -> Vec<ActivityThread> {
    if session.pages.is_empty() {
        return Vec::new();
    }

    let dwell = page_dwell_times(&session.pages, max_dwell_ms);
    let mut threads: Vec<ActivityThread> = Vec::new();

    for (page, dwell_ms) in session.pages.iter().zip(dwell) {
        let context = classify_page_context(page, rules);
        match threads.last_mut() {
            Some(thread) if thread.context == context => {
                thread.end_time = page.timestamp;
                thread.page_count += 1;
                thread.dwell_ms += dwell_ms;
                thread.pages.push(page.clone());
            }
            _ => threads.push(ActivityThread {
                context,
                start_time: page.timestamp,
                end_time: page.timestamp,
                page_count: 1,
                pages: vec![page.clone()],
                interruptions: Vec::new(),
                dwell_ms,
            }),
        }
    }

    sandwich_merge(threads, config)
}

fn sandwich_merge(mut threads: Vec<ActivityThread>, config: &ThreadConfig) -> Vec<ActivityThread> {
    loop {
        let mut merged = false;
        let mut result: Vec<ActivityThread> = Vec::with_capacity(threads.len());
        let mut iter = threads.into_iter().peekable();

        while let Some(a) = iter.next() {
            let mut current = a;
            // absorb every B→A pair that follows while B stays short
            loop {
                let short_next = iter
                    .peek()
                    .is_some_and(|b| b.dwell_ms <= config.sandwich_max_duration_ms);
                if !short_next {
                    break;
                }
                let Some(b) = iter.next() else { break };

                if let Some(c) = iter.next_if(|c| c.context == current.context) {
                    absorb(&mut current, b, c);
                    merged = true;
                } else {
                    result.push(current);
                    current = b;
                }
            }
            result.push(current);
        }

        threads = result;
        if !merged {
            return threads;
        }
    }
}

fn absorb(a: &mut ActivityThread, b: ActivityThread, c: ActivityThread) {
    a.interruptions.push(ThreadInterruption {
        context: b.context,
        timestamp: b.start_time,
        duration_ms: b.dwell_ms,
        page_count: b.page_count,
    });
    a.interruptions.extend(b.interruptions);
    a.interruptions.extend(c.interruptions);
    a.end_time = c.end_time;
    a.page_count += c.page_count;
    a.dwell_ms += c.dwell_ms;
    a.pages.extend(c.pages);
}
