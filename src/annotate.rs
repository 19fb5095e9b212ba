use serde::Serialize;

use crate::context::{classify_page_context, ContextCategory};
use crate::metrics::{derive_page_metrics, derive_session_metrics, DerivedPageMetrics, DerivedSessionMetrics};
use crate::models::Session;
use crate::settings::EngineConfig;
use crate::titles::infer_session_title;

/// Everything the engine derives for one session in a single pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAnnotation {
    pub session_id: String,
    pub title: String,
    pub context: ContextCategory,
    pub session_metrics: DerivedSessionMetrics,
    pub page_metrics: Vec<DerivedPageMetrics>,
}

pub fn annotate_session(session: &Session, config: &EngineConfig) -> SessionAnnotation {
    SessionAnnotation {
        session_id: session.id.clone(),
        title: infer_session_title(session, &config.titles),
        context: dominant_context(session, config),
        session_metrics: derive_session_metrics(session),
        page_metrics: derive_page_metrics(session, &config.metrics),
    }
}

/// Most frequent page context; ties go to the category seen first.
pub fn dominant_context(session: &Session, config: &EngineConfig) -> ContextCategory {
    let mut tally: Vec<(ContextCategory, usize)> = Vec::new();
    for page in &session.pages {
        let category = classify_page_context(page, &config.context);
        match tally.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => *count += 1,
            None => tally.push((category, 1)),
        }
    }

    let mut best: Option<(ContextCategory, usize)> = None;
    for (category, count) in tally {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category).unwrap_or(ContextCategory::General)
}
