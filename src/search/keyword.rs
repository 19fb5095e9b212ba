use std::collections::HashSet;

use serde::Serialize;

use super::tokenizer::tokenize;
use crate::models::PageEvent;

/// A page whose title contains at least one query token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatchResult<'a> {
    pub page: &'a PageEvent,
    pub score: f64,
    pub match_count: usize,
    pub matched_terms: Vec<String>,
}

/// Exact-token search over page titles.
///
/// Score is the number of query tokens found in the title plus a
/// density bonus of `1 / title_token_count`, so among equal match counts
/// shorter titles rank higher. A token repeated in the query counts once per
/// occurrence. Equal scores keep input order.
pub fn search_by_keywords<'a>(query: &str, pages: &'a [PageEvent]) -> Vec<KeywordMatchResult<'a>> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<KeywordMatchResult<'a>> = pages
        .iter()
        .filter_map(|page| {
            let title_tokens = tokenize(&page.title);
            let title_set: HashSet<&str> = title_tokens.iter().map(String::as_str).collect();

            let matched_terms: Vec<String> = query_tokens
                .iter()
                .filter(|t| title_set.contains(t.as_str()))
                .cloned()
                .collect();
            if matched_terms.is_empty() {
                return None;
            }

            let match_count = matched_terms.len();
            let density = 1.0 / title_tokens.len().max(1) as f64;
            Some(KeywordMatchResult {
                page,
                score: match_count as f64 + density,
                match_count,
                matched_terms,
            })
        })
        .collect();

    // sort_by is stable, which keeps ties in input order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}
