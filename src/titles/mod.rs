//! Display names for sessions.
//!
//! Three tiers, each tried only when the previous one yields nothing:
//! a dominant host, recurring title keywords, then the first page's title.

mod config;

pub use config::TitleConfig;

use std::collections::HashMap;

use crate::models::{PageEvent, Session};
use crate::utils::url::{parse_web_url, strip_www};

pub fn infer_session_title(session: &Session, config: &TitleConfig) -> String {
    title_from_domain(&session.pages, config)
        .or_else(|| title_from_keywords(&session.pages, config))
        .unwrap_or_else(|| fallback_title(&session.pages, config))
}

/// Set `session.inferred_title` and return it.
pub fn apply_inferred_title<'s>(session: &'s mut Session, config: &TitleConfig) -> &'s str {
    let title = infer_session_title(session, config);
    session.inferred_title.insert(title).as_str()
}

/// `"<Name> browsing"` when one host accounts for enough pages.
fn title_from_domain(pages: &[PageEvent], config: &TitleConfig) -> Option<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for page in pages {
        let Some(url) = parse_web_url(&page.url) else { continue };
        let Some(host) = url.host_str() else { continue };
        let count = counts.entry(host.to_string()).or_insert_with(|| {
            order.push(host.to_string());
            0
        });
        *count += 1;
    }

    // first-seen host wins ties
    let mut best: Option<(&str, usize)> = None;
    for host in &order {
        let count = counts[host];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((host.as_str(), count));
        }
    }

    let (host, count) = best?;
    (count >= config.min_domain_pages).then(|| format!("{} browsing", clean_domain(host, config)))
}

/// Human-readable site name for `host`.
pub fn clean_domain(host: &str, config: &TitleConfig) -> String {
    let host = strip_www(host);
    if let Some(name) = config.display_names.get(host) {
        return name.clone();
    }
    let label = host.split('.').next().unwrap_or(host);
    capitalize(label)
}

/// Up to `max_keywords` recurring title words joined with `" & "`.
fn title_from_keywords(pages: &[PageEvent], config: &TitleConfig) -> Option<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for page in pages {
        for word in keyword_tokens(&page.title, config) {
            let count = counts.entry(word.clone()).or_insert_with(|| {
                order.push(word);
                0
            });
            *count += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            (word, count)
        })
        .collect();
    // stable: equal counts keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let keywords: Vec<String> = ranked
        .into_iter()
        .filter(|(_, count)| *count >= config.min_keyword_frequency)
        .take(config.max_keywords)
        .map(|(word, _)| capitalize(&word))
        .collect();

    (!keywords.is_empty()).then(|| keywords.join(" & "))
}

fn keyword_tokens<'a>(title: &'a str, config: &'a TitleConfig) -> impl Iterator<Item = String> + 'a {
    title
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(move |word| {
            word.chars().count() > config.min_keyword_len
                && !word.chars().all(|c| c.is_ascii_digit())
                && !config.stopwords.iter().any(|s| s == word)
        })
}

fn fallback_title(pages: &[PageEvent], config: &TitleConfig) -> String {
    let Some(title) = pages.first().map(|p| p.title.as_str()).filter(|t| !t.is_empty()) else {
        return config.fallback_title.clone();
    };

    if title.chars().count() > config.max_title_chars {
        let head: String = title.chars().take(config.truncated_title_chars).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
