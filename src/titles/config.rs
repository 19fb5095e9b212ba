use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tunables and word lists for session title inference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleConfig {
    /// Pages a single host needs before the session is named after it.
    pub min_domain_pages: usize,
    /// Keywords must be longer than this many characters.
    pub min_keyword_len: usize,
    pub min_keyword_frequency: usize,
    pub max_keywords: usize,
    pub max_title_chars: usize,
    pub truncated_title_chars: usize,
    pub fallback_title: String,
    pub stopwords: Vec<String>,
    /// Display names keyed by hostname without `www.`.
    pub display_names: BTreeMap<String, String>,
}

const STOPWORDS: &[&str] = &[
    "about", "after", "also", "been", "before", "being", "from", "have", "here", "home", "into",
    "just", "login", "more", "most", "only", "other", "over", "page", "search", "sign", "some",
    "such", "than", "that", "their", "them", "then", "there", "these", "they", "this", "untitled",
    "very", "welcome", "were", "what", "when", "where", "which", "while", "will", "with", "would",
    "your",
];

const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("github.com", "GitHub"),
    ("gitlab.com", "GitLab"),
    ("stackoverflow.com", "Stack Overflow"),
    ("youtube.com", "YouTube"),
    ("linkedin.com", "LinkedIn"),
    ("reddit.com", "Reddit"),
    ("twitter.com", "Twitter"),
    ("x.com", "X"),
    ("en.wikipedia.org", "Wikipedia"),
    ("wikipedia.org", "Wikipedia"),
    ("docs.google.com", "Google Docs"),
    ("mail.google.com", "Gmail"),
    ("google.com", "Google"),
    ("chatgpt.com", "ChatGPT"),
    ("news.ycombinator.com", "Hacker News"),
    ("amazon.com", "Amazon"),
    ("netflix.com", "Netflix"),
    ("notion.so", "Notion"),
];

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            min_domain_pages: 2,
            min_keyword_len: 3,
            min_keyword_frequency: 2,
            max_keywords: 2,
            max_title_chars: 50,
            truncated_title_chars: 47,
            fallback_title: "Browsing session".to_string(),
            stopwords: STOPWORDS.iter().map(|s| s.to_string()).collect(),
            display_names: DISPLAY_NAMES
                .iter()
                .map(|(host, name)| (host.to_string(), name.to_string()))
                .collect(),
        }
    }
}
