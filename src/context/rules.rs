//! Signal tables for the context classifier.
//!
//! The table is data so hosts can tune it; the order in which categories are
//! tried is fixed in [`ContextCategory::PRIORITY`].

use serde::{Deserialize, Serialize};

use crate::utils::url::host_matches;

/// Coarse usage context of a page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContextCategory {
    Development,
    Learning,
    Shopping,
    Research,
    Social,
    Entertainment,
    Productivity,
    News,
    General,
}

impl ContextCategory {
    /// Evaluation order; the first category whose rule matches wins.
    pub const PRIORITY: [ContextCategory; 8] = [
        ContextCategory::Development,
        ContextCategory::Learning,
        ContextCategory::Shopping,
        ContextCategory::Research,
        ContextCategory::Social,
        ContextCategory::Entertainment,
        ContextCategory::Productivity,
        ContextCategory::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextCategory::Development => "development",
            ContextCategory::Learning => "learning",
            ContextCategory::Shopping => "shopping",
            ContextCategory::Research => "research",
            ContextCategory::Social => "social",
            ContextCategory::Entertainment => "entertainment",
            ContextCategory::Productivity => "productivity",
            ContextCategory::News => "news",
            ContextCategory::General => "general",
        }
    }
}

/// Disjunction of substring tests for one category.
///
/// `host`, `path` and `title` are matched lowercase; `hosts` also match
/// their subdomains.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryRule {
    pub hosts: Vec<String>,
    pub host_prefixes: Vec<String>,
    pub host_suffixes: Vec<String>,
    pub path_fragments: Vec<String>,
    pub title_fragments: Vec<String>,
}

impl CategoryRule {
    pub fn matches(&self, host: &str, path: &str, title: &str) -> bool {
        self.hosts.iter().any(|d| host_matches(host, d))
            || self.host_prefixes.iter().any(|p| host.starts_with(p.as_str()))
            || self.host_suffixes.iter().any(|s| host.ends_with(s.as_str()))
            || self.path_fragments.iter().any(|f| path.contains(f.as_str()))
            || self.title_fragments.iter().any(|f| title.contains(f.as_str()))
    }
}

/// One rule per non-default category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextRules {
    pub development: CategoryRule,
    pub learning: CategoryRule,
    pub shopping: CategoryRule,
    pub research: CategoryRule,
    pub social: CategoryRule,
    pub entertainment: CategoryRule,
    pub productivity: CategoryRule,
    pub news: CategoryRule,
}

impl ContextRules {
    pub fn rule_for(&self, category: ContextCategory) -> Option<&CategoryRule> {
        match category {
            ContextCategory::Development => Some(&self.development),
            ContextCategory::Learning => Some(&self.learning),
            ContextCategory::Shopping => Some(&self.shopping),
            ContextCategory::Research => Some(&self.research),
            ContextCategory::Social => Some(&self.social),
            ContextCategory::Entertainment => Some(&self.entertainment),
            ContextCategory::Productivity => Some(&self.productivity),
            ContextCategory::News => Some(&self.news),
            ContextCategory::General => None,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ContextRules {
    fn default() -> Self {
        Self {
            development: CategoryRule {
                hosts: strings(&[
                    "github.com",
                    "gitlab.com",
                    "bitbucket.org",
                    "stackoverflow.com",
                    "stackexchange.com",
                    "npmjs.com",
                    "crates.io",
                    "docs.rs",
                    "pypi.org",
                    "developer.mozilla.org",
                    "localhost",
                    "127.0.0.1",
                ]),
                host_prefixes: strings(&["developer.", "devdocs."]),
                host_suffixes: Vec::new(),
                path_fragments: strings(&["/api/", "/docs/", "/reference/"]),
                title_fragments: strings(&[
                    "documentation",
                    "api reference",
                    "pull request",
                    "stack overflow",
                ]),
            },
            learning: CategoryRule {
                hosts: strings(&[
                    "coursera.org",
                    "udemy.com",
                    "edx.org",
                    "khanacademy.org",
                    "duolingo.com",
                    "codecademy.com",
                    "wikipedia.org",
                    "w3schools.com",
                ]),
                host_prefixes: strings(&["learn."]),
                host_suffixes: strings(&[".edu"]),
                path_fragments: strings(&["/course", "/learn", "/tutorial"]),
                title_fragments: strings(&["tutorial", "course", "lesson", "how to", "guide"]),
            },
            shopping: CategoryRule {
                hosts: strings(&[
                    "amazon.com",
                    "ebay.com",
                    "etsy.com",
                    "walmart.com",
                    "target.com",
                    "bestbuy.com",
                    "aliexpress.com",
                ]),
                host_prefixes: strings(&["shop.", "store."]),
                host_suffixes: Vec::new(),
                path_fragments: strings(&["/cart", "/checkout", "/product"]),
                title_fragments: strings(&["buy ", "price", "deal", "add to cart"]),
            },
            research: CategoryRule {
                hosts: strings(&[
                    "scholar.google.com",
                    "arxiv.org",
                    "researchgate.net",
                    "pubmed.ncbi.nlm.nih.gov",
                    "jstor.org",
                    "semanticscholar.org",
                    "nature.com",
                    "sciencedirect.com",
                ]),
                host_prefixes: Vec::new(),
                host_suffixes: Vec::new(),
                path_fragments: strings(&[".pdf", "/abs/", "/paper"]),
                title_fragments: strings(&["paper", "journal", "study", "research"]),
            },
            social: CategoryRule {
                hosts: strings(&[
                    "twitter.com",
                    "x.com",
                    "facebook.com",
                    "instagram.com",
                    "linkedin.com",
                    "reddit.com",
                    "threads.net",
                    "mastodon.social",
                    "bsky.app",
                ]),
                ..CategoryRule::default()
            },
            entertainment: CategoryRule {
                hosts: strings(&[
                    "youtube.com",
                    "netflix.com",
                    "twitch.tv",
                    "spotify.com",
                    "hulu.com",
                    "disneyplus.com",
                    "tiktok.com",
                    "imdb.com",
                    "primevideo.com",
                ]),
                host_prefixes: Vec::new(),
                host_suffixes: Vec::new(),
                path_fragments: strings(&["/watch"]),
                title_fragments: strings(&["trailer", "episode", "season"]),
            },
            productivity: CategoryRule {
                hosts: strings(&[
                    "docs.google.com",
                    "drive.google.com",
                    "mail.google.com",
                    "calendar.google.com",
                    "notion.so",
                    "trello.com",
                    "asana.com",
                    "slack.com",
                    "figma.com",
                    "airtable.com",
                    "outlook.live.com",
                    "office.com",
                ]),
                host_prefixes: strings(&["mail.", "calendar."]),
                host_suffixes: Vec::new(),
                path_fragments: Vec::new(),
                title_fragments: strings(&["inbox", "dashboard", "calendar"]),
            },
            news: CategoryRule {
                hosts: strings(&[
                    "cnn.com",
                    "bbc.com",
                    "bbc.co.uk",
                    "nytimes.com",
                    "theguardian.com",
                    "reuters.com",
                    "bloomberg.com",
                    "apnews.com",
                    "news.ycombinator.com",
                ]),
                host_prefixes: strings(&["news."]),
                host_suffixes: Vec::new(),
                path_fragments: strings(&["/news/"]),
                title_fragments: strings(&["breaking", "headlines"]),
            },
        }
    }
}
