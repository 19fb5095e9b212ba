pub mod keyword;
pub mod semantic;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use keyword::{search_by_keywords, KeywordMatchResult};
pub use semantic::{search_semantic, SemanticMatchResult, TitleIndex};
pub use tokenizer::tokenize;

/// Tunables for the search layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Cosine similarity floor for semantic results.
    pub min_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_score: 0.1 }
    }
}
