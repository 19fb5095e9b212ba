//! TF-IDF similarity search over page titles.
//!
//! The vector space is rebuilt from the supplied pages on every call and
//! dropped afterwards, so results always reflect the caller's current
//! collection:
//!
//! * **Vocabulary** – token → column index, assigned in first-seen order.
//! * **IDF** – smoothed `ln((N + 1) / (df + 1)) + 1`; strictly positive even
//!   for terms present in every title.
//! * **TF** – raw counts scaled by the document's largest count.
//! * **Vectors** – sparse, L2-normalised, so a dot product is the cosine.

use std::collections::HashMap;

use serde::Serialize;

use super::tokenizer::tokenize;
use crate::models::PageEvent;

/// A page ranked by cosine similarity to the query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticMatchResult<'a> {
    pub page: &'a PageEvent,
    pub score: f64,
}

/// Sparse vector: `(column, weight)` pairs sorted by column.
type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone, Default)]
struct Vocabulary {
    token_to_idx: HashMap<String, usize>,
    idf: Vec<f64>,
}

/// Transient per-query index over a page collection. Borrowing the pages ties
/// its lifetime to the caller's snapshot.
#[derive(Debug, Clone)]
pub struct TitleIndex<'a> {
    vocab: Vocabulary,
    documents: Vec<(&'a PageEvent, SparseVector)>,
}

impl<'a> TitleIndex<'a> {
    pub fn build(pages: &'a [PageEvent]) -> Self {
        let tokenized: Vec<Vec<String>> = pages.iter().map(|p| tokenize(&p.title)).collect();
        let vocab = build_vocab(&tokenized);
        let documents = pages
            .iter()
            .zip(&tokenized)
            .map(|(page, tokens)| (page, tfidf_vector(tokens, &vocab)))
            .collect();
        Self { vocab, documents }
    }

    pub fn dimension(&self) -> usize {
        self.vocab.idf.len()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Vectorise `text` against this index; out-of-vocabulary tokens are
    /// ignored.
    fn vectorize(&self, text: &str) -> SparseVector {
        tfidf_vector(&tokenize(text), &self.vocab)
    }

    /// Rank indexed pages against `query`, keeping scores `>= min_score`.
    pub fn search(&self, query: &str, min_score: f64) -> Vec<SemanticMatchResult<'a>> {
        if self.is_empty() || tokenize(query).is_empty() {
            return Vec::new();
        }

        let query_vec = self.vectorize(query);
        let mut results: Vec<SemanticMatchResult<'a>> = self
            .documents
            .iter()
            .map(|(page, doc_vec)| SemanticMatchResult {
                page: *page,
                score: dot(&query_vec, doc_vec),
            })
            .filter(|r| r.score >= min_score)
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }
}

/// Semantic search over page titles with a per-call TF-IDF index.
pub fn search_semantic<'a>(
    query: &str,
    pages: &'a [PageEvent],
    min_score: f64,
) -> Vec<SemanticMatchResult<'a>> {
    if pages.is_empty() || query.trim().is_empty() {
        return Vec::new();
    }
    TitleIndex::build(pages).search(query, min_score)
}

// ---------------------------------------------------------------------------
// Vocabulary building
// ---------------------------------------------------------------------------

fn build_vocab(documents: &[Vec<String>]) -> Vocabulary {
    let num_docs = documents.len() as f64;
    let mut token_to_idx: HashMap<String, usize> = HashMap::new();
    let mut doc_freq: Vec<usize> = Vec::new();

    for tokens in documents {
        let mut counted_in_doc: Vec<usize> = Vec::new();
        for tok in tokens {
            let idx = match token_to_idx.get(tok) {
                Some(&idx) => idx,
                None => {
                    let idx = doc_freq.len();
                    token_to_idx.insert(tok.clone(), idx);
                    doc_freq.push(0);
                    idx
                }
            };
            if !counted_in_doc.contains(&idx) {
                counted_in_doc.push(idx);
                doc_freq[idx] += 1;
            }
        }
    }

    let idf = doc_freq
        .iter()
        .map(|&df| ((num_docs + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
        .collect();

    Vocabulary { token_to_idx, idf }
}

// ---------------------------------------------------------------------------
// TF-IDF vector computation
// ---------------------------------------------------------------------------

fn tfidf_vector(tokens: &[String], vocab: &Vocabulary) -> SparseVector {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for tok in tokens {
        if let Some(&idx) = vocab.token_to_idx.get(tok) {
            *counts.entry(idx).or_insert(0) += 1;
        }
    }

    let max_count = counts.values().copied().max().unwrap_or(1).max(1) as f64;
    let mut vector: SparseVector = counts
        .into_iter()
        .map(|(idx, count)| (idx, (count as f64 / max_count) * vocab.idf[idx]))
        .collect();
    vector.sort_by_key(|(idx, _)| *idx);

    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let norm = if norm == 0.0 { 1.0 } else { norm };
    for (_, w) in &mut vector {
        *w /= norm;
    }
    vector
}

fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
