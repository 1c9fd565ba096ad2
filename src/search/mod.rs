//! Query execution and result types.

pub mod scorer;
pub mod searcher;

pub use scorer::{Scorer, TfIdfScorer};
pub use searcher::Searcher;

use serde::{Deserialize, Serialize};

/// A search hit containing a document and its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The document ID.
    pub doc_id: u32,
    /// The accumulated TF-IDF relevance score.
    pub score: f64,
    /// The document text.
    pub text: String,
}

/// Search results, ranked by descending score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// The search hits.
    pub hits: Vec<SearchHit>,
    /// Total number of matching documents.
    pub total_hits: u64,
    /// Maximum score in the results.
    pub max_score: f64,
}

impl SearchResults {
    /// Empty results (no matching documents).
    pub fn empty() -> Self {
        SearchResults {
            hits: Vec::new(),
            total_hits: 0,
            max_score: 0.0,
        }
    }
}
