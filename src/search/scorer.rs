//! Scoring implementations for ranking search results.

use std::fmt::Debug;

/// Trait for per-term document scorers.
pub trait Scorer: Send + Debug {
    /// Score one document for this scorer's term, given how often the term
    /// occurs in the document and the document's raw token count.
    fn score(&self, term_freq: usize, token_count: usize) -> f64;

    /// Get the name of this scorer.
    fn name(&self) -> &'static str;
}

/// TF-IDF scorer for a single term.
///
/// - `TF = term_freq / token_count`, the term's share of the document's
///   raw whitespace tokens.
/// - `IDF = ln((N + 1) / (df + 1))`, where `N` is the number of documents
///   in the collection and `df` the number of documents containing the
///   term. Both counts are incremented by one so an empty collection and
///   ubiquitous terms stay finite and non-negative.
///
/// Scores are accumulated additively across query terms by the searcher.
#[derive(Debug, Clone)]
pub struct TfIdfScorer {
    /// Number of documents containing the term.
    doc_freq: usize,
    /// Total number of documents in the collection.
    total_docs: usize,
}

impl TfIdfScorer {
    /// Create a new TF-IDF scorer for a term with the given document
    /// frequency, over a collection of `total_docs` documents.
    pub fn new(doc_freq: usize, total_docs: usize) -> Self {
        TfIdfScorer {
            doc_freq,
            total_docs,
        }
    }

    /// Calculate the IDF (Inverse Document Frequency) component.
    pub fn idf(&self) -> f64 {
        let n = self.total_docs as f64;
        let df = self.doc_freq as f64;

        ((n + 1.0) / (df + 1.0)).ln()
    }

    /// Calculate the TF (Term Frequency) component.
    pub fn tf(&self, term_freq: usize, token_count: usize) -> f64 {
        if token_count == 0 {
            return 0.0;
        }

        term_freq as f64 / token_count as f64
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, term_freq: usize, token_count: usize) -> f64 {
        self.tf(term_freq, token_count) * self.idf()
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tf_ratio() {
        let scorer = TfIdfScorer::new(1, 10);
        assert_eq!(scorer.tf(1, 5), 0.2);
        assert_eq!(scorer.tf(0, 5), 0.0);
        assert_eq!(scorer.tf(0, 0), 0.0);
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let rare = TfIdfScorer::new(1, 10);
        let common = TfIdfScorer::new(10, 10);

        assert!(rare.idf() > common.idf());
        // A term present in every document sits at the ln(1) floor.
        assert!(common.idf().abs() < 1e-12);
    }

    #[test]
    fn idf_uses_collection_document_count() {
        // N is the number of documents, not the sum of posting-list
        // lengths: with 3 documents and df = 1, IDF is ln(4 / 2)
        // regardless of how many other terms the index holds.
        let scorer = TfIdfScorer::new(1, 3);
        assert!((scorer.idf() - (4.0f64 / 2.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_score_is_non_negative() {
        let scorer = TfIdfScorer::new(3, 3);
        assert!(scorer.score(2, 4) >= 0.0);

        let empty = TfIdfScorer::new(0, 0);
        assert!(empty.score(0, 0) >= 0.0);
    }
}
