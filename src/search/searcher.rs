//! Searcher implementation for executing queries against an index.

use ahash::AHashMap;
use log::debug;

use crate::analysis::analyzer::{Analyzer, TermAnalyzer};
use crate::document::Document;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::search::scorer::{Scorer, TfIdfScorer};
use crate::search::{SearchHit, SearchResults};

/// A searcher that executes free-text queries against a built index.
///
/// Query text runs through the same analysis pipeline as indexing, so a
/// query token `"cat,"` finds documents indexed under `"cat"`. Matching is
/// still case-sensitive. Documents sharing no term with the query are
/// excluded from the results rather than scored as zero.
///
/// The searcher is read-only over the index; one searcher can serve any
/// number of sequential queries.
pub struct Searcher<'a> {
    /// The index to search against.
    index: &'a InvertedIndex,
    /// Analyzer applied to query text; must match the indexing pipeline.
    analyzer: Box<dyn Analyzer>,
}

impl<'a> Searcher<'a> {
    /// Create a new searcher over the given index.
    pub fn new(index: &'a InvertedIndex) -> Result<Self> {
        Ok(Searcher {
            index,
            analyzer: Box::new(TermAnalyzer::new()?),
        })
    }

    /// Execute a query, returning hits ranked by descending TF-IDF score
    /// (ties broken by ascending document id).
    ///
    /// An empty query, a query with no indexed terms, or an empty index
    /// all yield empty results, never an error.
    pub fn search(&self, query: &str) -> Result<SearchResults> {
        let mut scores: AHashMap<u32, f64> = AHashMap::new();

        // Query terms are normalized but deliberately not deduplicated:
        // a repeated term contributes once per occurrence.
        for query_token in self.analyzer.analyze(query)? {
            let term = &query_token.text;

            let Some(doc_ids) = self.index.postings(term) else {
                continue;
            };

            let scorer = TfIdfScorer::new(doc_ids.len(), self.index.doc_count());

            for &doc_id in doc_ids {
                let Some(doc) = self.index.document(doc_id) else {
                    continue;
                };
                let term_freq = self.term_frequency(term, doc)?;
                let contribution = scorer.score(term_freq, doc.raw_token_count());
                *scores.entry(doc_id).or_insert(0.0) += contribution;
            }
        }

        let mut ranked: Vec<(u32, f64)> = scores.into_iter().collect();
        ranked.sort_by(|(id_a, score_a), (id_b, score_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(id_a.cmp(id_b))
        });

        debug!("query {query:?} matched {} documents", ranked.len());

        let hits: Vec<SearchHit> = ranked
            .into_iter()
            .filter_map(|(doc_id, score)| {
                self.index.document(doc_id).map(|doc| SearchHit {
                    doc_id,
                    score,
                    text: doc.text().to_string(),
                })
            })
            .collect();

        let max_score = hits.first().map(|hit| hit.score).unwrap_or(0.0);
        let total_hits = hits.len() as u64;

        Ok(SearchResults {
            hits,
            total_hits,
            max_score,
        })
    }

    /// Count the raw whitespace tokens of `doc` whose normalized form
    /// equals `term`.
    ///
    /// Frequency is re-derived from the document text on demand; nothing
    /// is cached between queries.
    fn term_frequency(&self, term: &str, doc: &Document) -> Result<usize> {
        let mut count = 0;
        for raw_token in doc.text().split_whitespace() {
            if self.analyzer.normalize(raw_token)?.as_deref() == Some(term) {
                count += 1;
            }
        }
        Ok(count)
    }
}
