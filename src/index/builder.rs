//! One-shot batch construction of the inverted index.

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::{Analyzer, TermAnalyzer};
use crate::document::Document;
use crate::error::Result;
use crate::index::InvertedIndex;

/// Builds an [`InvertedIndex`] from a document collection in a single pass.
///
/// Per document, the builder collapses the raw whitespace tokens to their
/// distinct surface forms, normalizes each through the analyzer, and posts
/// the document under every surviving term. Two surface forms that
/// normalize to the same term (`"cat,"` and `"cat."`) post the document
/// only once.
///
/// # Examples
///
/// ```
/// use lancea::document::Document;
/// use lancea::index::IndexBuilder;
///
/// let documents = vec![
///     Document::new(1, "the cat sat"),
///     Document::new(2, "the dog ran"),
/// ];
///
/// let index = IndexBuilder::new().unwrap().build(documents).unwrap();
///
/// assert_eq!(index.doc_count(), 2);
/// assert_eq!(index.postings("the"), Some(&[1, 2][..]));
/// assert_eq!(index.postings("cat"), Some(&[1][..]));
/// ```
pub struct IndexBuilder {
    analyzer: Box<dyn Analyzer>,
}

impl IndexBuilder {
    /// Create a new index builder with the standard term analyzer.
    pub fn new() -> Result<Self> {
        Ok(IndexBuilder {
            analyzer: Box::new(TermAnalyzer::new()?),
        })
    }

    /// Create a new index builder with a custom analyzer.
    pub fn with_analyzer(analyzer: Box<dyn Analyzer>) -> Self {
        IndexBuilder { analyzer }
    }

    /// Build the index, consuming the document collection.
    ///
    /// An empty collection yields an empty index; documents whose text
    /// contributes no terms simply post nothing. There are no error
    /// conditions beyond analyzer failure.
    pub fn build(&self, documents: Vec<Document>) -> Result<InvertedIndex> {
        let mut postings: AHashMap<String, Vec<u32>> = AHashMap::new();

        for doc in &documents {
            let unique_tokens: AHashSet<&str> = doc.text().split_whitespace().collect();

            for raw_token in unique_tokens {
                let Some(term) = self.analyzer.normalize(raw_token)? else {
                    continue;
                };

                let ids = postings.entry(term).or_default();
                // Distinct surface forms of the same term must not
                // double-post this document. Documents are processed in
                // order, so checking the tail is enough.
                if ids.last() != Some(&doc.id()) {
                    ids.push(doc.id());
                }
            }
        }

        debug!(
            "built index: {} documents, {} terms",
            documents.len(),
            postings.len()
        );

        Ok(InvertedIndex::new(documents, postings))
    }
}
