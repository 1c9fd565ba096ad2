//! In-memory inverted index.
//!
//! The index maps each term to the list of documents containing it, in
//! document insertion order. It is built once by [`builder::IndexBuilder`]
//! and read-only afterward; re-indexing means building a fresh index and
//! swapping it in whole, never mutating in place.

pub mod builder;

pub use builder::IndexBuilder;

use ahash::AHashMap;

use crate::document::Document;

/// An inverted index over an in-memory document collection.
///
/// Holds the postings (term -> document ids, insertion-ordered, each
/// document at most once per term) and the document store the postings
/// refer to. Safe to share across threads once built.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// Documents in insertion order.
    documents: Vec<Document>,

    /// Document id -> position in `documents`.
    id_to_pos: AHashMap<u32, usize>,

    /// Term -> ids of documents containing the term.
    postings: AHashMap<String, Vec<u32>>,
}

impl InvertedIndex {
    pub(crate) fn new(documents: Vec<Document>, postings: AHashMap<String, Vec<u32>>) -> Self {
        let id_to_pos = documents
            .iter()
            .enumerate()
            .map(|(pos, doc)| (doc.id(), pos))
            .collect();

        InvertedIndex {
            documents,
            id_to_pos,
            postings,
        }
    }

    /// Get the number of documents in the collection.
    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Get the number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Get the total number of (term, document) postings.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(|ids| ids.len()).sum()
    }

    /// Get the posting list for a term, if the term is indexed.
    pub fn postings(&self, term: &str) -> Option<&[u32]> {
        self.postings.get(term).map(|ids| ids.as_slice())
    }

    /// Look up a document by id.
    pub fn document(&self, doc_id: u32) -> Option<&Document> {
        self.id_to_pos.get(&doc_id).map(|&pos| &self.documents[pos])
    }

    /// Iterate over the documents in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Iterate over the indexed terms (arbitrary order).
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(|term| term.as_str())
    }

    /// Check whether the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
