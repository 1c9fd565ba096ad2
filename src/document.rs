//! Document structure for in-memory indexing.

use serde::{Deserialize, Serialize};

/// A document represents a single item to be indexed.
///
/// Documents are immutable once created: an integer identifier (unique,
/// assigned in ingestion order starting at 1) and one line of raw text.
/// Neither the index builder nor the searcher ever mutates a document.
///
/// # Examples
///
/// ```
/// use lancea::document::Document;
///
/// let doc = Document::new(1, "the cat sat");
/// assert_eq!(doc.id(), 1);
/// assert_eq!(doc.text(), "the cat sat");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The document identifier (unique, >= 1).
    id: u32,

    /// The raw text body of the document.
    text: String,
}

impl Document {
    /// Create a new document.
    pub fn new<S: Into<String>>(id: u32, text: S) -> Self {
        Document {
            id,
            text: text.into(),
        }
    }

    /// Get the document identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Count the raw whitespace-delimited tokens in the document text.
    ///
    /// This is the term-frequency denominator: every raw token counts,
    /// including tokens that analysis later discards.
    pub fn raw_token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_accessors() {
        let doc = Document::new(3, "hello world");
        assert_eq!(doc.id(), 3);
        assert_eq!(doc.text(), "hello world");
    }

    #[test]
    fn test_raw_token_count() {
        assert_eq!(Document::new(1, "the cat sat on a mat").raw_token_count(), 6);
        assert_eq!(Document::new(2, "  spaced\tout  ").raw_token_count(), 2);
        assert_eq!(Document::new(3, "").raw_token_count(), 0);
    }
}
