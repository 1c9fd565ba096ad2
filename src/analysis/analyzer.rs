//! Analyzer trait and the term analysis pipeline.
//!
//! Analyzers combine a tokenizer and a chain of filters to turn raw text
//! into index terms:
//!
//! ```text
//! Raw Text -> Tokenizer -> Filter 1 -> ... -> Filter N -> Terms
//! ```
//!
//! [`TermAnalyzer`] is the pipeline used for both indexing and queries:
//! whitespace tokenization, punctuation stripping, digit rejection, and
//! an empty-token sweep. It performs no case folding, so `"Cat"` and
//! `"cat"` are distinct terms.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    DigitRejectFilter, Filter, PunctuationStripFilter, RemoveEmptyFilter,
};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into index terms.
pub trait Analyzer: Send + Sync {
    /// Process text into a stream of surviving tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Normalize a single raw token, returning `None` when analysis
    /// discards it (empty after stripping, or containing a digit).
    fn normalize(&self, raw_token: &str) -> Result<Option<String>> {
        let mut tokens = self.analyze(raw_token)?;
        Ok(tokens.next().map(|token| token.text))
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The standard term analysis pipeline.
///
/// # Examples
///
/// ```
/// use lancea::analysis::analyzer::{Analyzer, TermAnalyzer};
///
/// let analyzer = TermAnalyzer::new().unwrap();
/// let terms: Vec<_> = analyzer.analyze("The cat, sat.").unwrap().collect();
///
/// assert_eq!(terms[0].text, "The");
/// assert_eq!(terms[1].text, "cat");
/// assert_eq!(terms[2].text, "sat");
/// ```
pub struct TermAnalyzer {
    tokenizer: WhitespaceTokenizer,
    filters: Vec<Box<dyn Filter>>,
}

impl TermAnalyzer {
    /// Create a new term analyzer.
    pub fn new() -> Result<Self> {
        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(PunctuationStripFilter::new()?),
            Box::new(DigitRejectFilter::new()),
            Box::new(RemoveEmptyFilter::new()),
        ];

        Ok(TermAnalyzer {
            tokenizer: WhitespaceTokenizer::new(),
            filters,
        })
    }
}

impl Analyzer for TermAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "term"
    }
}
