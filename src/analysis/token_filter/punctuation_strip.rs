//! Punctuation strip filter implementation.

use regex::Regex;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::{LanceaError, Result};

/// A filter that removes punctuation and tab characters from tokens.
///
/// Strips commas, periods, colons, semicolons, quotation marks, every
/// character in the Unicode punctuation class, and tabs. Only the
/// offending characters are removed; the rest of the token is kept, so
/// `"cat,"` becomes `"cat"` and `"don't"` becomes `"dont"`.
///
/// # Examples
///
/// ```
/// use lancea::analysis::token::Token;
/// use lancea::analysis::token_filter::{Filter, PunctuationStripFilter};
///
/// let filter = PunctuationStripFilter::new().unwrap();
/// let tokens = vec![Token::new("cat,", 0), Token::new("\"dog\"", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(result[0].text, "cat");
/// assert_eq!(result[1].text, "dog");
/// ```
#[derive(Clone, Debug)]
pub struct PunctuationStripFilter {
    pattern: Regex,
}

impl PunctuationStripFilter {
    /// Create a new punctuation strip filter.
    pub fn new() -> Result<Self> {
        // \p{P} covers the ASCII marks as well; the tab is the one
        // stripped character outside the punctuation class.
        let pattern = Regex::new(r"[\p{P}\t]")
            .map_err(|e| LanceaError::analysis(format!("Invalid strip pattern: {e}")))?;

        Ok(PunctuationStripFilter { pattern })
    }
}

impl Filter for PunctuationStripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let pattern = &self.pattern;
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let stripped = pattern.replace_all(&token.text, "").into_owned();
                    token.with_text(stripped)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn run(filter: &PunctuationStripFilter, text: &str) -> String {
        let tokens = vec![Token::new(text, 0)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        result[0].text.clone()
    }

    #[test]
    fn test_strips_ascii_punctuation() {
        let filter = PunctuationStripFilter::new().unwrap();
        assert_eq!(run(&filter, "cat,"), "cat");
        assert_eq!(run(&filter, "end."), "end");
        assert_eq!(run(&filter, "a:b;c"), "abc");
        assert_eq!(run(&filter, "\"quoted\""), "quoted");
    }

    #[test]
    fn test_strips_unicode_punctuation() {
        let filter = PunctuationStripFilter::new().unwrap();
        assert_eq!(run(&filter, "don\u{2019}t"), "dont");
        assert_eq!(run(&filter, "\u{00BF}que?"), "que");
    }

    #[test]
    fn test_strips_tabs() {
        let filter = PunctuationStripFilter::new().unwrap();
        assert_eq!(run(&filter, "a\tb"), "ab");
    }

    #[test]
    fn test_all_punctuation_yields_empty() {
        let filter = PunctuationStripFilter::new().unwrap();
        assert_eq!(run(&filter, "..."), "");
    }

    #[test]
    fn test_preserves_case() {
        let filter = PunctuationStripFilter::new().unwrap();
        assert_eq!(run(&filter, "Cat."), "Cat");
    }

    #[test]
    fn test_filter_name() {
        let filter = PunctuationStripFilter::new().unwrap();
        assert_eq!(filter.name(), "punctuation_strip");
    }
}
