//! Digit reject filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that stops tokens containing at least one digit character.
///
/// Terms like `"42"`, `"4th"`, or `"v2"` carry no useful vocabulary for
/// this index and are dropped entirely rather than cleaned. Detection is
/// a direct character scan over the token text.
///
/// # Examples
///
/// ```
/// use lancea::analysis::token::Token;
/// use lancea::analysis::token_filter::{DigitRejectFilter, Filter};
///
/// let filter = DigitRejectFilter::new();
/// let tokens = vec![Token::new("cat", 0), Token::new("4th", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert!(!result[0].is_stopped());
/// assert!(result[1].is_stopped());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DigitRejectFilter;

impl DigitRejectFilter {
    /// Create a new digit reject filter.
    pub fn new() -> Self {
        DigitRejectFilter
    }
}

impl Filter for DigitRejectFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if !token.is_stopped() && token.text.chars().any(|c| c.is_ascii_digit()) {
                    token.stop()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "digit_reject"
    }
}
