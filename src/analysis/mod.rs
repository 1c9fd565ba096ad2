//! Text analysis module for Lancea.
//!
//! This module provides the tokenization and filtering pipeline that turns
//! raw document or query text into index terms.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
