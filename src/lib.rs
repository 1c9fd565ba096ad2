//! # Lancea
//!
//! A small in-memory full-text search library with TF-IDF ranking.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - One-shot inverted index construction over an in-memory collection
//! - Whitespace tokenization with punctuation stripping and digit rejection
//! - TF-IDF scored, deterministically ranked query results
//! - Line-oriented document ingestion and a small CLI
//!
//! ## Quickstart
//!
//! ```
//! use lancea::document::Document;
//! use lancea::index::IndexBuilder;
//! use lancea::search::Searcher;
//!
//! let documents = vec![
//!     Document::new(1, "the cat sat"),
//!     Document::new(2, "the dog ran"),
//! ];
//!
//! let index = IndexBuilder::new().unwrap().build(documents).unwrap();
//! let searcher = Searcher::new(&index).unwrap();
//!
//! let results = searcher.search("cat").unwrap();
//! assert_eq!(results.hits[0].doc_id, 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod index;
pub mod search;
pub mod source;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
