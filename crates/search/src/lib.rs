//! Full-text search over plain-text documents
//!
//! This crate provides:
//! - Tokenizer: whitespace split, punctuation stripping, case folding
//! - LineSource trait with file, reader and in-memory sources
//! - DocumentIndex: per-document token -> positions map
//! - Corpus: append-only document collection with single-term search
//! - ResultSink trait for streaming match records
//! - SharedCorpus: readers-writer handle for concurrent use
//!
//! # Usage
//!
//! ```
//! use sift_search::{Corpus, MemorySource};
//!
//! let mut corpus = Corpus::new();
//! let mut source = MemorySource::new("doc1", ["Hello, World!", "hello again"]);
//! corpus.add_document(&mut source).unwrap();
//!
//! assert_eq!(corpus.search("HELLO"), vec!["Found in file: doc1"]);
//! assert!(corpus.search("missing").is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod document;
pub mod shared;
pub mod sink;
pub mod source;
pub mod tokenizer;

// Re-export commonly used types
pub use corpus::{Corpus, DocId};
pub use document::{DocumentIndex, Position};
pub use shared::SharedCorpus;
pub use sink::ResultSink;
pub use source::{FileSource, LineSource, MemorySource, ReaderSource};
pub use tokenizer::{normalize, tokenize, tokenize_line, Tokens};

pub use sift_core::{Error, Result, SearchConfig, CONFIG_FILE_NAME};
