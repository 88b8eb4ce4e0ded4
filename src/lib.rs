//! Sift - minimal in-memory full-text search
//!
//! Sift builds a per-document inverted index (word -> positions) from
//! plain-text sources and answers single-term containment queries.
//!
//! # Quick Start
//!
//! ```
//! use sift::{Corpus, MemorySource};
//!
//! let mut corpus = Corpus::new();
//! corpus
//!     .add_document(&mut MemorySource::new("notes", ["The cat sat."]))
//!     .unwrap();
//!
//! assert_eq!(corpus.search("Cat."), vec!["Found in file: notes"]);
//! ```
//!
//! # Architecture
//!
//! Configuration and errors live in `sift-core`; tokenization, indexing
//! and search live in `sift-search`. Everything public is re-exported here.

pub use sift_search::*;
