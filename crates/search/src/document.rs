//! Per-document inverted index
//!
//! A `DocumentIndex` maps each token of one document to the ordered list
//! of positions where it occurs. Positions come from a single counter
//! that runs across the whole document and is never reset per line.
//!
//! # Invariants
//!
//! - Every position list is strictly increasing
//! - The lists partition `0..token_count()`: each position appears once
//! - The index is immutable once built

use crate::source::LineSource;
use crate::tokenizer::tokenize;
use sift_core::{Result, SearchConfig};
use std::collections::BTreeMap;

/// Zero-based ordinal of a token within one document
pub type Position = usize;

// ============================================================================
// DocumentIndex
// ============================================================================

/// Inverted index of a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIndex {
    /// Source identifier (usually a path); not required to be unique
    name: String,
    /// Token -> positions, in ascending order
    words: BTreeMap<String, Vec<Position>>,
    /// Number of positions handed out
    token_count: usize,
}

impl DocumentIndex {
    /// Build the index for a document by draining a line source.
    ///
    /// Each line is tokenized and every token takes the next position.
    /// With `drop_empty_tokens` set, all-punctuation fields are skipped and
    /// take no position.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the source fails mid-read. No
    /// partial index is returned.
    pub fn build(source: &mut dyn LineSource, config: &SearchConfig) -> Result<Self> {
        let mut builder = Builder::new(source.name(), config);
        while let Some(line) = source.next_line()? {
            builder.push_line(&line);
        }
        Ok(builder.finish())
    }

    /// Build an index from text already in memory.
    ///
    /// Same rules as [`DocumentIndex::build`], including
    /// `drop_empty_tokens`; in-memory text cannot fail to read.
    pub fn from_text(name: impl Into<String>, text: &str, config: &SearchConfig) -> Self {
        let mut builder = Builder::new(name, config);
        for line in text.lines() {
            builder.push_line(line);
        }
        builder.finish()
    }

    /// Document identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full token -> positions map, ordered by token
    pub fn word_index(&self) -> &BTreeMap<String, Vec<Position>> {
        &self.words
    }

    /// Positions of an already-normalized token
    pub fn positions(&self, token: &str) -> Option<&[Position]> {
        self.words.get(token).map(Vec::as_slice)
    }

    /// Check whether an already-normalized token occurs in the document
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains_key(token)
    }

    /// Total number of tokens indexed
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Number of distinct tokens
    pub fn term_count(&self) -> usize {
        self.words.len()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates tokens line by line; only `finish` hands out the index
struct Builder {
    index: DocumentIndex,
    drop_empty_tokens: bool,
}

impl Builder {
    fn new(name: impl Into<String>, config: &SearchConfig) -> Self {
        Builder {
            index: DocumentIndex {
                name: name.into(),
                words: BTreeMap::new(),
                token_count: 0,
            },
            drop_empty_tokens: config.drop_empty_tokens,
        }
    }

    fn push_line(&mut self, line: &str) {
        for token in tokenize(line) {
            if token.is_empty() && self.drop_empty_tokens {
                continue;
            }
            let position = self.index.token_count;
            self.index.words.entry(token).or_default().push(position);
            self.index.token_count += 1;
        }
    }

    fn finish(self) -> DocumentIndex {
        self.index
    }
}
