//! Thread-safe corpus handle
//!
//! Wraps a [`Corpus`] in a readers-writer lock. Searches share the read
//! lock and run concurrently; an append takes the write lock and never
//! overlaps a search. Documents are built before the write lock is taken,
//! so a slow source blocks nobody but its own caller.

use crate::corpus::{Corpus, DocId};
use crate::document::DocumentIndex;
use crate::source::{FileSource, LineSource};
use parking_lot::RwLock;
use sift_core::{Result, SearchConfig};
use std::path::Path;
use std::sync::Arc;

/// Cloneable, thread-safe handle to a shared corpus
#[derive(Debug, Clone, Default)]
pub struct SharedCorpus {
    inner: Arc<RwLock<Corpus>>,
}

impl SharedCorpus {
    /// Create an empty shared corpus with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared corpus with the given settings
    pub fn with_config(config: SearchConfig) -> Self {
        Self::from(Corpus::with_config(config))
    }

    /// Index a source and append it.
    ///
    /// The source is drained without holding any lock.
    pub fn add_document(&self, source: &mut dyn LineSource) -> Result<DocId> {
        let config = self.inner.read().config().clone();
        let document = DocumentIndex::build(source, &config)?;
        Ok(self.inner.write().push(document))
    }

    /// Open a file and add it, named by its path.
    pub fn add_file(&self, path: impl AsRef<Path>) -> Result<DocId> {
        let mut source = FileSource::open(path)?;
        self.add_document(&mut source)
    }

    /// Search for a single term. See [`Corpus::search`].
    pub fn search(&self, query: &str) -> Vec<String> {
        self.inner.read().search(query)
    }

    /// Run a closure against a consistent view of the corpus
    pub fn with_read<R>(&self, f: impl FnOnce(&Corpus) -> R) -> R {
        f(&self.inner.read())
    }

    /// Number of documents added
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if no document has been added
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<Corpus> for SharedCorpus {
    fn from(corpus: Corpus) -> Self {
        SharedCorpus {
            inner: Arc::new(RwLock::new(corpus)),
        }
    }
}
