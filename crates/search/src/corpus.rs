//! Corpus: the ordered collection of document indexes
//!
//! Documents live in an append-only arena. There is no deduplication:
//! adding the same source twice stores two independent entries, and both
//! show up in search results. Nothing is ever removed or updated.
//!
//! Search normalizes the whole query as a single field and reports every
//! document whose word map contains that exact token, in the order the
//! documents were added.

use crate::document::DocumentIndex;
use crate::sink::ResultSink;
use crate::source::{FileSource, LineSource};
use crate::tokenizer::normalize;
use sift_core::{Result, SearchConfig};
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// Arena slot of a document in a [`Corpus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(usize);

impl DocId {
    /// Ingestion ordinal (0 for the first document added)
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Ordered collection of per-document indexes
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<DocumentIndex>,
    config: SearchConfig,
}

impl Corpus {
    /// Create an empty corpus with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty corpus with the given settings
    pub fn with_config(config: SearchConfig) -> Self {
        Corpus {
            documents: Vec::new(),
            config,
        }
    }

    /// Settings in effect
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // ========================================================================
    // Ingestion
    // ========================================================================

    /// Index a source and append it to the corpus.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the source cannot be read. The corpus
    /// is left unchanged in that case.
    pub fn add_document(&mut self, source: &mut dyn LineSource) -> Result<DocId> {
        let document = DocumentIndex::build(source, &self.config)?;
        Ok(self.push(document))
    }

    /// Open a file and add it, named by its path.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<DocId> {
        let mut source = FileSource::open(path)?;
        self.add_document(&mut source)
    }

    /// Append an already-built document
    pub(crate) fn push(&mut self, document: DocumentIndex) -> DocId {
        let id = DocId(self.documents.len());
        debug!(
            target: "sift::corpus",
            doc = id.0,
            name = document.name(),
            tokens = document.token_count(),
            terms = document.term_count(),
            "Document added"
        );
        self.documents.push(document);
        id
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Documents containing the normalized query, in ingestion order
    pub fn matches<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (DocId, &'a DocumentIndex)> + 'a {
        let term = normalize(query);
        self.documents
            .iter()
            .enumerate()
            .filter(move |(_, document)| document.contains(&term))
            .map(|(slot, document)| (DocId(slot), document))
    }

    /// Search for a single term.
    ///
    /// Returns one formatted record per matching document, e.g.
    /// `Found in file: notes.txt`. An empty result means no match.
    pub fn search(&self, query: &str) -> Vec<String> {
        let mut results = Vec::new();
        self.search_into(query, &mut results);
        results
    }

    /// Stream match records into a sink. Returns how many were emitted.
    pub fn search_into(&self, query: &str, sink: &mut dyn ResultSink) -> usize {
        let mut emitted = 0;
        for (_, document) in self.matches(query) {
            sink.accept(self.config.format_match(document.name()));
            emitted += 1;
        }
        trace!(target: "sift::corpus", query, hits = emitted, "Search finished");
        emitted
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of documents added
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no document has been added
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up a document by slot
    pub fn get(&self, id: DocId) -> Option<&DocumentIndex> {
        self.documents.get(id.0)
    }

    /// All documents, in ingestion order
    pub fn documents(&self) -> &[DocumentIndex] {
        &self.documents
    }
}
