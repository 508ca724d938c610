//! Index construction and TF-IDF ranked search.

use std::cmp::Ordering;

use tracing::warn;

use crate::document::Document;
use crate::index::{DocId, InvertedIndex};
use crate::tokenizer::tokenize;

/// Options controlling index construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexOptions {
    /// Capture each document's token count during the build and reuse it at
    /// scoring time, instead of re-reading the file on every score
    /// computation. Off by default: scores then track the live file
    /// contents, and a document that disappears after the build drops out
    /// of the results.
    pub cache_document_length: bool,
}

/// An in-memory full-text index over a fixed corpus, queryable one word at
/// a time.
///
/// The engine is immutable once built; queries take `&self` and can run
/// concurrently.
pub struct SearchEngine {
    documents: Vec<Document>,
    index: InvertedIndex,
    /// One entry per corpus document when length caching is on; `None` for
    /// documents that could not be read at build time.
    cached_lengths: Option<Vec<Option<usize>>>,
}

impl SearchEngine {
    /// Builds an index over `documents` with default options.
    ///
    /// The corpus is fixed from here on. An empty corpus is valid and
    /// matches nothing. A document that cannot be read is logged and
    /// skipped; the rest of the corpus still indexes.
    pub fn build(documents: Vec<Document>) -> Self {
        Self::build_with_options(documents, IndexOptions::default())
    }

    /// Builds an index over `documents` with explicit options.
    pub fn build_with_options(documents: Vec<Document>, options: IndexOptions) -> Self {
        let mut index = InvertedIndex::new();
        let mut lengths = options
            .cache_document_length
            .then(|| Vec::with_capacity(documents.len()));

        for (doc_id, document) in documents.iter().enumerate() {
            let text = match document.read_text() {
                Ok(text) => text,
                Err(err) => {
                    warn!(
                        document = %document.path().display(),
                        error = %err,
                        "skipping unreadable document"
                    );
                    if let Some(lengths) = lengths.as_mut() {
                        lengths.push(None);
                    }
                    continue;
                }
            };
            let tokens = tokenize(&text);
            if let Some(lengths) = lengths.as_mut() {
                lengths.push(Some(tokens.len()));
            }
            for word in tokens {
                index.record(word, doc_id);
            }
        }

        Self {
            documents,
            index,
            cached_lengths: lengths,
        }
    }

    /// Builds an index over a single document, equivalent to
    /// `build(vec![document])`.
    pub fn from_document(document: Document) -> Self {
        Self::build(vec![document])
    }

    /// Returns the names of the documents containing `query`, ordered by
    /// ascending TF-IDF score.
    ///
    /// Ascending means the lowest-scoring match comes first, so the least
    /// relevant document leads the list. Downstream consumers depend on
    /// this order; callers that want best-first must reverse. Ties keep
    /// corpus order. An unseen word, an empty query, or an
    /// empty corpus all return an empty vector. A document whose length
    /// cannot be computed is dropped from the results; the query itself
    /// never fails.
    pub fn search(&self, query: &str) -> Vec<String> {
        let bucket = self.index.bucket(query);
        if bucket.is_empty() {
            return Vec::new();
        }

        let idf = self.inverse_document_frequency(query);
        let mut scored: Vec<(f64, &Document)> = Vec::with_capacity(bucket.len());
        for posting in bucket {
            let length = match self.document_length(posting.doc_id()) {
                Some(length) => length,
                None => continue,
            };
            let tf = posting.term_frequency() as f64 / length as f64;
            scored.push((tf * idf, &self.documents[posting.doc_id()]));
        }

        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .map(|(_, document)| document.name())
            .collect()
    }

    /// The corpus captured at construction, in order. Includes documents
    /// that failed to index.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The underlying inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// `log10(N / (1 + df))` where `N` is the corpus size fixed at
    /// construction and `df` the number of documents containing `query`.
    fn inverse_document_frequency(&self, query: &str) -> f64 {
        let corpus_size = self.documents.len() as f64;
        let containing = self.index.document_frequency(query) as f64;
        (corpus_size / (1.0 + containing)).log10()
    }

    /// Token count of a document for scoring: the cached build-time count
    /// when caching is on, otherwise recomputed from the current file
    /// contents. `None` when the document cannot be read (or was unreadable
    /// at build time with caching on).
    fn document_length(&self, doc_id: DocId) -> Option<usize> {
        match &self.cached_lengths {
            Some(lengths) => lengths.get(doc_id).copied().flatten(),
            None => {
                let document = &self.documents[doc_id];
                match document.token_count() {
                    Ok(length) => Some(length),
                    Err(err) => {
                        warn!(
                            document = %document.path().display(),
                            error = %err,
                            "dropping match for unreadable document"
                        );
                        None
                    }
                }
            }
        }
    }
}
