//! Inverted index data structures.
//!
//! Maps each word to a bucket of postings, one per document containing the
//! word. Documents are referred to by their position in the corpus.

use std::collections::HashMap;

/// Position of a document within the corpus passed to the engine.
pub type DocId = usize;

/// A single entry in a word's bucket: "this word occurs in this document,
/// this many times".
///
/// The document is fixed at creation; the frequency starts at 1 and only
/// ever grows. Postings are never shared across documents.
#[derive(Debug, Clone)]
pub struct Posting {
    doc_id: DocId,
    term_frequency: u32,
}

impl Posting {
    pub(crate) fn new(doc_id: DocId) -> Self {
        Self {
            doc_id,
            term_frequency: 1,
        }
    }

    pub(crate) fn increment(&mut self) {
        self.term_frequency += 1;
    }

    /// The document this posting belongs to.
    pub fn doc_id(&self) -> DocId {
        self.doc_id
    }

    /// How many times the word occurs in the document.
    pub fn term_frequency(&self) -> u32 {
        self.term_frequency
    }
}

/// Inverted index mapping words to postings buckets.
///
/// Holds exactly one posting per (word, document) pair. Bucket order is
/// corpus order; ranking never depends on it beyond stable-sort
/// tie-breaking.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    buckets: HashMap<String, Vec<Posting>>,
}

impl InvertedIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word` in document `doc_id`: increments
    /// the existing posting for the pair, or creates it with frequency 1.
    pub(crate) fn record(&mut self, word: &str, doc_id: DocId) {
        match self.buckets.get_mut(word) {
            Some(bucket) => match bucket.iter_mut().find(|p| p.doc_id == doc_id) {
                Some(posting) => posting.increment(),
                None => bucket.push(Posting::new(doc_id)),
            },
            None => {
                self.buckets.insert(word.to_string(), vec![Posting::new(doc_id)]);
            }
        }
    }

    /// The bucket for `word`; empty if the word was never indexed.
    pub fn bucket(&self, word: &str) -> &[Posting] {
        self.buckets.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct documents containing `word`.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.bucket(word).len()
    }

    /// Number of distinct words in the index.
    pub fn term_count(&self) -> usize {
        self.buckets.len()
    }
}
