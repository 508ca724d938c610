//! In-memory single-term full-text search ranked by TF-IDF.
//!
//! `docrank` builds an inverted index over a fixed corpus of file-backed
//! documents and answers one-word queries with document names ordered by
//! TF-IDF score. Document text lives on disk and is re-read whenever a
//! document's length is needed for scoring, so scores reflect the current
//! file contents; see [`IndexOptions`] for the opt-in cached-length mode.
//!
//! ```rust,ignore
//! use docrank::{Document, SearchEngine};
//!
//! let corpus = vec![
//!     Document::new("articles/document1.txt")?,
//!     Document::new("articles/document2.txt")?,
//! ];
//! let engine = SearchEngine::build(corpus);
//! for name in engine.search("fox") {
//!     println!("{name}");
//! }
//! ```

pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod tokenizer;

pub use document::Document;
pub use engine::{IndexOptions, SearchEngine};
pub use error::{Error, Result};
pub use index::{DocId, InvertedIndex, Posting};
