//! phrasedb: an in-memory phrase index
//!
//! Every contiguous word window of the inserted text becomes an exact-match
//! lookup key. Each hit carries a specificity score, `n / W`, so a match
//! covering a whole sentence ranks above a fragment of it.
//!
//! # Example
//!
//! ```
//! use phrasedb::PhraseIndex;
//!
//! let index: PhraseIndex = PhraseIndex::new("facts", false);
//! let spot = index.insert_document("my adorable pet dog", "Spot").unwrap();
//! index.insert("an awesome programming language that i enjoy", "Go").unwrap();
//!
//! let hits = index.search("Pet Dog");
//! assert_eq!(hits[0].payload(), "Spot");
//! assert_eq!(hits[0].score(), 0.5);
//!
//! let hits = index.search("an awesome programming language");
//! assert_eq!(hits[0].payload(), "Go");
//!
//! assert!(spot.delete());
//! assert!(index.search("pet dog").is_empty());
//! ```

#![warn(missing_docs)]

mod types;

pub use types::*;

/// Lower-level building blocks: segmentation, tokenization and n-grams
pub mod text {
    pub use phrasedb_engine::search::ngram::{
        candidate_count, ngrams, score, segment_candidates, window_candidates, Candidate, Deadline,
    };
    pub use phrasedb_engine::search::segment::split_segments;
    pub use phrasedb_engine::search::tokenizer::{
        normalize, normalize_query, normalize_query_collapsed, tokenize, tokenize_collapsed,
    };
}
