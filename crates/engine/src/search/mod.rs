//! Phrase search: segmentation, tokenization, n-gram generation and the index
//!
//! This module contains:
//! - `segment`: sentence-like splitting on delimiter characters
//! - `tokenizer`: lowercase, space-separated word sequences
//! - `ngram`: every contiguous window with its specificity score
//! - `document`: documents, their tokens and deletion handles
//! - `index`: the concurrent phrase -> token index

pub mod document;
mod index;
pub mod ngram;
pub mod segment;
pub mod tokenizer;

pub use document::{Document, DocumentHandle, Token};
pub use index::{IndexStats, PhraseIndex};
pub use ngram::{candidate_count, ngrams, score, segment_candidates, Candidate, Deadline};
pub use segment::split_segments;
pub use tokenizer::{
    normalize, normalize_query, normalize_query_collapsed, tokenize, tokenize_collapsed,
};
