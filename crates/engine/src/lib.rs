//! Phrase indexing engine for phrasedb
//!
//! Text goes in as documents; every contiguous word window of every
//! sentence-like segment comes out as an exact-match lookup key scored by
//! how much of its segment it covers.
//!
//! ```text
//! text ─▶ segment ─▶ tokenizer ─▶ ngram (rayon fan-out) ─▶ PhraseIndex
//!                                                            │
//! query ─▶ normalize_query ───────────────────────────────▶ search
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod search;

pub use phrasedb_core::{DocumentId, Error, IdGenerator, IndexConfig, Result};
pub use search::{Document, DocumentHandle, IndexStats, PhraseIndex, Token};
