//! Public types for the phrasedb API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Identifiers and id generation
pub use phrasedb_core::{DocumentId, IdGenerator, UuidV7Generator};

// Configuration
pub use phrasedb_core::{IndexConfig, DEFAULT_DELIMITERS, DEFAULT_PARALLEL_THRESHOLD};

// Errors
pub use phrasedb_core::{Error, Result};

// Index, documents and tokens
pub use phrasedb_engine::{Document, DocumentHandle, IndexStats, PhraseIndex, Token};
