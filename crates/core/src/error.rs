//! Error types for phrasedb
//!
//! A single error enum covers every fallible operation in the workspace.
//! Lookup misses, empty text and empty segments are normal outcomes and
//! never surface here.

use std::time::Duration;
use thiserror::Error;

/// Result alias used across phrasedb crates
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by phrasedb operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The identifier capability could not produce a document id.
    ///
    /// The insert that triggered it leaves the index unmodified.
    #[error("failed to generate document id: {0}")]
    IdGeneration(String),

    /// A segment exceeded the configured `max_segment_words` bound
    #[error("segment has {words} words, limit is {limit}")]
    SegmentTooLong {
        /// Words in the offending segment
        words: usize,
        /// Configured limit
        limit: usize,
    },

    /// An insert ran past its deadline before the merge step
    #[error("insert deadline exceeded after {elapsed:?}")]
    DeadlineExceeded {
        /// Time spent before the insert was abandoned
        elapsed: Duration,
    },

    /// A string could not be parsed as a document id
    #[error("invalid document id: {0}")]
    InvalidId(String),

    /// Configuration could not be parsed or failed validation
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True if repeating the same call may succeed.
    ///
    /// Input-shaped failures (too-long segments, bad config) fail again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::IdGeneration(_) | Error::DeadlineExceeded { .. }
        )
    }
}
