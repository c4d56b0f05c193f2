//! Index configuration
//!
//! `IndexConfig` can be built in code with the builder methods or loaded
//! from TOML. Missing TOML keys fall back to the defaults below.
//!
//! ```toml
//! name = "facts"
//! debug = true
//! delimiters = [".", ",", "?", "!"]
//! max_segment_words = 64
//! parallel_threshold = 8
//! collapse_whitespace = false
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Characters that end a sentence-like segment
pub const DEFAULT_DELIMITERS: [char; 4] = ['.', ',', '?', '!'];

/// Segments with at least this many words fan out across worker threads
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Configuration for a phrase index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Index name, used only in diagnostics
    pub name: String,
    /// Emit diagnostic tracing events. No behavioural effect.
    pub debug: bool,
    /// Segment boundary characters
    pub delimiters: Vec<char>,
    /// Reject segments longer than this many words.
    ///
    /// None means unbounded; candidate count grows as W·(W+1)/2.
    pub max_segment_words: Option<usize>,
    /// Minimum segment length (in words) before generation is parallelized
    pub parallel_threshold: usize,
    /// Drop empty words from segments and queries.
    ///
    /// Off by default: every single space is a word boundary, so `", "`
    /// leaves an empty leading word that counts toward the segment length.
    pub collapse_whitespace: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            name: "default".to_string(),
            debug: false,
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            max_segment_words: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            collapse_whitespace: false,
        }
    }
}

impl IndexConfig {
    /// Default configuration with the given name
    pub fn new(name: impl Into<String>) -> Self {
        IndexConfig {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the debug flag
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Replace the segment delimiters
    pub fn with_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.delimiters = delimiters.into_iter().collect();
        self
    }

    /// Bound the number of words per segment
    pub fn with_max_segment_words(mut self, limit: usize) -> Self {
        self.max_segment_words = Some(limit);
        self
    }

    /// Set the parallel generation threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Drop empty words when tokenizing
    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    /// Parse a TOML document and validate it
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: IndexConfig = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(Error::Config("delimiters must not be empty".to_string()));
        }
        if self.delimiters.contains(&' ') {
            return Err(Error::Config(
                "space is the word separator and cannot be a delimiter".to_string(),
            ));
        }
        if self.max_segment_words == Some(0) {
            return Err(Error::Config(
                "max_segment_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
