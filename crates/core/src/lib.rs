//! Core types for phrasedb
//!
//! This crate defines the foundational pieces shared by the engine:
//! - Error: the workspace-wide error enum and `Result` alias
//! - DocumentId / IdGenerator: time-sortable document identifiers
//! - IndexConfig: index configuration, loadable from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{IndexConfig, DEFAULT_DELIMITERS, DEFAULT_PARALLEL_THRESHOLD};
pub use error::{Error, Result};
pub use types::{DocumentId, IdGenerator, UuidV7Generator};
