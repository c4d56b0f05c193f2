//! Identifier types
//!
//! Documents are keyed by a UUIDv7, which embeds a millisecond timestamp in
//! its high bits. Ordering ids therefore orders documents by creation time.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique, time-sortable document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh UUIDv7 id
    pub fn new() -> Self {
        DocumentId(Uuid::now_v7())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        DocumentId(uuid)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Creation time in milliseconds since the Unix epoch.
    ///
    /// Returns None for ids that are not UUIDv7.
    pub fn timestamp_millis(&self) -> Option<u64> {
        let ts = self.0.get_timestamp()?;
        let (secs, nanos) = ts.to_unix();
        Some(secs * 1000 + u64::from(nanos) / 1_000_000)
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(DocumentId)
            .map_err(|e| Error::InvalidId(format!("'{}': {}", s, e)))
    }
}

/// Source of document identifiers
///
/// Implementations must never hand out the same id twice. Ids should sort
/// roughly by creation time; `document_ids()` listings rely on it.
pub trait IdGenerator: Send + Sync {
    /// Produce the next id, or fail without side effects
    fn next_id(&self) -> Result<DocumentId>;
}

/// Default generator backed by `Uuid::now_v7`
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> Result<DocumentId> {
        Ok(DocumentId::new())
    }
}
