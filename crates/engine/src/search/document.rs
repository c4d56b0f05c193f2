//! Documents and the tokens they own
//!
//! A `Document` is created by one insert and owns every `Token` generated
//! from its text. The phrase index holds shared references to the same
//! tokens under their phrase keys.
//!
//! Tokens point back at their document by id only. The payload is shared
//! through its own `Arc`, so there is no reference cycle between a
//! document and its tokens.

use super::index::Shared;
use phrasedb_core::DocumentId;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::{Arc, Weak};

// ============================================================================
// Token
// ============================================================================

/// One indexed (phrase, score, document) record
///
/// Immutable after creation.
#[derive(Debug)]
pub struct Token<P> {
    phrase: Arc<str>,
    score: f64,
    document: DocumentId,
    payload: Arc<P>,
}

impl<P> Token<P> {
    pub(crate) fn new(phrase: Arc<str>, score: f64, document: DocumentId, payload: Arc<P>) -> Self {
        Token {
            phrase,
            score,
            document,
            payload,
        }
    }

    /// Normalized phrase, also the index key
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Specificity score in (0, 1]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Id of the document that produced this token
    pub fn document_id(&self) -> DocumentId {
        self.document
    }

    /// Payload of the owning document
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

// ============================================================================
// Document
// ============================================================================

/// One inserted unit of text: id, payload and the tokens it produced
pub struct Document<P> {
    id: DocumentId,
    payload: Arc<P>,
    tokens: Vec<Arc<Token<P>>>,
}

impl<P> Document<P> {
    pub(crate) fn new(id: DocumentId, payload: Arc<P>) -> Self {
        Document {
            id,
            payload,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, token: Arc<Token<P>>) {
        self.tokens.push(token);
    }

    /// Empty the token collection, returning what it held
    pub(crate) fn take_tokens(&mut self) -> Vec<Arc<Token<P>>> {
        std::mem::take(&mut self.tokens)
    }

    /// Document id
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Opaque payload supplied at insert time
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Tokens in generation order
    pub fn tokens(&self) -> &[Arc<Token<P>>] {
        &self.tokens
    }

    /// Number of tokens owned
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Distinct phrases, in first-seen order
    pub fn phrases(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.tokens
            .iter()
            .map(|t| t.phrase())
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

impl<P> Clone for Document<P> {
    fn clone(&self) -> Self {
        Document {
            id: self.id,
            payload: Arc::clone(&self.payload),
            tokens: self.tokens.clone(),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Document<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.id)
            .field("payload", &self.payload)
            .field("tokens", &self.tokens.len())
            .finish()
    }
}

// ============================================================================
// DocumentHandle
// ============================================================================

/// Handle returned by `PhraseIndex::insert_document`
///
/// Holds a weak reference to the index: the index owns documents, a
/// handle never keeps it alive.
pub struct DocumentHandle<P> {
    id: DocumentId,
    phrases: usize,
    index: Weak<Shared<P>>,
}

impl<P> DocumentHandle<P> {
    pub(crate) fn new(id: DocumentId, phrases: usize, index: Weak<Shared<P>>) -> Self {
        DocumentHandle { id, phrases, index }
    }

    /// Id of the inserted document
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Number of phrases the insert indexed
    pub fn phrase_count(&self) -> usize {
        self.phrases
    }

    /// Remove the document and purge its tokens from the index.
    ///
    /// Returns false if the index has been dropped or the document was
    /// already deleted.
    pub fn delete(self) -> bool {
        match self.index.upgrade() {
            Some(shared) => shared.delete(&self.id).is_some(),
            None => false,
        }
    }
}

impl<P> fmt::Debug for DocumentHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentHandle")
            .field("id", &self.id)
            .field("phrases", &self.phrases)
            .field("index_alive", &(self.index.strong_count() > 0))
            .finish()
    }
}
