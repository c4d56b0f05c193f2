//! Concurrent phrase index
//!
//! This module provides:
//! - PhraseIndex: insert / search / delete over n-gram phrase keys
//! - Bilateral deletion: a deleted document's tokens leave the phrase map too
//! - Version watermark for change detection
//!
//! # Data Layout
//!
//! - `phrases`: phrase -> tokens, behind a `parking_lot::RwLock`
//! - `documents`: DocumentId -> Document, in a `DashMap`
//!
//! Tokens are shared (`Arc`) between the document that owns them and the
//! phrase lists that reference them. Phrase keys are `Arc<str>` and the
//! same allocation is reused by every token carrying that phrase.
//!
//! # Locking
//!
//! Candidate generation runs before any lock is taken. Only the merge is
//! serialized: the phrase write lock is held while tokens are appended and
//! the document is registered, and while a document is removed and its
//! tokens purged. Searches take the read lock, so they never observe a
//! token whose document cannot be resolved.

use super::document::{Document, DocumentHandle, Token};
use super::ngram::{segment_candidates, Candidate, Deadline};
use super::segment::split_segments;
use super::tokenizer::{normalize_query, normalize_query_collapsed, tokenize, tokenize_collapsed};
use dashmap::DashMap;
use parking_lot::RwLock;
use phrasedb_core::{DocumentId, Error, IdGenerator, IndexConfig, Result, UuidV7Generator};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

type PhraseMap<P> = FxHashMap<Arc<str>, Vec<Arc<Token<P>>>>;

// ============================================================================
// IndexStats
// ============================================================================

/// Point-in-time counters for an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Registered documents
    pub documents: usize,
    /// Distinct phrase keys
    pub phrases: usize,
    /// Tokens across all phrase lists
    pub tokens: usize,
}

// ============================================================================
// Shared state
// ============================================================================

/// State shared by every clone of a `PhraseIndex` and reachable weakly
/// from `DocumentHandle`s.
pub(crate) struct Shared<P> {
    config: IndexConfig,
    ids: Box<dyn IdGenerator>,
    phrases: RwLock<PhraseMap<P>>,
    documents: DashMap<DocumentId, Document<P>>,
    version: AtomicU64,
}

impl<P> Shared<P> {
    /// Remove a document from both mappings.
    ///
    /// Returns the number of tokens purged, or None if the id is unknown.
    pub(crate) fn delete(&self, id: &DocumentId) -> Option<usize> {
        let mut phrases = self.phrases.write();
        let (_, mut document) = self.documents.remove(id)?;
        let tokens = document.take_tokens();

        let mut keys_dropped = 0;
        for token in &tokens {
            let now_empty = match phrases.get_mut(token.phrase()) {
                Some(list) => {
                    list.retain(|t| !Arc::ptr_eq(t, token));
                    list.is_empty()
                }
                None => false,
            };
            if now_empty {
                phrases.remove(token.phrase());
                keys_dropped += 1;
            }
        }
        self.version.fetch_add(1, Ordering::Release);
        drop(phrases);

        if self.config.debug {
            debug!(
                target: "phrasedb::index",
                index = %self.config.name,
                document = %id,
                tokens = tokens.len(),
                keys_dropped,
                "deleted document"
            );
        }
        Some(tokens.len())
    }
}

// ============================================================================
// PhraseIndex
// ============================================================================

/// In-memory phrase index
///
/// Every contiguous word window of every inserted segment becomes a lookup
/// key. Lookups are exact and case-insensitive; each hit carries a
/// specificity score usable for ranking.
///
/// # Thread Safety
///
/// `PhraseIndex` is a cheap-to-clone handle (`Arc` inside) and is
/// `Send + Sync` when the payload type is. Searches run concurrently with
/// each other; inserts and deletes serialize on the phrase map.
///
/// # Example
///
/// ```
/// use phrasedb_engine::PhraseIndex;
///
/// let index: PhraseIndex = PhraseIndex::new("facts", false);
/// index.insert("my adorable pet dog", "Spot").unwrap();
///
/// let hits = index.search("Pet Dog");
/// assert_eq!(hits[0].payload(), "Spot");
/// assert_eq!(hits[0].score(), 0.5);
/// ```
pub struct PhraseIndex<P = String> {
    shared: Arc<Shared<P>>,
}

impl<P> Clone for PhraseIndex<P> {
    fn clone(&self) -> Self {
        PhraseIndex {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P> fmt::Debug for PhraseIndex<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseIndex")
            .field("name", &self.shared.config.name)
            .field("documents", &self.shared.documents.len())
            .field("version", &self.version())
            .finish()
    }
}

impl<P> PhraseIndex<P> {
    /// Create an empty index with default settings
    pub fn new(name: impl Into<String>, debug: bool) -> Self {
        let config = IndexConfig::new(name).with_debug(debug);
        Self::build(config, Box::new(UuidV7Generator))
    }

    /// Create an empty index from a configuration
    pub fn with_config(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Box::new(UuidV7Generator)))
    }

    /// Create an empty index with a custom id source
    pub fn with_id_generator(config: IndexConfig, ids: impl IdGenerator + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Box::new(ids)))
    }

    fn build(config: IndexConfig, ids: Box<dyn IdGenerator>) -> Self {
        if config.debug {
            debug!(target: "phrasedb::index", index = %config.name, "creating index");
        }
        PhraseIndex {
            shared: Arc::new(Shared {
                config,
                ids,
                phrases: RwLock::new(FxHashMap::default()),
                documents: DashMap::new(),
                version: AtomicU64::new(0),
            }),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Index name
    pub fn name(&self) -> &str {
        &self.shared.config.name
    }

    /// Whether diagnostic output is enabled
    pub fn is_debug(&self) -> bool {
        self.shared.config.debug
    }

    /// Active configuration
    pub fn config(&self) -> &IndexConfig {
        &self.shared.config
    }

    /// Version watermark, incremented by every insert, delete and clear
    pub fn version(&self) -> u64 {
        self.shared.version.load(Ordering::Acquire)
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Index `text` under a new document carrying `payload`.
    ///
    /// Returns the number of phrases indexed: the sum of the per-segment
    /// working-set sizes. A phrase repeated in two segments counts twice
    /// and yields two tokens.
    pub fn insert(&self, text: &str, payload: impl Into<P>) -> Result<usize> {
        self.insert_inner(text, payload.into(), None)
            .map(|handle| handle.phrase_count())
    }

    /// Like `insert`, returning a handle that can delete the document later
    pub fn insert_document(&self, text: &str, payload: impl Into<P>) -> Result<DocumentHandle<P>> {
        self.insert_inner(text, payload.into(), None)
    }

    /// Like `insert_document`, abandoning the insert once `deadline` passes.
    ///
    /// The deadline is checked before each window length is generated and
    /// once more before the merge. A timed-out insert leaves the index
    /// unmodified.
    pub fn insert_with_deadline(
        &self,
        text: &str,
        payload: impl Into<P>,
        deadline: Instant,
    ) -> Result<DocumentHandle<P>> {
        self.insert_inner(text, payload.into(), Some(Deadline::at(deadline)))
    }

    fn insert_inner(
        &self,
        text: &str,
        payload: P,
        deadline: Option<Deadline>,
    ) -> Result<DocumentHandle<P>> {
        let config = &self.shared.config;
        let id = self.shared.ids.next_id()?;

        let mut working: Vec<Candidate> = Vec::new();
        let mut segments = 0usize;
        for segment in split_segments(text, &config.delimiters) {
            let words = self.words(segment);
            if words.is_empty() {
                continue;
            }
            if let Some(limit) = config.max_segment_words {
                if words.len() > limit {
                    return Err(Error::SegmentTooLong {
                        words: words.len(),
                        limit,
                    });
                }
            }

            let parallel = words.len() >= config.parallel_threshold;
            let candidates = segment_candidates(&words, parallel, deadline.as_ref())?;
            if config.debug {
                trace!(
                    target: "phrasedb::index",
                    index = %config.name,
                    words = words.len(),
                    candidates = candidates.len(),
                    parallel,
                    "generated segment"
                );
            }
            working.extend(candidates);
            segments += 1;
        }

        if let Some(deadline) = &deadline {
            deadline.check()?;
        }

        let count = working.len();
        let payload = Arc::new(payload);
        let mut document = Document::new(id, Arc::clone(&payload));
        {
            let mut phrases = self.shared.phrases.write();
            if self.shared.documents.contains_key(&id) {
                return Err(Error::IdGeneration(format!("duplicate document id {}", id)));
            }

            for candidate in working {
                let existing = phrases
                    .get_key_value(candidate.phrase.as_str())
                    .map(|(key, _)| Arc::clone(key));
                let key = existing.unwrap_or_else(|| Arc::from(candidate.phrase));
                let token = Arc::new(Token::new(
                    Arc::clone(&key),
                    candidate.score,
                    id,
                    Arc::clone(&payload),
                ));
                document.push(Arc::clone(&token));
                phrases.entry(key).or_default().push(token);
            }

            self.shared.documents.insert(id, document);
            self.shared.version.fetch_add(1, Ordering::Release);
        }

        if config.debug {
            debug!(
                target: "phrasedb::index",
                index = %config.name,
                document = %id,
                segments,
                phrases = count,
                "inserted document"
            );
        }
        Ok(DocumentHandle::new(id, count, Arc::downgrade(&self.shared)))
    }

    // ========================================================================
    // Search
    // ========================================================================

    fn words(&self, segment: &str) -> Vec<String> {
        if self.shared.config.collapse_whitespace {
            tokenize_collapsed(segment)
        } else {
            tokenize(segment)
        }
    }

    fn key(&self, phrase: &str) -> String {
        if self.shared.config.collapse_whitespace {
            normalize_query_collapsed(phrase)
        } else {
            normalize_query(phrase)
        }
    }

    /// Exact, case-insensitive phrase lookup.
    ///
    /// Returns every token stored under the normalized phrase, in insertion
    /// order. A miss returns an empty list.
    pub fn search(&self, phrase: &str) -> Vec<Arc<Token<P>>> {
        let key = self.key(phrase);
        self.shared
            .phrases
            .read()
            .get(key.as_str())
            .cloned()
            .unwrap_or_default()
    }

    /// `search`, sorted by score descending and truncated to `limit`.
    ///
    /// Ties keep insertion order.
    pub fn search_ranked(&self, phrase: &str, limit: usize) -> Vec<Arc<Token<P>>> {
        let mut hits = self.search(phrase);
        hits.sort_by(|a, b| b.score().total_cmp(&a.score()));
        hits.truncate(limit);
        hits
    }

    /// True if the normalized phrase has ever been indexed and is still live
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let key = self.key(phrase);
        self.shared.phrases.read().contains_key(key.as_str())
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Remove a document and purge every one of its tokens from the index.
    ///
    /// Phrase keys left without tokens are removed. Returns the number of
    /// tokens purged, or None if the document is unknown.
    pub fn delete(&self, id: &DocumentId) -> Option<usize> {
        self.shared.delete(id)
    }

    /// Drop every document and phrase
    pub fn clear(&self) {
        let mut phrases = self.shared.phrases.write();
        phrases.clear();
        self.shared.documents.clear();
        self.shared.version.fetch_add(1, Ordering::Release);
    }

    // ========================================================================
    // Documents & statistics
    // ========================================================================

    /// Snapshot of a document, if registered
    pub fn document(&self, id: &DocumentId) -> Option<Document<P>> {
        self.shared.documents.get(id).map(|entry| entry.value().clone())
    }

    /// Registered document ids, oldest first
    pub fn document_ids(&self) -> Vec<DocumentId> {
        let mut ids: Vec<DocumentId> = self.shared.documents.iter().map(|e| *e.key()).collect();
        ids.sort();
        ids
    }

    /// Number of registered documents
    pub fn len(&self) -> usize {
        self.shared.documents.len()
    }

    /// True if no documents are registered
    pub fn is_empty(&self) -> bool {
        self.shared.documents.is_empty()
    }

    /// Number of distinct phrase keys
    pub fn phrase_count(&self) -> usize {
        self.shared.phrases.read().len()
    }

    /// Number of tokens across all phrase keys
    pub fn token_count(&self) -> usize {
        self.shared.phrases.read().values().map(Vec::len).sum()
    }

    /// Document, phrase and token counters taken under one read lock
    pub fn stats(&self) -> IndexStats {
        let phrases = self.shared.phrases.read();
        IndexStats {
            documents: self.shared.documents.len(),
            phrases: phrases.len(),
            tokens: phrases.values().map(Vec::len).sum(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn index() -> PhraseIndex {
        PhraseIndex::new("facts", false)
    }

    struct FailingIds;

    impl IdGenerator for FailingIds {
        fn next_id(&self) -> Result<DocumentId> {
            Err(Error::IdGeneration("clock unavailable".to_string()))
        }
    }

    /// Hands out the same id every time
    struct StuckIds(DocumentId);

    impl IdGenerator for StuckIds {
        fn next_id(&self) -> Result<DocumentId> {
            Ok(self.0)
        }
    }

    /// Fails every other call
    struct FlakyIds(AtomicUsize);

    impl IdGenerator for FlakyIds {
        fn next_id(&self) -> Result<DocumentId> {
            if self.0.fetch_add(1, Ordering::Relaxed) % 2 == 1 {
                return Err(Error::IdGeneration("flaky".to_string()));
            }
            Ok(DocumentId::new())
        }
    }

    #[test]
    fn test_new_index_is_empty() {
        let index = index();
        assert_eq!(index.name(), "facts");
        assert!(!index.is_debug());
        assert!(index.is_empty());
        assert_eq!(index.stats(), IndexStats::default());
        assert_eq!(index.version(), 0);
    }

    #[test]
    fn test_insert_counts_phrases() {
        let index = index();
        let count = index.insert("my adorable pet dog", "Spot").unwrap();
        assert_eq!(count, 10);
        assert_eq!(index.len(), 1);
        assert_eq!(index.phrase_count(), 10);
        assert_eq!(index.token_count(), 10);
    }

    #[test]
    fn test_insert_single_word() {
        let index = index();
        assert_eq!(index.insert("dog", "Spot").unwrap(), 1);
        let hits = index.search("dog");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score(), 1.0);
    }

    #[test]
    fn test_insert_empty_text() {
        let index = index();
        assert_eq!(index.insert("", "nothing").unwrap(), 0);
        assert_eq!(index.insert(",.?!", "nothing").unwrap(), 0);
        assert_eq!(index.phrase_count(), 0);
        // Documents are still registered, they just own no tokens
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_insert_splits_segments() {
        let index = index();
        // "pet dog" (3) + " good boy" (6): the space after the comma
        // leaves an empty leading word
        let count = index.insert("Pet dog, good boy!", "Spot").unwrap();
        assert_eq!(count, 9);
        assert!(index.search("dog good").is_empty());
        assert_eq!(index.search("good boy")[0].score(), 2.0 / 3.0);
        assert_eq!(index.search(" good boy")[0].score(), 1.0);
        assert_eq!(index.search("")[0].score(), 1.0 / 3.0);
    }

    #[test]
    fn test_whitespace_only_segment() {
        let index = index();
        // " " is one segment of two empty words: " " and a deduplicated ""
        assert_eq!(index.insert("pet dog, ", "Spot").unwrap(), 5);
        assert_eq!(index.search(" ")[0].score(), 1.0);
        assert_eq!(index.search("")[0].score(), 0.5);
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let index = index();
        index.insert("my adorable pet dog", "Spot").unwrap();
        assert!(index.search("pet  dog").is_empty());
        assert!(index.search(" pet dog").is_empty());
        assert_eq!(index.search("PET DOG").len(), 1);
    }

    #[test]
    fn test_collapse_whitespace() {
        let config = IndexConfig::new("facts").with_collapse_whitespace(true);
        let index: PhraseIndex = PhraseIndex::with_config(config).unwrap();
        assert_eq!(index.insert("Pet dog, good  boy!", "Spot").unwrap(), 6);
        assert_eq!(index.search("good boy")[0].score(), 1.0);
        assert_eq!(index.search("  Good   Boy ")[0].score(), 1.0);
        assert!(!index.contains_phrase(""));
        assert_eq!(index.insert(" , . ?!", "nothing").unwrap(), 0);
    }

    #[test]
    fn test_repeated_phrase_across_segments_kept_twice() {
        let index = index();
        // "pet dog" (3) + " pet dog" (6)
        let count = index.insert("pet dog. pet dog", "Spot").unwrap();
        assert_eq!(count, 9);
        assert_eq!(index.search("pet dog").len(), 2);
        assert_eq!(index.phrase_count(), 6);
    }

    #[test]
    fn test_search_miss_is_empty() {
        let index = index();
        index.insert("my adorable pet dog", "Spot").unwrap();
        assert!(index.search("cat").is_empty());
        assert!(index.search("dog pet").is_empty());
        assert!(!index.contains_phrase("cat"));
        assert!(index.contains_phrase("ADORABLE pet"));
    }

    #[test]
    fn test_search_ranked() {
        let index = index();
        index.insert("pet dog", "short").unwrap();
        index.insert("my adorable pet dog", "long").unwrap();
        index.insert("dog", "exact").unwrap();

        let ranked = index.search_ranked("dog", 10);
        let payloads: Vec<&str> = ranked.iter().map(|t| t.payload().as_str()).collect();
        assert_eq!(payloads, vec!["exact", "short", "long"]);

        assert_eq!(index.search_ranked("dog", 1).len(), 1);
    }

    #[test]
    fn test_delete_purges_both_sides() {
        let index = index();
        let handle = index.insert_document("my adorable pet dog", "Spot").unwrap();
        let id = handle.id();

        assert_eq!(index.delete(&id), Some(10));
        assert!(index.document(&id).is_none());
        assert!(index.search("pet dog").is_empty());
        assert!(!index.contains_phrase("my adorable pet dog"));
        assert_eq!(index.stats(), IndexStats::default());
        assert_eq!(index.delete(&id), None);
    }

    #[test]
    fn test_delete_via_handle() {
        let index = index();
        let handle = index.insert_document("pet dog", "Spot").unwrap();
        assert_eq!(handle.phrase_count(), 3);
        assert!(handle.delete());
        assert!(index.is_empty());
        assert_eq!(index.phrase_count(), 0);
    }

    #[test]
    fn test_delete_keeps_shared_phrase() {
        let index = index();
        let spot = index.insert_document("my adorable pet dog", "Spot").unwrap();
        index.insert("a pet dog", "Rex").unwrap();

        assert_eq!(index.search("pet dog").len(), 2);
        spot.delete();

        let hits = index.search("pet dog");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].payload(), "Rex");
        assert!(!index.contains_phrase("adorable"));
    }

    #[test]
    fn test_delete_repeated_phrase_in_one_document() {
        let index = index();
        let handle = index.insert_document("pet dog. pet dog", "Spot").unwrap();
        index.insert("pet dog", "Rex").unwrap();
        assert_eq!(index.search("pet dog").len(), 3);

        assert!(handle.delete());
        let hits = index.search("pet dog");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].payload(), "Rex");
    }

    #[test]
    fn test_document_snapshot() {
        let index = index();
        let handle = index.insert_document("pet dog", "Spot").unwrap();
        let doc = index.document(&handle.id()).unwrap();
        assert_eq!(doc.id(), handle.id());
        assert_eq!(doc.payload(), "Spot");
        assert_eq!(doc.token_count(), 3);
        assert_eq!(doc.phrases(), vec!["pet dog", "pet", "dog"]);
    }

    #[test]
    fn test_tokens_shared_between_document_and_index() {
        let index = index();
        let handle = index.insert_document("pet dog", "Spot").unwrap();
        let doc = index.document(&handle.id()).unwrap();
        let hits = index.search("pet dog");
        assert!(doc.tokens().iter().any(|t| Arc::ptr_eq(t, &hits[0])));
    }

    #[test]
    fn test_document_ids_oldest_first() {
        let index = index();
        let first = index.insert_document("one", "1").unwrap().id();
        std::thread::sleep(Duration::from_millis(2));
        let second = index.insert_document("two", "2").unwrap().id();
        assert_eq!(index.document_ids(), vec![first, second]);
    }

    #[test]
    fn test_id_failure_leaves_index_unmodified() {
        let index: PhraseIndex =
            PhraseIndex::with_id_generator(IndexConfig::new("facts"), FailingIds).unwrap();
        let err = index.insert("my adorable pet dog", "Spot").unwrap_err();
        assert!(matches!(err, Error::IdGeneration(_)));
        assert!(index.is_empty());
        assert_eq!(index.phrase_count(), 0);
        assert_eq!(index.version(), 0);
    }

    #[test]
    fn test_flaky_ids() {
        let index: PhraseIndex = PhraseIndex::with_id_generator(
            IndexConfig::new("facts"),
            FlakyIds(AtomicUsize::new(0)),
        )
        .unwrap();
        assert!(index.insert("pet dog", "Spot").is_ok());
        assert!(index.insert("pet cat", "Tom").is_err());
        assert!(index.insert("pet cat", "Tom").is_ok());
        assert_eq!(index.len(), 2);
        assert_eq!(index.search("pet").len(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let index: PhraseIndex =
            PhraseIndex::with_id_generator(IndexConfig::new("facts"), StuckIds(DocumentId::new()))
                .unwrap();
        index.insert("pet dog", "Spot").unwrap();
        let err = index.insert("pet cat", "Tom").unwrap_err();
        assert!(matches!(err, Error::IdGeneration(_)));
        assert!(index.search("pet cat").is_empty());
        assert_eq!(index.search("pet").len(), 1);
    }

    #[test]
    fn test_segment_limit() {
        let config = IndexConfig::new("facts").with_max_segment_words(3);
        let index: PhraseIndex = PhraseIndex::with_config(config).unwrap();

        assert_eq!(index.insert("pet dog. good boy", "Spot").unwrap(), 9);
        // " my adorable pet dog" has a leading empty word
        let err = index.insert("ok. my adorable pet dog", "Rex").unwrap_err();
        assert_eq!(err, Error::SegmentTooLong { words: 5, limit: 3 });
        assert!(index.search("ok").is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_deadline_exceeded_leaves_index_unmodified() {
        let index = index();
        let err = index
            .insert_with_deadline("my adorable pet dog", "Spot", Instant::now())
            .unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded { .. }));
        assert!(index.is_empty());
        assert_eq!(index.phrase_count(), 0);
    }

    #[test]
    fn test_deadline_met() {
        let index = index();
        let handle = index
            .insert_with_deadline(
                "my adorable pet dog",
                "Spot",
                Instant::now() + Duration::from_secs(60),
            )
            .unwrap();
        assert_eq!(handle.phrase_count(), 10);
    }

    #[test]
    fn test_custom_delimiters() {
        let config = IndexConfig::new("facts").with_delimiters([';']);
        let index: PhraseIndex = PhraseIndex::with_config(config).unwrap();
        index.insert("pet dog; good. boy", "Spot").unwrap();
        // " good. boy" is three words: "", "good.", "boy"
        assert_eq!(index.search("good. boy")[0].score(), 2.0 / 3.0);
        assert!(index.search("dog good.").is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = IndexConfig::new("facts").with_delimiters(Vec::<char>::new());
        assert!(PhraseIndex::<String>::with_config(config).is_err());
    }

    #[test]
    fn test_parallel_and_inline_agree() {
        let text = "an awesome programming language that i enjoy";
        let inline: PhraseIndex =
            PhraseIndex::with_config(IndexConfig::new("a").with_parallel_threshold(usize::MAX))
                .unwrap();
        let fanned: PhraseIndex =
            PhraseIndex::with_config(IndexConfig::new("b").with_parallel_threshold(1)).unwrap();
        assert_eq!(inline.insert(text, "Go").unwrap(), 28);
        assert_eq!(fanned.insert(text, "Go").unwrap(), 28);

        let a: Vec<(String, f64)> = inline
            .document(&inline.document_ids()[0])
            .unwrap()
            .tokens()
            .iter()
            .map(|t| (t.phrase().to_string(), t.score()))
            .collect();
        let b: Vec<(String, f64)> = fanned
            .document(&fanned.document_ids()[0])
            .unwrap()
            .tokens()
            .iter()
            .map(|t| (t.phrase().to_string(), t.score()))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_version_increment() {
        let index = index();
        let v0 = index.version();
        let handle = index.insert_document("pet dog", "Spot").unwrap();
        let v1 = index.version();
        handle.delete();
        let v2 = index.version();
        index.clear();
        let v3 = index.version();
        assert!(v1 > v0);
        assert!(v2 > v1);
        assert!(v3 > v2);
    }

    #[test]
    fn test_clear() {
        let index = index();
        index.insert("my adorable pet dog", "Spot").unwrap();
        index.clear();
        assert!(index.is_empty());
        assert!(index.search("pet dog").is_empty());
        assert_eq!(index.stats(), IndexStats::default());
    }

    #[test]
    fn test_clone_shares_state() {
        let index = index();
        let other = index.clone();
        other.insert("pet dog", "Spot").unwrap();
        assert_eq!(index.search("pet dog").len(), 1);
    }

    #[test]
    fn test_handle_after_index_dropped() {
        let index = index();
        let handle = index.insert_document("pet dog", "Spot").unwrap();
        drop(index);
        assert!(!handle.delete());
    }

    #[test]
    fn test_generic_payload() {
        let index: PhraseIndex<u64> = PhraseIndex::new("ids", false);
        index.insert("pet dog", 42u64).unwrap();
        assert_eq!(*index.search("dog")[0].payload(), 42);
    }
}
