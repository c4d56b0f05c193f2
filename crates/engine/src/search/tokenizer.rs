//! Text tokenizer for phrase indexing
//!
//! Pipeline: lowercase → split on the space character
//!
//! Word boundaries are exactly single spaces. A segment that starts after
//! `", "` therefore begins with an empty word, and that word counts toward
//! the segment length. No stemming, punctuation stripping or stopword
//! removal: phrases are matched exactly.
//!
//! The `*_collapsed` variants drop empty words instead. The index uses them
//! only when `IndexConfig::collapse_whitespace` is set.

/// Lowercase a text span.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Tokenize one segment into its ordered, lowercase words.
///
/// Splits on every single space and keeps the empty words that leading,
/// trailing or repeated spaces produce. An empty segment has no words.
///
/// # Example
///
/// ```
/// use phrasedb_engine::search::tokenizer::tokenize;
///
/// let words = tokenize(" Good Boy");
/// assert_eq!(words, vec!["", "good", "boy"]);
/// ```
pub fn tokenize(segment: &str) -> Vec<String> {
    if segment.is_empty() {
        return Vec::new();
    }
    normalize(segment).split(' ').map(str::to_owned).collect()
}

/// Tokenize one segment, dropping empty words.
///
/// ```
/// use phrasedb_engine::search::tokenizer::tokenize_collapsed;
///
/// let words = tokenize_collapsed(" My Adorable  Pet");
/// assert_eq!(words, vec!["my", "adorable", "pet"]);
/// ```
pub fn tokenize_collapsed(segment: &str) -> Vec<String> {
    normalize(segment)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Normalize a query phrase into index-key form: lowercase only.
pub fn normalize_query(phrase: &str) -> String {
    normalize(phrase)
}

/// Normalize a query for a whitespace-collapsing index.
///
/// Rejoins the non-empty words with single spaces, so `"  Pet   Dog "`
/// and `"pet dog"` address the same key.
pub fn normalize_query_collapsed(phrase: &str) -> String {
    tokenize_collapsed(phrase).join(" ")
}
