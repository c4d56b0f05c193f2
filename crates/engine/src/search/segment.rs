//! Sentence-like segmentation
//!
//! Splits raw text on a caller-supplied set of delimiter characters.
//! Empty segments (between adjacent delimiters, or at either end) are
//! dropped. Non-empty segments are yielded verbatim, surrounding spaces
//! included; the tokenizer decides what counts as a word.

/// Split `text` into the non-empty segments between delimiter characters, in order.
///
/// # Example
///
/// ```
/// use phrasedb_engine::search::segment::split_segments;
///
/// let segments: Vec<&str> = split_segments("hi there. bye!", &['.', '!']).collect();
/// assert_eq!(segments, vec!["hi there", " bye"]);
/// ```
pub fn split_segments<'a>(
    text: &'a str,
    delimiters: &'a [char],
) -> impl Iterator<Item = &'a str> + 'a {
    text.split(move |c: char| delimiters.contains(&c))
        .filter(|segment| !segment.is_empty())
}
