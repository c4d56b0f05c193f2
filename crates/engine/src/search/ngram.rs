//! N-gram generation and specificity scoring
//!
//! For a segment of `W` words, every contiguous window of `n` words
//! (`n` from `W` down to `1`) becomes a candidate phrase scored `n / W`.
//! A whole-segment match scores exactly 1.0; shorter windows are diluted
//! proportionally, which keeps scores comparable across segments of
//! different lengths.
//!
//! # Fan-out
//!
//! Window lengths are independent of one another: phrases of different
//! lengths have different word counts and can never be equal. Long
//! segments therefore generate each length as its own rayon task and join
//! the per-length results in `n`-descending order. The join is a barrier;
//! nothing is returned until every length has finished.

use phrasedb_core::{Error, Result};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// One generated (phrase, score) pair
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Space-joined window of lowercase words
    pub phrase: String,
    /// Specificity score in (0, 1]
    pub score: f64,
}

/// Number of windows in a segment of `w` words: `w·(w+1)/2`
#[inline]
pub fn candidate_count(w: usize) -> usize {
    w * (w + 1) / 2
}

/// Specificity of an `n`-word window drawn from a `w`-word segment
#[inline]
pub fn score(n: usize, w: usize) -> f64 {
    debug_assert!((1..=w).contains(&n));
    n as f64 / w as f64
}

/// Every window of `words`, longest first, without deduplication.
///
/// Yields exactly `candidate_count(words.len())` candidates.
///
/// # Example
///
/// ```
/// use phrasedb_engine::search::ngram::ngrams;
///
/// let words: Vec<String> = ["pet", "dog"].iter().map(|s| s.to_string()).collect();
/// let phrases: Vec<String> = ngrams(&words).map(|c| c.phrase).collect();
/// assert_eq!(phrases, vec!["pet dog", "pet", "dog"]);
/// ```
pub fn ngrams(words: &[String]) -> impl Iterator<Item = Candidate> + '_ {
    let w = words.len();
    (1..=w).rev().flat_map(move |n| {
        words.windows(n).map(move |window| Candidate {
            phrase: window.join(" "),
            score: score(n, w),
        })
    })
}

/// Candidates for a single window length, identical phrases collapsed.
///
/// Duplicates within one length carry the same score, so keeping the first
/// position is indistinguishable from last-write-wins.
pub fn window_candidates(words: &[String], n: usize) -> Vec<Candidate> {
    let w = words.len();
    if n == 0 || n > w {
        return Vec::new();
    }

    let score = score(n, w);
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut out = Vec::with_capacity(w - n + 1);
    for window in words.windows(n) {
        let phrase = window.join(" ");
        if !seen.insert(phrase.clone()) {
            continue;
        }
        out.push(Candidate { phrase, score });
    }
    out
}

/// Build the deduplicated working set for one segment.
///
/// With `parallel` set, each window length runs as a separate rayon task.
/// Output order is deterministic either way: longest windows first, then
/// by starting offset.
///
/// Returns `Error::DeadlineExceeded` if `deadline` passes before a window
/// length starts generating.
pub fn segment_candidates(
    words: &[String],
    parallel: bool,
    deadline: Option<&Deadline>,
) -> Result<Vec<Candidate>> {
    let w = words.len();
    let per_length = |n: usize| -> Result<Vec<Candidate>> {
        if let Some(deadline) = deadline {
            deadline.check()?;
        }
        Ok(window_candidates(words, n))
    };

    let groups: Vec<Vec<Candidate>> = if parallel {
        (1..w + 1)
            .into_par_iter()
            .rev()
            .map(per_length)
            .collect::<Result<_>>()?
    } else {
        (1..w + 1).rev().map(per_length).collect::<Result<_>>()?
    };

    Ok(groups.into_iter().flatten().collect())
}

/// Wall-clock budget for an insert
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    expires: Instant,
}

impl Deadline {
    /// Deadline at an absolute instant
    pub fn at(expires: Instant) -> Self {
        Deadline {
            started: Instant::now(),
            expires,
        }
    }

    /// Deadline `budget` from now
    pub fn after(budget: Duration) -> Self {
        let started = Instant::now();
        Deadline {
            started,
            expires: started + budget,
        }
    }

    /// True once the deadline has passed
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires
    }

    /// Fail with `DeadlineExceeded` if the deadline has passed
    pub fn check(&self) -> Result<()> {
        if self.is_expired() {
            return Err(Error::DeadlineExceeded {
                elapsed: self.started.elapsed(),
            });
        }
        Ok(())
    }
}
