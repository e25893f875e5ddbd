//! Per-pass extraction state.
//!
//! Holds the candidates accepted so far and the duplicate-title counter.
//! A fresh `PassState` is created for every pass; an aborted pass is dropped
//! whole.

use std::collections::{HashMap, HashSet};

use crate::result::Candidate;

/// Accumulator for one pass over the anchors.
#[derive(Debug, Default)]
pub struct PassState {
    /// Accepted candidates, in document order.
    candidates: Vec<Candidate>,

    /// Titles of `candidates`, for constant-time existence checks.
    titles: HashSet<String>,

    /// How many times each title was seen again after being accepted (`auto` only).
    duplicates: HashMap<String, usize>,
}

impl PassState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a candidate with exactly this title was already accepted.
    #[must_use]
    pub fn title_exists(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Count one more repeat of `title` and return the new count.
    pub fn record_duplicate(&mut self, title: &str) -> usize {
        let count = self.duplicates.entry(title.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Accept a candidate. Its title must not exist yet.
    pub fn push(&mut self, candidate: Candidate) {
        debug_assert!(!self.title_exists(&candidate.title));
        self.titles.insert(candidate.title.clone());
        self.candidates.push(candidate);
    }

    #[must_use]
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
