//! Result types for link extraction.

use serde::{Deserialize, Serialize};

use crate::config::TitleFrom;

/// One extracted link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Absolute link target.
    pub url: String,

    /// Title, unique within one extraction.
    pub title: String,
}

impl Candidate {
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Output of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Candidates in document order.
    pub candidates: Vec<Candidate>,

    /// Title mode in effect when the final pass ran.
    pub title_from: TitleFrom,

    /// Whether `auto` gave up on link texts and re-ran in `url` mode.
    pub escalated: bool,
}
