//! Link extraction pipeline.
//!
//! A pass walks every anchor once: filter, derive the baseline title,
//! normalize the link target, resolve the title for the current mode, then
//! make it unique. In `auto` mode a pass may give up when one link text keeps
//! repeating; the pipeline then re-runs everything once in `url` mode.

use regex::Regex;
use tracing::{debug, info, trace, warn};
use url::Url;

use crate::config::{ExtractionConfig, TitleFrom};
use crate::dom::Anchor;
use crate::error::Result;
use crate::result::{Candidate, Extraction};
use crate::title;
use crate::url_utils;

use super::state::PassState;

/// Repeats of one link text tolerated in `auto` mode before switching to `url`.
pub const DUPLICATE_LIMIT: usize = 4;

/// How a single pass ended.
#[derive(Debug)]
pub enum PassOutcome {
    /// Every anchor was considered.
    Complete(Vec<Candidate>),
    /// `auto` mode found link texts useless; nothing from this pass is kept.
    Escalate,
}

/// Extract titled links from `anchors`, resolving relative targets against `page_url`.
///
/// Fails only when `config.title_from` is not a recognized mode (or a
/// `links_re` entry does not compile, which validation normally rules out).
/// Anchors that cannot produce a candidate are skipped.
pub fn extract(anchors: &[Anchor], page_url: &Url, config: &ExtractionConfig) -> Result<Extraction> {
    let mut mode = config.title_mode()?;
    let filters = config.compile_links_re()?;
    let mut escalated = false;

    loop {
        match run_pass(anchors, page_url, &filters, mode) {
            PassOutcome::Complete(candidates) => {
                debug!(count = candidates.len(), title_from = %mode, "extracted links");
                return Ok(Extraction {
                    candidates,
                    title_from: mode,
                    escalated,
                });
            }
            PassOutcome::Escalate => {
                info!(
                    "Link names seem to be useless, auto-enabling 'title_from: url'. \
                     This may not work well, you might need to configure it."
                );
                mode = TitleFrom::Url;
                escalated = true;
            }
        }
    }
}

/// One pass over every anchor with a fixed title mode.
///
/// Only [`TitleFrom::Auto`] can end in [`PassOutcome::Escalate`].
#[must_use]
pub fn run_pass(anchors: &[Anchor], page_url: &Url, filters: &[Regex], mode: TitleFrom) -> PassOutcome {
    let mut state = PassState::new();

    for anchor in anchors {
        let Some(href) = anchor.href.as_deref() else {
            continue;
        };
        if anchor.children.is_empty() {
            continue;
        }
        if !filters.is_empty() && !filters.iter().any(|re| re.is_match(href)) {
            continue;
        }

        let Some(baseline) = title::baseline_title(anchor) else {
            continue;
        };

        let Some(url) = url_utils::normalize_link(href, page_url) else {
            trace!(href, "unresolvable link");
            continue;
        };

        let resolved = match mode {
            TitleFrom::Url => {
                let from_url = url_utils::title_from_url(&url);
                debug!(title = %from_url, "title from url");
                from_url
            }
            TitleFrom::Title => {
                let Some(attr) = anchor.title.as_deref() else {
                    warn!(url = %url, "Link doesn't have title attribute, ignored.");
                    continue;
                };
                debug!(title = attr, "title from title");
                attr.to_string()
            }
            TitleFrom::Link => {
                debug!(title = %baseline, "title from link");
                baseline
            }
            TitleFrom::Auto => {
                if state.title_exists(&baseline) {
                    if title::is_index_link(&baseline) {
                        continue;
                    }
                    if state.record_duplicate(&baseline) > DUPLICATE_LIMIT {
                        return PassOutcome::Escalate;
                    }
                }
                baseline
            }
        };

        let resolved = title::truncate_torrent(&resolved);
        if resolved.trim().is_empty() {
            trace!(url = %url, "empty title");
            continue;
        }

        let title = if state.title_exists(resolved) {
            let uniqued = title::with_checksum(resolved, &url);
            if state.title_exists(&uniqued) {
                // Same text and same target: a true duplicate.
                continue;
            }
            debug!(title = %uniqued, "uniqued title");
            uniqued
        } else {
            resolved.to_string()
        };

        state.push(Candidate { url, title });
    }

    PassOutcome::Complete(state.into_candidates())
}
