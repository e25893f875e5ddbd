//! # linkharvest
//!
//! Extracts download links from HTML pages and gives each one a title.
//!
//! Useful on sites that publish direct download links (torrents, mp3, images,
//! ...) without a feed. Every link on the page is returned, so callers are
//! expected to filter with `links_re` or downstream.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkharvest::{extract_links, ExtractionConfig};
//!
//! let html = r#"<ul>
//!   <li><a href="/files/ep1.torrent">Episode 1</a></li>
//!   <li><a href="/files/ep2.torrent">Episode 2</a></li>
//! </ul>"#;
//!
//! let config = ExtractionConfig::new("http://example.com/show/");
//! let candidates = extract_links(html, &config)?;
//!
//! assert_eq!(candidates[0].title, "Episode 1");
//! assert_eq!(candidates[0].url, "http://example.com/files/ep1.torrent");
//! # Ok::<(), linkharvest::Error>(())
//! ```
//!
//! ## Titles
//!
//! `title_from` picks where titles come from:
//!
//! - **auto** (default): link text; when one link text repeats more than
//!   [`extractor::DUPLICATE_LIMIT`] times the page is re-read in `url` mode
//! - **url**: decoded last path segment of the link target
//! - **title**: the `title` attribute (links without one are skipped)
//! - **link** / **contents**: link text as-is
//!
//! Titles are unique within one extraction: a repeated title gets the
//! CRC-32 of its URL appended, as in `Episode 1 [C5781AE6]`.

mod config;
mod error;
mod input;
mod result;

/// HTML parsing and the anchor model.
pub mod dom;

/// Charset detection for page bytes.
pub mod encoding;

/// Link extraction pipeline and per-pass state.
pub mod extractor;

/// Baseline titles, torrent name cleanup, and checksum suffixes.
pub mod title;

/// URL normalization and URL-derived titles.
pub mod url_utils;

// Public API - re-exports
pub use config::{ExtractionConfig, TitleFrom};
pub use error::{Error, Result};
pub use input::{dump_document, HtmlInput};
pub use result::{Candidate, Extraction};

/// Extracts titled links from an HTML document.
///
/// Relative links are resolved against `config.url`. The `dump` option is
/// honored. Escalation to `url` titles applies to this call only; use
/// [`HtmlInput`] to keep it across calls.
///
/// # Example
///
/// ```rust
/// use linkharvest::{extract_links, ExtractionConfig};
///
/// let html = r#"<a href="//mirror.example.net/a.zip">Archive</a>"#;
/// let config = ExtractionConfig::new("https://example.com/").with_title_from("url");
///
/// let candidates = extract_links(html, &config)?;
/// assert_eq!(candidates[0].url, "http://mirror.example.net/a.zip");
/// assert_eq!(candidates[0].title, "a.zip");
/// # Ok::<(), linkharvest::Error>(())
/// ```
pub fn extract_links(html: &str, config: &ExtractionConfig) -> Result<Vec<Candidate>> {
    HtmlInput::new(config.clone())?.run_html(html)
}

/// Extracts titled links from raw HTML bytes, decoding the declared charset.
///
/// # Example
///
/// ```rust
/// use linkharvest::{extract_links_bytes, ExtractionConfig};
///
/// let html = b"<meta charset=\"ISO-8859-1\"><a href=\"/m.mp3\">Caf\xE9 del Mar</a>";
/// let candidates = extract_links_bytes(html, &ExtractionConfig::new("http://example.com/"))?;
/// assert_eq!(candidates[0].title, "Caf\u{e9} del Mar");
/// # Ok::<(), linkharvest::Error>(())
/// ```
pub fn extract_links_bytes(html: &[u8], config: &ExtractionConfig) -> Result<Vec<Candidate>> {
    HtmlInput::new(config.clone())?.run_bytes(html)
}

/// Extracts titled links from a document that is already parsed.
///
/// Returns the full [`Extraction`], including whether `auto` escalated.
pub fn extract_from_document(doc: &dom::Document, config: &ExtractionConfig) -> Result<Extraction> {
    let page_url = url_utils::parse_page_url(&config.url)?;
    extractor::extract(&dom::anchors(doc), &page_url, config)
}
