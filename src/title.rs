//! Title helpers: the baseline title taken from an anchor's content, torrent
//! name cleanup, and checksum suffixes for disambiguating repeated titles.

use flate2::Crc;
use tracing::trace;

use crate::dom::{Anchor, AnchorNode};

const ZERO_WIDTH_SPACE: char = '\u{200B}';
const TORRENT_EXT: &str = ".torrent";

/// Longest (in characters, exclusive) repeated title still treated as an index link.
const INDEX_TITLE_MAX_CHARS: usize = 10;

/// Title derived from the anchor's own content.
///
/// Uses the first child when it is text. A first child without text falls
/// back to its next sibling. Returns `None` when the content is nested
/// markup or yields nothing once zero-width spaces and surrounding
/// whitespace are removed.
#[must_use]
pub fn baseline_title(anchor: &Anchor) -> Option<String> {
    let raw = match anchor.children.first()? {
        AnchorNode::Element(tag) => {
            trace!(tag = %tag, "title is tag");
            return None;
        }
        AnchorNode::Text(text) => text.as_str(),
        AnchorNode::Other => anchor.children.get(1)?.text()?,
    };

    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        return None;
    }

    Some(truncate_torrent(&cleaned).to_string())
}

/// Remove zero-width spaces and trim surrounding whitespace.
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.replace(ZERO_WIDTH_SPACE, "").trim().to_string()
}

/// Cut a title just before its first `.torrent` (ASCII case-insensitive).
///
/// A title that starts with `.torrent` is left alone.
///
/// ```
/// use linkharvest::title::truncate_torrent;
///
/// assert_eq!(truncate_torrent("Show.S01E01.torrent-extra"), "Show.S01E01");
/// assert_eq!(truncate_torrent("foo.TORRENT - bar.torrent"), "foo");
/// ```
#[must_use]
pub fn truncate_torrent(title: &str) -> &str {
    // ASCII lowercasing keeps byte offsets aligned with `title`.
    match title.to_ascii_lowercase().find(TORRENT_EXT) {
        Some(pos) if pos > 0 => &title[..pos],
        _ => title,
    }
}

/// Short repeated titles mentioning "index" are page navigation, not content.
#[must_use]
pub fn is_index_link(title: &str) -> bool {
    title.contains("index") && title.chars().count() < INDEX_TITLE_MAX_CHARS
}

/// CRC-32 of the URL bytes as eight uppercase hex digits.
///
/// ```
/// use linkharvest::title::url_checksum;
///
/// assert_eq!(url_checksum(""), "00000000");
/// assert_eq!(url_checksum("123456789"), "CBF43926");
/// ```
#[must_use]
pub fn url_checksum(url: &str) -> String {
    let mut crc = Crc::new();
    crc.update(url.as_bytes());
    format!("{:08X}", crc.sum())
}

/// `"<title> [<CRC32 of url>]"`.
#[must_use]
pub fn with_checksum(title: &str, url: &str) -> String {
    format!("{title} [{}]", url_checksum(url))
}
