//! Character set detection for fetched pages.
//!
//! Pages arrive as bytes; the charset is taken from the markup itself
//! (`<meta charset>` or an `http-equiv` content type) and defaults to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::debug;

/// How far into the page charset declarations are looked for.
const SNIFF_LEN: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Charset declared in the first bytes of the page, or UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*META_CHARSET_RE, &*HTTP_EQUIV_CHARSET_RE]
        .iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to a string, replacing invalid sequences with U+FFFD.
///
/// # Examples
///
/// ```
/// use linkharvest::encoding::decode_page;
///
/// let page = b"<meta charset=\"windows-1252\"><a href=\"/x\">Caf\xE9</a>";
/// assert!(decode_page(page).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn decode_page(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    debug!(encoding = encoding.name(), "detected encoding");

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_charset() {
        let html = br#"<html><head><meta charset="koi8-r"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "KOI8-R");
    }

    #[test]
    fn test_http_equiv_charset() {
        let html = br#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=Shift_JIS">"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn test_latin1_label_maps_to_windows_1252() {
        let html = b"<meta charset=iso-8859-1>";
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn test_unknown_label_defaults_to_utf8() {
        let html = br#"<meta charset="not-a-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn test_declaration_past_sniff_window_is_ignored() {
        let mut html = vec![b' '; SNIFF_LEN];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn test_decode_windows_1252_titles() {
        let html = b"<meta charset=\"windows-1252\"><a href=\"/x\">\x93Quoted\x94</a>";
        assert!(decode_page(html).contains("\u{201C}Quoted\u{201D}"));
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        let html = b"<a href=\"/x\">bad \xFF byte</a>";
        let decoded = decode_page(html);
        assert!(decoded.contains("bad \u{FFFD} byte"));
    }
}
