//! URL Utility Functions
//!
//! Link target normalization against the page URL, page URL validation, and
//! deriving a title from a link target.

use url::Url;

use crate::error::{Error, Result};

/// Check whether a string already carries an `http://` or `https://` scheme.
#[inline]
#[must_use]
pub fn is_absolute_http(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Parse the page URL used as the base for relative links.
///
/// Any well-formed absolute URL that relative references can be joined to
/// is accepted (`http`, `https`, `ftp`, `file`, ...). Opaque URLs such as
/// `mailto:` cannot serve as a base and are rejected.
pub fn parse_page_url(s: &str) -> Result<Url> {
    let s = s.trim();
    let invalid = |reason: &str| Error::InvalidUrl {
        url: s.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(s).map_err(|e| invalid(&e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be used as a base url"));
    }

    Ok(url)
}

/// Turn an anchor's `href` into an absolute link target.
///
/// - `//host/path` gets an `http:` scheme.
/// - `http://` and `https://` targets are returned unchanged.
/// - Everything else is resolved against `base` as a relative reference.
///
/// # Returns
/// * `None` if the reference cannot be resolved
///
/// # Examples
/// ```
/// use linkharvest::url_utils::normalize_link;
/// use url::Url;
///
/// let base = Url::parse("http://host/shows/list.html").unwrap();
/// assert_eq!(normalize_link("//cdn.example.com/a.jpg", &base).as_deref(), Some("http://cdn.example.com/a.jpg"));
/// assert_eq!(normalize_link("ep1.torrent", &base).as_deref(), Some("http://host/shows/ep1.torrent"));
/// assert_eq!(normalize_link("https://other.org/x", &base).as_deref(), Some("https://other.org/x"));
/// ```
#[must_use]
pub fn normalize_link(href: &str, base: &Url) -> Option<String> {
    if href.starts_with("//") {
        return Some(format!("http:{href}"));
    }

    if is_absolute_http(href) {
        return Some(href.to_string());
    }

    base.join(href).ok().map(String::from)
}

/// Title for a link target: its last path segment without the query string,
/// percent-decoded with `+` read as a space.
///
/// Undecodable byte sequences are replaced with U+FFFD.
///
/// # Examples
/// ```
/// use linkharvest::url_utils::title_from_url;
///
/// assert_eq!(title_from_url("http://host/get/Some+Show%20E01.mkv?dl=1"), "Some Show E01.mkv");
/// assert_eq!(title_from_url("http://host/dir/"), "");
/// ```
#[must_use]
pub fn title_from_url(url: &str) -> String {
    let segment = url.rsplit_once('/').map_or(url, |(_, last)| last);
    let segment = segment.split_once('?').map_or(segment, |(path, _)| path);

    let spaced = segment.replace('+', " ");
    let decoded = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}
