//! Configuration for link extraction.
//!
//! `ExtractionConfig` mirrors the shape accepted by the html input: either a
//! bare page URL, or a map with `url`, `title_from`, `links_re` and `dump`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::url_utils;

/// How a candidate's title is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleFrom {
    /// Link text, switching to [`TitleFrom::Url`] when link texts repeat too often.
    Auto,
    /// Last path segment of the link target.
    Url,
    /// The anchor's `title` attribute.
    Title,
    /// Link text as-is (`link` or `contents`).
    Link,
}

impl TitleFrom {
    /// Canonical configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Url => "url",
            Self::Title => "title",
            Self::Link => "link",
        }
    }
}

impl FromStr for TitleFrom {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "url" => Ok(Self::Url),
            "title" => Ok(Self::Title),
            "link" | "contents" => Ok(Self::Link),
            other => Err(Error::UnknownTitleFrom(other.to_string())),
        }
    }
}

impl fmt::Display for TitleFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_title_from() -> String {
    TitleFrom::Auto.as_str().to_string()
}

/// Configuration for one html link source.
///
/// `title_from` stays free-form text until extraction; an unknown value only
/// fails when [`ExtractionConfig::title_mode`] is asked for it.
///
/// # Example
///
/// ```rust
/// use linkharvest::ExtractionConfig;
///
/// let config = ExtractionConfig::new("https://example.com/releases/")
///     .with_title_from("url")
///     .with_links_re(vec![r"\.torrent$".to_string()]);
///
/// assert_eq!(config.title_from, "url");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Location of the page the links are taken from.
    pub url: String,

    /// Title resolution mode.
    ///
    /// Default: `"auto"`
    #[serde(default = "default_title_from")]
    pub title_from: String,

    /// Patterns a link target must match (any of them) to be considered.
    ///
    /// Default: empty (every link is considered)
    #[serde(default)]
    pub links_re: Vec<String>,

    /// Where to write the page markup before extraction.
    ///
    /// Default: `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfig {
    Url(String),
    Full(ExtractionConfig),
}

impl ExtractionConfig {
    /// Config for `url` with every other option at its default.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title_from: default_title_from(),
            links_re: Vec::new(),
            dump: None,
        }
    }

    #[must_use]
    pub fn with_title_from(mut self, title_from: impl Into<String>) -> Self {
        self.title_from = title_from.into();
        self
    }

    #[must_use]
    pub fn with_links_re(mut self, links_re: Vec<String>) -> Self {
        self.links_re = links_re;
        self
    }

    #[must_use]
    pub fn with_dump(mut self, dump: impl Into<PathBuf>) -> Self {
        self.dump = Some(dump.into());
        self
    }

    /// Parse a JSON configuration, either a bare URL string or a map, and validate it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkharvest::ExtractionConfig;
    ///
    /// let short = ExtractionConfig::from_json(r#""https://example.com/""#)?;
    /// assert_eq!(short.title_from, "auto");
    ///
    /// let full = ExtractionConfig::from_json(
    ///     r#"{"url": "https://example.com/", "title_from": "title"}"#,
    /// )?;
    /// assert_eq!(full.title_from, "title");
    /// # Ok::<(), linkharvest::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config = match serde_json::from_str::<RawConfig>(json)? {
            RawConfig::Url(url) => Self::new(url),
            RawConfig::Full(config) => config,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check `url` and `links_re`. `title_from` is deliberately left unchecked.
    ///
    /// `url` must be absolute and usable as a base for relative links; its
    /// scheme is not restricted to http(s).
    pub fn validate(&self) -> Result<()> {
        url_utils::parse_page_url(&self.url)?;
        self.compile_links_re()?;
        Ok(())
    }

    /// The recognized title mode, or [`Error::UnknownTitleFrom`].
    pub fn title_mode(&self) -> Result<TitleFrom> {
        self.title_from.parse()
    }

    /// Compile `links_re` in configuration order.
    pub fn compile_links_re(&self) -> Result<Vec<Regex>> {
        self.links_re
            .iter()
            .map(|pattern| Regex::new(pattern).map_err(Error::from))
            .collect()
    }
}
