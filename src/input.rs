//! Html input: one configured link source, reused across runs.
//!
//! The extractor itself is pure. This layer owns the configuration, writes
//! the optional page dump, and remembers an `auto` to `url` escalation so
//! later runs start in `url` mode.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::{ExtractionConfig, TitleFrom};
use crate::dom::{self, Document};
use crate::encoding;
use crate::error::Result;
use crate::extractor;
use crate::result::Candidate;
use crate::url_utils;

/// A validated link source.
#[derive(Debug, Clone)]
pub struct HtmlInput {
    config: ExtractionConfig,
    page_url: Url,
}

impl HtmlInput {
    /// Validate `config` and build the input.
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        let page_url = url_utils::parse_page_url(&config.url)?;
        Ok(Self { config, page_url })
    }

    /// Current configuration, including any escalation recorded by earlier runs.
    #[must_use]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract candidates from an already parsed page.
    pub fn create_entries(&mut self, doc: &Document) -> Result<Vec<Candidate>> {
        let anchors = dom::anchors(doc);
        let extraction = extractor::extract(&anchors, &self.page_url, &self.config)?;

        if extraction.escalated {
            self.config.title_from = TitleFrom::Url.as_str().to_string();
        }

        Ok(extraction.candidates)
    }

    /// Parse `html`, dump it if configured, and extract candidates.
    pub fn run_html(&mut self, html: &str) -> Result<Vec<Candidate>> {
        let doc = dom::parse(html);

        if let Some(path) = &self.config.dump {
            info!(url = %self.page_url, path = %path.display(), "Dumping page");
            dump_document(&doc, path);
        }

        self.create_entries(&doc)
    }

    /// Like [`HtmlInput::run_html`], for raw page bytes in any declared charset.
    pub fn run_bytes(&mut self, html: &[u8]) -> Result<Vec<Candidate>> {
        let text = encoding::decode_page(html);
        self.run_html(&text)
    }
}

/// Write the page markup to `path`. Failures are logged and otherwise ignored.
///
/// The markup is `dom_query`'s serialization of the parsed tree: normalized
/// (missing `html`/`head`/`body` added, entities and quoting made uniform)
/// but not re-indented.
pub fn dump_document(doc: &Document, path: &Path) {
    match fs::write(path, dom::render(doc)) {
        Ok(()) => debug!(path = %path.display(), "page dumped"),
        Err(err) => warn!(path = %path.display(), error = %err, "failed to dump page"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const REPEATED: &str = r#"
        <ul>
          <li><a href="/s/Show.E01.mkv">Download</a></li>
          <li><a href="/s/Show.E02.mkv">Download</a></li>
          <li><a href="/s/Show.E03.mkv">Download</a></li>
          <li><a href="/s/Show.E04.mkv">Download</a></li>
          <li><a href="/s/Show.E05.mkv">Download</a></li>
          <li><a href="/s/Show.E06.mkv">Download</a></li>
        </ul>
    "#;

    fn input(config: ExtractionConfig) -> HtmlInput {
        HtmlInput::new(config).unwrap_or_else(|e| panic!("invalid config: {e}"))
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = HtmlInput::new(ExtractionConfig::new("not a url"));
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn test_new_accepts_unknown_title_from() {
        let config = ExtractionConfig::new("http://host/").with_title_from("bogus");
        let mut source = input(config);

        assert!(matches!(source.run_html(""), Err(Error::UnknownTitleFrom(_))));
    }

    #[test]
    fn test_escalation_is_remembered() {
        let mut source = input(ExtractionConfig::new("http://host/"));

        let first = source.run_html(REPEATED).unwrap_or_default();
        assert_eq!(first.len(), 6);
        assert_eq!(first[0].title, "Show.E01.mkv");
        assert_eq!(source.config().title_from, "url");

        // A later page with unique link texts still gets url titles.
        let second = source
            .run_html(r#"<a href="/s/Other.mkv">Unique text</a>"#)
            .unwrap_or_default();
        assert_eq!(second[0].title, "Other.mkv");
    }

    #[test]
    fn test_no_escalation_keeps_config() {
        let mut source = input(ExtractionConfig::new("http://host/"));
        let html = r#"<a href="/a">A</a><a href="/b">B</a>"#;

        let candidates = source.run_html(html).unwrap_or_default();
        assert_eq!(candidates.len(), 2);
        assert_eq!(source.config().title_from, "auto");
    }

    #[test]
    fn test_run_bytes_decodes_declared_charset() {
        let mut source = input(ExtractionConfig::new("http://host/"));
        let html = b"<meta charset=\"windows-1252\"><a href=\"/c\">Caf\xE9</a>";

        let candidates = source.run_bytes(html).unwrap_or_default();
        assert_eq!(candidates, vec![Candidate::new("http://host/c", "Caf\u{e9}")]);
    }

    #[test]
    fn test_dump_writes_markup() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("page.html");
        let config = ExtractionConfig::new("http://host/").with_dump(&path);
        let mut source = input(config);

        let candidates = source.run_html(r#"<a href="/a">A</a>"#).unwrap_or_default();
        assert_eq!(candidates.len(), 1);

        // Parser-normalized, but written as one unindented line.
        let dumped = fs::read_to_string(&path).unwrap_or_default();
        assert!(dumped.contains(r#"<body><a href="/a">A</a></body>"#));
        assert!(!dumped.contains('\n'));
    }

    #[test]
    fn test_dump_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("missing").join("page.html");
        let config = ExtractionConfig::new("http://host/").with_dump(&path);
        let mut source = input(config);

        let candidates = source.run_html(r#"<a href="/a">A</a>"#).unwrap_or_default();
        assert_eq!(candidates.len(), 1);
        assert!(!path.exists());
    }
}
