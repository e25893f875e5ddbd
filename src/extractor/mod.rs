//! Link extraction.
//!
//! # Module Structure
//!
//! - `state`: Candidates and duplicate counter for one pass
//! - `pipeline`: Per-anchor filtering, title resolution, and the `auto` to `url` restart
//!
//! # Usage
//!
//! ```rust
//! use linkharvest::dom::Anchor;
//! use linkharvest::extractor;
//! use linkharvest::ExtractionConfig;
//! use url::Url;
//!
//! let anchors = vec![
//!     Anchor::new("ep1.torrent").with_text("Episode 1"),
//!     Anchor::new("ep2.torrent").with_text("Episode 2"),
//! ];
//! let page = Url::parse("http://example.com/show/")?;
//! let config = ExtractionConfig::new(page.as_str());
//!
//! let extraction = extractor::extract(&anchors, &page, &config)?;
//! assert_eq!(extraction.candidates[0].url, "http://example.com/show/ep1.torrent");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod pipeline;
pub mod state;

pub use pipeline::{extract, run_pass, PassOutcome, DUPLICATE_LIMIT};
pub use state::PassState;
