use std::path::PathBuf;

use thiserror::Error;

/// Run-level failures. Any of these aborts the pipeline for the page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no <script> element contains marker `{marker}`")]
    NotFound { marker: &'static str },

    #[error("marker `{marker}` present but its assignment could not be matched")]
    PatternMismatch { marker: &'static str },

    #[error("embedded JSON is malformed: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("embedded JSON has no `{path}` object")]
    SchemaMismatch { path: &'static str },

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode records for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScrapeError {
    /// Pipeline stage the error belongs to, for run diagnostics.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            ScrapeError::Http(_) | ScrapeError::UnexpectedStatus { .. } => "fetch",
            ScrapeError::NotFound { .. } | ScrapeError::PatternMismatch { .. } => "locate",
            ScrapeError::MalformedJson(_) | ScrapeError::SchemaMismatch { .. } => "extract",
            ScrapeError::Io { .. } | ScrapeError::Encode { .. } => "write",
        }
    }
}

/// A single record skipped because a required field was absent.
///
/// Never aborts a run; collected on [`crate::Extraction::skipped`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} at {path} is missing required field `{field}`")]
pub struct FieldMissing {
    /// `"location"` or `"hotel"`.
    pub record: &'static str,
    /// Position of the offending node, e.g. `inboundCities[3].recommendHotels[0]`.
    pub path: String,
    pub field: &'static str,
}
