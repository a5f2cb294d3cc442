//! Error type shared across the library.

use thiserror::Error;

/// Errors surfaced by the map library.
///
/// Missing optional country data is never an error: absent fields are
/// simply not rendered.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("invalid GeoJSON: {0}")]
    GeoJson(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unknown country id: {0}")]
    UnknownCountry(String),

    #[error("listener registration failed: {0}")]
    Listener(String),

    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
