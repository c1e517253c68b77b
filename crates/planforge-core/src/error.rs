#![forbid(unsafe_code)]

/// The engine degrades rather than fails: missing optional fields default,
/// unknown room types fall back to neutral styling, degenerate geometry is
/// skipped. The only hard failure is a malformed input document, which is the
/// calling context's responsibility to surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("floor plan document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
