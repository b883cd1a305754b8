// crates/mindgaps-core/src/error.rs
// Error types for site wiring

use thiserror::Error;

/// Faults raised while wiring the page together.
///
/// None of these are fatal: the entry point logs them and the page keeps
/// whatever behavior was already attached.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("element not found: #{0}")]
    MissingElement(String),

    #[error("browser API error: {0}")]
    Browser(String),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("carousel needs at least one slide")]
    EmptyCarousel,
}

/// Convenience type alias for Result using SiteError
pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    /// Wrap a stringified browser error (usually a `JsValue` debug dump)
    pub fn browser(detail: impl Into<String>) -> Self {
        SiteError::Browser(detail.into())
    }
}
