//! Error types for the style configuration.

/// Result type alias using the style module's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, loading or rendering a style configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A palette value is not a `#rgb` / `#rrggbb` hex color.
    #[error("invalid color {value:?}: expected #rgb or #rrggbb")]
    InvalidColor { value: String },

    /// A content glob cannot be compiled.
    #[error("invalid content pattern {pattern:?}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    /// The scanner would not look at any file.
    #[error("style config must scan at least one content pattern")]
    EmptyContent,

    /// Failed to read or write the JSON form of the config.
    #[error("style config json: {0}")]
    Json(#[from] serde_json::Error),
}
