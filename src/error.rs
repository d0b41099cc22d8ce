//! Error type shared by the edge pipeline and its I/O collaborators.
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CannyError>;

#[derive(Debug, thiserror::Error)]
pub enum CannyError {
    /// Out-of-range scale, truncation probability or scale factor.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two grids that must be co-indexed have different dimensions.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("failed to decode/encode image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
