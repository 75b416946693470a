//! Render error types.

/// Errors raised when exporting a rendered frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    /// Writing the output file failed.
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}
