use thiserror::Error;

/// Errors from the PNG export pipeline. The rest of the app degrades to
/// no-ops instead of failing; export is the one operation that touches
/// parsers, rasterizers, and the filesystem.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("SVG parsing failed: {0}")]
    Svg(String),

    #[error("failed to allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
