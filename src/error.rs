//! Error types
//!
//! Each layer has its own error enum; the binary wraps them with `anyhow`.

use thiserror::Error;

/// Errors raised by the tile grid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("tile ({row}, {col}) is outside the {height}x{width} map")]
    OutOfBounds {
        row: i64,
        col: i64,
        height: usize,
        width: usize,
    },
    #[error("map has no tiles")]
    Empty,
    #[error("map row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while composing a frame
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("viewer at ({x}, {y}) is outside the map")]
    ViewerOutOfBounds { x: f32, y: f32 },
    #[error("invalid render geometry: {0}")]
    Geometry(String),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors raised while loading or exporting the render configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("config serialization error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
