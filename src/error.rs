//! Error taxonomy for grid construction, filtering, I/O and the editor.

use std::path::PathBuf;

/// Errors produced by this crate.
///
/// Numeric overflow inside filter arithmetic is never an error; channel
/// values are clamped to 0-255 instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The filter needs at least one pixel.
    #[error("pixel grid is empty ({height}x{width})")]
    EmptyGrid { height: usize, width: usize },

    /// Array is not shaped (height, width, 4).
    #[error("expected an RGBA array with 4 channels, got {channels}")]
    InvalidShape { channels: usize },

    /// Flat buffer length does not match `width * height * 4`.
    #[error("buffer of {actual} bytes does not match {height}x{width} RGBA ({expected} bytes)")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// Blur window does not fit inside the grid.
    #[error("blur radius {radius} leaves no interior in a {height}x{width} grid")]
    RadiusTooLarge {
        radius: usize,
        height: usize,
        width: usize,
    },

    #[error("failed to load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid filter configuration: {0}")]
    Config(String),

    #[error("no command bound to key {0:?}")]
    UnknownCommand(char),
}

pub type Result<T> = std::result::Result<T, Error>;
