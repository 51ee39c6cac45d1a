//! Color-matrix transforms, including the vintage (sepia) effect.
//!
//! A [`ColorMatrix`] remixes each pixel's (R, G, B) triple linearly.
//! All three output channels are computed from the original triple, then
//! truncated and clamped to 0-255. Alpha is preserved.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filters::core::{clamp_channel, map_pixels};
use crate::grid::PixelGrid;

/// 3x3 row-major matrix mapping (R, G, B) to (R', G', B').
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    /// Classic sepia coefficients used by [`vintage`].
    pub const SEPIA: ColorMatrix = ColorMatrix([
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ]);

    pub const IDENTITY: ColorMatrix = ColorMatrix([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Transform one (R, G, B) triple.
    #[inline]
    pub fn apply(&self, r: u8, g: u8, b: u8) -> [u8; 3] {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        let row = |m: &[f64; 3]| clamp_channel(m[0] * r + m[1] * g + m[2] * b);
        [row(&self.0[0]), row(&self.0[1]), row(&self.0[2])]
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        ColorMatrix::SEPIA
    }
}

/// Apply an arbitrary color matrix to every pixel.
pub fn color_matrix(input: &PixelGrid, matrix: &ColorMatrix) -> Result<PixelGrid> {
    input.ensure_non_empty()?;
    Ok(map_pixels(input, |[r, g, b, a]| {
        let [r2, g2, b2] = matrix.apply(r, g, b);
        [r2, g2, b2, a]
    }))
}

/// Apply the vintage (sepia) effect.
pub fn vintage(input: &PixelGrid) -> Result<PixelGrid> {
    color_matrix(input, &ColorMatrix::SEPIA)
}
