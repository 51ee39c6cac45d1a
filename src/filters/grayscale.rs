//! Grayscale conversion filter.
//!
//! Uses the plain channel average `(R + G + B) / 3` with integer
//! truncation. The average of three 8-bit values is itself a valid
//! channel, so no clamping is needed. Alpha is preserved.

use crate::error::Result;
use crate::filters::core::map_pixels;
use crate::grid::PixelGrid;

const DIVISOR: u16 = 3;

/// Average of the color channels, truncated.
#[inline]
pub fn average_intensity(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / DIVISOR) as u8
}

/// Convert an RGBA grid to grayscale.
///
/// Output has R = G = B = average intensity, alpha preserved.
pub fn grayscale(input: &PixelGrid) -> Result<PixelGrid> {
    input.ensure_non_empty()?;
    Ok(map_pixels(input, |[r, g, b, a]| {
        let gray = average_intensity(r, g, b);
        [gray, gray, gray, a]
    }))
}
