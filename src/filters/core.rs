//! Core utilities shared by the pixel filters.
//!
//! This module provides:
//! - Channel clamping (truncating and rounding variants)
//! - A parallel per-pixel map used by the point filters

use ndarray::{Axis, Zip};

use crate::grid::{PixelGrid, MAX_CHANNEL};

/// Number of color channels (R, G, B); alpha follows them.
pub const COLOR_CHANNELS: usize = 3;

/// Integer midpoint of the channel range (`255 / 2`, truncated).
pub const CHANNEL_MIDPOINT: i32 = MAX_CHANNEL as i32 / 2;

/// Truncate toward zero, then clamp to 0-255.
///
/// NaN maps to 0 and infinities saturate.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    clamp_channel_int(value as i64)
}

/// Round to nearest, then clamp to 0-255.
#[inline]
pub fn clamp_channel_rounded(value: f64) -> u8 {
    clamp_channel_int(value.round() as i64)
}

#[inline]
pub fn clamp_channel_int(value: i64) -> u8 {
    value.clamp(0, MAX_CHANNEL as i64) as u8
}

/// Apply `f` to every pixel, producing a new grid of the same size.
///
/// Pixels are visited in parallel; `f` sees each source pixel as
/// `[r, g, b, a]` and returns the output pixel.
pub fn map_pixels<F>(input: &PixelGrid, f: F) -> PixelGrid
where
    F: Fn([u8; 4]) -> [u8; 4] + Sync + Send,
{
    let (height, width) = input.dim();
    let mut output = PixelGrid::new(height, width);

    Zip::from(output.as_array_mut().lanes_mut(Axis(2)))
        .and(input.as_array().lanes(Axis(2)))
        .par_for_each(|mut dst, src| {
            let result = f([src[0], src[1], src[2], src[3]]);
            for (c, v) in result.into_iter().enumerate() {
                dst[c] = v;
            }
        });

    output
}
