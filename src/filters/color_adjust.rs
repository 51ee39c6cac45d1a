//! Color adjustment filters: Contrast and Channel Tint.
//!
//! These are pixel-wise operations that don't require spatial context.
//! Intermediate arithmetic runs in `f64`; results are clamped back to
//! 0-255 before being stored. Out-of-range factors are never rejected.

use crate::error::Result;
use crate::filters::core::{clamp_channel, clamp_channel_rounded, map_pixels, CHANNEL_MIDPOINT};
use crate::grid::{Channel, PixelGrid};

// ============================================================================
// Contrast
// ============================================================================

/// Stretch (or compress) each color channel around the midpoint 127.
///
/// Each of R, G, B maps to `clamp(trunc(factor * (x - 127) + 127))`.
/// Alpha is preserved.
///
/// # Arguments
/// * `input` - RGBA grid
/// * `factor` - `> 1.0` increases contrast, `< 1.0` flattens it, `1.0` = no change
pub fn contrast(input: &PixelGrid, factor: f64) -> Result<PixelGrid> {
    input.ensure_non_empty()?;
    Ok(map_pixels(input, |[r, g, b, a]| {
        [
            stretch(r, factor),
            stretch(g, factor),
            stretch(b, factor),
            a,
        ]
    }))
}

#[inline]
fn stretch(value: u8, factor: f64) -> u8 {
    let centered = (value as i32 - CHANNEL_MIDPOINT) as f64;
    clamp_channel(factor * centered + CHANNEL_MIDPOINT as f64)
}

// ============================================================================
// Tint
// ============================================================================

/// Scale a single channel by `factor`, leaving the others untouched.
///
/// The scaled value is rounded to nearest, then clamped.
///
/// # Arguments
/// * `input` - RGBA grid
/// * `factor` - Multiplier for the target channel; `1.0` = no change
/// * `channel` - Channel to scale
pub fn tint(input: &PixelGrid, factor: f64, channel: Channel) -> Result<PixelGrid> {
    input.ensure_non_empty()?;
    let target = channel.index();
    Ok(map_pixels(input, |mut pixel| {
        pixel[target] = clamp_channel_rounded(pixel[target] as f64 * factor);
        pixel
    }))
}
