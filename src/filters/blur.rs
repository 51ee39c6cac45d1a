//! Box blur for RGBA grids.
//!
//! Every interior pixel (at least `radius` away from each edge) becomes the
//! per-channel mean of its `(2 * radius + 1)^2` square neighborhood. The
//! mean is integer-truncated. All four channels, alpha included, are
//! averaged.
//!
//! Pixels closer than `radius` to an edge have no full neighborhood and are
//! never averaged; what they hold in the output is decided by
//! [`BorderPolicy`].

use ndarray::{s, ArrayView3, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filters::core::clamp_channel_int;
use crate::grid::{PixelGrid, CHANNELS};

/// What the blur writes into pixels within `radius` of an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderPolicy {
    /// Border pixels are copied unchanged from the input.
    #[default]
    CopyInput,
    /// Border pixels are left as transparent black (all channels zero).
    Transparent,
}

/// Square window of side `2 * radius + 1` centered on `(row, col)`.
///
/// Returns `None` when the window would extend past the grid.
pub fn neighborhood(
    grid: &PixelGrid,
    row: usize,
    col: usize,
    radius: usize,
) -> Option<ArrayView3<'_, u8>> {
    let (height, width) = grid.dim();
    if row < radius || col < radius || row + radius >= height || col + radius >= width {
        return None;
    }
    Some(
        grid.view()
            .slice_move(s![row - radius..=row + radius, col - radius..=col + radius, ..]),
    )
}

/// Per-channel mean of every pixel in `window`, truncated and clamped.
pub fn average_color(window: ArrayView3<'_, u8>) -> [u8; 4] {
    let (h, w, _) = window.dim();
    let count = (h * w) as u64;
    if count == 0 {
        return [0; 4];
    }

    // u64 sums cannot overflow for any window that fits in memory.
    let mut totals = [0u64; 4];
    for pixel in window.lanes(Axis(2)) {
        for (c, &v) in pixel.iter().enumerate().take(CHANNELS) {
            totals[c] += v as u64;
        }
    }
    totals.map(|total| clamp_channel_int((total / count) as i64))
}

/// Apply a box blur of the given radius.
///
/// # Arguments
/// * `input` - RGBA grid
/// * `radius` - Neighborhood radius in pixels; `0` = no change
/// * `border` - How to fill pixels without a full neighborhood
///
/// # Errors
/// [`Error::EmptyGrid`] for an empty grid, [`Error::RadiusTooLarge`] when
/// `2 * radius` reaches the smaller grid dimension (no interior remains).
pub fn blur(input: &PixelGrid, radius: usize, border: BorderPolicy) -> Result<PixelGrid> {
    input.ensure_non_empty()?;
    let (height, width) = input.dim();
    if radius.saturating_mul(2) >= height.min(width) {
        return Err(Error::RadiusTooLarge {
            radius,
            height,
            width,
        });
    }

    let mut output = match border {
        BorderPolicy::CopyInput => input.clone(),
        BorderPolicy::Transparent => PixelGrid::new(height, width),
    };

    let mut interior = output
        .as_array_mut()
        .slice_mut(s![radius..height - radius, .., ..]);

    interior
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut line)| {
            let row = i + radius;
            for col in radius..width - radius {
                if let Some(window) = neighborhood(input, row, col, radius) {
                    let avg = average_color(window);
                    for (c, &v) in avg.iter().enumerate() {
                        line[[col, c]] = v;
                    }
                }
            }
        });

    Ok(output)
}
