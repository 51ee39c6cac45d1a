//! The RGBA pixel grid shared by every filter.
//!
//! A [`PixelGrid`] is a row-major `(height, width, 4)` array of `u8`
//! channel values. Rows can't be jagged and every stored value is a valid
//! channel by construction.

use std::fmt;
use std::str::FromStr;

use image::RgbaImage;
use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Largest value a channel can hold.
pub const MAX_CHANNEL: u8 = 255;

/// One plane of an RGBA pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Index of this channel in the last array axis.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            "a" | "alpha" => Ok(Channel::Alpha),
            other => Err(format!("unknown channel '{other}'")),
        }
    }
}

/// Rectangular grid of RGBA pixels, indexed `[row, col, channel]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Fully transparent black grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            data: Array3::<u8>::zeros((height, width, CHANNELS)),
        }
    }

    /// Grid with every pixel set to `rgba`.
    pub fn filled(height: usize, width: usize, rgba: [u8; 4]) -> Self {
        Self {
            data: Array3::from_shape_fn((height, width, CHANNELS), |(_, _, c)| rgba[c]),
        }
    }

    /// Wrap an existing `(height, width, 4)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let channels = data.dim().2;
        if channels != CHANNELS {
            return Err(Error::InvalidShape { channels });
        }
        Ok(Self { data })
    }

    /// Build from a flat, row-major RGBA byte buffer.
    pub fn from_rgba_raw(width: usize, height: usize, raw: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(Error::DimensionMismatch {
                width,
                height,
                expected: usize::MAX,
                actual: raw.len(),
            })?;
        if raw.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: raw.len(),
            });
        }
        let data = Array3::from_shape_vec((height, width, CHANNELS), raw).map_err(|_| {
            Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: expected,
            }
        })?;
        Ok(Self { data })
    }

    /// Build from rows of `[r, g, b, a]` pixels, rejecting jagged input.
    pub fn from_rows(rows: &[Vec<[u8; 4]>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut raw = Vec::with_capacity(height * width * CHANNELS);
        for row in rows {
            if row.len() != width {
                return Err(Error::DimensionMismatch {
                    width,
                    height,
                    expected: width * CHANNELS,
                    actual: row.len() * CHANNELS,
                });
            }
            raw.extend(row.iter().flatten());
        }
        Self::from_rgba_raw(width, height, raw)
    }

    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let data = Array3::from_shape_vec((height, width, CHANNELS), image.into_raw())
            .expect("RgbaImage buffer holds width * height * 4 bytes");
        Self { data }
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let raw: Vec<u8> = self.data.iter().copied().collect();
        RgbaImage::from_raw(self.width() as u32, self.height() as u32, raw)
            .expect("grid holds width * height * 4 bytes")
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// `(height, width)`
    pub fn dim(&self) -> (usize, usize) {
        let (h, w, _) = self.data.dim();
        (h, w)
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some([
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
            self.data[[row, col, 3]],
        ])
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, rgba: [u8; 4]) {
        for (c, &v) in rgba.iter().enumerate() {
            self.data[[row, col, c]] = v;
        }
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    pub(crate) fn as_array_mut(&mut self) -> &mut Array3<u8> {
        &mut self.data
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Flat row-major RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        if self.data.is_standard_layout() {
            self.data.into_raw_vec_and_offset().0
        } else {
            self.data.iter().copied().collect()
        }
    }

    /// Fail with [`Error::EmptyGrid`] when there are no pixels.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            let (height, width) = self.dim();
            return Err(Error::EmptyGrid { height, width });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_raw_rejects_wrong_length() {
        let err = PixelGrid::from_rgba_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch { expected: 16, actual: 15, .. }
        ));
    }

    #[test]
    fn test_from_array_rejects_rgb() {
        let err = PixelGrid::from_array(Array3::<u8>::zeros((2, 2, 3))).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { channels: 3 }));
    }

    #[test]
    fn test_from_rgba_raw_rejects_overflowing_dimensions() {
        let err = PixelGrid::from_rgba_raw(usize::MAX / 2, 3, vec![0; 4]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch { expected: usize::MAX, actual: 4, .. }
        ));
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let rows = vec![vec![[0, 0, 0, 255]; 3], vec![[0, 0, 0, 255]; 2]];
        assert!(PixelGrid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_from_rows_layout() {
        let rows = vec![vec![[1, 2, 3, 4], [5, 6, 7, 8]]];
        let grid = PixelGrid::from_rows(&rows).unwrap();
        assert_eq!(grid.dim(), (1, 2));
        assert_eq!(grid.pixel(0, 1), Some([5, 6, 7, 8]));
        assert_eq!(grid.pixel(1, 0), None);
        assert_eq!(grid.into_raw(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_filled_and_empty() {
        let grid = PixelGrid::filled(2, 3, [9, 8, 7, 6]);
        assert_eq!(grid.pixel(1, 2), Some([9, 8, 7, 6]));
        assert!(grid.ensure_non_empty().is_ok());

        let empty = PixelGrid::new(0, 4);
        assert!(empty.is_empty());
        assert!(matches!(
            empty.ensure_non_empty(),
            Err(Error::EmptyGrid { height: 0, width: 4 })
        ));
    }

    #[test]
    fn test_rgba_image_conversion() {
        let mut grid = PixelGrid::new(2, 3);
        grid.set_pixel(1, 2, [10, 20, 30, 40]);
        let image = grid.to_rgba_image();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [10, 20, 30, 40]);
        assert_eq!(PixelGrid::from_rgba_image(image), grid);
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!("Blue".parse::<Channel>(), Ok(Channel::Blue));
        assert_eq!("r".parse::<Channel>(), Ok(Channel::Red));
        assert!("purple".parse::<Channel>().is_err());
        assert_eq!(Channel::Alpha.index(), 3);
    }
}
