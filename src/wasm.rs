//! WebAssembly exports for the pixel filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Every
//! export takes a flat RGBA byte buffer (length = width * height * 4, the
//! layout of `ImageData.data`) and returns a new buffer of the same size.
//! Invalid dimensions and filter preconditions surface as JS errors.

use wasm_bindgen::prelude::*;

use crate::filters::{self, BorderPolicy};
use crate::grid::{Channel, PixelGrid};

fn to_grid(data: &[u8], width: usize, height: usize) -> Result<PixelGrid, JsError> {
    Ok(PixelGrid::from_rgba_raw(width, height, data.to_vec())?)
}

// ============================================================================
// Geometric
// ============================================================================

#[wasm_bindgen]
pub fn flip_horizontal_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let grid = to_grid(data, width, height)?;
    Ok(filters::flip_horizontal(&grid).into_raw())
}

#[wasm_bindgen]
pub fn flip_vertical_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let grid = to_grid(data, width, height)?;
    Ok(filters::flip_vertical(&grid).into_raw())
}

// ============================================================================
// Pixel-wise
// ============================================================================

#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let grid = to_grid(data, width, height)?;
    Ok(filters::grayscale(&grid)?.into_raw())
}

#[wasm_bindgen]
pub fn contrast_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    factor: f64,
) -> Result<Vec<u8>, JsError> {
    let grid = to_grid(data, width, height)?;
    Ok(filters::contrast(&grid, factor)?.into_raw())
}

/// Scale one channel; `channel` is "red", "green", "blue" or "alpha".
#[wasm_bindgen]
pub fn tint_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    factor: f64,
    channel: &str,
) -> Result<Vec<u8>, JsError> {
    let channel: Channel = channel.parse().map_err(|e: String| JsError::new(&e))?;
    let grid = to_grid(data, width, height)?;
    Ok(filters::tint(&grid, factor, channel)?.into_raw())
}

#[wasm_bindgen]
pub fn vintage_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let grid = to_grid(data, width, height)?;
    Ok(filters::vintage(&grid)?.into_raw())
}

// ============================================================================
// Neighborhood
// ============================================================================

#[wasm_bindgen]
pub fn blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    transparent_border: bool,
) -> Result<Vec<u8>, JsError> {
    let border = if transparent_border {
        BorderPolicy::Transparent
    } else {
        BorderPolicy::CopyInput
    };
    let grid = to_grid(data, width, height)?;
    Ok(filters::blur(&grid, radius, border)?.into_raw())
}
