//! Decode image files into pixel grids and encode them back.
//!
//! - `load_grid`: read a JPEG/PNG into an RGBA [`PixelGrid`].
//! - `save_grid`: write a grid, format chosen by file extension.
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};
use crate::grid::PixelGrid;

/// Load an image from disk and convert it to 8-bit RGBA.
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = PixelGrid::from_rgba_image(img.into_rgba8());
    log::info!(
        "loaded {}: {}x{}",
        path.display(),
        grid.height(),
        grid.width()
    );
    Ok(grid)
}

/// Save a grid to disk. JPEG output drops alpha.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    let save_err = |source| Error::Save {
        path: path.to_path_buf(),
        source,
    };
    let rgba = DynamicImage::ImageRgba8(grid.to_rgba_image());
    match ImageFormat::from_path(path).map_err(save_err)? {
        ImageFormat::Jpeg => rgba.to_rgb8().save(path).map_err(save_err)?,
        _ => rgba.save(path).map_err(save_err)?,
    }
    log::debug!("saved {}x{} grid to {}", grid.height(), grid.width(), path.display());
    Ok(())
}
