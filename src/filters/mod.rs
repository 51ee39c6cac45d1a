//! Filter modules for pixel-grid effects.
//!
//! ## Grid Format
//!
//! Every filter works on a [`PixelGrid`](crate::grid::PixelGrid): a
//! `(height, width, 4)` RGBA array of `u8`, values 0-255.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - Input is borrowed read-only; a fresh grid is returned
//! - **Clamped** - Intermediate arithmetic may leave 0-255 but stored values never do
//! - **Alpha preservation** - Point filters leave alpha untouched
//! - **Fail fast** - Empty grids and oversized blur radii are errors, never out-of-bounds reads
//! - **Thread-safe** - Pixels are processed in parallel with rayon
//!
//! ## Filter Categories
//!
//! - **Geometric**: flip_horizontal, flip_vertical
//! - **Pixel-wise**: grayscale, contrast, tint
//! - **Color science**: color_matrix, vintage
//! - **Neighborhood**: blur

pub mod core;
pub mod flip;
pub mod grayscale;
pub mod color_adjust;
pub mod color_science;
pub mod blur;

pub use blur::{average_color, blur, neighborhood, BorderPolicy};
pub use color_adjust::{contrast, tint};
pub use color_science::{color_matrix, vintage, ColorMatrix};
pub use flip::{flip_horizontal, flip_vertical};
pub use grayscale::grayscale;
