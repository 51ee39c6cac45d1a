//! pixelfilter
//!
//! Elementary image filters over an in-memory RGBA pixel grid, plus a
//! small key-driven editing session around them.
//!
//! ## Grid Format
//! A [`PixelGrid`] is a `(height, width, 4)` array of `u8` RGBA values
//! (0-255). Filters borrow the grid and return a new one of the same size;
//! nothing is modified in place.
//!
//! ## Filters
//! - Flip horizontal / vertical
//! - Grayscale (channel average)
//! - Channel tint
//! - Vintage color matrix
//! - Contrast stretch around 127
//! - Box blur with an explicit [`BorderPolicy`]
//!
//! Python (`python` feature) and WASM (`wasm` feature) bindings wrap the
//! same functions.

pub mod config;
pub mod editor;
pub mod error;
pub mod filters;
pub mod grid;
pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::FilterParams;
pub use editor::{Command, Editor};
pub use error::{Error, Result};
pub use filters::{BorderPolicy, ColorMatrix};
pub use grid::{Channel, PixelGrid};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::Error;
    use crate::filters::{self, BorderPolicy};
    use crate::grid::{Channel, PixelGrid};

    fn value_error(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn to_grid(image: &PyReadonlyArray3<'_, u8>) -> PyResult<PixelGrid> {
        PixelGrid::from_array(image.as_array().to_owned()).map_err(value_error)
    }

    fn to_py<'py>(py: Python<'py>, grid: PixelGrid) -> Bound<'py, PyArray3<u8>> {
        grid.into_array().into_pyarray(py)
    }

    // ========================================================================
    // Geometric
    // ========================================================================

    /// Mirror an RGBA u8 image (H, W, 4) left-to-right.
    #[pyfunction]
    pub fn flip_horizontal<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let grid = to_grid(&image)?;
        Ok(to_py(py, filters::flip_horizontal(&grid)))
    }

    /// Mirror an RGBA u8 image (H, W, 4) top-to-bottom.
    #[pyfunction]
    pub fn flip_vertical<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let grid = to_grid(&image)?;
        Ok(to_py(py, filters::flip_vertical(&grid)))
    }

    // ========================================================================
    // Pixel-wise
    // ========================================================================

    /// Average-intensity grayscale, alpha preserved.
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let grid = to_grid(&image)?;
        filters::grayscale(&grid)
            .map(|out| to_py(py, out))
            .map_err(value_error)
    }

    #[pyfunction]
    #[pyo3(signature = (image, factor=1.1))]
    pub fn contrast<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let grid = to_grid(&image)?;
        filters::contrast(&grid, factor)
            .map(|out| to_py(py, out))
            .map_err(value_error)
    }

    /// Scale one channel ("red", "green", "blue" or "alpha") by `factor`.
    #[pyfunction]
    #[pyo3(signature = (image, factor=1.1, channel="blue"))]
    pub fn tint<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f64,
        channel: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let channel: Channel = channel.parse().map_err(PyValueError::new_err)?;
        let grid = to_grid(&image)?;
        filters::tint(&grid, factor, channel)
            .map(|out| to_py(py, out))
            .map_err(value_error)
    }

    // ========================================================================
    // Color science
    // ========================================================================

    #[pyfunction]
    pub fn vintage<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let grid = to_grid(&image)?;
        filters::vintage(&grid)
            .map(|out| to_py(py, out))
            .map_err(value_error)
    }

    // ========================================================================
    // Neighborhood
    // ========================================================================

    /// Box blur; border pixels are copied from the input unless
    /// `transparent_border` is set.
    #[pyfunction]
    #[pyo3(signature = (image, radius=5, transparent_border=false))]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        radius: usize,
        transparent_border: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let border = if transparent_border {
            BorderPolicy::Transparent
        } else {
            BorderPolicy::CopyInput
        };
        let grid = to_grid(&image)?;
        filters::blur(&grid, radius, border)
            .map(|out| to_py(py, out))
            .map_err(value_error)
    }

    /// pixelfilter extension module
    #[pymodule]
    pub fn pixelfilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flip_horizontal, m)?)?;
        m.add_function(wrap_pyfunction!(flip_vertical, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(contrast, m)?)?;
        m.add_function(wrap_pyfunction!(tint, m)?)?;
        m.add_function(wrap_pyfunction!(vintage, m)?)?;
        m.add_function(wrap_pyfunction!(blur, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelfilter;
