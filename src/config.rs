//! Filter constants exposed as overridable parameters.
//!
//! Defaults reproduce the classic editor: blur radius 5, contrast factor
//! 1.1 and a 1.1 blue tint. Any subset can be overridden from TOML:
//!
//! ```toml
//! blur_radius = 2
//! contrast_factor = 1.4
//! tint_channel = "red"
//! blur_border = "transparent"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filters::{BorderPolicy, ColorMatrix};
use crate::grid::Channel;

pub const DEFAULT_BLUR_RADIUS: usize = 5;
pub const DEFAULT_CONTRAST_FACTOR: f64 = 1.1;
pub const DEFAULT_TINT_FACTOR: f64 = 1.1;

/// Parameters fed to the editor's filter commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterParams {
    pub blur_radius: usize,
    pub blur_border: BorderPolicy,
    pub contrast_factor: f64,
    pub tint_factor: f64,
    pub tint_channel: Channel,
    pub vintage_matrix: ColorMatrix,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            blur_radius: DEFAULT_BLUR_RADIUS,
            blur_border: BorderPolicy::default(),
            contrast_factor: DEFAULT_CONTRAST_FACTOR,
            tint_factor: DEFAULT_TINT_FACTOR,
            tint_channel: Channel::Blue,
            vintage_matrix: ColorMatrix::SEPIA,
        }
    }
}

impl FilterParams {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a TOML parameter file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let params = Self::from_toml_str(&contents)?;
        log::debug!("loaded filter parameters from {}: {params:?}", path.display());
        Ok(params)
    }
}
