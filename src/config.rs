//! Tool configuration loading.
//!
//! Both binaries read an optional `naksha.toml` from the working
//! directory. Command-line flags take precedence over file values, and
//! file values over the built-in defaults.

use serde::Deserialize;
use std::path::Path;

use crate::crop::DEFAULT_PADDING;
use crate::error::Result;

/// Config file probed in the working directory
pub const CONFIG_FILE: &str = "naksha.toml";

/// Top-level tool configuration
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ToolConfig {
    /// Crop tool settings
    #[serde(default)]
    pub crop: CropConfig,
    /// Image conversion settings
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Crop tool settings
#[derive(Clone, Debug, Deserialize)]
pub struct CropConfig {
    /// Cells of margin kept around the occupied region (default: 10)
    #[serde(default = "default_padding")]
    pub padding: usize,

    /// Destination path for the cropped map (default: cropped_map.map)
    #[serde(default = "default_crop_output")]
    pub output: String,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            output: default_crop_output(),
        }
    }
}

/// Image conversion settings
#[derive(Clone, Debug, Deserialize)]
pub struct ConvertConfig {
    /// Fallback output path when none is given (default: test_map.map)
    #[serde(default = "default_map_output")]
    pub default_output: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            default_output: default_map_output(),
        }
    }
}

fn default_padding() -> usize {
    DEFAULT_PADDING
}
fn default_crop_output() -> String {
    "cropped_map.map".to_string()
}
fn default_map_output() -> String {
    "test_map.map".to_string()
}

impl ToolConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load `naksha.toml` from the working directory if present,
    /// otherwise use defaults
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
