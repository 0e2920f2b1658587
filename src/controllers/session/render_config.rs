use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controllers::session::errors::ConfigError;
use crate::core::actions::render::validate;
use crate::core::colour_mapping::colour_spec::ColourSpec;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::params::FractalSpec;

/// Everything needed to describe one render. Missing fields take their
/// defaults, so `{}` is a valid config.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub fractal: FractalSpec,
    pub colour: ColourSpec,
}

impl RenderConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;

        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(&self.viewport, &self.fractal, &self.colour)?;

        Ok(())
    }
}
