use serde::{Deserialize, Serialize};

use crate::core::colour_mapping::errors::ColourSpecError;
use crate::core::colour_mapping::kinds::Theme;

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourSpec {
    pub theme: Theme,
    /// Rotation applied to palettes and hues, as a percentage in `[0, 100)`.
    pub palette_shift: f64,
}

impl ColourSpec {
    pub fn new(theme: Theme, palette_shift: f64) -> Result<Self, ColourSpecError> {
        let spec = Self {
            theme,
            palette_shift,
        };

        spec.validate()?;
        Ok(spec)
    }

    /// Builds a spec from a theme name as received from a UI widget.
    pub fn from_name(theme: &str, palette_shift: f64) -> Result<Self, ColourSpecError> {
        Self::new(theme.parse()?, palette_shift)
    }

    pub fn validate(&self) -> Result<(), ColourSpecError> {
        if !(0.0..100.0).contains(&self.palette_shift) {
            return Err(ColourSpecError::ShiftOutOfRange(self.palette_shift));
        }

        Ok(())
    }
}
