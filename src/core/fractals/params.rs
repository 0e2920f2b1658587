use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::core::fractals::errors::FractalSpecError;
use crate::core::fractals::fractal_kinds::{FractalFamily, FractalVariant};

const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Formula selection and iteration budget.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalSpec {
    pub family: FractalFamily,
    pub variant: FractalVariant,
    /// Only read when `family` is [`FractalFamily::Julia`].
    pub julia_constant: Complex64,
    pub max_iterations: u32,
    /// Short-circuits orbits that land exactly on a previously sampled value.
    pub periodicity_check: bool,
}

impl Default for FractalSpec {
    fn default() -> Self {
        Self {
            family: FractalFamily::default(),
            variant: FractalVariant::default(),
            julia_constant: Complex64::new(-0.8, 0.156),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            periodicity_check: true,
        }
    }
}

impl FractalSpec {
    pub fn new(
        family: FractalFamily,
        variant: FractalVariant,
        julia_constant: Complex64,
        max_iterations: u32,
    ) -> Result<Self, FractalSpecError> {
        let spec = Self {
            family,
            variant,
            julia_constant,
            max_iterations,
            periodicity_check: true,
        };

        spec.validate()?;
        Ok(spec)
    }

    #[must_use]
    pub fn mandelbrot(max_iterations: u32) -> Self {
        Self {
            family: FractalFamily::Mandelbrot,
            max_iterations,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn julia(julia_constant: Complex64, max_iterations: u32) -> Self {
        Self {
            family: FractalFamily::Julia,
            julia_constant,
            max_iterations,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_variant(self, variant: FractalVariant) -> Self {
        Self { variant, ..self }
    }

    #[must_use]
    pub fn with_periodicity_check(self, periodicity_check: bool) -> Self {
        Self {
            periodicity_check,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), FractalSpecError> {
        if self.max_iterations == 0 {
            return Err(FractalSpecError::ZeroMaxIterations);
        }

        if self.family == FractalFamily::Julia
            && !(self.julia_constant.re.is_finite() && self.julia_constant.im.is_finite())
        {
            return Err(FractalSpecError::NonFiniteJuliaConstant);
        }

        Ok(())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match self.variant {
            FractalVariant::Standard => self.family.display_name().to_string(),
            variant => format!("{} ({})", self.family, variant),
        }
    }
}
