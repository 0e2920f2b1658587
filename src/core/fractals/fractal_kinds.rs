use serde::{Deserialize, Serialize};

/// How the iteration is seeded: Mandelbrot varies `c` per pixel, Julia fixes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FractalFamily {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalFamily {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

impl std::fmt::Display for FractalFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Transform applied to `z` before each application of the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FractalVariant {
    #[default]
    Standard,
    BurningShip,
    Tricorn,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[Self::Standard, Self::BurningShip, Self::Tricorn];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::BurningShip => "BurningShip",
            Self::Tricorn => "Tricorn",
        }
    }
}

impl std::fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
