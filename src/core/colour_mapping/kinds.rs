use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::colour_mapping::errors::ColourSpecError;

/// The closed set of colour themes, named as they appear in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Default,
    BlueBrown16,
    Tropical16,
    Tropical256,
    Pastels256,
    Metallic256,
    Twilight256,
    Twilights512,
    Landscape256,
    #[serde(rename = "Colorcet_CET_C1")]
    ColorcetCetC1,
    #[serde(rename = "Colorcet_CET_CBC1")]
    ColorcetCetCbc1,
    #[serde(rename = "Colorcet_CET_CBTC1")]
    ColorcetCetCbtc1,
    #[serde(rename = "Colorcet_CET_C4s")]
    ColorcetCetC4s,
    #[serde(rename = "HSV256")]
    Hsv256,
    Monochrome,
    BasicGrayscale,
    BasicHue,
    NormalizedHue,
    SqrtHue,
    LogHue,
    SinHue,
    SinSqrtHue,
    #[serde(rename = "BandedRGB")]
    BandedRgb,
}

impl Theme {
    pub const ALL: &'static [Self] = &[
        Self::Default,
        Self::BlueBrown16,
        Self::Tropical16,
        Self::Tropical256,
        Self::Pastels256,
        Self::Metallic256,
        Self::Twilight256,
        Self::Twilights512,
        Self::Landscape256,
        Self::ColorcetCetC1,
        Self::ColorcetCetCbc1,
        Self::ColorcetCetCbtc1,
        Self::ColorcetCetC4s,
        Self::Hsv256,
        Self::Monochrome,
        Self::BasicGrayscale,
        Self::BasicHue,
        Self::NormalizedHue,
        Self::SqrtHue,
        Self::LogHue,
        Self::SinHue,
        Self::SinSqrtHue,
        Self::BandedRgb,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::BlueBrown16 => "BlueBrown16",
            Self::Tropical16 => "Tropical16",
            Self::Tropical256 => "Tropical256",
            Self::Pastels256 => "Pastels256",
            Self::Metallic256 => "Metallic256",
            Self::Twilight256 => "Twilight256",
            Self::Twilights512 => "Twilights512",
            Self::Landscape256 => "Landscape256",
            Self::ColorcetCetC1 => "Colorcet_CET_C1",
            Self::ColorcetCetCbc1 => "Colorcet_CET_CBC1",
            Self::ColorcetCetCbtc1 => "Colorcet_CET_CBTC1",
            Self::ColorcetCetC4s => "Colorcet_CET_C4s",
            Self::Hsv256 => "HSV256",
            Self::Monochrome => "Monochrome",
            Self::BasicGrayscale => "BasicGrayscale",
            Self::BasicHue => "BasicHue",
            Self::NormalizedHue => "NormalizedHue",
            Self::SqrtHue => "SqrtHue",
            Self::LogHue => "LogHue",
            Self::SinHue => "SinHue",
            Self::SinSqrtHue => "SinSqrtHue",
            Self::BandedRgb => "BandedRGB",
        }
    }

    /// `Default` is an alias; every other theme resolves to itself.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Default => Self::BlueBrown16,
            theme => theme,
        }
    }

    #[must_use]
    pub const fn is_indexed(self) -> bool {
        matches!(
            self.resolve(),
            Self::BlueBrown16
                | Self::Tropical16
                | Self::Tropical256
                | Self::Pastels256
                | Self::Metallic256
                | Self::Twilight256
                | Self::Twilights512
                | Self::Landscape256
                | Self::ColorcetCetC1
                | Self::ColorcetCetCbc1
                | Self::ColorcetCetCbtc1
                | Self::ColorcetCetC4s
                | Self::Hsv256
        )
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).name())
    }
}

impl FromStr for Theme {
    type Err = ColourSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| ColourSpecError::UnknownTheme(s.to_string()))
    }
}
