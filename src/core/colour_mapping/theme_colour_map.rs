use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::colour_spec::ColourSpec;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::Theme;
use crate::core::colour_mapping::normalize::normalize;
use crate::core::colour_mapping::palettes::{self, Palette};
use crate::core::colour_mapping::procedural;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_result::PixelResult;

/// Colours escape scalars with one theme, resolved once up front so the
/// per-pixel path is a single match.
#[derive(Debug, Clone)]
pub struct ThemeColourMap {
    theme: Theme,
    shift: f64,
    radius: f64,
    max_iterations: u32,
}

impl ThemeColourMap {
    #[must_use]
    pub fn new(spec: &ColourSpec, radius: f64, max_iterations: u32) -> Self {
        let theme = spec.theme.resolve();

        Self {
            theme,
            shift: spec.palette_shift,
            radius,
            max_iterations,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.theme.name()
    }

    /// Maps escape scalars to a colour. Interior points are black for every
    /// theme except `BasicGrayscale`.
    #[must_use]
    pub fn colour(&self, iterations: u32, magnitude: f64) -> Colour {
        let max = self.max_iterations;

        if iterations == max && self.theme != Theme::BasicGrayscale {
            return Colour::BLACK;
        }

        let ni = || normalize(iterations, magnitude, self.radius);

        match self.theme {
            Theme::Default | Theme::BlueBrown16 => self.indexed(&palettes::BLUE_BROWN, ni()),
            Theme::Tropical16 => self.indexed(&palettes::TROPICAL_SMALL, ni()),
            Theme::Tropical256 => self.indexed(&palettes::TROPICAL, ni()),
            Theme::Pastels256 => self.indexed(&palettes::PASTELS, ni()),
            Theme::Metallic256 => self.indexed(&palettes::METALLIC, ni()),
            Theme::Twilight256 => self.indexed(&palettes::TWILIGHT, ni()),
            Theme::Twilights512 => self.indexed(&palettes::TWILIGHTS, ni()),
            Theme::Landscape256 => self.indexed(&palettes::LANDSCAPE, ni()),
            Theme::ColorcetCetC1 => self.indexed(&palettes::CET_C1, ni()),
            Theme::ColorcetCetCbc1 => self.indexed(&palettes::CET_CBC1, ni()),
            Theme::ColorcetCetCbtc1 => self.indexed(&palettes::CET_CBTC1, ni()),
            Theme::ColorcetCetC4s => self.indexed(&palettes::CET_C4S, ni()),
            Theme::Hsv256 => self.indexed(&palettes::HSV, ni()),
            Theme::Monochrome => procedural::monochrome(self.shift),
            Theme::BasicGrayscale => procedural::basic_grayscale(iterations, max),
            Theme::BasicHue => procedural::basic_hue(iterations, max, self.shift),
            Theme::BandedRgb => procedural::banded_rgb(iterations),
            Theme::NormalizedHue => procedural::normalized_hue(ni(), max, self.shift),
            Theme::SqrtHue => procedural::sqrt_hue(ni(), max, self.shift),
            Theme::LogHue => procedural::log_hue(ni(), max, self.shift),
            Theme::SinHue => procedural::sin_hue(ni(), self.shift),
            Theme::SinSqrtHue => procedural::sin_sqrt_hue(ni(), max, self.shift),
        }
    }

    fn indexed(&self, palette: &Palette, normalized_index: f64) -> Colour {
        palette.colour_at(normalized_index, self.shift)
    }
}

impl ColourMap for ThemeColourMap {
    type T = PixelResult;
    type Failure = ColourMapError;

    fn map(&self, value: PixelResult) -> Result<Colour, Self::Failure> {
        if value.iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: value.iterations,
                max_iterations: self.max_iterations,
            });
        }

        Ok(self.colour(value.iterations, value.magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::palettes::palette_for;

    fn colour_map(theme: Theme, shift: f64) -> ThemeColourMap {
        ThemeColourMap::new(
            &ColourSpec {
                theme,
                palette_shift: shift,
            },
            2.0,
            50,
        )
    }

    #[test]
    fn test_interior_is_black_except_basic_grayscale() {
        let interior = PixelResult {
            iterations: 50,
            magnitude: 0.3,
        };

        for &theme in Theme::ALL {
            for &shift in &[0.0, 33.0, 99.0] {
                let colour = colour_map(theme, shift).map(interior).unwrap();

                if theme == Theme::BasicGrayscale {
                    assert_eq!(colour, Colour::WHITE);
                } else {
                    assert_eq!(colour, Colour::BLACK, "{} with shift {}", theme, shift);
                }
            }
        }
    }

    #[test]
    fn test_default_matches_blue_brown() {
        let value = PixelResult {
            iterations: 7,
            magnitude: 5.5,
        };

        assert_eq!(
            colour_map(Theme::Default, 12.0).map(value).unwrap(),
            colour_map(Theme::BlueBrown16, 12.0).map(value).unwrap()
        );
        assert_eq!(colour_map(Theme::Default, 0.0).theme(), Theme::BlueBrown16);
    }

    #[test]
    fn test_monochrome_exterior_is_grey_without_shift() {
        let map = colour_map(Theme::Monochrome, 0.0);

        for iterations in 0..50 {
            let colour = map
                .map(PixelResult {
                    iterations,
                    magnitude: 9.0,
                })
                .unwrap();
            assert!(colour.is_grey());
        }
    }

    #[test]
    fn test_indexed_theme_uses_normalized_index() {
        let map = colour_map(Theme::BlueBrown16, 0.0);
        // |z| = 4 at radius 2 normalizes to exactly the iteration count
        let colour = map
            .map(PixelResult {
                iterations: 3,
                magnitude: 4.0,
            })
            .unwrap();

        assert_eq!(colour, palette_for(Theme::BlueBrown16).unwrap().entries()[3]);
    }

    #[test]
    fn test_every_indexed_theme_colours_from_its_palette() {
        let value = PixelResult {
            iterations: 9,
            magnitude: 3.1,
        };
        let ni = normalize(9, 3.1, 2.0);

        for &theme in Theme::ALL.iter().filter(|theme| theme.is_indexed()) {
            let expected = palette_for(theme).unwrap().colour_at(ni, 25.0);

            assert_eq!(colour_map(theme, 25.0).map(value).unwrap(), expected, "{}", theme);
        }
    }

    #[test]
    fn test_degenerate_magnitude_does_not_fail() {
        for &theme in Theme::ALL {
            let map = colour_map(theme, 10.0);
            for &magnitude in &[0.0, 1.0, f64::NAN, f64::INFINITY] {
                assert!(
                    map.map(PixelResult {
                        iterations: 4,
                        magnitude
                    })
                    .is_ok()
                );
            }
        }
    }

    #[test]
    fn test_iterations_above_max_is_an_error() {
        let result = colour_map(Theme::BasicHue, 0.0).map(PixelResult {
            iterations: 51,
            magnitude: 10.0,
        });

        assert_eq!(
            result,
            Err(ColourMapError::IterationsExceedMax {
                iterations: 51,
                max_iterations: 50
            })
        );
    }

    #[test]
    fn test_display_name_matches_resolved_theme() {
        assert_eq!(colour_map(Theme::SinHue, 0.0).display_name(), "SinHue");
        assert_eq!(colour_map(Theme::Default, 0.0).display_name(), "BlueBrown16");
    }
}
