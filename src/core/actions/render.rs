use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::colour_mapping::colour_spec::ColourSpec;
use crate::core::colour_mapping::errors::{ColourMapError, ColourSpecError};
use crate::core::colour_mapping::theme_colour_map::ThemeColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::errors::{EscapeTimeError, FractalSpecError};
use crate::core::fractals::params::FractalSpec;

/// A render request that was rejected before any pixel was evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid fractal: {0}")]
    Fractal(#[from] FractalSpecError),
    #[error("invalid colour: {0}")]
    Colour(#[from] ColourSpecError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),
    #[error("{0}")]
    Cancelled(Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] EscapeTimeError),
    #[error("colour map error: {0}")]
    ColourMap(#[source] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[source] PixelBufferError),
}

impl From<GeneratePixelBufferError<EscapeTimeError, ColourMapError>> for RenderError {
    fn from(err: GeneratePixelBufferError<EscapeTimeError, ColourMapError>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::Algorithm(e) => Self::Algorithm(e),
            GeneratePixelBufferError::ColourMap(e) => Self::ColourMap(e),
            GeneratePixelBufferError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Checks all three render inputs, reporting the first failure.
pub fn validate(
    viewport: &Viewport,
    fractal: &FractalSpec,
    colour: &ColourSpec,
) -> Result<(), InvalidConfiguration> {
    viewport.validate()?;
    fractal.validate()?;
    colour.validate()?;

    Ok(())
}

/// Renders the fractal described by `viewport` and `fractal` into `buffer`,
/// coloured according to `colour`.
///
/// The buffer must already have the viewport's dimensions.
pub fn render(
    buffer: &mut PixelBuffer,
    viewport: &Viewport,
    fractal: &FractalSpec,
    colour: &ColourSpec,
) -> Result<(), RenderError> {
    render_cancelable(buffer, viewport, fractal, colour, &NeverCancel)
}

/// Cancel-aware [`render`]. On [`RenderError::Cancelled`] the buffer holds a
/// partially rendered image.
pub fn render_cancelable<C: CancelToken>(
    buffer: &mut PixelBuffer,
    viewport: &Viewport,
    fractal: &FractalSpec,
    colour: &ColourSpec,
    cancel: &C,
) -> Result<(), RenderError> {
    validate(viewport, fractal, colour)?;

    if buffer.width() != viewport.width || buffer.height() != viewport.height {
        return Err(RenderError::PixelBuffer(
            PixelBufferError::DimensionsMismatch {
                buffer_width: buffer.width(),
                buffer_height: buffer.height(),
                width: viewport.width,
                height: viewport.height,
            },
        ));
    }

    let algorithm = EscapeTimeAlgorithm::new(*viewport, *fractal);
    let colour_map = ThemeColourMap::new(colour, viewport.radius, fractal.max_iterations);

    generate_pixel_buffer_cancelable(buffer, &algorithm, &colour_map, cancel)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::kinds::Theme;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::fractal_kinds::FractalVariant;
    use num_complex::Complex64;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height, 1.0, Complex64::new(0.0, 0.0), 2.0, 2.0).unwrap()
    }

    fn rendered(viewport: &Viewport, fractal: &FractalSpec, colour: &ColourSpec) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(viewport.width, viewport.height);
        render(&mut buffer, viewport, fractal, colour).unwrap();
        buffer
    }

    #[test]
    fn test_centre_of_mandelbrot_is_white_in_basic_grayscale() {
        let viewport = viewport(100, 100);
        let colour = ColourSpec::new(Theme::BasicGrayscale, 0.0).unwrap();
        let buffer = rendered(&viewport, &FractalSpec::mandelbrot(50), &colour);

        assert_eq!(buffer.pixel(Point { x: 50, y: 50 }).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_julia_differs_from_mandelbrot() {
        let viewport = viewport(100, 100);
        let colour = ColourSpec::default();

        let mandelbrot = rendered(&viewport, &FractalSpec::mandelbrot(50), &colour);
        let julia = rendered(
            &viewport,
            &FractalSpec::julia(Complex64::new(-0.8, 0.156), 50),
            &colour,
        );

        assert_ne!(mandelbrot, julia);
    }

    #[test]
    fn test_burning_ship_differs_from_tricorn() {
        let viewport = viewport(100, 100);
        let colour = ColourSpec::default();
        let fractal = FractalSpec::mandelbrot(50);

        let ship = rendered(
            &viewport,
            &fractal.with_variant(FractalVariant::BurningShip),
            &colour,
        );
        let tricorn = rendered(
            &viewport,
            &fractal.with_variant(FractalVariant::Tricorn),
            &colour,
        );

        assert_ne!(ship, tricorn);
    }

    #[test]
    fn test_cubic_exponent_changes_the_image() {
        let quadratic = viewport(100, 100);
        let cubic = Viewport {
            exponent: 3.0,
            ..quadratic
        };
        let fractal = FractalSpec::mandelbrot(50);
        let colour = ColourSpec::default();

        assert_ne!(
            rendered(&quadratic, &fractal, &colour),
            rendered(&cubic, &fractal, &colour)
        );
    }

    #[test]
    fn test_monochrome_without_shift_is_greyscale() {
        let viewport = viewport(100, 100);
        let colour = ColourSpec::new(Theme::Monochrome, 0.0).unwrap();
        let buffer = rendered(&viewport, &FractalSpec::mandelbrot(50), &colour);

        assert!(buffer.pixels().all(|colour| colour.is_grey()));
        assert!(buffer.pixels().any(|colour| colour == Colour::WHITE));
    }

    #[test]
    fn test_rejects_invalid_configuration_before_rendering() {
        let mut bad_viewport = viewport(10, 10);
        bad_viewport.zoom = 0.0;
        let mut buffer = PixelBuffer::new(10, 10);

        let result = render(
            &mut buffer,
            &bad_viewport,
            &FractalSpec::mandelbrot(50),
            &ColourSpec::default(),
        );

        assert!(matches!(
            result,
            Err(RenderError::InvalidConfiguration(
                InvalidConfiguration::Viewport(ViewportError::InvalidZoom(_))
            ))
        ));
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        let mut buffer = PixelBuffer::new(10, 11);

        let result = render(
            &mut buffer,
            &viewport(10, 10),
            &FractalSpec::mandelbrot(50),
            &ColourSpec::default(),
        );

        assert!(matches!(
            result,
            Err(RenderError::PixelBuffer(PixelBufferError::DimensionsMismatch { .. }))
        ));
    }

    #[test]
    fn test_cancelled_render_reports_cancelled() {
        let viewport = viewport(32, 32);
        let mut buffer = PixelBuffer::new(32, 32);

        let result = render_cancelable(
            &mut buffer,
            &viewport,
            &FractalSpec::mandelbrot(50),
            &ColourSpec::default(),
            &|| true,
        );

        assert!(matches!(result, Err(RenderError::Cancelled(_))));
    }

    #[test]
    fn test_validate_reports_colour_errors() {
        let colour = ColourSpec {
            theme: Theme::SinHue,
            palette_shift: 100.0,
        };

        assert_eq!(
            validate(&viewport(4, 4), &FractalSpec::mandelbrot(10), &colour),
            Err(InvalidConfiguration::Colour(ColourSpecError::ShiftOutOfRange(100.0)))
        );
    }
}
