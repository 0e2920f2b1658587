mod controllers;
mod core;

pub use controllers::session::{
    ConfigError, RenderConfig, RenderOutcome, RenderSession, SessionError,
};

pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, GenerationToken, NeverCancel,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon,
    generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render::{
    InvalidConfiguration, RenderError, render, render_cancelable, validate,
};

pub use crate::core::colour_mapping::colour_spec::ColourSpec;
pub use crate::core::colour_mapping::errors::{ColourMapError, ColourSpecError};
pub use crate::core::colour_mapping::hsv::hsv_to_rgb;
pub use crate::core::colour_mapping::kinds::Theme;
pub use crate::core::colour_mapping::normalize::normalize;
pub use crate::core::colour_mapping::palettes::{Palette, palette_for};
pub use crate::core::colour_mapping::procedural;
pub use crate::core::colour_mapping::theme_colour_map::ThemeColourMap;

pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
pub use crate::core::data::pixel_result::PixelResult;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};

pub use crate::core::fractals::algorithm::{
    EscapeTimeAlgorithm, PERIODICITY_SAMPLE_INTERVAL, escape,
};
pub use crate::core::fractals::errors::{EscapeTimeError, FractalSpecError};
pub use crate::core::fractals::fractal_kinds::{FractalFamily, FractalVariant};
pub use crate::core::fractals::params::FractalSpec;

pub use crate::core::util::pixel_to_complex_coords::{complex_to_pixel, pixel_to_complex};

pub use num_complex::Complex64;
