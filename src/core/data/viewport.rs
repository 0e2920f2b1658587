use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{complex_to_pixel, pixel_to_complex};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("zoom must be a positive finite number, got {0}")]
    InvalidZoom(f64),
    #[error("escape radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),
    #[error("exponent must be finite, got {0}")]
    InvalidExponent(f64),
    #[error("centre offset must be finite, got ({re}, {im})")]
    InvalidOffset { re: f64, im: f64 },
}

/// A window onto the complex plane plus the escape parameters shared by
/// every pixel in it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub offset: Complex64,
    pub radius: f64,
    pub exponent: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            zoom: 0.75,
            offset: Complex64::new(-0.5, 0.0),
            radius: 2.0,
            exponent: 2.0,
        }
    }
}

impl Viewport {
    pub fn new(
        width: u32,
        height: u32,
        zoom: f64,
        offset: Complex64,
        radius: f64,
        exponent: f64,
    ) -> Result<Self, ViewportError> {
        let viewport = Self {
            width,
            height,
            zoom,
            offset,
            radius,
            exponent,
        };

        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), ViewportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewportError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ViewportError::InvalidZoom(self.zoom));
        }

        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ViewportError::InvalidRadius(self.radius));
        }

        if !self.exponent.is_finite() {
            return Err(ViewportError::InvalidExponent(self.exponent));
        }

        if !(self.offset.re.is_finite() && self.offset.im.is_finite()) {
            return Err(ViewportError::InvalidOffset {
                re: self.offset.re,
                im: self.offset.im,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Escape threshold compared against `|z|`.
    #[must_use]
    pub fn escape_threshold(&self) -> f64 {
        self.radius * self.radius
    }

    #[must_use]
    pub fn point_to_complex(&self, point: Point) -> Complex64 {
        pixel_to_complex(
            self.width,
            self.height,
            f64::from(point.x),
            f64::from(point.y),
            self.offset,
            self.zoom,
        )
    }

    /// Fractional pixel position of `z`, used by callers recentring on a click.
    #[must_use]
    pub fn complex_to_point(&self, z: Complex64) -> (f64, f64) {
        complex_to_pixel(self.width, self.height, z, self.offset, self.zoom)
    }
}
