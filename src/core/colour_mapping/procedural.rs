//! Themes computed directly from the escape scalars rather than looked up in
//! a palette. Hue themes use a fixed saturation of 0.75 at full value.

use std::f64::consts::PI;

use crate::core::colour_mapping::hsv::hsv_to_rgb;
use crate::core::data::colour::Colour;

const HUE_SATURATION: f64 = 0.75;
const BANDS: [u8; 4] = [0, 32, 96, 192];

fn hue(h: f64) -> Colour {
    hsv_to_rgb(h, HUE_SATURATION, 1.0)
}

fn shifted(h: f64, shift: f64) -> f64 {
    (h + shift / 100.0).rem_euclid(1.0)
}

/// White without a shift, otherwise a single saturated hue chosen by the shift.
#[must_use]
pub fn monochrome(shift: f64) -> Colour {
    if shift == 0.0 {
        hsv_to_rgb(0.0, 0.0, 1.0)
    } else {
        hsv_to_rgb(0.5 - shift / 200.0, 1.0, 1.0)
    }
}

/// Linear ramp from black; interior points are white.
#[must_use]
pub fn basic_grayscale(iterations: u32, max_iterations: u32) -> Colour {
    if iterations >= max_iterations {
        return Colour::WHITE;
    }

    let level = 256.0 * f64::from(iterations) / f64::from(max_iterations);
    Colour::grey(level as u8)
}

#[must_use]
pub fn basic_hue(iterations: u32, max_iterations: u32, shift: f64) -> Colour {
    hue(shifted(f64::from(iterations) / f64::from(max_iterations), shift))
}

/// Four discrete levels per channel, each channel banding at a different rate.
#[must_use]
pub fn banded_rgb(iterations: u32) -> Colour {
    let band = |i: u32| BANDS[(i % 4) as usize];

    Colour {
        r: band(iterations / 4),
        g: band(iterations),
        b: band(iterations / 16),
    }
}

#[must_use]
pub fn normalized_hue(ni: f64, max_iterations: u32, shift: f64) -> Colour {
    hue(shifted(ni / f64::from(max_iterations), shift))
}

#[must_use]
pub fn sqrt_hue(ni: f64, max_iterations: u32, shift: f64) -> Colour {
    hue(shifted(ni / f64::from(max_iterations).sqrt(), shift))
}

/// `ln(1) = 0`, so a budget of one iteration leaves the hue undefined and it
/// falls back to red.
#[must_use]
pub fn log_hue(ni: f64, max_iterations: u32, shift: f64) -> Colour {
    hue(shifted(ni / f64::from(max_iterations).ln(), shift))
}

#[must_use]
pub fn sin_hue(ni: f64, shift: f64) -> Colour {
    hue(ni * (((shift + 1.0) / 100.0) * PI / 2.0).sin())
}

#[must_use]
pub fn sin_sqrt_hue(ni: f64, max_iterations: u32, shift: f64) -> Colour {
    let steps = 1.0 + shift / 100.0;
    let h = 1.0 - ((ni / f64::from(max_iterations).sqrt() * steps).sin() + 1.0) / 2.0;

    hue(h)
}
