use num_complex::Complex64;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_result::PixelResult;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::EscapeTimeError;
use crate::core::fractals::fractal_kinds::{FractalFamily, FractalVariant};
use crate::core::fractals::params::FractalSpec;

/// Iterations between refreshes of the periodicity reference value.
pub const PERIODICITY_SAMPLE_INTERVAL: u32 = 20;

const MAX_EXACT_POWER: f64 = 64.0;

/// `z^exponent`, using repeated multiplication for small integral exponents
/// so that cycles are reproduced bit-for-bit.
#[inline]
fn power(z: Complex64, exponent: f64) -> Complex64 {
    if exponent.fract() == 0.0 && exponent.abs() <= MAX_EXACT_POWER {
        z.powi(exponent as i32)
    } else {
        z.powf(exponent)
    }
}

#[inline]
fn apply_variant(z: Complex64, variant: FractalVariant) -> Complex64 {
    match variant {
        FractalVariant::Standard => z,
        FractalVariant::BurningShip => Complex64::new(z.re.abs(), -z.im.abs()),
        FractalVariant::Tricorn => z.conj(),
    }
}

/// Iterates the escape-time formula from `z0`.
///
/// Mandelbrot seeds both `z` and `c` with `z0`, which is the classic `z = 0`
/// orbit advanced by one step. The loop stops as soon as `|z|` exceeds
/// `threshold` (see [`Viewport::escape_threshold`]); points that never
/// escape, or that the periodicity check catches repeating a sampled value,
/// report `max_iterations`.
#[must_use]
pub fn escape(z0: Complex64, spec: &FractalSpec, threshold: f64, exponent: f64) -> PixelResult {
    let c = match spec.family {
        FractalFamily::Julia => spec.julia_constant,
        FractalFamily::Mandelbrot => z0,
    };

    let mut z = z0;
    let mut last_z = Complex64::new(0.0, 0.0);
    let mut period = 0;
    let mut iterations = 0;

    for iteration in 0..=spec.max_iterations {
        iterations = iteration;

        z = power(apply_variant(z, spec.variant), exponent) + c;

        if spec.periodicity_check {
            if z == last_z {
                iterations = spec.max_iterations;
                break;
            }

            period += 1;
            if period > PERIODICITY_SAMPLE_INTERVAL {
                period = 0;
                last_z = z;
            }
        }

        if z.norm() > threshold {
            break;
        }
    }

    PixelResult {
        iterations,
        magnitude: z.norm(),
    }
}

/// Per-pixel escape evaluator bound to one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    spec: FractalSpec,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, spec: FractalSpec) -> Self {
        Self { viewport, spec }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn spec(&self) -> &FractalSpec {
        &self.spec
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = PixelResult;
    type Failure = EscapeTimeError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.viewport.contains_point(pixel) {
            return Err(EscapeTimeError::PointOutsideViewport {
                point: pixel,
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let z0 = self.viewport.point_to_complex(pixel);

        Ok(escape(
            z0,
            &self.spec,
            self.viewport.escape_threshold(),
            self.viewport.exponent,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_viewport(size: u32) -> Viewport {
        Viewport {
            width: size,
            height: size,
            zoom: 1.0,
            offset: Complex64::new(0.0, 0.0),
            radius: 2.0,
            exponent: 2.0,
        }
    }

    #[test]
    fn test_origin_is_interior_for_mandelbrot() {
        let result = escape(Complex64::new(0.0, 0.0), &FractalSpec::mandelbrot(50), 4.0, 2.0);

        assert_eq!(result.iterations, 50);
        assert_eq!(result.magnitude, 0.0);
    }

    #[test]
    fn test_far_point_escapes_on_first_iteration() {
        let result = escape(Complex64::new(3.0, 0.0), &FractalSpec::mandelbrot(50), 4.0, 2.0);

        // 3² + 3 = 12 > 4
        assert_eq!(result.iterations, 0);
        assert_eq!(result.magnitude, 12.0);
    }

    #[test]
    fn test_escape_compares_modulus_against_radius_squared() {
        // z1 = 1.5² + 1.5 = 3.75, which is below 4 but above 2
        let spec = FractalSpec::mandelbrot(50).with_periodicity_check(false);
        let result = escape(Complex64::new(1.5, 0.0), &spec, 4.0, 2.0);

        assert_eq!(result.iterations, 1);
        assert!(result.magnitude > 4.0);
    }

    #[test]
    fn test_julia_uses_fixed_constant() {
        let c = Complex64::new(-0.8, 0.156);
        let julia = FractalSpec::julia(c, 100);
        let mandelbrot = FractalSpec::mandelbrot(100);
        let z0 = Complex64::new(0.3, 0.5);

        assert_ne!(escape(z0, &julia, 4.0, 2.0), escape(z0, &mandelbrot, 4.0, 2.0));
    }

    #[test]
    fn test_burning_ship_folds_before_squaring() {
        let z0 = Complex64::new(0.5, 0.5);
        let spec = FractalSpec::mandelbrot(0).with_periodicity_check(false);

        // fold(z0) = 0.5 - 0.5i, squared = -0.5i, plus c gives 0.5
        let ship = escape(z0, &spec.with_variant(FractalVariant::BurningShip), 4.0, 2.0);
        // z0² = 0.5i, plus c = 0.5 + 1i
        let standard = escape(z0, &spec, 4.0, 2.0);

        assert_eq!(ship.magnitude, 0.5);
        assert_eq!(standard.magnitude, Complex64::new(0.5, 1.0).norm());
    }

    #[test]
    fn test_tricorn_conjugates_before_squaring() {
        let z0 = Complex64::new(0.2, 0.3);
        let z1 = z0.conj() * z0.conj() + z0;

        let spec = FractalSpec::mandelbrot(0)
            .with_variant(FractalVariant::Tricorn)
            .with_periodicity_check(false);
        let result = escape(z0, &spec, 4.0, 2.0);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.magnitude, z1.norm());
    }

    #[test]
    fn test_fractional_and_negative_exponents_do_not_panic() {
        for &exponent in &[2.5, -2.0, 0.5, -1.5] {
            for &(re, im) in &[(0.0, 0.0), (0.1, -0.2), (-1.0, 1.0), (2.0, 2.0)] {
                let result = escape(
                    Complex64::new(re, im),
                    &FractalSpec::mandelbrot(30),
                    4.0,
                    exponent,
                );
                assert!(result.iterations <= 30);
            }
        }
    }

    #[test]
    fn test_fractional_exponent_uses_complex_powf() {
        let z0 = Complex64::new(0.3, 0.2);
        let spec = FractalSpec::mandelbrot(0).with_periodicity_check(false);

        let result = escape(z0, &spec, 4.0, 2.5);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.magnitude, (z0.powf(2.5) + z0).norm());
    }

    #[test]
    fn test_integral_exponent_uses_powi() {
        let z0 = Complex64::new(0.3, 0.2);
        let spec = FractalSpec::mandelbrot(0).with_periodicity_check(false);

        let cubic = escape(z0, &spec, 4.0, 3.0);
        let quadratic = escape(z0, &spec, 4.0, 2.0);

        assert_eq!(cubic.magnitude, (z0.powi(3) + z0).norm());
        assert_ne!(cubic.magnitude, quadratic.magnitude);
    }

    #[test]
    fn test_compute_uses_viewport_escape_threshold() {
        // |z1| = 3.75 escapes at radius 1.5 but not at radius 2
        let spec = FractalSpec::mandelbrot(50).with_periodicity_check(false);
        let viewport = Viewport {
            offset: Complex64::new(1.5, 0.0),
            ..square_viewport(2)
        };
        let tight = Viewport {
            radius: 1.5,
            ..viewport
        };
        let centre = Point { x: 1, y: 1 };

        let loose = EscapeTimeAlgorithm::new(viewport, spec).compute(centre).unwrap();
        let tight = EscapeTimeAlgorithm::new(tight, spec).compute(centre).unwrap();

        assert_eq!(tight.iterations, 0);
        assert_eq!(loose.iterations, 1);
    }

    #[test]
    fn test_escape_is_deterministic() {
        let spec = FractalSpec::mandelbrot(500);
        let z0 = Complex64::new(-0.743643887, 0.131825904);

        assert_eq!(escape(z0, &spec, 4.0, 2.0), escape(z0, &spec, 4.0, 2.0));
    }

    #[test]
    fn test_periodicity_check_never_lowers_iteration_count() {
        let viewport = square_viewport(48);
        let checked = FractalSpec::mandelbrot(200);
        let unchecked = checked.with_periodicity_check(false);

        for variant in FractalVariant::ALL {
            for y in 0..viewport.height {
                for x in 0..viewport.width {
                    let z0 = viewport.point_to_complex(Point { x, y });
                    let with = escape(z0, &checked.with_variant(*variant), 4.0, 2.0);
                    let without = escape(z0, &unchecked.with_variant(*variant), 4.0, 2.0);

                    assert!(
                        with.iterations >= without.iterations,
                        "pixel ({}, {}) {} < {}",
                        x,
                        y,
                        with.iterations,
                        without.iterations
                    );
                }
            }
        }
    }

    #[test]
    fn test_compute_maps_centre_pixel_to_origin() {
        let algorithm = EscapeTimeAlgorithm::new(square_viewport(100), FractalSpec::mandelbrot(50));
        let result = algorithm.compute(Point { x: 50, y: 50 }).unwrap();

        assert_eq!(result.iterations, 50);
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_viewport() {
        let algorithm = EscapeTimeAlgorithm::new(square_viewport(10), FractalSpec::mandelbrot(10));
        let point = Point { x: 10, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(EscapeTimeError::PointOutsideViewport {
                point,
                width: 10,
                height: 10
            })
        );
    }
}
