use num_complex::Complex64;

/// Maps a pixel position to the complex plane.
///
/// The imaginary axis is scaled by the image height and the real axis by the
/// width, corrected for aspect ratio so a zoom of 1 spans `[-1, 1]`
/// vertically. Screen `y` grows downward, imaginary values grow upward.
#[must_use]
pub fn pixel_to_complex(
    width: u32,
    height: u32,
    x: f64,
    y: f64,
    offset: Complex64,
    zoom: f64,
) -> Complex64 {
    let width = f64::from(width);
    let height = f64::from(height);
    let aspect = width / height;

    let re = offset.re + aspect * (x - width / 2.0) / (zoom * width / 2.0);
    let im = offset.im - (y - height / 2.0) / (zoom * height / 2.0);

    Complex64::new(re, im)
}

/// Inverse of [`pixel_to_complex`]; the result is a fractional pixel position.
#[must_use]
pub fn complex_to_pixel(
    width: u32,
    height: u32,
    z: Complex64,
    offset: Complex64,
    zoom: f64,
) -> (f64, f64) {
    let width = f64::from(width);
    let height = f64::from(height);
    let aspect = width / height;

    let x = width / 2.0 + (z.re - offset.re) * zoom * width / 2.0 / aspect;
    let y = height / 2.0 - (z.im - offset.im) * zoom * height / 2.0;

    (x, y)
}
