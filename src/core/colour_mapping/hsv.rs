use crate::core::data::colour::Colour;

/// Six-sector HSV to RGB conversion with `h`, `s` and `v` in `[0, 1]`.
///
/// Hue wraps, so values outside `[0, 1)` select the equivalent sector.
/// Intermediate channels are truncated, not rounded.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Colour {
    let v = (v * 255.0) as u8;

    if s == 0.0 {
        return Colour::grey(v);
    }

    let h = if h.is_finite() { h.rem_euclid(1.0) } else { 0.0 };
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let value = f64::from(v);

    let p = (value * (1.0 - s)) as u8;
    let q = (value * (1.0 - s * f)) as u8;
    let t = (value * (1.0 - s * (1.0 - f))) as u8;

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Colour { r, g, b }
}
