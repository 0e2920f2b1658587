/// Continuous escape index `i + 1 - log2(ln|z| / ln radius)`.
///
/// Falls back to the raw iteration count whenever the logarithms are
/// undefined, e.g. `|z| <= 1` or `radius == 1`.
#[must_use]
pub fn normalize(iterations: u32, magnitude: f64, radius: f64) -> f64 {
    let i = f64::from(iterations);
    let log_zn = (magnitude * magnitude).ln() / 2.0;
    let nu = (log_zn / radius.ln()).ln() / std::f64::consts::LN_2;
    let smooth = i + 1.0 - nu;

    if smooth.is_finite() { smooth } else { i }
}
