pub mod algorithm;
pub mod errors;
pub mod fractal_kinds;
pub mod params;
