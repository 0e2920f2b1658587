#[allow(clippy::module_inception)]
pub mod generate_pixel_buffer;
pub mod ports;
