pub mod colour;
pub mod pixel_buffer;
pub mod pixel_result;
pub mod point;
pub mod viewport;
