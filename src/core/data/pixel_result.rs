/// Escape scalars for a single pixel, consumed by colour mapping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelResult {
    /// Iterations completed before escape, in `[0, max_iterations]`.
    pub iterations: u32,
    /// Modulus of `z` when iteration stopped.
    pub magnitude: f64,
}

impl PixelResult {
    #[must_use]
    pub fn is_interior(&self, max_iterations: u32) -> bool {
        self.iterations == max_iterations
    }
}
