use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColourSpecError {
    #[error("unknown colour theme {0:?}")]
    UnknownTheme(String),
    #[error("palette shift must be in [0, 100), got {0}")]
    ShiftOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}
