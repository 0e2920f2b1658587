use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractalSpecError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("Julia constant must be finite")]
    NonFiniteJuliaConstant,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeTimeError {
    #[error("point (x: {}, y: {}) is outside the {width}x{height} viewport", .point.x, .point.y)]
    PointOutsideViewport {
        point: Point,
        width: u32,
        height: u32,
    },
}
