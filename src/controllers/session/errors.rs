use thiserror::Error;

use crate::core::actions::render::{InvalidConfiguration, RenderError};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::errors::EscapeTimeError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Invalid(#[from] InvalidConfiguration),
    #[error("failed to parse render config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read render config: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by [`RenderSession`](super::RenderSession). Cancellation
/// is not among them; it is reported as an outcome.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] EscapeTimeError),
    #[error("colour map error: {0}")]
    ColourMap(#[source] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[source] PixelBufferError),
}

impl From<InvalidConfiguration> for SessionError {
    fn from(err: InvalidConfiguration) -> Self {
        Self::InvalidConfiguration(ConfigError::Invalid(err))
    }
}

impl SessionError {
    /// Maps a render failure onto the session's error kinds. Returns `None`
    /// for cancellation.
    pub(crate) fn from_render_error(err: RenderError) -> Option<Self> {
        match err {
            RenderError::Cancelled(_) => None,
            RenderError::InvalidConfiguration(e) => Some(e.into()),
            RenderError::Algorithm(e) => Some(Self::Algorithm(e)),
            RenderError::ColourMap(e) => Some(Self::ColourMap(e)),
            RenderError::PixelBuffer(e) => Some(Self::PixelBuffer(e)),
        }
    }
}
