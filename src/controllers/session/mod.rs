//! Session layer between a front end and the render core.
//!
//! A [`RenderSession`] owns the most recent finished image and the
//! cancellation state for the render in flight. Front ends hand it validated
//! [`RenderConfig`] values, usually loaded from JSON.

pub mod errors;
pub mod render_config;
mod render_session;

pub use errors::{ConfigError, SessionError};
pub use render_config::RenderConfig;
pub use render_session::{RenderOutcome, RenderSession};
