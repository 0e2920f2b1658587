//! Turns escape scalars into colours.
//!
//! Themes come in two flavours: procedural themes computed from the
//! iteration count or normalized index, and indexed themes that interpolate
//! through a fixed palette.

pub mod colour_spec;
pub mod errors;
pub mod hsv;
pub mod kinds;
pub mod normalize;
pub mod palettes;
pub mod procedural;
pub mod theme_colour_map;
