//! Vector document output.
//!
//! This module provides:
//! - SVG serialization of a [`RenderedLayout`](crate::types::RenderedLayout)
//! - Color parsing utilities used to validate render styles

pub mod colors;
pub mod svg;

pub use colors::{palette, Rgb};
pub use svg::{render_svg, SvgWriter};
