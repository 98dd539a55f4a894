//! Data types shared by the model, the merge resolver and the renderer.

mod cell;
mod config;
mod geometry;
mod region;
mod selection;

pub use cell::*;
pub use config::*;
pub use geometry::*;
pub use region::*;
pub use selection::*;
