//! bentogrid - bento grid layout builder
//!
//! Lay out a rows × columns grid, merge adjacent cells into rectangular
//! regions, and export the result as SVG:
//! - Click protocol with automatic completion of partial selections
//! - Region expansion that keeps region ids stable
//! - Tiered gap and corner radius derived from the canvas size
//! - Optional outlines and inset safe-area guides
//!
//! # Usage (Rust)
//!
//! ```
//! use bentogrid::viewer::Session;
//!
//! let mut session = Session::default();
//! session.on_cell_click(0, 0).unwrap();
//! session.on_cell_click(1, 1).unwrap();
//! let svg = session.on_export_requested().unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { BentoGrid, init_logging } from 'bentogrid';
//! await init();
//! init_logging('info');
//! const grid = new BentoGrid(true);
//! grid.on_cell_click(0, 0);
//! await grid.copy_svg();
//! ```

pub mod cell_ref;
pub mod error;
pub mod export;
pub mod layout;
pub mod merge;
pub mod model;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridError, MergeError, Result};
pub use merge::{ClickOutcome, MergeOptions, MergeResolver};
pub use model::GridModel;
pub use viewer::Session;
#[cfg(target_arch = "wasm32")]
pub use viewer::BentoGrid;

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
