//! Layout engine: turns a [`GridModel`](crate::model::GridModel) and a
//! [`SizingConfig`](crate::types::SizingConfig) into pixel geometry.
//!
//! This module handles:
//! - Deriving gap, corner radius and base cell size from the canvas
//! - Positioning standalone cells and merged regions
//! - Safe-area guide insets, with degenerate guides dropped

mod grid_layout;

pub use grid_layout::{render, GridLayout};
