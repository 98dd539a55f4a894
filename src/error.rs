//! Structured error types for bentogrid.
//!
//! Every error here is recoverable: callers surface it to the user and wait
//! for the next interaction.

/// Why a merge request was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The selection spans several regions, or only part of one.
    #[error(
        "Invalid merge. You can only merge contiguous unmerged boxes or expand an existing merged area into a rectangle."
    )]
    Conflicting,

    /// A click or selection referenced a cell outside the grid.
    #[error("Cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: u32, col: u32 },

    /// Fewer than two cells were selected.
    #[error("A merge needs at least two selected cells")]
    InsufficientSelection,
}

/// All errors that can occur while editing or exporting a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Rows, columns, width or height were not positive integers.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A merge request was rejected.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// The export sink (clipboard, file) refused the document.
    #[error("Export failed: {0}")]
    Export(String),

    /// Invalid cell reference.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// Malformed configuration.
    #[error("Configuration: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    /// True for errors that should replace the grid with a placeholder.
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(self, Self::InvalidDimensions(_))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
