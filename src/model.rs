//! Grid state: which cells stand alone and which belong to a merged region.
//!
//! The model keeps a dense row-major array of [`CellState`] alongside the
//! region list. The list is the source of truth; the dense array is rebuilt on
//! every [`GridModel::replace_regions`] call.

use crate::error::{GridError, Result};
use crate::types::{CellPos, CellRange, CellState, Region, RegionId};

/// Largest number of cells a grid may have.
pub const MAX_CELLS: u64 = 1 << 20;

/// Rows × columns grid plus its set of merged regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    rows: u32,
    cols: u32,
    /// Row-major occupancy, `rows * cols` entries
    cells: Vec<CellState>,
    /// Regions in insertion order
    regions: Vec<Region>,
}

impl GridModel {
    /// Create a grid where every cell is standalone.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either dimension is zero or the grid has
    /// more than [`MAX_CELLS`] cells.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions(format!(
                "grid must have at least one row and column, got {rows}x{cols}"
            )));
        }
        let count = u64::from(rows) * u64::from(cols);
        let len = usize::try_from(count)
            .ok()
            .filter(|_| count <= MAX_CELLS)
            .ok_or_else(|| {
                GridError::InvalidDimensions(format!(
                    "{rows}x{cols} grid exceeds the {MAX_CELLS} cell limit"
                ))
            })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Standalone; len],
            regions: Vec::new(),
        })
    }

    /// Create a grid from raw numeric input (form fields, JS numbers).
    ///
    /// # Errors
    /// Returns `InvalidDimensions` for non-finite, fractional or non-positive values.
    pub fn from_inputs(rows: f64, cols: f64) -> Result<Self> {
        Self::new(
            positive_integer(rows, "rows")?,
            positive_integer(cols, "columns")?,
        )
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn in_bounds(&self, cell: CellPos) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The whole grid as a range.
    pub fn extent(&self) -> CellRange {
        CellRange {
            start_row: 0,
            start_col: 0,
            end_row: self.rows - 1,
            end_col: self.cols - 1,
        }
    }

    fn index(&self, cell: CellPos) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Occupancy of a cell, `None` outside the grid.
    pub fn cell_state(&self, cell: CellPos) -> Option<&CellState> {
        self.index(cell).and_then(|idx| self.cells.get(idx))
    }

    /// Region containing the cell, or `None` if it is standalone.
    pub fn region_at(&self, row: u32, col: u32) -> Option<&Region> {
        let cell = CellPos::new(row, col);
        self.regions.iter().find(|region| region.contains(cell))
    }

    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.regions.iter().find(|region| &region.id == id)
    }

    /// Every cell covered by `region`, row-major.
    pub fn cells_of(region: &Region) -> Vec<CellPos> {
        region.range().cells().collect()
    }

    /// Standalone cells in row-major order.
    pub fn standalone_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.extent()
            .cells()
            .filter(|cell| self.cell_state(*cell).is_some_and(CellState::is_standalone))
    }

    /// Swap in a new region set.
    ///
    /// The caller keeps regions disjoint and in bounds; see [`Self::is_consistent`].
    /// Cells of out-of-bounds regions are ignored when rebuilding occupancy.
    pub fn replace_regions(&mut self, regions: Vec<Region>) {
        self.cells.fill(CellState::Standalone);
        for region in &regions {
            for cell in region.range().cells() {
                if let Some(state) = self.index(cell).and_then(|idx| self.cells.get_mut(idx)) {
                    *state = CellState::MemberOf(region.id.clone());
                }
            }
        }
        self.regions = regions;
    }

    /// True if regions are pairwise disjoint, in bounds and uniquely named.
    pub fn is_consistent(&self) -> bool {
        let extent = self.extent();
        self.regions.iter().enumerate().all(|(i, region)| {
            let range = region.range();
            region.start_row <= region.end_row
                && region.start_col <= region.end_col
                && extent.contains_range(&range)
                && self.regions.iter().skip(i + 1).all(|other| {
                    other.id != region.id && !other.range().intersects(&range)
                })
        })
    }
}

/// Validate a numeric input as a positive integer.
///
/// # Errors
/// Returns `InvalidDimensions` naming `field` when the value is unusable.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range-checked above
pub fn positive_integer(value: f64, field: &str) -> Result<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX) {
        return Err(GridError::InvalidDimensions(format!(
            "{field} must be a positive integer, got {value}"
        )));
    }
    Ok(value as u32)
}
