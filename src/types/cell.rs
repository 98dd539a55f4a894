use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell_ref::col_to_letter;

/// A logical grid cell, 0-indexed.
///
/// Ordering is by row, then column, which is the order selections are kept in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: u32,
    pub col: u32,
}

impl CellPos {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for CellPos {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Spreadsheet-style label ("A1" for row 0, col 0), used in logs and notices.
impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_to_letter(self.col), u64::from(self.row) + 1)
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "region", rename_all = "camelCase")]
pub enum CellState {
    /// Drawn as its own rectangle.
    #[default]
    Standalone,
    /// Covered by the region with this id.
    MemberOf(super::RegionId),
}

impl CellState {
    pub fn is_standalone(&self) -> bool {
        matches!(self, Self::Standalone)
    }

    pub fn region_id(&self) -> Option<&super::RegionId> {
        match self {
            Self::Standalone => None,
            Self::MemberOf(id) => Some(id),
        }
    }
}

/// An inclusive, normalized rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl CellRange {
    /// Build a range from two corners in any order.
    pub fn new(a: CellPos, b: CellPos) -> Self {
        Self {
            start_row: a.row.min(b.row),
            start_col: a.col.min(b.col),
            end_row: a.row.max(b.row),
            end_col: a.col.max(b.col),
        }
    }

    pub fn single(cell: CellPos) -> Self {
        Self::new(cell, cell)
    }

    /// Minimal rectangle containing every cell, or `None` for an empty set.
    pub fn bounding<'a>(cells: impl IntoIterator<Item = &'a CellPos>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::single(first), |acc, cell| acc.including(*cell)))
    }

    /// Grow the range to include `cell`.
    pub fn including(self, cell: CellPos) -> Self {
        Self {
            start_row: self.start_row.min(cell.row),
            start_col: self.start_col.min(cell.col),
            end_row: self.end_row.max(cell.row),
            end_col: self.end_col.max(cell.col),
        }
    }

    pub fn row_span(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    pub fn col_span(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_span()) * u64::from(self.col_span())
    }

    pub fn origin(&self) -> CellPos {
        CellPos::new(self.start_row, self.start_col)
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        cell.row >= self.start_row
            && cell.row <= self.end_row
            && cell.col >= self.start_col
            && cell.col <= self.end_col
    }

    pub fn contains_range(&self, other: &CellRange) -> bool {
        other.start_row >= self.start_row
            && other.end_row <= self.end_row
            && other.start_col >= self.start_col
            && other.end_col <= self.end_col
    }

    pub fn intersects(&self, other: &CellRange) -> bool {
        self.start_row <= other.end_row
            && other.start_row <= self.end_row
            && self.start_col <= other.end_col
            && other.start_col <= self.end_col
    }

    /// Every cell of the range in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> {
        let (start_col, end_col) = (self.start_col, self.end_col);
        (self.start_row..=self.end_row)
            .flat_map(move |row| (start_col..=end_col).map(move |col| CellPos::new(row, col)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = CellPos::new(self.start_row, self.start_col);
        let end = CellPos::new(self.end_row, self.end_col);
        if start == end {
            write!(f, "{start}")
        } else {
            write!(f, "{start}:{end}")
        }
    }
}
