use std::collections::BTreeSet;

use super::{CellPos, CellRange};

/// Cells the user is currently interacting with, ordered by row then column.
///
/// Cleared after every merge attempt and whenever the grid is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: BTreeSet<CellPos>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        self.cells.contains(&cell)
    }

    /// Add or remove `cell`. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, cell: CellPos) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    pub fn insert(&mut self, cell: CellPos) -> bool {
        self.cells.insert(cell)
    }

    /// Replace the selection with every cell of `range`.
    pub fn select_range(&mut self, range: &CellRange) {
        self.cells.clear();
        self.cells.extend(range.cells());
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellPos> {
        self.cells.iter()
    }

    /// Bounding rectangle of the selected cells.
    pub fn bounds(&self) -> Option<CellRange> {
        CellRange::bounding(&self.cells)
    }

    /// True if the selection is exactly the cells of `range`.
    pub fn equals_range(&self, range: &CellRange) -> bool {
        u64::try_from(self.cells.len()).is_ok_and(|n| n == range.cell_count())
            && self.cells.iter().all(|cell| range.contains(*cell))
    }

    /// True if the selected cells already fill their bounding rectangle.
    pub fn is_rectangular(&self) -> bool {
        self.bounds().is_some_and(|range| self.equals_range(&range))
    }

    pub fn to_vec(&self) -> Vec<CellPos> {
        self.cells.iter().copied().collect()
    }
}

impl FromIterator<CellPos> for Selection {
    fn from_iter<I: IntoIterator<Item = CellPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
