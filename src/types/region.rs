use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CellPos, CellRange};

/// Stable identifier of a merged region.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RegionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A filled rectangle of merged cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: RegionId,
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl Region {
    pub fn new(id: impl Into<RegionId>, range: CellRange) -> Self {
        Self {
            id: id.into(),
            start_row: range.start_row,
            start_col: range.start_col,
            end_row: range.end_row,
            end_col: range.end_col,
        }
    }

    pub fn range(&self) -> CellRange {
        CellRange {
            start_row: self.start_row,
            start_col: self.start_col,
            end_row: self.end_row,
            end_col: self.end_col,
        }
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        self.range().contains(cell)
    }

    pub fn row_span(&self) -> u32 {
        self.range().row_span()
    }

    pub fn col_span(&self) -> u32 {
        self.range().col_span()
    }
}
