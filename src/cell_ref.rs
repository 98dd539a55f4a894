//! Utilities for spreadsheet-style cell references ("B3", "A1:C2").
//!
//! Grid cells are 0-indexed internally; references are 1-based rows with
//! lettered columns.

use crate::error::{GridError, Result};
use crate::types::{CellPos, CellRange};

/// Parse a cell reference like "A1" into a 0-indexed position.
pub fn parse_cell_ref(cell_ref: &str) -> Option<CellPos> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            // Letters after digits ("1A") are not a reference
            if saw_row {
                return None;
            }
            let upper = ch.to_ascii_uppercase();
            col = col
                .checked_mul(26)?
                .checked_add(upper as u32 - 'A' as u32 + 1)?;
            saw_col = true;
        } else if ch.is_ascii_digit() {
            row = row.checked_mul(10)?.checked_add(ch as u32 - '0' as u32)?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some(CellPos::new(row - 1, col - 1))
}

/// Parse a range like "A1:B10" (or a single "A1") into a normalized range.
pub fn parse_cell_range(range: &str) -> Option<CellRange> {
    if let Some((start, end)) = range.split_once(':') {
        let start = parse_cell_ref(start)?;
        let end = parse_cell_ref(end)?;
        Some(CellRange::new(start, end))
    } else {
        parse_cell_ref(range).map(CellRange::single)
    }
}

/// Like [`parse_cell_range`], but with an error naming the bad input.
///
/// # Errors
/// Returns `GridError::CellRef` if the text is not a reference or range.
pub fn require_cell_range(range: &str) -> Result<CellRange> {
    parse_cell_range(range).ok_or_else(|| GridError::CellRef(range.to_string()))
}

/// Convert a 0-based column index to letters (A, B, ..., Z, AA, AB, ...)
#[allow(clippy::cast_possible_truncation)] // n % 26 < 26
pub fn col_to_letter(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(col) + 1; // Convert to 1-based
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}
