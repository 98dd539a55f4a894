//! Common test utilities and assertion helpers.
//!
//! Builders for grids with pre-placed regions, click helpers, and small
//! SVG inspection functions used across the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use bentogrid::{CellPos, CellRange, ClickOutcome, GridModel, Region, Selection, Session};

/// Tolerance for floating-point geometry comparisons.
pub const EPS: f64 = 1e-6;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

pub fn range(a: (u32, u32), b: (u32, u32)) -> CellRange {
    CellRange::new(a.into(), b.into())
}

pub fn region(id: &str, a: (u32, u32), b: (u32, u32)) -> Region {
    Region::new(id, range(a, b))
}

/// A grid with the given regions already in place.
pub fn grid_with(rows: u32, cols: u32, regions: Vec<Region>) -> GridModel {
    let mut model = GridModel::new(rows, cols).unwrap();
    model.replace_regions(regions);
    assert!(model.is_consistent(), "fixture regions overlap");
    model
}

pub fn selection(cells: &[(u32, u32)]) -> Selection {
    cells.iter().map(|&c| CellPos::from(c)).collect()
}

/// Click each cell in order, returning every outcome (errors included).
pub fn click_all(
    session: &mut Session,
    cells: &[(u32, u32)],
) -> Vec<bentogrid::Result<ClickOutcome>> {
    cells
        .iter()
        .map(|&(row, col)| session.on_cell_click(row, col))
        .collect()
}

/// Bounds of every region in the session's grid, sorted.
pub fn region_bounds(session: &Session) -> Vec<CellRange> {
    let mut bounds: Vec<_> = session
        .model()
        .unwrap()
        .regions()
        .iter()
        .map(Region::range)
        .collect();
    bounds.sort_by_key(|r| (r.start_row, r.start_col));
    bounds
}

/// Attribute maps of every `<rect>` in document order.
pub fn rects(svg: &str) -> Vec<Vec<(String, String)>> {
    svg.split("<rect ")
        .skip(1)
        .map(|chunk| {
            let body = chunk.split("/>").next().unwrap();
            body.split("\" ")
                .filter_map(|pair| {
                    let (key, value) = pair.split_once("=\"")?;
                    Some((key.trim().to_string(), value.trim_end_matches('"').to_string()))
                })
                .collect()
        })
        .collect()
}

pub fn attr(rect: &[(String, String)], name: &str) -> String {
    rect.iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_else(|| panic!("rect has no {name} attribute: {rect:?}"))
}

pub fn num_attr(rect: &[(String, String)], name: &str) -> f64 {
    attr(rect, name).parse().unwrap()
}

/// The part of the document inside the safe-area group, if present.
pub fn guide_group(svg: &str) -> Option<&str> {
    let start = svg.find("<g id=\"safe-area-overlay\"")?;
    let end = svg[start..].find("</g>")? + start;
    Some(&svg[start..end])
}

/// Rects outside the guide group.
pub fn shape_rects(svg: &str) -> Vec<Vec<(String, String)>> {
    let shapes = match svg.find("<g id=\"safe-area-overlay\"") {
        Some(idx) => &svg[..idx],
        None => svg,
    };
    rects(shapes)
}
