//! Pre-computed track layout for a grid.
//!
//! Every column has the same base width and every row the same base height,
//! so positions are closed-form: `index * (base + gap)`.

use crate::error::{GridError, Result};
use crate::model::GridModel;
use crate::types::{CellRange, LayoutMetrics, Rect, RenderedLayout, Shape, SizingConfig};

/// Track sizes for one grid under one sizing config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub gap: f64,
    pub corner_radius: f64,
    /// Width of a single column
    pub base_width: f64,
    /// Height of a single row
    pub base_height: f64,
}

impl GridLayout {
    /// Derive track sizes for a `rows` × `cols` grid.
    ///
    /// # Errors
    /// `InvalidDimensions` for an empty grid or canvas, or when the gaps leave
    /// no room for the cells; `Config` for bad tiers.
    pub fn new(rows: u32, cols: u32, sizing: &SizingConfig) -> Result<Self> {
        sizing.validate()?;
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions(format!(
                "grid must have at least one row and column, got {rows}x{cols}"
            )));
        }
        let gap = sizing.gap();
        let base_width = track_size(sizing.width, cols, gap)?;
        let base_height = track_size(sizing.height, rows, gap)?;
        Ok(Self {
            rows,
            cols,
            gap,
            corner_radius: sizing.corner_radius(),
            base_width,
            base_height,
        })
    }

    /// Left edge of column `col`.
    pub fn col_x(&self, col: u32) -> f64 {
        f64::from(col) * (self.base_width + self.gap)
    }

    /// Top edge of row `row`.
    pub fn row_y(&self, row: u32) -> f64 {
        f64::from(row) * (self.base_height + self.gap)
    }

    /// Extent of `span` adjacent tracks of size `base`, including inner gaps.
    fn span_size(&self, base: f64, span: u32) -> f64 {
        let span = f64::from(span);
        span * base + (span - 1.0) * self.gap
    }

    /// Bounds of a range of cells in canvas coordinates.
    pub fn range_rect(&self, range: &CellRange) -> Rect {
        Rect::new(
            self.col_x(range.start_col),
            self.row_y(range.start_row),
            self.span_size(self.base_width, range.col_span()),
            self.span_size(self.base_height, range.row_span()),
        )
    }

    /// Find column at x position, `None` in a gap or outside the grid.
    pub fn col_at_x(&self, x: f64) -> Option<u32> {
        track_at(x, self.base_width, self.gap, self.cols)
    }

    /// Find row at y position, `None` in a gap or outside the grid.
    pub fn row_at_y(&self, y: f64) -> Option<u32> {
        track_at(y, self.base_height, self.gap, self.rows)
    }
}

/// Size of one of `count` tracks sharing `extent` pixels with `gap` between them.
fn track_size(extent: u32, count: u32, gap: f64) -> Result<f64> {
    let count_f = f64::from(count);
    let base = (f64::from(extent) - (count_f - 1.0) * gap) / count_f;
    if base > 0.0 {
        Ok(base)
    } else {
        Err(GridError::InvalidDimensions(format!(
            "{count} tracks with a {gap}px gap do not fit in {extent}px"
        )))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // bounded by `count`
fn track_at(pos: f64, base: f64, gap: f64, count: u32) -> Option<u32> {
    let pitch = base + gap;
    if !pos.is_finite() || pos < 0.0 || pitch <= 0.0 {
        return None;
    }
    let index = (pos / pitch).floor();
    if index >= f64::from(count) {
        return None;
    }
    if pos - index * pitch >= base {
        return None;
    }
    Some(index as u32)
}

fn shape(layout: &GridLayout, range: &CellRange, sizing: &SizingConfig) -> Shape {
    let rect = layout.range_rect(range);
    Shape {
        region: None,
        row: range.start_row,
        col: range.start_col,
        row_span: range.row_span(),
        col_span: range.col_span(),
        rect,
        guide: if sizing.add_safe_area {
            rect.inset(sizing.safe_area_inset)
        } else {
            None
        },
    }
}

/// Compute geometry for every visible rectangle of `model`.
///
/// Regions come out in region-set order, standalone cells in row-major order.
/// The result is in grid coordinates; export adds [`LayoutMetrics::padding`].
///
/// # Errors
/// Propagates sizing validation failures.
pub fn render(model: &GridModel, sizing: &SizingConfig) -> Result<RenderedLayout> {
    let layout = GridLayout::new(model.rows(), model.cols(), sizing)?;

    let region_geometry = model
        .regions()
        .iter()
        .map(|region| Shape {
            region: Some(region.id.clone()),
            ..shape(&layout, &region.range(), sizing)
        })
        .collect();

    let cell_geometry = model
        .standalone_cells()
        .map(|cell| shape(&layout, &CellRange::single(cell), sizing))
        .collect();

    Ok(RenderedLayout {
        metrics: LayoutMetrics {
            width: f64::from(sizing.width),
            height: f64::from(sizing.height),
            gap: layout.gap,
            corner_radius: layout.corner_radius,
            base_cell_width: layout.base_width,
            base_cell_height: layout.base_height,
            stroke_width: if sizing.add_stroke {
                sizing.stroke_width
            } else {
                0.0
            },
            padding: sizing.document_padding(),
            guide_stroke_width: sizing.guide_stroke_width,
        },
        region_geometry,
        cell_geometry,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::{CellPos, Region};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_basic_layout() {
        let layout = GridLayout::new(2, 3, &SizingConfig::default()).unwrap();
        assert_eq!(layout.gap, 2.0);
        assert_eq!(layout.corner_radius, 16.0);
        assert!(close(layout.base_width, (960.0 - 4.0) / 3.0));
        assert!(close(layout.base_height, (390.0 - 2.0) / 2.0));
    }

    #[test]
    fn test_single_track_has_no_gap_term() {
        let layout = GridLayout::new(1, 1, &SizingConfig::with_size(300, 200)).unwrap();
        assert_eq!(layout.base_width, 300.0);
        assert_eq!(layout.base_height, 200.0);
    }

    #[test]
    fn test_range_rect_spans_gaps() {
        let layout = GridLayout::new(2, 3, &SizingConfig::default()).unwrap();
        let rect = layout.range_rect(&CellRange::new(CellPos::new(0, 1), CellPos::new(1, 2)));
        assert!(close(rect.x, layout.base_width + 2.0));
        assert_eq!(rect.y, 0.0);
        assert!(close(rect.width, 2.0 * layout.base_width + 2.0));
        assert!(close(rect.height, 390.0));
        assert!(close(rect.right(), 960.0));
    }

    #[test]
    fn test_hit_testing() {
        let sizing = SizingConfig {
            gap_tiers: crate::types::TierTable::new(&[], 10.0),
            ..SizingConfig::with_size(320, 100)
        };
        // base width (320 - 20) / 3 = 100
        let layout = GridLayout::new(1, 3, &sizing).unwrap();
        assert_eq!(layout.col_at_x(0.0), Some(0));
        assert_eq!(layout.col_at_x(99.0), Some(0));
        assert_eq!(layout.col_at_x(105.0), None);
        assert_eq!(layout.col_at_x(110.0), Some(1));
        assert_eq!(layout.col_at_x(319.0), Some(2));
        assert_eq!(layout.col_at_x(330.0), None);
        assert_eq!(layout.row_at_y(-1.0), None);
    }

    #[test]
    fn test_render_orders_regions_then_cells() {
        let mut model = GridModel::new(2, 3).unwrap();
        model.replace_regions(vec![Region::new(
            "r1",
            CellRange::new(CellPos::new(0, 1), CellPos::new(1, 1)),
        )]);
        let out = render(&model, &SizingConfig::default()).unwrap();
        assert_eq!(out.region_geometry.len(), 1);
        assert_eq!(out.region_geometry[0].region.as_ref().unwrap().as_str(), "r1");
        let cells: Vec<_> = out.cell_geometry.iter().map(|s| (s.row, s.col)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 2), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_gaps_wider_than_canvas_rejected() {
        // 19 gaps of 1px on a 10px canvas
        let err = GridLayout::new(1, 20, &SizingConfig::with_size(10, 10)).unwrap_err();
        assert!(err.is_invalid_dimensions());
        // Exactly filled by gaps is still too small
        assert!(GridLayout::new(1, 11, &SizingConfig::with_size(10, 10)).is_err());
    }

    #[test]
    fn test_render_rejects_empty_canvas() {
        let model = GridModel::new(2, 2).unwrap();
        assert!(render(&model, &SizingConfig::with_size(0, 10)).is_err());
    }
}
