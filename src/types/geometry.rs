use serde::Serialize;

use super::RegionId;

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `inset` on every side, or `None` if nothing would remain.
    pub fn inset(&self, inset: f64) -> Option<Rect> {
        let width = (self.width - inset * 2.0).max(0.0);
        let height = (self.height - inset * 2.0).max(0.0);
        if width > 0.0 && height > 0.0 {
            Some(Rect::new(self.x + inset, self.y + inset, width, height))
        } else {
            None
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// One visible rectangle: a merged region or a standalone cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Region this shape draws, `None` for a standalone cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionId>,
    /// Row of the top-left cell
    pub row: u32,
    /// Column of the top-left cell
    pub col: u32,
    pub row_span: u32,
    pub col_span: u32,
    pub rect: Rect,
    /// Safe-area guide, present when guides are enabled and the inset fits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<Rect>,
}

/// Sizes derived from the sizing config for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
    pub corner_radius: f64,
    pub base_cell_width: f64,
    pub base_cell_height: f64,
    /// Stroke width applied to shapes, 0 when outlines are off
    pub stroke_width: f64,
    /// Margin added around the exported document
    pub padding: f64,
    /// Outline width of safe-area guides
    pub guide_stroke_width: f64,
}

/// Complete geometry of a grid, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedLayout {
    pub metrics: LayoutMetrics,
    /// Regions in region-set order
    pub region_geometry: Vec<Shape>,
    /// Standalone cells in row-major order
    pub cell_geometry: Vec<Shape>,
}

impl RenderedLayout {
    /// Every visible shape: regions first, then standalone cells.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.region_geometry.iter().chain(self.cell_geometry.iter())
    }

    /// Guides in emission order; degenerate guides are already omitted.
    pub fn guides(&self) -> impl Iterator<Item = &Rect> {
        self.shapes().filter_map(|shape| shape.guide.as_ref())
    }

    pub fn shape_count(&self) -> usize {
        self.region_geometry.len() + self.cell_geometry.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_on_all_sides() {
        let guide = Rect::new(10.0, 20.0, 100.0, 50.0).inset(15.0).unwrap();
        assert_eq!(guide, Rect::new(25.0, 35.0, 70.0, 20.0));
    }

    #[test]
    fn inset_that_inverts_is_none() {
        assert!(Rect::new(0.0, 0.0, 30.0, 100.0).inset(15.0).is_none());
        assert!(Rect::new(0.0, 0.0, 100.0, 20.0).inset(15.0).is_none());
    }
}
