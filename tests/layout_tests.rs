//! Layout feature tests for bentogrid
//!
//! Tests for derived gap and corner radius, base cell sizes, region spans,
//! safe-area guide clamping and the stroke padding applied on export.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use bentogrid::layout::{render, GridLayout};
use bentogrid::{GridModel, SizingConfig, TierTable};
use common::{assert_close, grid_with, region};
use test_case::test_case;

// ============================================================================
// BASE SIZES
// ============================================================================

#[test]
fn test_default_grid_fills_canvas_width() {
    let model = GridModel::new(2, 3).unwrap();
    let layout = render(&model, &SizingConfig::default()).unwrap();

    assert_eq!(layout.shape_count(), 6);
    assert!(layout.region_geometry.is_empty());
    let gap = layout.metrics.gap;
    assert_eq!(gap, 2.0);

    for row in 0..2 {
        let shapes: Vec<_> = layout
            .cell_geometry
            .iter()
            .filter(|s| s.row == row)
            .collect();
        assert_eq!(shapes.len(), 3);
        let total: f64 = shapes.iter().map(|s| s.rect.width).sum::<f64>() + 2.0 * gap;
        assert_close(total, 960.0);
        assert_close(shapes[2].rect.right(), 960.0);
    }
}

#[test_case(1, 1)]
#[test_case(1, 7)]
#[test_case(5, 1)]
#[test_case(13, 17)]
fn test_tracks_fill_canvas_for_any_shape(rows: u32, cols: u32) {
    let sizing = SizingConfig::with_size(800, 600);
    let model = GridModel::new(rows, cols).unwrap();
    let layout = render(&model, &sizing).unwrap();
    let last = layout.cell_geometry.last().unwrap();

    assert_eq!(layout.cell_geometry.len(), (rows * cols) as usize);
    assert_close(last.rect.right(), 800.0);
    assert_close(last.rect.bottom(), 600.0);
    assert!(layout.metrics.base_cell_width.is_finite());
}

#[test]
fn test_remove_gap_makes_cells_touch() {
    let sizing = SizingConfig {
        remove_gap: true,
        ..SizingConfig::with_size(900, 300)
    };
    let layout = render(&GridModel::new(1, 3).unwrap(), &sizing).unwrap();
    assert_eq!(layout.metrics.gap, 0.0);
    assert_close(layout.cell_geometry[0].rect.right(), layout.cell_geometry[1].rect.x);
    assert_close(layout.metrics.base_cell_width, 300.0);
}

#[test]
fn test_corner_radius_follows_shortest_side() {
    let small = render(&GridModel::new(1, 1).unwrap(), &SizingConfig::with_size(1000, 200)).unwrap();
    let large = render(&GridModel::new(1, 1).unwrap(), &SizingConfig::with_size(1000, 900)).unwrap();
    assert_eq!(small.metrics.corner_radius, 8.0);
    assert_eq!(large.metrics.corner_radius, 20.0);
    assert_eq!(large.metrics.gap, 6.0);
}

#[test]
fn test_custom_tier_edges() {
    let sizing = SizingConfig {
        corner_radius_tiers: TierTable::new(&[(1000.0, 3.0)], 40.0),
        ..SizingConfig::with_size(960, 390)
    };
    let layout = render(&GridModel::new(2, 3).unwrap(), &sizing).unwrap();
    assert_eq!(layout.metrics.corner_radius, 3.0);
}

// ============================================================================
// REGIONS
// ============================================================================

#[test]
fn test_region_spans_tracks_and_gaps() {
    let model = grid_with(2, 3, vec![region("r1", (0, 1), (1, 2))]);
    let layout = render(&model, &SizingConfig::default()).unwrap();
    let grid = GridLayout::new(2, 3, &SizingConfig::default()).unwrap();

    assert_eq!(layout.region_geometry.len(), 1);
    assert_eq!(layout.cell_geometry.len(), 2);
    let shape = &layout.region_geometry[0];
    assert_eq!((shape.row_span, shape.col_span), (2, 2));
    assert_close(shape.rect.x, grid.base_width + grid.gap);
    assert_close(shape.rect.width, 2.0 * grid.base_width + grid.gap);
    assert_close(shape.rect.height, 390.0);
}

#[test]
fn test_every_cell_drawn_once() {
    let model = grid_with(
        3,
        3,
        vec![region("a", (0, 0), (1, 1)), region("b", (2, 0), (2, 2))],
    );
    let layout = render(&model, &SizingConfig::default()).unwrap();
    let covered: u32 = layout.shapes().map(|s| s.row_span * s.col_span).sum();
    assert_eq!(covered, 9);
    assert_eq!(layout.shape_count(), 4);
}

// ============================================================================
// SAFE-AREA GUIDES
// ============================================================================

#[test]
fn test_guides_absent_unless_enabled() {
    let layout = render(&GridModel::new(2, 3).unwrap(), &SizingConfig::default()).unwrap();
    assert_eq!(layout.guides().count(), 0);
}

#[test]
fn test_guides_inset_each_shape() {
    let sizing = SizingConfig {
        add_safe_area: true,
        ..SizingConfig::default()
    };
    let model = grid_with(2, 3, vec![region("r1", (0, 0), (1, 0))]);
    let layout = render(&model, &sizing).unwrap();

    assert_eq!(layout.guides().count(), 5);
    for shape in layout.shapes() {
        let guide = shape.guide.unwrap();
        assert_close(guide.x, shape.rect.x + 15.0);
        assert_close(guide.y, shape.rect.y + 15.0);
        assert_close(guide.width, shape.rect.width - 30.0);
        assert_close(guide.height, shape.rect.height - 30.0);
    }
}

#[test]
fn test_degenerate_guides_omitted() {
    // 10 columns on 200px: cells are ~19px wide, narrower than 2 * 15
    let sizing = SizingConfig {
        add_safe_area: true,
        ..SizingConfig::with_size(200, 400)
    };
    let model = grid_with(1, 10, vec![region("wide", (0, 0), (0, 4))]);
    let layout = render(&model, &sizing).unwrap();

    assert!(layout.cell_geometry.iter().all(|s| s.guide.is_none()));
    let wide = layout.region_geometry[0].guide.unwrap();
    assert!(wide.width > 0.0 && wide.height > 0.0);
    assert_eq!(layout.guides().count(), 1);
}

#[test]
fn test_exact_inset_is_omitted() {
    let sizing = SizingConfig {
        add_safe_area: true,
        remove_gap: true,
        ..SizingConfig::with_size(30, 100)
    };
    let layout = render(&GridModel::new(1, 1).unwrap(), &sizing).unwrap();
    assert!(layout.cell_geometry[0].guide.is_none());
}

// ============================================================================
// STROKE
// ============================================================================

#[test]
fn test_stroke_sets_padding_and_width() {
    let plain = render(&GridModel::new(1, 1).unwrap(), &SizingConfig::default()).unwrap();
    assert_eq!(plain.metrics.padding, 0.0);
    assert_eq!(plain.metrics.stroke_width, 0.0);

    let sizing = SizingConfig {
        add_stroke: true,
        ..SizingConfig::default()
    };
    let stroked = render(&GridModel::new(1, 1).unwrap(), &sizing).unwrap();
    assert_eq!(stroked.metrics.padding, 2.0);
    assert_eq!(stroked.metrics.stroke_width, 1.0);
    // Geometry itself is unshifted; export applies the padding
    assert_eq!(stroked.cell_geometry[0].rect.x, 0.0);
}

#[test]
fn test_layout_serializes_camel_case() {
    let model = grid_with(1, 2, vec![region("r1", (0, 0), (0, 1))]);
    let layout = render(&model, &SizingConfig::default()).unwrap();
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["regionGeometry"][0]["region"], "r1");
    assert_eq!(json["regionGeometry"][0]["colSpan"], 2);
    assert!(json["metrics"]["baseCellWidth"].is_number());
    assert!(json["cellGeometry"].as_array().unwrap().is_empty());
}

// ============================================================================
// CROWDED CANVAS
// ============================================================================

#[test]
fn test_gaps_exceeding_canvas_rejected() {
    let model = GridModel::new(1, 20).unwrap();
    let err = render(&model, &SizingConfig::with_size(10, 10)).unwrap_err();
    assert!(err.is_invalid_dimensions());
}

#[test]
fn test_removing_gap_makes_crowded_grid_fit() {
    let model = GridModel::new(1, 20).unwrap();
    let sizing = SizingConfig {
        remove_gap: true,
        ..SizingConfig::with_size(10, 10)
    };
    let layout = render(&model, &sizing).unwrap();
    for shape in layout.shapes() {
        assert!(shape.rect.width > 0.0 && shape.rect.height > 0.0);
    }
    assert_close(layout.metrics.base_cell_width, 0.5);
}
