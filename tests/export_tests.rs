//! SVG export tests for bentogrid
//!
//! Verifies the document root, shape attributes, ordering, stroke padding
//! and the safe-area guide overlay group.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use bentogrid::layout::render;
use bentogrid::render::render_svg;
use bentogrid::{GridModel, RenderStyle, SizingConfig};
use common::{assert_close, attr, grid_with, guide_group, num_attr, region, rects, shape_rects};

fn export(model: &GridModel, sizing: &SizingConfig) -> String {
    render_svg(&render(model, sizing).unwrap(), &RenderStyle::default())
}

#[test]
fn test_default_grid_document() {
    let svg = export(&GridModel::new(2, 3).unwrap(), &SizingConfig::default());

    assert!(svg.starts_with(
        r#"<svg width="960" height="390" viewBox="0 0 960 390" fill="none" xmlns="http://www.w3.org/2000/svg">"#
    ));
    assert!(svg.ends_with("</svg>"));
    assert!(guide_group(&svg).is_none());

    let shapes = rects(&svg);
    assert_eq!(shapes.len(), 6);
    for rect in &shapes {
        assert_eq!(attr(rect, "fill"), "#daff06");
        assert_eq!(attr(rect, "stroke"), "none");
        assert_eq!(attr(rect, "stroke-width"), "0");
        assert_eq!(attr(rect, "rx"), "16");
        assert_eq!(attr(rect, "ry"), "16");
    }
}

#[test]
fn test_row_widths_sum_to_canvas() {
    let svg = export(&GridModel::new(2, 3).unwrap(), &SizingConfig::default());
    let shapes = rects(&svg);
    let gap = 2.0;

    for row in shapes.chunks(3) {
        let y = num_attr(&row[0], "y");
        assert!(row.iter().all(|r| num_attr(r, "y") == y));
        let total: f64 = row.iter().map(|r| num_attr(r, "width")).sum::<f64>() + 2.0 * gap;
        assert_close(total, 960.0);
    }
}

#[test]
fn test_regions_emitted_before_cells() {
    let model = grid_with(2, 3, vec![region("r1", (0, 1), (1, 2))]);
    let svg = export(&model, &SizingConfig::default());
    let shapes = rects(&svg);

    assert_eq!(shapes.len(), 3);
    assert_close(num_attr(&shapes[0], "height"), 390.0);
    assert_eq!(num_attr(&shapes[1], "x"), 0.0);
    assert_eq!(num_attr(&shapes[1], "y"), 0.0);
    assert_eq!(num_attr(&shapes[2], "x"), 0.0);
    assert!(num_attr(&shapes[2], "y") > 0.0);
}

#[test]
fn test_stroke_pads_document_bounds() {
    let sizing = SizingConfig {
        add_stroke: true,
        ..SizingConfig::default()
    };
    let svg = export(&GridModel::new(2, 3).unwrap(), &sizing);

    assert!(svg.starts_with(r#"<svg width="964" height="394" viewBox="0 0 964 394""#));
    let shapes = rects(&svg);
    let first = &shapes[0];
    assert_eq!(num_attr(first, "x"), 2.0);
    assert_eq!(num_attr(first, "y"), 2.0);
    assert_eq!(attr(first, "stroke"), "black");
    assert_eq!(attr(first, "stroke-width"), "1");

    // Rightmost edge stays inside the padded bounds
    let right = shapes
        .iter()
        .map(|r| num_attr(r, "x") + num_attr(r, "width"))
        .fold(0.0, f64::max);
    assert_close(right, 962.0);
}

#[test]
fn test_guides_in_overlay_group() {
    let sizing = SizingConfig {
        add_safe_area: true,
        ..SizingConfig::default()
    };
    let model = grid_with(2, 3, vec![region("r1", (0, 0), (1, 0))]);
    let svg = export(&model, &sizing);

    let group = guide_group(&svg).unwrap();
    assert!(group.contains(r#"pointer-events="none""#));
    let guides = rects(group);
    assert_eq!(guides.len(), 5);
    for guide in &guides {
        assert_eq!(attr(guide, "fill"), "none");
        assert_eq!(attr(guide, "stroke"), "#ff0000");
    }
    // First guide belongs to the region, inset by 15
    assert_eq!(num_attr(&guides[0], "x"), 15.0);
    assert_close(num_attr(&guides[0], "height"), 390.0 - 30.0);
    assert_eq!(shape_rects(&svg).len(), 5);
}

#[test]
fn test_guides_shift_with_stroke_padding() {
    let sizing = SizingConfig {
        add_safe_area: true,
        add_stroke: true,
        ..SizingConfig::default()
    };
    let svg = export(&GridModel::new(1, 1).unwrap(), &sizing);
    let guides = rects(guide_group(&svg).unwrap());
    assert_eq!(num_attr(&guides[0], "x"), 17.0);
    assert_eq!(num_attr(&guides[0], "y"), 17.0);
}

#[test]
fn test_no_group_when_every_guide_degenerate() {
    let sizing = SizingConfig {
        add_safe_area: true,
        ..SizingConfig::with_size(100, 100)
    };
    let svg = export(&GridModel::new(4, 4).unwrap(), &sizing);
    assert!(guide_group(&svg).is_none());
    assert!(!svg.contains("width=\"-"));
    assert_eq!(rects(&svg).len(), 16);
}

#[test]
fn test_custom_style_colors() {
    let style = RenderStyle {
        fill: "#123456".to_string(),
        stroke: "white".to_string(),
        guide_stroke: "#00f".to_string(),
    };
    let sizing = SizingConfig {
        add_stroke: true,
        add_safe_area: true,
        ..SizingConfig::default()
    };
    let layout = render(&GridModel::new(1, 1).unwrap(), &sizing).unwrap();
    let svg = render_svg(&layout, &style);
    assert!(svg.contains(r##"fill="#123456" stroke="white""##));
    assert!(svg.contains(r##"stroke="#00f""##));
}

#[test]
fn test_export_is_deterministic() {
    let model = grid_with(
        3,
        3,
        vec![region("b", (2, 0), (2, 2)), region("a", (0, 0), (1, 1))],
    );
    let sizing = SizingConfig::default();
    assert_eq!(export(&model, &sizing), export(&model, &sizing));
}

#[test]
fn test_guide_stroke_width_from_sizing() {
    let sizing = SizingConfig {
        add_safe_area: true,
        add_stroke: true,
        stroke_width: 3.0,
        guide_stroke_width: 0.5,
        ..SizingConfig::default()
    };
    let svg = export(&GridModel::new(1, 2).unwrap(), &sizing);

    for shape in shape_rects(&svg) {
        assert_eq!(num_attr(&shape, "stroke-width"), 3.0);
    }
    let guides = rects(guide_group(&svg).unwrap());
    assert_eq!(guides.len(), 2);
    for guide in &guides {
        assert_eq!(num_attr(guide, "stroke-width"), 0.5);
    }
}

#[test]
fn test_default_guide_stroke_width() {
    let sizing = SizingConfig {
        add_safe_area: true,
        ..SizingConfig::default()
    };
    let svg = export(&GridModel::new(1, 1).unwrap(), &sizing);
    let guides = rects(guide_group(&svg).unwrap());
    assert_eq!(attr(&guides[0], "stroke-width"), "1");
}
