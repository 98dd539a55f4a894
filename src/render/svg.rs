//! SVG serialization.
//!
//! Output is deterministic: regions in region-set order, then standalone cells
//! row-major, then (optionally) the safe-area guide group in the same order.

use std::fmt::{self, Write as _};

use crate::types::{Rect, RenderStyle, RenderedLayout};

use super::colors::palette;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Number formatted for an SVG attribute.
///
/// Shortest round-trip form; negative zero, sub-nanometre noise and
/// non-finite values print as `0`.
#[derive(Debug, Clone, Copy)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if !v.is_finite() || v.abs() < 1e-9 {
            return f.write_str("0");
        }
        write!(f, "{v}")
    }
}

/// Incremental SVG document builder.
pub struct SvgWriter {
    out: String,
}

impl SvgWriter {
    /// Open the root element with explicit size and a matching view box.
    pub fn new(width: f64, height: f64) -> Self {
        let mut out = String::with_capacity(256);
        let _ = write!(
            out,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="{SVG_NS}">"#,
            w = Num(width),
            h = Num(height),
        );
        Self { out }
    }

    /// A filled, rounded shape.
    pub fn shape(&mut self, rect: &Rect, radius: f64, fill: &str, stroke: &str, stroke_width: f64) {
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{fill}" stroke="{stroke}" stroke-width="{}"/>"#,
            Num(rect.x),
            Num(rect.y),
            Num(rect.width),
            Num(rect.height),
            Num(stroke_width),
            r = Num(radius),
        );
    }

    /// An unfilled outline, used for guides.
    pub fn outline(&mut self, rect: &Rect, stroke: &str, stroke_width: f64) {
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{stroke}" stroke-width="{}"/>"#,
            Num(rect.x),
            Num(rect.y),
            Num(rect.width),
            Num(rect.height),
            Num(stroke_width),
        );
    }

    pub fn open_group(&mut self, id: &str) {
        let _ = write!(self.out, r#"<g id="{id}" pointer-events="none">"#);
    }

    pub fn close_group(&mut self) {
        self.out.push_str("</g>");
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

/// Serialize a layout into a self-contained SVG document.
///
/// With outlines enabled the document grows by `metrics.padding` on every
/// side and all shapes shift inward, so strokes are never clipped.
pub fn render_svg(layout: &RenderedLayout, style: &RenderStyle) -> String {
    let metrics = &layout.metrics;
    let pad = metrics.padding;
    let mut svg = SvgWriter::new(metrics.width + pad * 2.0, metrics.height + pad * 2.0);

    let stroke = if metrics.stroke_width > 0.0 {
        style.stroke.as_str()
    } else {
        palette::NONE
    };
    for shape in layout.shapes() {
        svg.shape(
            &shape.rect.translate(pad, pad),
            metrics.corner_radius,
            &style.fill,
            stroke,
            metrics.stroke_width,
        );
    }

    let mut guides = layout.guides().peekable();
    if guides.peek().is_some() {
        svg.open_group("safe-area-overlay");
        for guide in guides {
            svg.outline(
                &guide.translate(pad, pad),
                &style.guide_stroke,
                metrics.guide_stroke_width,
            );
        }
        svg.close_group();
    }

    svg.finish()
}
