//! Fit-to-viewport scaling for the on-screen preview.
//!
//! Geometry is resolution-independent; only the preview is scaled, like
//! `object-fit: contain`, never enlarged.

/// Share of the viewport width available to the preview.
pub const VIEWPORT_WIDTH_SHARE: f64 = 0.8;
/// Share of the viewport height available to the preview.
pub const VIEWPORT_HEIGHT_SHARE: f64 = 0.75;
/// Smallest scale ever applied.
pub const MIN_SCALE: f64 = 0.1;

/// Scale factor that fits a `grid_width` × `grid_height` canvas in the viewport.
pub fn responsive_scale(
    grid_width: f64,
    grid_height: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> f64 {
    if grid_width <= 0.0 || grid_height <= 0.0 {
        return 1.0;
    }
    let scale_x = viewport_width * VIEWPORT_WIDTH_SHARE / grid_width;
    let scale_y = viewport_height * VIEWPORT_HEIGHT_SHARE / grid_height;
    let scale = scale_x.min(scale_y).min(1.0);
    if scale.is_nan() {
        return 1.0;
    }
    scale.max(MIN_SCALE)
}
