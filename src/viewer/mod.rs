//! Interactive editing session.
//!
//! `Session` owns the one `GridModel`/`Selection` pair and exposes the
//! interaction surface a UI drives: cell clicks, dimension changes, sizing
//! changes, reset and export. Every call runs a complete state transition.
//!
//! On wasm32, [`BentoGrid`] wraps a session for JavaScript and adds the
//! clipboard export.

#[cfg(target_arch = "wasm32")]
mod clipboard;
mod scale;
#[cfg(target_arch = "wasm32")]
mod web;

pub use scale::{responsive_scale, MIN_SCALE, VIEWPORT_HEIGHT_SHARE, VIEWPORT_WIDTH_SHARE};
#[cfg(target_arch = "wasm32")]
pub use web::{init_logging, BentoGrid};

use log::{debug, info, warn};

use crate::error::{GridError, Result};
use crate::layout::{self, GridLayout};
use crate::merge::{ClickOutcome, MergeOptions, MergeResolver};
use crate::model::{positive_integer, GridModel};
use crate::render::render_svg;
use crate::types::{
    CellPos, CellRange, Region, RenderStyle, RenderedLayout, Selection, SizingConfig,
    DEFAULT_COLS, DEFAULT_ROWS,
};

/// Shown in place of the grid while the dimensions are invalid.
pub const PLACEHOLDER: &str = "Please enter valid numbers.";

/// Editing state for one grid.
#[derive(Debug, Clone)]
pub struct Session {
    /// `None` while the last requested dimensions were invalid
    model: Option<GridModel>,
    selection: Selection,
    resolver: MergeResolver,
    sizing: SizingConfig,
    style: RenderStyle,
    needs_render: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}

impl Session {
    /// Start with the default 2×3 grid on a 960×390 canvas.
    pub fn new(options: MergeOptions) -> Self {
        Self {
            model: GridModel::new(DEFAULT_ROWS, DEFAULT_COLS).ok(),
            selection: Selection::new(),
            resolver: MergeResolver::new(options),
            sizing: SizingConfig::default(),
            style: RenderStyle::default(),
            needs_render: true,
        }
    }

    /// Start from explicit dimensions and sizing.
    ///
    /// # Errors
    /// `InvalidDimensions` or `Config` if the inputs cannot be rendered.
    pub fn with_config(
        rows: u32,
        cols: u32,
        sizing: SizingConfig,
        style: RenderStyle,
        options: MergeOptions,
    ) -> Result<Self> {
        sizing.validate()?;
        let style = style.normalized()?;
        Ok(Self {
            model: Some(GridModel::new(rows, cols)?),
            selection: Selection::new(),
            resolver: MergeResolver::new(options),
            sizing,
            style,
            needs_render: true,
        })
    }

    pub fn model(&self) -> Option<&GridModel> {
        self.model.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sizing(&self) -> &SizingConfig {
        &self.sizing
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn merge_options(&self) -> MergeOptions {
        self.resolver.options()
    }

    pub fn set_merge_options(&mut self, options: MergeOptions) {
        self.resolver.set_options(options);
    }

    /// True once since the last [`Self::take_needs_render`].
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Placeholder text to show instead of the grid, if any.
    ///
    /// Shown while the dimensions are invalid, or while the grid has too many
    /// tracks for the gaps to fit on the canvas.
    pub fn placeholder(&self) -> Option<&'static str> {
        let fits = self
            .model
            .as_ref()
            .is_some_and(|model| GridLayout::new(model.rows(), model.cols(), &self.sizing).is_ok());
        (!fits).then_some(PLACEHOLDER)
    }

    /// Handle a click on a grid cell.
    ///
    /// # Errors
    /// `InvalidDimensions` while no grid is shown; `Merge` errors from the
    /// resolver, which the UI surfaces as a rejection notice.
    pub fn on_cell_click(&mut self, row: u32, col: u32) -> Result<ClickOutcome> {
        let Some(model) = self.model.as_mut() else {
            return Err(GridError::InvalidDimensions(PLACEHOLDER.to_string()));
        };
        let result = self
            .resolver
            .on_cell_click(model, &mut self.selection, row, col);
        // Selection always changes visibly; merges also change geometry
        self.needs_render = true;
        Ok(result?)
    }

    /// Rebuild the grid with new dimensions, discarding regions and selection.
    ///
    /// # Errors
    /// `InvalidDimensions` for non-positive or non-integer input; the grid is
    /// then replaced by [`PLACEHOLDER`] until valid dimensions arrive.
    pub fn on_dimensions_changed(&mut self, rows: f64, cols: f64) -> Result<()> {
        self.selection.clear();
        self.needs_render = true;
        match GridModel::from_inputs(rows, cols) {
            Ok(model) => {
                info!("grid reset to {}x{}", model.rows(), model.cols());
                self.model = Some(model);
                Ok(())
            }
            Err(err) => {
                warn!("{err}");
                self.model = None;
                Err(err)
            }
        }
    }

    /// Apply new sizing options. The grid and its regions are kept.
    ///
    /// # Errors
    /// Returns the validation error and keeps the previous sizing.
    pub fn on_sizing_option_changed(&mut self, sizing: SizingConfig) -> Result<()> {
        sizing.validate()?;
        debug!(
            "sizing changed: {}x{} gap_removed={} stroke={} safe_area={}",
            sizing.width, sizing.height, sizing.remove_gap, sizing.add_stroke, sizing.add_safe_area
        );
        self.sizing = sizing;
        self.needs_render = true;
        Ok(())
    }

    /// Change only the canvas size, from raw numeric input.
    ///
    /// # Errors
    /// `InvalidDimensions` for non-positive or non-integer input.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<()> {
        let sizing = SizingConfig {
            width: positive_integer(width, "width")?,
            height: positive_integer(height, "height")?,
            ..self.sizing.clone()
        };
        self.on_sizing_option_changed(sizing)
    }

    /// Replace the export colors. Hex colors are stored in canonical form.
    ///
    /// # Errors
    /// `Config` if a color is malformed.
    pub fn set_style(&mut self, style: RenderStyle) -> Result<()> {
        self.style = style.normalized()?;
        self.needs_render = true;
        Ok(())
    }

    /// Restore default dimensions and toggles, clearing all regions.
    pub fn on_reset_requested(&mut self) {
        let sizing = SizingConfig {
            corner_radius_tiers: self.sizing.corner_radius_tiers.clone(),
            gap_tiers: self.sizing.gap_tiers.clone(),
            ..SizingConfig::default()
        };
        self.sizing = sizing;
        self.model = GridModel::new(DEFAULT_ROWS, DEFAULT_COLS).ok();
        self.selection.clear();
        self.needs_render = true;
        info!("grid reset to defaults");
    }

    /// Geometry for the on-screen grid.
    ///
    /// # Errors
    /// `InvalidDimensions` while no grid is shown.
    pub fn layout(&self) -> Result<RenderedLayout> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| GridError::InvalidDimensions(PLACEHOLDER.to_string()))?;
        layout::render(model, &self.sizing)
    }

    /// Serialize the current layout as a self-contained SVG document.
    ///
    /// # Errors
    /// `InvalidDimensions` while no grid is shown.
    pub fn on_export_requested(&self) -> Result<String> {
        let layout = self.layout()?;
        let document = render_svg(&layout, &self.style);
        debug!(
            "exported {} shapes, {} bytes",
            layout.shape_count(),
            document.len()
        );
        Ok(document)
    }

    /// Apply a merge programmatically, as if the range's corners were clicked.
    ///
    /// # Errors
    /// Same as [`MergeResolver::attempt_merge`].
    pub fn merge_range(&mut self, range: &CellRange) -> Result<Region> {
        self.selection.clear();
        self.needs_render = true;
        let Some(model) = self.model.as_mut() else {
            return Err(GridError::InvalidDimensions(PLACEHOLDER.to_string()));
        };
        let mut corners = Selection::new();
        corners.insert(range.origin());
        corners.insert(CellPos::new(range.end_row, range.end_col));
        Ok(self.resolver.attempt_merge(&mut corners, model)?)
    }
}
