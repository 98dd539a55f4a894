//! `BentoGrid` - the JavaScript-facing wrapper around [`Session`].
//!
//! Input handling stays in JavaScript; this type only translates numbers and
//! booleans from form controls into session calls and returns plain values
//! or `JsValue`s for rendering.

use js_sys::Promise;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::{clipboard, responsive_scale, Session};
use crate::merge::MergeOptions;
use crate::types::{RenderStyle, SizingConfig};

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the panic hook and console logger. `level` is a `log` level name
/// ("info", "debug", ...); unknown names fall back to "info".
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console_error_panic_hook::set_once();
    // Already installed on repeat calls
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level.parse().unwrap_or(LevelFilter::Info));
}

/// The grid editor exported to JavaScript
#[wasm_bindgen]
pub struct BentoGrid {
    session: Session,
}

#[wasm_bindgen]
impl BentoGrid {
    /// Create an editor with the default 2×3 grid on a 960×390 canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(toggle_region_selection: bool) -> BentoGrid {
        BentoGrid {
            session: Session::new(MergeOptions {
                toggle_region_selection,
            }),
        }
    }

    /// Handle a cell click. Resolves to the click outcome; rejects with a
    /// user-facing message for invalid merges.
    #[wasm_bindgen]
    pub fn on_cell_click(&mut self, row: u32, col: u32) -> Result<JsValue, JsValue> {
        let outcome = self.session.on_cell_click(row, col)?;
        serde_wasm_bindgen::to_value(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Rows/columns changed: rebuilds the grid and drops all regions.
    #[wasm_bindgen]
    pub fn on_dimensions_changed(&mut self, rows: f64, cols: f64) -> Result<(), JsValue> {
        Ok(self.session.on_dimensions_changed(rows, cols)?)
    }

    #[wasm_bindgen]
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        Ok(self.session.set_canvas_size(width, height)?)
    }

    #[wasm_bindgen]
    pub fn set_remove_gap(&mut self, enabled: bool) -> Result<(), JsValue> {
        let sizing = SizingConfig {
            remove_gap: enabled,
            ..self.session.sizing().clone()
        };
        Ok(self.session.on_sizing_option_changed(sizing)?)
    }

    #[wasm_bindgen]
    pub fn set_add_stroke(&mut self, enabled: bool) -> Result<(), JsValue> {
        let sizing = SizingConfig {
            add_stroke: enabled,
            ..self.session.sizing().clone()
        };
        Ok(self.session.on_sizing_option_changed(sizing)?)
    }

    #[wasm_bindgen]
    pub fn set_add_safe_area(&mut self, enabled: bool) -> Result<(), JsValue> {
        let sizing = SizingConfig {
            add_safe_area: enabled,
            ..self.session.sizing().clone()
        };
        Ok(self.session.on_sizing_option_changed(sizing)?)
    }

    /// Replace the whole sizing config (a `SizingConfig`-shaped object).
    #[wasm_bindgen]
    pub fn set_sizing(&mut self, sizing: JsValue) -> Result<(), JsValue> {
        let sizing: SizingConfig = serde_wasm_bindgen::from_value(sizing)
            .map_err(|e| JsValue::from_str(&format!("Invalid sizing: {e}")))?;
        Ok(self.session.on_sizing_option_changed(sizing)?)
    }

    /// Replace export colors (a `RenderStyle`-shaped object).
    #[wasm_bindgen]
    pub fn set_style(&mut self, style: JsValue) -> Result<(), JsValue> {
        let style: RenderStyle = serde_wasm_bindgen::from_value(style)
            .map_err(|e| JsValue::from_str(&format!("Invalid style: {e}")))?;
        Ok(self.session.set_style(style)?)
    }

    #[wasm_bindgen]
    pub fn on_reset_requested(&mut self) {
        self.session.on_reset_requested();
    }

    /// The SVG document for the current layout.
    #[wasm_bindgen]
    pub fn on_export_requested(&self) -> Result<String, JsValue> {
        Ok(self.session.on_export_requested()?)
    }

    /// Copy the SVG document to the clipboard. The promise rejects with a
    /// user-facing message if the clipboard refuses the write.
    #[wasm_bindgen]
    pub fn copy_svg(&self) -> Result<Promise, JsValue> {
        let document = self.session.on_export_requested()?;
        Ok(future_to_promise(async move {
            clipboard::write_text(document)
                .await
                .map(|()| JsValue::UNDEFINED)
                .map_err(JsValue::from)
        }))
    }

    /// Geometry for the preview (a serialized `RenderedLayout`).
    #[wasm_bindgen]
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        let layout = self.session.layout()?;
        serde_wasm_bindgen::to_value(&layout)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Selected cells as a flat `[row, col, row, col, ...]` array.
    #[wasm_bindgen]
    pub fn selection(&self) -> Vec<u32> {
        self.session
            .selection()
            .iter()
            .flat_map(|cell| [cell.row, cell.col])
            .collect()
    }

    /// Message to show instead of the grid, if the dimensions are invalid.
    #[wasm_bindgen]
    pub fn placeholder(&self) -> Option<String> {
        self.session.placeholder().map(str::to_string)
    }

    /// Preview scale for a viewport of the given size.
    #[wasm_bindgen]
    pub fn display_scale(&self, viewport_width: f64, viewport_height: f64) -> f64 {
        let sizing = self.session.sizing();
        responsive_scale(
            f64::from(sizing.width),
            f64::from(sizing.height),
            viewport_width,
            viewport_height,
        )
    }

    /// True if anything changed since the last call.
    #[wasm_bindgen]
    pub fn take_needs_render(&mut self) -> bool {
        self.session.take_needs_render()
    }
}
