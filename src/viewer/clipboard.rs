//! Clipboard export for `BentoGrid`.
//!
//! The write is asynchronous and fire-and-forget from the session's point of
//! view: the document is rendered up front, so a rejected write only produces
//! an `Export` error for the UI to show.

use log::{info, warn};
use wasm_bindgen_futures::JsFuture;

use crate::error::{GridError, Result};

/// Write `text` to the system clipboard.
pub(crate) async fn write_text(text: String) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| GridError::Export("no window".to_string()))?;
    let clipboard = window.navigator().clipboard();
    match JsFuture::from(clipboard.write_text(&text)).await {
        Ok(_) => {
            info!("copied {} bytes to clipboard", text.len());
            Ok(())
        }
        Err(err) => {
            let reason = err
                .as_string()
                .unwrap_or_else(|| "clipboard write was rejected".to_string());
            warn!("failed to copy SVG: {reason}");
            Err(GridError::Export(format!(
                "Failed to copy SVG to clipboard: {reason}"
            )))
        }
    }
}
