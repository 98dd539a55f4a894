//! Export sinks.
//!
//! Export is read-only over the grid: a sink only ever sees the finished
//! document string, so a failing sink cannot corrupt model state.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::{info, warn};

use crate::error::{GridError, Result};

/// Destination for an exported document.
pub trait ExportSink {
    /// Deliver the document.
    ///
    /// # Errors
    /// Returns `GridError::Export` if the destination refuses it.
    fn write_document(&mut self, document: &str) -> Result<()>;
}

/// Writes the document to a file on disk.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExportSink for FileSink {
    fn write_document(&mut self, document: &str) -> Result<()> {
        fs::write(&self.path, document).map_err(|e| {
            warn!("export to {} failed: {e}", self.path.display());
            GridError::Export(format!("{}: {e}", self.path.display()))
        })?;
        info!("exported {} bytes to {}", document.len(), self.path.display());
        Ok(())
    }
}

/// Writes the document to any `Write` (stdout in the CLI), newline-terminated.
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn write_document(&mut self, document: &str) -> Result<()> {
        self.inner
            .write_all(document.as_bytes())
            .and_then(|()| self.inner.write_all(b"\n"))
            .and_then(|()| self.inner.flush())
            .map_err(|e| GridError::Export(e.to_string()))
    }
}
