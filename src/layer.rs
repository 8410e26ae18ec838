//! Explicit cascade-layer bookkeeping.
//!
//! At most one layer is open at a time, and a layer name is reserved
//! forever once opened. Closing must name the layer being closed, which
//! catches mismatched begin/end pairs early.

use crate::error::{Error, Result};

/// Tracks the currently open layer and every name used so far.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    open: Option<String>,
    seen: Vec<String>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a layer.
    ///
    /// Fails if another layer is already open, if the name is empty or
    /// contains whitespace, or if the name was used before.
    pub fn begin(&mut self, name: &str) -> Result<()> {
        if let Some(open) = &self.open {
            return Err(Error::LayerAlreadyOpen(open.clone()));
        }
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidLayerName(name.to_string()));
        }
        if self.seen.iter().any(|seen| seen == name) {
            return Err(Error::DuplicateLayer(name.to_string()));
        }
        self.open = Some(name.to_string());
        self.seen.push(name.to_string());
        Ok(())
    }

    /// Close the open layer.
    ///
    /// The name must match the layer that is open.
    pub fn end(&mut self, name: &str) -> Result<()> {
        match &self.open {
            Some(open) if open == name => {
                self.open = None;
                Ok(())
            }
            open => Err(Error::LayerMismatch {
                requested: name.to_string(),
                open: open.clone(),
            }),
        }
    }

    /// The currently open layer, if any.
    pub fn open(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Every layer name opened so far, in first-open order.
    pub fn seen(&self) -> &[String] {
        &self.seen
    }
}
