//! Live preview of the converted text
//!
//! Connects an editing surface's change notifications to the converter. Every
//! notification carries a complete snapshot; the converted text is recomputed
//! from scratch each time and never patched.

use crate::formats::whatsapp::{ConvertOptions, WhatsAppConverter};
use log::trace;

/// The latest snapshot and its conversion
#[derive(Debug, Clone, Default)]
pub struct PreviewSession {
    converter: WhatsAppConverter,
    snapshot: String,
    output: String,
}

impl PreviewSession {
    pub fn new(options: ConvertOptions) -> Self {
        PreviewSession {
            converter: WhatsAppConverter::new(options),
            snapshot: String::new(),
            output: String::new(),
        }
    }

    /// Accept a new snapshot from the editing surface.
    pub fn on_change(&mut self, html: &str) {
        trace!("preview received {} bytes", html.len());
        self.snapshot = html.to_string();
        self.output = self.converter.convert(html);
    }

    /// The last snapshot received
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    /// The converted text of the last snapshot
    pub fn output(&self) -> &str {
        &self.output
    }
}
