//! HTML format implementation
//!
//! HTML is the snapshot representation itself, so parsing and serializing are
//! both identity. The format exists so that snapshots saved to disk can be
//! detected by extension and fed through the registry like any other source.

use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for editor HTML snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML snapshot of a content-editable surface"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }

    fn serialize(&self, snapshot: &str) -> Result<String, FormatError> {
        Ok(snapshot.to_string())
    }
}
