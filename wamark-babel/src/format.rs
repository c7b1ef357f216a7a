//! Format trait definition
//!
//! Every format converts to and from a content snapshot: the complete HTML
//! string an editing surface reports after a mutation. Formats that can turn
//! their own text back into a snapshot are sources; formats that can render a
//! snapshot are targets.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for markup formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, snapshot: &str) -> Result<String, FormatError> {
///         Ok(snapshot.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "whatsapp")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format can be read back into a snapshot
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether a snapshot can be rendered into this format
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Read source text of this format into a content snapshot
    fn parse(&self, _source: &str) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Render a content snapshot into this format
    fn serialize(&self, _snapshot: &str) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Render a snapshot, optionally using extra parameters.
    ///
    /// Formats without knobs rely on the default, which rejects any
    /// parameter and otherwise delegates to [`Format::serialize`].
    fn serialize_with_options(
        &self,
        snapshot: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(snapshot)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
