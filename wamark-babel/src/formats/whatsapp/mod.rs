//! WhatsApp format implementation
//!
//! Renders a content snapshot produced by a rich-text editing surface as the
//! plain-text emphasis dialect used by WhatsApp: `*bold*`, `_italic_`,
//! `~strike~`.
//!
//! # Scope
//!
//! This is not an HTML parser. The input is trusted to be well-formed markup
//! whose only inline tags are `<b>`, `<i>` and `<strike>`, possibly next to
//! `&nbsp;` entities. Tags are handled as literal substrings; anything else in
//! the snapshot (block containers, other entities) passes through unchanged.
//! Unmatched tags are not validated: they still collapse to markers.
//!
//! # Algorithm
//!
//! 1. Relocation (see [`relocate`]): whitespace just inside a tag pair is
//!    moved outside it, for every tag, until the string is stable (or for a
//!    fixed number of passes, see [`Relocation`]).
//! 2. Substitution (see [`markers`]): each tag, in table order, collapses to
//!    its marker character. This runs once per tag, after relocation has
//!    finished for all of them.
//!
//! Tags compose positionally: `<b><i>X</i></b>` becomes `*_X_*` while
//! `<i><b>X</b></i>` becomes `_*X*_`.
//!
//! # Options
//!
//! | Key           | Values                                 | Default       |
//! |---------------|----------------------------------------|---------------|
//! | `relocation`  | `fixed-point`, `passes`/`legacy`, `passes:<n>` | `fixed-point` |
//! | `passes`      | integer, implies `passes:<n>`, overrides `relocation` |  |
//! | `decode-nbsp` | boolean                                | `false`       |

pub mod markers;
pub mod relocate;

use crate::error::FormatError;
use crate::format::Format;
use log::debug;
use std::collections::HashMap;

pub use markers::substitute_markers;
pub use relocate::{relocate_all, relocate_whitespace, relocation_pass, Relocation};

/// The non-breaking space entity as editing surfaces emit it.
pub const NBSP: &str = "&nbsp;";

/// An inline tag and the marker character it collapses into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisTag {
    pub tag: &'static str,
    pub marker: char,
}

impl EmphasisTag {
    pub fn open(&self) -> String {
        format!("<{}>", self.tag)
    }

    pub fn close(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Supported tags, in processing order.
pub const EMPHASIS_TAGS: [EmphasisTag; 3] = [
    EmphasisTag {
        tag: "b",
        marker: '*',
    },
    EmphasisTag {
        tag: "i",
        marker: '_',
    },
    EmphasisTag {
        tag: "strike",
        marker: '~',
    },
];

/// Knobs for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub relocation: Relocation,
    /// Replace remaining `&nbsp;` entities with plain spaces once markers are in place.
    pub decode_nbsp: bool,
}

impl ConvertOptions {
    /// Read options from `--extra-*` style parameters, starting from `self`.
    ///
    /// Keys are resolved in a fixed order: `relocation`, then `passes` (which
    /// wins over `relocation` when both are given), then `decode-nbsp`.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        if let Some((key, value)) = params.get_key_value("relocation") {
            self.relocation = value.parse().map_err(|_| invalid(key, value))?;
        }
        if let Some((key, value)) = params.get_key_value("passes") {
            let count = value.parse::<usize>().map_err(|_| invalid(key, value))?;
            self.relocation = Relocation::Passes(count);
        }
        if let Some((key, value)) = params.get_key_value("decode-nbsp") {
            self.decode_nbsp = parse_bool(value).ok_or_else(|| invalid(key, value))?;
        }

        let mut unknown: Vec<&String> = params
            .keys()
            .filter(|key| !PARAMETERS.contains(&key.as_str()))
            .collect();
        unknown.sort();
        if let Some(key) = unknown.first() {
            return Err(FormatError::NotSupported(format!(
                "Format 'whatsapp' has no parameter '{key}'"
            )));
        }
        Ok(self)
    }
}

/// Parameters understood by [`ConvertOptions::with_params`].
pub const PARAMETERS: [&str; 3] = ["relocation", "passes", "decode-nbsp"];

fn invalid(key: &str, value: &str) -> FormatError {
    FormatError::InvalidOption {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Parse a boolean option value (`true`/`false`, `1`/`0`, `yes`/`no`, `y`/`n`).
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Converts content snapshots with a fixed set of options.
///
/// Holds no state between calls: the same input always yields the same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppConverter {
    options: ConvertOptions,
}

impl WhatsAppConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert(&self, html: &str) -> String {
        let relocated = relocate_all(html, self.options.relocation);
        let converted = EMPHASIS_TAGS
            .iter()
            .fold(relocated, |acc, tag| substitute_markers(&acc, tag));
        debug!(
            "converted {} bytes of markup into {} bytes ({})",
            html.len(),
            converted.len(),
            self.options.relocation
        );
        if self.options.decode_nbsp {
            crate::replace::replace_all(&converted, NBSP, " ")
        } else {
            converted
        }
    }
}

/// Convert a content snapshot with the default options.
pub fn convert_to_messaging_format(html: &str) -> String {
    WhatsAppConverter::default().convert(html)
}

/// Format implementation for WhatsApp text
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppFormat {
    options: ConvertOptions,
}

impl WhatsAppFormat {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }
}

impl Format for WhatsAppFormat {
    fn name(&self) -> &str {
        "whatsapp"
    }

    fn description(&self) -> &str {
        "WhatsApp plain text with *bold*, _italic_ and ~strike~ markers"
    }

    fn file_extensions(&self) -> &[&str] {
        &["wa", "whatsapp", "txt"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, snapshot: &str) -> Result<String, FormatError> {
        Ok(WhatsAppConverter::new(self.options).convert(snapshot))
    }

    fn serialize_with_options(
        &self,
        snapshot: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.with_params(options)?;
        Ok(WhatsAppConverter::new(options).convert(snapshot))
    }
}
