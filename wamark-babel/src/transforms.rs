//! Stage transforms for inspecting a conversion
//!
//! Each transform takes a content snapshot and renders one stage of the
//! converter:
//!
//! - `relocated`: the snapshot after whitespace relocation, tags still in place
//! - `whatsapp`:  the full conversion
//! - `stats`:     JSON summary of tags, markers and whitespace before and after

use crate::error::FormatError;
use crate::formats::whatsapp::{relocate_all, ConvertOptions, WhatsAppConverter, EMPHASIS_TAGS, NBSP};
use serde::Serialize;
use std::collections::HashMap;

/// All available stage transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["relocated", "whatsapp", "stats"];

/// Per-tag counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagStats {
    pub tag: &'static str,
    pub marker: char,
    pub opening: usize,
    pub closing: usize,
    /// Marker characters present in the converted output
    pub markers: usize,
}

/// Whitespace counts on one side of the conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WhitespaceStats {
    pub spaces: usize,
    pub nbsp: usize,
}

impl WhitespaceStats {
    pub fn of(text: &str) -> Self {
        WhitespaceStats {
            spaces: text.matches(' ').count(),
            nbsp: text.matches(NBSP).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub tags: Vec<TagStats>,
    pub input: WhitespaceStats,
    pub output: WhitespaceStats,
}

/// Count tags, markers and whitespace for a snapshot and its conversion.
pub fn conversion_stats(snapshot: &str, options: ConvertOptions) -> ConversionStats {
    let output = WhatsAppConverter::new(options).convert(snapshot);
    let tags = EMPHASIS_TAGS
        .iter()
        .map(|tag| TagStats {
            tag: tag.tag,
            marker: tag.marker,
            opening: snapshot.matches(tag.open().as_str()).count(),
            closing: snapshot.matches(tag.close().as_str()).count(),
            markers: output.matches(tag.marker).count(),
        })
        .collect();

    ConversionStats {
        tags,
        input: WhitespaceStats::of(snapshot),
        output: WhitespaceStats::of(&output),
    }
}

/// Execute a named transform on a snapshot
///
/// Extra parameters are the converter options (see the whatsapp format).
pub fn execute_transform(
    snapshot: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let options = ConvertOptions::default().with_params(extra_params)?;
    match transform_name {
        "relocated" => Ok(relocate_all(snapshot, options.relocation)),
        "whatsapp" => Ok(WhatsAppConverter::new(options).convert(snapshot)),
        "stats" => {
            let stats = conversion_stats(snapshot, options);
            serde_json::to_string_pretty(&stats)
                .map(|json| format!("{json}\n"))
                .map_err(|e| FormatError::ConversionError(e.to_string()))
        }
        other => Err(FormatError::NotSupported(format!(
            "Unknown transform '{other}'"
        ))),
    }
}
