//! Marker substitution (phase 2)

use super::{EmphasisTag, NBSP};
use crate::replace::replace_all;

/// Collapse every opening and closing occurrence of `tag` into its marker.
///
/// A `&nbsp;` touching the tag is kept on the side it sat on, so after
/// relocation the entity always ends up outside the marker pair.
pub fn substitute_markers(html: &str, tag: &EmphasisTag) -> String {
    let open = tag.open();
    let close = tag.close();
    let marker = tag.marker.to_string();

    let substituted = replace_all(html, &format!("{open}{NBSP}"), &format!("{NBSP}{marker}"));
    let substituted = replace_all(
        &substituted,
        &format!("{NBSP}{open}"),
        &format!("{NBSP}{marker}"),
    );
    let substituted = replace_all(&substituted, &open, &marker);
    let substituted = replace_all(
        &substituted,
        &format!("{NBSP}{close}"),
        &format!("{marker}{NBSP}"),
    );
    replace_all(&substituted, &close, &marker)
}
