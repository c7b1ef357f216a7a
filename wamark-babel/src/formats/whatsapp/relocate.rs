//! Whitespace relocation (phase 1)
//!
//! Emphasis markers must never wrap leading or trailing whitespace, since the
//! messaging client will not render `* bold*` as bold. Before tags collapse
//! into markers, whitespace sitting just inside a tag pair is pushed outside
//! it: opening tags step right-to-left over a preceding `&nbsp;`, closing tags
//! step left-to-right over a trailing `&nbsp;` or literal space.
//!
//! One pass runs the three substitutions for every tag in
//! [`EMPHASIS_TAGS`] order. Nested tags need one pass per level, so the
//! relocation is repeated either a fixed number of times or until a pass
//! changes nothing.

use super::{EmphasisTag, EMPHASIS_TAGS, NBSP};
use crate::replace::replace_all;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// Number of passes the legacy routine ran.
pub const LEGACY_PASSES: usize = 4;

/// How many relocation passes to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relocation {
    /// Exactly `n` passes, regardless of whether the string still changes.
    Passes(usize),
    /// Repeat passes until one of them leaves the string unchanged.
    #[default]
    FixedPoint,
}

impl Relocation {
    /// The legacy four-pass behavior.
    pub fn legacy() -> Self {
        Relocation::Passes(LEGACY_PASSES)
    }
}

impl fmt::Display for Relocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relocation::Passes(n) => write!(f, "passes({n})"),
            Relocation::FixedPoint => write!(f, "fixed-point"),
        }
    }
}

impl FromStr for Relocation {
    type Err = String;

    /// Accepts `fixed-point`, `passes` (legacy count) or `passes:<n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed-point" | "fixedpoint" | "fixed_point" => Ok(Relocation::FixedPoint),
            "passes" | "legacy" => Ok(Relocation::legacy()),
            other => match other.strip_prefix("passes:") {
                Some(count) => count
                    .parse::<usize>()
                    .map(Relocation::Passes)
                    .map_err(|_| format!("invalid pass count '{count}'")),
                None => Err(format!("unknown relocation mode '{other}'")),
            },
        }
    }
}

/// Run the three relocation substitutions for a single tag.
///
/// 1. `<T>&nbsp;` becomes `&nbsp;<T>`
/// 2. `&nbsp;</T>` becomes `</T>&nbsp;`
/// 3. ` </T>` becomes `</T> `
pub fn relocate_whitespace(html: &str, tag: &EmphasisTag) -> String {
    let open = tag.open();
    let close = tag.close();

    let relocated = replace_all(html, &format!("{open}{NBSP}"), &format!("{NBSP}{open}"));
    let relocated = replace_all(
        &relocated,
        &format!("{NBSP}{close}"),
        &format!("{close}{NBSP}"),
    );
    replace_all(&relocated, &format!(" {close}"), &format!("{close} "))
}

/// One outer pass: relocate whitespace for every emphasis tag, in table order.
pub fn relocation_pass(html: &str) -> String {
    EMPHASIS_TAGS
        .iter()
        .fold(html.to_string(), |acc, tag| relocate_whitespace(&acc, tag))
}

/// Move whitespace out of every emphasis tag pair.
pub fn relocate_all(html: &str, relocation: Relocation) -> String {
    match relocation {
        Relocation::Passes(count) => {
            let mut relocated = html.to_string();
            for pass in 0..count {
                relocated = relocation_pass(&relocated);
                trace!("relocation pass {} of {count}", pass + 1);
            }
            relocated
        }
        Relocation::FixedPoint => {
            // Opening tags only move left and closing tags only move right,
            // so the loop is bounded by the input length.
            let mut relocated = html.to_string();
            let mut passes = 0usize;
            loop {
                let next = relocation_pass(&relocated);
                passes += 1;
                if next == relocated {
                    break;
                }
                relocated = next;
            }
            debug!("relocation reached a fixed point after {passes} passes");
            relocated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> &'static EmphasisTag {
        &EMPHASIS_TAGS[0]
    }

    #[test]
    fn pulls_leading_nbsp_out_of_opening_tag() {
        assert_eq!(
            relocate_whitespace("<b>&nbsp;hello</b>", bold()),
            "&nbsp;<b>hello</b>"
        );
    }

    #[test]
    fn pushes_trailing_nbsp_out_of_closing_tag() {
        assert_eq!(
            relocate_whitespace("<b>hello&nbsp;</b>", bold()),
            "<b>hello</b>&nbsp;"
        );
    }

    #[test]
    fn pushes_trailing_space_out_of_closing_tag() {
        assert_eq!(relocate_whitespace("<b>hi </b>x", bold()), "<b>hi</b> x");
    }

    #[test]
    fn leading_literal_space_is_left_alone() {
        assert_eq!(relocate_whitespace("<b> hi</b>", bold()), "<b> hi</b>");
    }

    #[test]
    fn single_step_only_moves_one_entity() {
        assert_eq!(
            relocate_whitespace("<b>hi&nbsp;&nbsp;</b>", bold()),
            "<b>hi&nbsp;</b>&nbsp;"
        );
    }

    #[test]
    fn nested_tags_need_one_pass_per_level() {
        let once = relocation_pass("<b><i>X </i></b>");
        assert_eq!(once, "<b><i>X</i> </b>");
        let twice = relocation_pass(&once);
        assert_eq!(twice, "<b><i>X</i></b> ");
    }

    #[test]
    fn fixed_point_matches_legacy_for_shallow_nesting() {
        let input = "<b><i>&nbsp;X&nbsp;</i></b> tail";
        assert_eq!(
            relocate_all(input, Relocation::FixedPoint),
            relocate_all(input, Relocation::legacy())
        );
    }

    #[test]
    fn fixed_point_goes_deeper_than_legacy() {
        let input = "<b>x&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;</b>";
        let legacy = relocate_all(input, Relocation::legacy());
        assert_eq!(legacy, "<b>x&nbsp;&nbsp;</b>&nbsp;&nbsp;&nbsp;&nbsp;");
        let fixed = relocate_all(input, Relocation::FixedPoint);
        assert_eq!(fixed, "<b>x</b>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;");
    }

    #[test]
    fn zero_passes_is_identity() {
        assert_eq!(relocate_all("<b>a </b>", Relocation::Passes(0)), "<b>a </b>");
    }

    #[test]
    fn parses_relocation_modes() {
        assert_eq!("fixed-point".parse(), Ok(Relocation::FixedPoint));
        assert_eq!("passes".parse(), Ok(Relocation::Passes(4)));
        assert_eq!("passes:7".parse(), Ok(Relocation::Passes(7)));
        assert!("passes:x".parse::<Relocation>().is_err());
        assert!("sometimes".parse::<Relocation>().is_err());
    }
}
