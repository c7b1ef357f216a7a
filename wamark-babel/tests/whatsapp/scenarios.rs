//! Worked conversion examples, from single tags to editor-shaped snapshots.

use insta::assert_snapshot;
use std::collections::HashMap;
use wamark_babel::formats::whatsapp::{relocate_all, ConvertOptions, Relocation, WhatsAppConverter};
use wamark_babel::{convert_to_messaging_format, FormatRegistry};

#[test]
fn bold_word() {
    assert_snapshot!(convert_to_messaging_format("<b>hello</b>"), @"*hello*");
}

#[test]
fn leading_nbsp_in_bold() {
    let relocated = relocate_all("<b>&nbsp;hello</b>", Relocation::FixedPoint);
    assert_eq!(relocated, "&nbsp;<b>hello</b>");
    assert_snapshot!(convert_to_messaging_format("<b>&nbsp;hello</b>"), @"&nbsp;*hello*");
}

#[test]
fn trailing_space_in_italic() {
    let relocated = relocate_all("<i>hi </i>there", Relocation::FixedPoint);
    assert_eq!(relocated, "<i>hi</i> there");
    assert_snapshot!(convert_to_messaging_format("<i>hi </i>there"), @"_hi_ there");
}

#[test]
fn plain_text() {
    assert_snapshot!(convert_to_messaging_format("plain text"), @"plain text");
}

#[test]
fn strike_then_bold() {
    assert_snapshot!(convert_to_messaging_format("<strike>a</strike><b>b</b>"), @"~a~*b*");
}

#[test]
fn converting_twice_is_stable() {
    let once = convert_to_messaging_format("<b>a </b><i>&nbsp;b</i>&nbsp;<strike>c</strike>");
    let twice = convert_to_messaging_format(&once);
    assert_eq!(once, twice);
    assert_snapshot!(once, @"*a* &nbsp;_b_&nbsp;~c~");
}

#[test]
fn nesting_composes_positionally() {
    assert_snapshot!(convert_to_messaging_format("<b><i>X</i></b>"), @"*_X_*");
    assert_snapshot!(convert_to_messaging_format("<i><b>X</b></i>"), @"_*X*_");
}

#[test]
fn triple_nesting_with_trailing_nbsp() {
    assert_snapshot!(
        convert_to_messaging_format("<b><i><strike>x&nbsp;</strike></i></b>y"),
        @"*_~x~_*&nbsp;y"
    );
}

#[test]
fn editor_paragraphs() {
    let snapshot = "<div>Hello <b>team</b>,</div><div><i>please </i>review&nbsp;<strike>today</strike> tomorrow</div>";
    assert_snapshot!(
        convert_to_messaging_format(snapshot),
        @"<div>Hello *team*,</div><div>_please_ review&nbsp;~today~ tomorrow</div>"
    );
}

#[test]
fn other_markup_passes_through() {
    assert_snapshot!(
        convert_to_messaging_format("<p><u>under</u> <b>bo</b><br></p>"),
        @"<p><u>under</u> *bo*<br></p>"
    );
}

#[test]
fn unmatched_tags_still_collapse() {
    assert_snapshot!(convert_to_messaging_format("<b>open only"), @"*open only");
}

#[test]
fn legacy_passes_stop_short_on_long_space_runs() {
    let snapshot = "<b>x     </b>y";
    let legacy = WhatsAppConverter::new(ConvertOptions {
        relocation: Relocation::legacy(),
        decode_nbsp: false,
    });
    assert_snapshot!(legacy.convert(snapshot), @"*x *    y");
    assert_snapshot!(convert_to_messaging_format(snapshot), @"*x*     y");
}

#[test]
fn trailing_nbsp_runs_agree_across_strategies() {
    let snapshot = "<b>x&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;</b>";
    let legacy = WhatsAppConverter::new(ConvertOptions {
        relocation: Relocation::legacy(),
        decode_nbsp: false,
    });
    assert_eq!(legacy.convert(snapshot), convert_to_messaging_format(snapshot));
    assert_snapshot!(convert_to_messaging_format(snapshot), @"*x*&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;");
}

#[test]
fn registry_conversion_with_extra_params() {
    let registry = FormatRegistry::default();
    let mut params = HashMap::new();
    params.insert("decode-nbsp".to_string(), "true".to_string());
    let out = registry
        .convert("<div><b>&nbsp;hi</b></div>", "html", "whatsapp", &params)
        .unwrap();
    assert_snapshot!(out, @"<div> *hi*</div>");
}
