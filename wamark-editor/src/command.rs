//! Native editing commands
//!
//! The names and argument conventions follow the content-editable command set
//! (`bold`, `strikeThrough`, `formatBlock` with a `<tag>` argument, ...).

use std::fmt;

/// The `formatBlock` command name, also used to query the current block tag.
pub const FORMAT_BLOCK: &str = "formatBlock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bold,
    Italic,
    StrikeThrough,
    Underline,
    /// Wrap the current block in the given tag name (without brackets)
    FormatBlock(String),
    InsertOrderedList,
    InsertUnorderedList,
    InsertHorizontalRule,
    CreateLink(String),
    InsertImage(String),
    StyleWithCss,
    DefaultParagraphSeparator(String),
}

impl Command {
    /// The native command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::Bold => "bold",
            Command::Italic => "italic",
            Command::StrikeThrough => "strikeThrough",
            Command::Underline => "underline",
            Command::FormatBlock(_) => FORMAT_BLOCK,
            Command::InsertOrderedList => "insertOrderedList",
            Command::InsertUnorderedList => "insertUnorderedList",
            Command::InsertHorizontalRule => "insertHorizontalRule",
            Command::CreateLink(_) => "createLink",
            Command::InsertImage(_) => "insertImage",
            Command::StyleWithCss => "styleWithCSS",
            Command::DefaultParagraphSeparator(_) => "defaultParagraphSeparator",
        }
    }

    /// The argument passed alongside the command, if any
    pub fn value(&self) -> Option<String> {
        match self {
            Command::FormatBlock(tag) => Some(format!("<{tag}>")),
            Command::CreateLink(url) | Command::InsertImage(url) => Some(url.clone()),
            Command::DefaultParagraphSeparator(tag) => Some(tag.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({value})", self.name()),
            None => write!(f, "{}", self.name()),
        }
    }
}
