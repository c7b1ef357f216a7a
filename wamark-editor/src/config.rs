//! Editor configuration
//!
//! Everything is optional except the change callback. Missing fields fall back
//! to defaults when the surface is initialized.

use crate::action::ActionSpec;
use std::fmt;

/// Paragraph container used when none is configured.
pub const DEFAULT_PARAGRAPH_SEPARATOR: &str = "div";

/// Style classes for each UI element role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub actionbar: String,
    pub button: String,
    pub content: String,
    pub selected: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        ClassNames {
            actionbar: "pell-actionbar".to_string(),
            button: "pell-button".to_string(),
            content: "pell-content".to_string(),
            selected: "pell-button-selected".to_string(),
        }
    }
}

/// Caller-provided class names; unset roles keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassOverrides {
    pub actionbar: Option<String>,
    pub button: Option<String>,
    pub content: Option<String>,
    pub selected: Option<String>,
}

impl ClassNames {
    pub fn merged(&self, over: &ClassOverrides) -> Self {
        let pick = |value: &Option<String>, fallback: &String| {
            value.clone().unwrap_or_else(|| fallback.clone())
        };
        ClassNames {
            actionbar: pick(&over.actionbar, &self.actionbar),
            button: pick(&over.button, &self.button),
            content: pick(&over.content, &self.content),
            selected: pick(&over.selected, &self.selected),
        }
    }
}

pub type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct EditorConfiguration {
    /// `None` enables the default actions
    pub actions: Option<Vec<ActionSpec>>,
    pub classes: ClassOverrides,
    pub default_paragraph_separator: Option<String>,
    pub on_change: ChangeCallback,
    /// `None` leaves the host's native choice untouched
    pub style_with_css: Option<bool>,
}

impl EditorConfiguration {
    pub fn new<F>(on_change: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        EditorConfiguration {
            actions: None,
            classes: ClassOverrides::default(),
            default_paragraph_separator: None,
            on_change: Box::new(on_change),
            style_with_css: None,
        }
    }

    pub fn actions<I, A>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ActionSpec>,
    {
        self.actions = Some(actions.into_iter().map(Into::into).collect());
        self
    }

    pub fn classes(mut self, classes: ClassOverrides) -> Self {
        self.classes = classes;
        self
    }

    pub fn default_paragraph_separator(mut self, tag: impl Into<String>) -> Self {
        self.default_paragraph_separator = Some(tag.into());
        self
    }

    pub fn style_with_css(mut self, enabled: bool) -> Self {
        self.style_with_css = Some(enabled);
        self
    }
}

impl fmt::Debug for EditorConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorConfiguration")
            .field("actions", &self.actions)
            .field("classes", &self.classes)
            .field("default_paragraph_separator", &self.default_paragraph_separator)
            .field("style_with_css", &self.style_with_css)
            .finish_non_exhaustive()
    }
}
