//! Formatting actions and the built-in catalogue
//!
//! An action is a toolbar entry: a name, an icon, a tooltip, an optional
//! predicate reporting whether the formatting is active at the caret, and the
//! operation that toggles it. Actions are immutable once built. Caller
//! customization goes through [`ActionOverride`], which produces a new action
//! via [`FormattingAction::merged`] instead of editing a shared table.

use crate::command::Command;
use crate::error::EditorError;
use crate::host::EditingHost;
use log::debug;
use std::fmt;
use std::sync::Arc;

pub type StateFn = Arc<dyn Fn(&dyn EditingHost) -> bool + Send + Sync>;
pub type ApplyFn = Arc<dyn Fn(&mut dyn EditingHost) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct FormattingAction {
    name: String,
    icon: String,
    title: String,
    state: Option<StateFn>,
    apply: ApplyFn,
}

impl FormattingAction {
    pub fn new<F>(
        name: impl Into<String>,
        icon: impl Into<String>,
        title: impl Into<String>,
        apply: F,
    ) -> Self
    where
        F: Fn(&mut dyn EditingHost) -> bool + Send + Sync + 'static,
    {
        FormattingAction {
            name: name.into(),
            icon: icon.into(),
            title: title.into(),
            state: None,
            apply: Arc::new(apply),
        }
    }

    pub fn with_state<F>(mut self, state: F) -> Self
    where
        F: Fn(&dyn EditingHost) -> bool + Send + Sync + 'static,
    {
        self.state = Some(Arc::new(state));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_stateful(&self) -> bool {
        self.state.is_some()
    }

    /// Evaluate the state predicate; `None` for actions without one.
    pub fn is_active(&self, host: &dyn EditingHost) -> Option<bool> {
        self.state.as_ref().map(|state| state(host))
    }

    /// Run the action; returns whether the host applied it.
    pub fn apply(&self, host: &mut dyn EditingHost) -> bool {
        (self.apply)(host)
    }

    /// A new action with every field present in `over` replacing this one's.
    pub fn merged(&self, over: &ActionOverride) -> Self {
        FormattingAction {
            name: over.name.clone(),
            icon: over.icon.clone().unwrap_or_else(|| self.icon.clone()),
            title: over.title.clone().unwrap_or_else(|| self.title.clone()),
            state: over.state.clone().or_else(|| self.state.clone()),
            apply: over.apply.clone().unwrap_or_else(|| self.apply.clone()),
        }
    }
}

impl fmt::Debug for FormattingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattingAction")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field("stateful", &self.is_stateful())
            .finish()
    }
}

/// A partial action record; unset fields fall back to the built-in action of the same name.
#[derive(Clone, Default)]
pub struct ActionOverride {
    name: String,
    icon: Option<String>,
    title: Option<String>,
    state: Option<StateFn>,
    apply: Option<ApplyFn>,
}

impl ActionOverride {
    pub fn new(name: impl Into<String>) -> Self {
        ActionOverride {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn state<F>(mut self, state: F) -> Self
    where
        F: Fn(&dyn EditingHost) -> bool + Send + Sync + 'static,
    {
        self.state = Some(Arc::new(state));
        self
    }

    pub fn apply<F>(mut self, apply: F) -> Self
    where
        F: Fn(&mut dyn EditingHost) -> bool + Send + Sync + 'static,
    {
        self.apply = Some(Arc::new(apply));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a standalone action when no built-in shares this name.
    fn into_custom(self) -> Result<FormattingAction, EditorError> {
        let apply = self
            .apply
            .ok_or_else(|| EditorError::IncompleteAction(self.name.clone()))?;
        Ok(FormattingAction {
            icon: self.icon.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            name: self.name,
            state: self.state,
            apply,
        })
    }
}

impl fmt::Debug for ActionOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionOverride")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field("state", &self.state.is_some())
            .field("apply", &self.apply.is_some())
            .finish()
    }
}

/// The built-in action catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinAction {
    Bold,
    Italic,
    Strikethrough,
    Underline,
    Heading1,
    Heading2,
    Paragraph,
    Quote,
    OrderedList,
    UnorderedList,
    Code,
    Line,
    Link,
    Image,
}

impl BuiltinAction {
    pub const ALL: [BuiltinAction; 14] = [
        BuiltinAction::Bold,
        BuiltinAction::Italic,
        BuiltinAction::Strikethrough,
        BuiltinAction::Underline,
        BuiltinAction::Heading1,
        BuiltinAction::Heading2,
        BuiltinAction::Paragraph,
        BuiltinAction::Quote,
        BuiltinAction::OrderedList,
        BuiltinAction::UnorderedList,
        BuiltinAction::Code,
        BuiltinAction::Line,
        BuiltinAction::Link,
        BuiltinAction::Image,
    ];

    /// Enabled when no action list is configured, in toolbar order.
    pub const DEFAULTS: [BuiltinAction; 3] = [
        BuiltinAction::Bold,
        BuiltinAction::Italic,
        BuiltinAction::Strikethrough,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinAction::Bold => "bold",
            BuiltinAction::Italic => "italic",
            BuiltinAction::Strikethrough => "strikethrough",
            BuiltinAction::Underline => "underline",
            BuiltinAction::Heading1 => "heading1",
            BuiltinAction::Heading2 => "heading2",
            BuiltinAction::Paragraph => "paragraph",
            BuiltinAction::Quote => "quote",
            BuiltinAction::OrderedList => "olist",
            BuiltinAction::UnorderedList => "ulist",
            BuiltinAction::Code => "code",
            BuiltinAction::Line => "line",
            BuiltinAction::Link => "link",
            BuiltinAction::Image => "image",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    pub fn action(self) -> FormattingAction {
        let name = self.name();
        match self {
            BuiltinAction::Bold => toggle(name, "<b>Bold</b>", "Bold", Command::Bold),
            BuiltinAction::Italic => toggle(name, "<i>Italic</i>", "Italic", Command::Italic),
            BuiltinAction::Strikethrough => toggle(
                name,
                "<strike>Strike</strike>",
                "Strike-through",
                Command::StrikeThrough,
            ),
            BuiltinAction::Underline => toggle(name, "<u>U</u>", "Underline", Command::Underline),
            BuiltinAction::Heading1 => block(name, "<b>H<sub>1</sub></b>", "Heading 1", "h1"),
            BuiltinAction::Heading2 => block(name, "<b>H<sub>2</sub></b>", "Heading 2", "h2"),
            BuiltinAction::Paragraph => block(name, "&#182;", "Paragraph", "p"),
            BuiltinAction::Quote => block(name, "&#8220; &#8221;", "Quote", "blockquote"),
            BuiltinAction::Code => block(name, "&lt;/&gt;", "Code", "pre"),
            BuiltinAction::OrderedList => FormattingAction::new(name, "&#35;", "Ordered List", |host| {
                host.exec(&Command::InsertOrderedList)
            }),
            BuiltinAction::UnorderedList => {
                FormattingAction::new(name, "&#8226;", "Unordered List", |host| {
                    host.exec(&Command::InsertUnorderedList)
                })
            }
            BuiltinAction::Line => FormattingAction::new(name, "&#8213;", "Horizontal Line", |host| {
                host.exec(&Command::InsertHorizontalRule)
            }),
            BuiltinAction::Link => FormattingAction::new(name, "&#128279;", "Link", |host| {
                match prompt_url(host, "Enter the link URL") {
                    Some(url) => host.exec(&Command::CreateLink(url)),
                    None => false,
                }
            }),
            BuiltinAction::Image => FormattingAction::new(name, "&#128247;", "Image", |host| {
                match prompt_url(host, "Enter the image URL") {
                    Some(url) => host.exec(&Command::InsertImage(url)),
                    None => false,
                }
            }),
        }
    }
}

fn toggle(name: &str, icon: &str, title: &str, command: Command) -> FormattingAction {
    let query = command.name();
    FormattingAction::new(name, icon, title, move |host| host.exec(&command))
        .with_state(move |host| host.query_state(query))
}

fn block(name: &str, icon: &str, title: &str, tag: &'static str) -> FormattingAction {
    FormattingAction::new(name, icon, title, move |host| {
        host.exec(&Command::FormatBlock(tag.to_string()))
    })
}

fn prompt_url(host: &mut dyn EditingHost, message: &str) -> Option<String> {
    host.prompt(message).filter(|url| !url.trim().is_empty())
}

/// One entry of a configured action list
#[derive(Debug, Clone)]
pub enum ActionSpec {
    /// A built-in action referenced by name
    Named(String),
    /// A built-in action with some fields replaced, or a custom action
    Override(ActionOverride),
}

impl From<&str> for ActionSpec {
    fn from(name: &str) -> Self {
        ActionSpec::Named(name.to_string())
    }
}

impl From<BuiltinAction> for ActionSpec {
    fn from(action: BuiltinAction) -> Self {
        ActionSpec::Named(action.name().to_string())
    }
}

impl From<ActionOverride> for ActionSpec {
    fn from(over: ActionOverride) -> Self {
        ActionSpec::Override(over)
    }
}

/// Resolve a configured action list into concrete actions, keeping its order.
///
/// `None` enables [`BuiltinAction::DEFAULTS`]; an empty list enables nothing.
pub fn resolve_actions(
    specs: Option<&[ActionSpec]>,
) -> Result<Vec<FormattingAction>, EditorError> {
    let Some(specs) = specs else {
        return Ok(BuiltinAction::DEFAULTS
            .iter()
            .map(|action| action.action())
            .collect());
    };

    specs
        .iter()
        .map(|spec| match spec {
            ActionSpec::Named(name) => BuiltinAction::from_name(name)
                .map(BuiltinAction::action)
                .ok_or_else(|| EditorError::UnknownAction(name.clone())),
            ActionSpec::Override(over) => match BuiltinAction::from_name(over.name()) {
                Some(base) => {
                    debug!("overriding built-in action '{}'", over.name());
                    Ok(base.action().merged(over))
                }
                None => over.clone().into_custom(),
            },
        })
        .collect()
}
