//! The editable surface: a toolbar bound to a native editing host
//!
//! The surface reacts to UI events delivered by the embedder on a single
//! thread:
//!
//! - `on_input` after every content mutation: enforces a block wrapper for
//!   bare text, normalizes the lone `<br>` placeholder to empty, then reports
//!   the full HTML through the change callback.
//! - `on_key_down`: Enter inside a quote queues a reversion of the new block
//!   to the paragraph container. The reversion must run after the host has
//!   inserted the block, so it is only executed by [`EditableSurface::run_deferred`],
//!   which the embedder calls on its next scheduler tick.
//! - `on_key_up`, `on_mouse_up`: refresh the selected state of every button
//!   with a state predicate.
//! - `click`: apply an action, focus the content when it applied, and refresh
//!   that button.

use crate::action::{resolve_actions, FormattingAction};
use crate::command::{Command, FORMAT_BLOCK};
use crate::config::{ChangeCallback, ClassNames, EditorConfiguration, DEFAULT_PARAGRAPH_SEPARATOR};
use crate::error::EditorError;
use crate::host::EditingHost;
use crate::toolbar::Toolbar;
use log::{debug, trace};
use std::collections::VecDeque;

/// Placeholder a host leaves behind when all content is deleted.
const EMPTY_PLACEHOLDER: &str = "<br>";
const QUOTE_BLOCK: &str = "blockquote";
const ENTER: &str = "Enter";

/// Work queued for the next scheduler tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    /// Turn the current block back into the paragraph container
    RevertBlock,
}

pub struct EditableSurface<H: EditingHost> {
    host: H,
    actions: Vec<FormattingAction>,
    toolbar: Toolbar,
    classes: ClassNames,
    paragraph_separator: String,
    on_change: ChangeCallback,
    deferred: VecDeque<DeferredTask>,
}

impl<H: EditingHost> EditableSurface<H> {
    /// Bind a configuration to a host and build the toolbar.
    pub fn initialize(config: EditorConfiguration, mut host: H) -> Result<Self, EditorError> {
        let actions = resolve_actions(config.actions.as_deref())?;
        let classes = ClassNames::default().merged(&config.classes);
        let paragraph_separator = config
            .default_paragraph_separator
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| DEFAULT_PARAGRAPH_SEPARATOR.to_string());
        let toolbar = Toolbar::build(&actions, &classes);

        if config.style_with_css == Some(true) {
            host.exec(&Command::StyleWithCss);
        }
        host.exec(&Command::DefaultParagraphSeparator(
            paragraph_separator.clone(),
        ));

        debug!(
            "editor initialized with {} actions, paragraph separator <{}>",
            actions.len(),
            paragraph_separator
        );

        Ok(EditableSurface {
            host,
            actions,
            toolbar,
            classes,
            paragraph_separator,
            on_change: config.on_change,
            deferred: VecDeque::new(),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    pub fn paragraph_separator(&self) -> &str {
        &self.paragraph_separator
    }

    pub fn actions(&self) -> &[FormattingAction] {
        &self.actions
    }

    /// Current HTML of the editable region
    pub fn html(&self) -> String {
        self.host.inner_html()
    }

    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    pub fn on_input(&mut self) {
        if self.host.first_child_is_text() {
            self.host
                .exec(&Command::FormatBlock(self.paragraph_separator.clone()));
        } else if self.host.inner_html() == EMPTY_PLACEHOLDER {
            self.host.set_inner_html("");
        }
        let html = self.host.inner_html();
        trace!("content changed ({} bytes)", html.len());
        (self.on_change)(&html);
    }

    pub fn on_key_down(&mut self, key: &str) {
        if key == ENTER && self.host.query_value(FORMAT_BLOCK) == QUOTE_BLOCK {
            debug!("enter inside a quote, reverting the next block");
            self.deferred.push_back(DeferredTask::RevertBlock);
        }
    }

    pub fn on_key_up(&mut self) {
        self.refresh_all();
    }

    pub fn on_mouse_up(&mut self) {
        self.refresh_all();
    }

    /// Press the toolbar button at `index`; returns whether the action applied.
    pub fn click(&mut self, index: usize) -> Result<bool, EditorError> {
        let action = self
            .actions
            .get(index)
            .ok_or(EditorError::NoSuchButton(index))?;
        let applied = action.apply(&mut self.host);
        if applied {
            self.host.focus();
        }
        self.refresh(index);
        Ok(applied)
    }

    /// Press the toolbar button for the named action.
    pub fn click_action(&mut self, name: &str) -> Result<bool, EditorError> {
        let index = self
            .toolbar
            .position(name)
            .ok_or_else(|| EditorError::UnknownAction(name.to_string()))?;
        self.click(index)
    }

    /// Run every task queued before this tick. Returns how many ran.
    pub fn run_deferred(&mut self) -> usize {
        let tasks: Vec<_> = self.deferred.drain(..).collect();
        for task in &tasks {
            match task {
                DeferredTask::RevertBlock => {
                    self.host
                        .exec(&Command::FormatBlock(self.paragraph_separator.clone()));
                }
            }
        }
        tasks.len()
    }

    fn refresh_all(&mut self) {
        for index in 0..self.actions.len() {
            self.refresh(index);
        }
    }

    fn refresh(&mut self, index: usize) {
        if let Some(active) = self.actions[index].is_active(&self.host) {
            self.toolbar.buttons[index].selected = active;
        }
    }
}
