//! The native editing surface the adapter drives
//!
//! Implementations bind these calls to a real content-editable region (for
//! instance through wasm bindings). The adapter never inspects markup beyond
//! what this trait exposes.

use crate::command::Command;

pub trait EditingHost {
    /// Execute a native command; returns whether the host applied it.
    fn exec(&mut self, command: &Command) -> bool;

    /// Whether a toggle command is active at the caret
    fn query_state(&self, command: &str) -> bool;

    /// The current value of a command at the caret (e.g. the block tag for `formatBlock`)
    fn query_value(&self, command: &str) -> String;

    /// The complete HTML of the editable region
    fn inner_html(&self) -> String;

    fn set_inner_html(&mut self, html: &str);

    /// Whether the region's first child is a bare text node
    fn first_child_is_text(&self) -> bool;

    /// Move keyboard focus into the editable region
    fn focus(&mut self);

    /// Ask the user for a line of text; `None` when cancelled.
    fn prompt(&mut self, _message: &str) -> Option<String> {
        None
    }
}
