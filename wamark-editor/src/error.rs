//! Error types for editor initialization and toolbar interaction

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// An action was requested by a name with no built-in definition
    UnknownAction(String),
    /// A custom action override has no operation to apply
    IncompleteAction(String),
    /// A toolbar index outside the configured buttons
    NoSuchButton(usize),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::UnknownAction(name) => write!(f, "Unknown action '{name}'"),
            EditorError::IncompleteAction(name) => {
                write!(f, "Custom action '{name}' does not define an operation")
            }
            EditorError::NoSuchButton(index) => write!(f, "No toolbar button at index {index}"),
        }
    }
}

impl std::error::Error for EditorError {}
