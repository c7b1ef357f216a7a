//! Rich-text editing surface adapter
//!
//! Binds a configuration to a native content-editable host: a toolbar with
//! one button per formatting action, live selected state that follows the
//! caret, and a change callback that receives the complete HTML after every
//! mutation. The native editing behavior itself (selection, caret, command
//! execution) belongs to the host, reached through [`EditingHost`].
//!
//! ```ignore
//! let config = EditorConfiguration::new(|html| preview.on_change(html))
//!     .default_paragraph_separator("p");
//! let mut surface = EditableSurface::initialize(config, host)?;
//! surface.click_action("bold")?;
//! ```

pub mod action;
pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod surface;
pub mod toolbar;

#[cfg(test)]
mod testing;

pub use action::{ActionOverride, ActionSpec, BuiltinAction, FormattingAction};
pub use command::Command;
pub use config::{ClassNames, ClassOverrides, EditorConfiguration};
pub use error::EditorError;
pub use host::EditingHost;
pub use surface::{DeferredTask, EditableSurface};
pub use toolbar::{Toolbar, ToolbarButton};
