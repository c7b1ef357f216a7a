//! Conversion of rich-text editor markup into messaging-app text
//!
//!     An editing surface reports its state as an HTML snapshot after every
//!     mutation. This crate turns such a snapshot into the plain-text emphasis
//!     dialect WhatsApp understands (`*bold*`, `_italic_`, `~strike~`).
//!
//!     This is a pure lib: it powers wamark-cli but is shell agnostic, that is
//!     no code should be written that supposes a shell environment, be it std
//!     print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── replace.rs              # Literal substitution
//!     ├── formats
//!     │   ├── html                # Snapshot passthrough
//!     │   └── whatsapp            # Relocation + marker substitution
//!     ├── transforms.rs           # Stage transforms for inspection
//!     ├── preview.rs              # Change-driven live conversion
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     The converter does not build a markup tree. Tags are literal substrings
//!     and the conversion is a fixed sequence of global substitutions: first
//!     whitespace is relocated outside every tag pair, then each tag collapses
//!     into its marker. See ./formats/whatsapp/mod.rs for the details and the
//!     exact ordering.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── whatsapp
//!         ├── scenarios.rs        # Worked examples
//!         └── properties.rs       # proptest invariants
pub mod error;
pub mod format;
pub mod formats;
pub mod preview;
pub mod registry;
pub mod replace;
pub mod transforms;

pub use error::FormatError;
pub use format::Format;
pub use formats::whatsapp::{convert_to_messaging_format, ConvertOptions, Relocation};
pub use preview::PreviewSession;
pub use registry::FormatRegistry;
