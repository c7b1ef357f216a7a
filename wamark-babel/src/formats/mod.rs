//! Format implementations
//!
//! Each format converts between its own text and a content snapshot.

pub mod html;
pub mod whatsapp;

pub use html::HtmlFormat;
pub use whatsapp::{
    convert_to_messaging_format, ConvertOptions, EmphasisTag, Relocation, WhatsAppConverter,
    WhatsAppFormat, EMPHASIS_TAGS, NBSP,
};
