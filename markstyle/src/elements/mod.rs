//! Built-in element implementations
//!
//! Each element lives in its own module. The default pipeline wires them up in this order:
//!
//!     escaping    code_escaping
//!     default     header, list, quote, code, image, link, automatic_link, bold,
//!                 underscore_bold, italic
//!     custom      (caller supplied)
//!     unescaping  unescaping
//!
//! Image runs before link so that `![alt](url)` is consumed before the link element can see its
//! `[alt](url)` tail. Code runs before bold and italic because its content is already hidden by
//! code escaping and only the backticks are left to strip.

pub mod automatic_link;
pub mod bold;
pub mod code;
pub mod common;
pub mod escaping;
pub mod header;
pub mod image;
pub mod italic;
pub mod link;
pub mod list;
pub mod quote;

pub use automatic_link::AutomaticLink;
pub use bold::Bold;
pub use code::Code;
pub use common::CommonElement;
pub use escaping::{CodeEscaping, Unescaping};
pub use header::Header;
pub use image::Image;
pub use italic::Italic;
pub use link::Link;
pub use list::List;
pub use quote::Quote;

/// Horizontal indent per nesting level of lists and quotes, in points
pub const INDENT_STEP: f32 = 12.0;
