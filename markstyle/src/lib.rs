//! Markdown-flavored text to styled text
//!
//!     markstyle turns lightweight markup (bold, italic, code, headers, lists, quotes, links,
//!     images and bare URLs) into a [`StyledText`]: a string plus runs of abstract attributes
//!     (font, colors, paragraph style, link target, inline attachment). It does not render,
//!     lay out or draw; hosts map the attributes onto their own text system.
//!
//!     This is a pure lib: no I/O, no global state, no installed tracing subscriber.
//!
//! Architecture
//!
//!     Parsing is a pipeline of independent elements. Each element owns one regex and knows how
//!     to rewrite a single match of it. The parser runs every element once, in order, over the
//!     same buffer:
//!
//!         input --&nbsp;--> base attributes --> escaping --> default --> custom --> unescaping
//!
//!     An element re-scans the *live* buffer for every match, so each mutation sees the effect
//!     of the previous one (see ./element.rs for the scan loop). Element attributes are derived
//!     from a [`BaseStyle`] and re-derived explicitly through [`Parser::restyle`].
//!
//!     The file structure:
//!     .
//!     ├── style.rs           # Font, Color, ParagraphStyle, BaseStyle
//!     ├── attributes.rs      # The mergeable attribute set
//!     ├── attachment.rs      # Attachments and the renderer seam
//!     ├── buffer.rs          # StyledText: text + coalesced attribute runs
//!     ├── escape.rs          # Backslash escape detection
//!     ├── matching.rs        # Patterns, capture roles, match results
//!     ├── links.rs           # Link target resolution
//!     ├── element.rs         # Element trait and the scan loop
//!     ├── elements           # Built-in elements, one per file
//!     ├── pipeline.rs        # Phased element pipeline
//!     └── parser.rs          # ParserOptions and Parser
//!
//! Testing
//!     tests
//!     ├── lib.rs             # pulls in the topic modules below
//!     ├── common             # run dump helpers for snapshots
//!     ├── inline
//!     ├── links
//!     ├── blocks
//!     ├── pipeline
//!     └── properties         # proptest invariants
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Positions
//!
//!     Every position and range is a byte offset into the UTF-8 text, always on a character
//!     boundary. Buffer operations clamp ranges to the text and ignore ranges that would split a
//!     character.

pub mod attachment;
pub mod attributes;
pub mod buffer;
pub mod element;
pub mod elements;
pub mod error;
pub mod escape;
pub mod links;
pub mod matching;
pub mod parser;
pub mod pipeline;
pub mod style;

pub use attachment::{
    Attachment, AttachmentHandle, AttachmentRenderer, RenderedAttachment,
    OBJECT_REPLACEMENT_CHARACTER,
};
pub use attributes::Attributes;
pub use buffer::{Run, StyledText};
pub use element::{run_element, Element, ElementKind, PassSummary};
pub use error::{ColorParseError, ElementError};
pub use matching::{MatchResult, Pattern, PatternOptions, Role};
pub use parser::{Parser, ParserOptions};
pub use pipeline::{ElementPipeline, Phase};
pub use style::{BaseStyle, Color, Font, FontWeight, ParagraphStyle, Size};
pub use url;

/// Parses `markdown` with a default [`Parser`].
pub fn parse(markdown: &str) -> Result<StyledText, ElementError> {
    Ok(Parser::new()?.parse(markdown))
}
