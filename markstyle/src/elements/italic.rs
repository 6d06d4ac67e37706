//! `*italic*`
//!
//! A single asterisk is ambiguous: it also opens bullet list items and is half of a bold token.
//! The element therefore refuses a match that starts a line with `"* "`, and a match whose
//! tokens touch another asterisk.

use super::common::{apply_tokens, tokens_escaped, COMMON_ROLES};
use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions};
use crate::parser::ParserOptions;

pub const ITALIC_PATTERN: &str = r"(?P<lead>\*)(?P<content>[^*\n]+?)(?P<trail>\*)";

#[derive(Debug, Clone)]
pub struct Italic {
    pattern: Pattern,
    attributes: Attributes,
}

impl Italic {
    pub fn new() -> Result<Self, ElementError> {
        let pattern = Pattern::compile("italic", ITALIC_PATTERN, PatternOptions::default())?
            .require("italic", COMMON_ROLES)?;
        let mut italic = Italic {
            pattern,
            attributes: Attributes::new(),
        };
        italic.configure(&ParserOptions::default());
        Ok(italic)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// True for `"* "` at the start of the buffer or of a line.
fn looks_like_list_item(found: &MatchResult, buffer: &StyledText) -> bool {
    let starts_line = found.whole.start == 0 || buffer.char_before(found.whole.start) == Some('\n');
    starts_line
        && buffer
            .slice(found.whole.clone())
            .is_some_and(|text| text.starts_with("* "))
}

fn touches_asterisk(found: &MatchResult, buffer: &StyledText) -> bool {
    let before = found
        .leading
        .as_ref()
        .and_then(|lead| buffer.char_before(lead.start));
    let after = found
        .trailing
        .as_ref()
        .and_then(|trail| buffer.char_at(trail.end));
    before == Some('*') || after == Some('*')
}

impl Element for Italic {
    fn name(&self) -> &str {
        "italic"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Common
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn should_apply(&self, found: &MatchResult, buffer: &StyledText) -> bool {
        !tokens_escaped(found, buffer)
            && !looks_like_list_item(found, buffer)
            && !touches_asterisk(found, buffer)
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        apply_tokens(found, buffer, &self.attributes);
    }

    fn configure(&mut self, options: &ParserOptions) {
        self.attributes = Attributes::new().with_font(options.style.italic_font());
    }
}
