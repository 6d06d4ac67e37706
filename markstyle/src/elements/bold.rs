//! `**bold**` and `__bold__`

use super::common::{apply_tokens, tokens_escaped, COMMON_ROLES};
use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions};
use crate::parser::ParserOptions;

pub const BOLD_PATTERN: &str = r"(?P<lead>\*\*)(?P<content>.+?)(?P<trail>\*\*)";
pub const UNDERSCORE_BOLD_PATTERN: &str = r"(?P<lead>__)(?P<content>.+?)(?P<trail>__)";

/// Bold text between a pair of identical tokens
///
/// `**` and `__` are separate elements, each with its own pattern, so a token of one kind never
/// closes a span opened by the other.
#[derive(Debug, Clone)]
pub struct Bold {
    name: &'static str,
    pattern: Pattern,
    attributes: Attributes,
}

impl Bold {
    /// `**bold**`
    pub fn new() -> Result<Self, ElementError> {
        Self::with_pattern("bold", BOLD_PATTERN)
    }

    /// `__bold__`
    pub fn underscores() -> Result<Self, ElementError> {
        Self::with_pattern("underscore_bold", UNDERSCORE_BOLD_PATTERN)
    }

    fn with_pattern(name: &'static str, source: &str) -> Result<Self, ElementError> {
        let pattern = Pattern::compile(name, source, PatternOptions::default())?
            .require(name, COMMON_ROLES)?;
        let mut bold = Bold {
            name,
            pattern,
            attributes: Attributes::new(),
        };
        bold.configure(&ParserOptions::default());
        Ok(bold)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Element for Bold {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Common
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn should_apply(&self, found: &MatchResult, buffer: &StyledText) -> bool {
        !tokens_escaped(found, buffer)
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        apply_tokens(found, buffer, &self.attributes);
    }

    fn configure(&mut self, options: &ParserOptions) {
        self.attributes = Attributes::new().with_font(options.style.bold_font());
    }
}
