//! `` `inline code` ``

use super::common::{apply_tokens, tokens_escaped, COMMON_ROLES};
use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions};
use crate::parser::ParserOptions;

pub const CODE_PATTERN: &str = r"(?P<lead>`)(?P<content>[^`\n]+)(?P<trail>`)";

/// Strips backticks and sets the code font
///
/// By the time this element runs the content has usually been hidden by
/// [`super::CodeEscaping`], so other inline elements never see markup inside a code span.
#[derive(Debug, Clone)]
pub struct Code {
    pattern: Pattern,
    attributes: Attributes,
}

impl Code {
    pub fn new() -> Result<Self, ElementError> {
        let pattern = Pattern::compile("code", CODE_PATTERN, PatternOptions::default())?
            .require("code", COMMON_ROLES)?;
        let mut code = Code {
            pattern,
            attributes: Attributes::new(),
        };
        code.configure(&ParserOptions::default());
        Ok(code)
    }
}

impl Element for Code {
    fn name(&self) -> &str {
        "code"
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
        self.attributes = Attributes::new().with_font(options.style.code_font());
    }
}
