//! `> quoted` lines, nested up to six levels

use super::INDENT_STEP;
use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};
use crate::parser::ParserOptions;
use crate::style::BaseStyle;

pub const QUOTE_PATTERN: &str = r"^(?P<lead>>{1,6})[ \t]*(?P<content>.+)$";

pub const QUOTE_INDICATOR: &str = "  ";

#[derive(Debug, Clone)]
pub struct Quote {
    pattern: Pattern,
    style: BaseStyle,
}

impl Quote {
    pub fn new() -> Result<Self, ElementError> {
        let pattern = Pattern::compile("quote", QUOTE_PATTERN, PatternOptions::multi_line())?
            .require("quote", &[Role::Leading, Role::Content])?;
        let mut quote = Quote {
            pattern,
            style: BaseStyle::default(),
        };
        quote.configure(&ParserOptions::default());
        Ok(quote)
    }

    /// Attributes of a line quoted `level` times.
    pub fn attributes_for(&self, level: usize) -> Attributes {
        Attributes::new()
            .with_font(self.style.font.clone())
            .with_foreground(self.style.color)
            .with_paragraph(self.style.paragraph.indented(INDENT_STEP * level as f32))
    }
}

impl Element for Quote {
    fn name(&self) -> &str {
        "quote"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Quote
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        let (Some(leading), Some(content)) = (found.leading.clone(), found.content.clone()) else {
            return;
        };
        let level = leading.len();

        buffer.apply_attributes(&self.attributes_for(level), found.whole.clone());
        buffer.replace_range(leading.start..content.start, &QUOTE_INDICATOR.repeat(level));
    }

    fn configure(&mut self, options: &ParserOptions) {
        self.style = options.style.clone();
    }
}
