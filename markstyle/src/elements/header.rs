//! `# Header` lines, levels 1 through 6

use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};
use crate::parser::ParserOptions;
use crate::style::BaseStyle;

pub const HEADER_PATTERN: &str = r"^(?P<lead>#{1,6})[ \t]*(?P<content>.+)$";

pub const MAX_LEVEL: usize = 6;

/// Points added to the base size for a level 1 header
const LEVEL_ONE_INCREMENT: f32 = 4.0;
/// Points removed for each level below 1
const LEVEL_DECREMENT: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Header {
    pattern: Pattern,
    /// Attributes per level, index 0 is level 1
    levels: Vec<Attributes>,
}

/// Bold base font, larger for higher levels, never below 1pt.
fn level_attributes(style: &BaseStyle, level: usize) -> Attributes {
    let size = style.font.size + LEVEL_ONE_INCREMENT - LEVEL_DECREMENT * (level as f32 - 1.0);
    Attributes::new().with_font(style.bold_font().with_size(size.max(1.0)))
}

impl Header {
    pub fn new() -> Result<Self, ElementError> {
        let pattern = Pattern::compile("header", HEADER_PATTERN, PatternOptions::multi_line())?
            .require("header", &[Role::Leading, Role::Content])?;
        let mut header = Header {
            pattern,
            levels: Vec::new(),
        };
        header.configure(&ParserOptions::default());
        Ok(header)
    }

    /// Attributes applied to a header of `level`, clamped to 1..=6.
    pub fn attributes_for(&self, level: usize) -> &Attributes {
        &self.levels[level.clamp(1, MAX_LEVEL) - 1]
    }
}

impl Element for Header {
    fn name(&self) -> &str {
        "header"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Header
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        let (Some(leading), Some(content)) = (found.leading.clone(), found.content.clone()) else {
            return;
        };
        buffer.apply_attributes(self.attributes_for(leading.len()), content.clone());
        buffer.delete_range(leading.start..content.start);
    }

    fn configure(&mut self, options: &ParserOptions) {
        self.levels = (1..=MAX_LEVEL)
            .map(|level| level_attributes(&options.style, level))
            .collect();
    }
}
