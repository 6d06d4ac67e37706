//! Bullet list items
//!
//! `* item`, `+ item` and `- item` lines become `• item`. Every two leading spaces nest the item
//! one level deeper; the depth is rendered both as leading spaces and as a paragraph indent.

use super::INDENT_STEP;
use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};
use crate::parser::ParserOptions;
use crate::style::ParagraphStyle;

pub const LIST_PATTERN: &str = r"^(?P<lead> {0,10}[*+-])[ \t]+(?P<content>.+)$";

pub const LIST_INDICATOR: &str = "•";
pub const LIST_SEPARATOR: &str = "  ";

#[derive(Debug, Clone)]
pub struct List {
    pattern: Pattern,
    paragraph: ParagraphStyle,
}

impl List {
    pub fn new() -> Result<Self, ElementError> {
        let pattern = Pattern::compile("list", LIST_PATTERN, PatternOptions::multi_line())?
            .require("list", &[Role::Leading, Role::Content])?;
        let mut list = List {
            pattern,
            paragraph: ParagraphStyle::default(),
        };
        list.configure(&ParserOptions::default());
        Ok(list)
    }
}

/// Nesting depth of a marker such as `"   *"`, starting at 1.
pub fn depth(marker: &str) -> usize {
    let spaces = marker.len() - marker.trim_start_matches(' ').len();
    spaces / 2 + 1
}

/// Text that replaces the marker and its blanks.
pub fn bullet_prefix(depth: usize) -> String {
    format!("{}{LIST_INDICATOR} ", LIST_SEPARATOR.repeat(depth))
}

impl Element for List {
    fn name(&self) -> &str {
        "list"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::List
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        let (Some(leading), Some(content)) = (found.leading.clone(), found.content.clone()) else {
            return;
        };
        let Some(level) = buffer.slice(leading.clone()).map(depth) else {
            return;
        };

        let paragraph = self.paragraph.indented(INDENT_STEP * level as f32);
        buffer.apply_attributes(
            &Attributes::new().with_paragraph(paragraph),
            found.whole.clone(),
        );
        buffer.replace_range(leading.start..content.start, &bullet_prefix(level));
    }

    fn configure(&mut self, options: &ParserOptions) {
        self.paragraph = options.style.paragraph.clone();
    }
}
