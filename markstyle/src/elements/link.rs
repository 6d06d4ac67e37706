//! `[text](url)` links

use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::escape::is_escaped;
use crate::links::{raw_target, resolve_link};
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};
use crate::parser::ParserOptions;
use url::Url;

pub const LINK_PATTERN: &str = r"\[(?P<text>[^\[]*?)\]\((?P<url>[^\)]*)\)";

#[derive(Debug, Clone)]
pub struct Link {
    pattern: Pattern,
    attributes: Attributes,
    base_url: Option<Url>,
}

impl Link {
    pub fn new() -> Result<Self, ElementError> {
        let pattern = Pattern::compile(
            "link",
            LINK_PATTERN,
            PatternOptions::dot_matches_new_line(),
        )?
        .require("link", &[Role::LinkText, Role::LinkTarget])?;
        let mut link = Link {
            pattern,
            attributes: Attributes::new(),
            base_url: None,
        };
        link.configure(&ParserOptions::default());
        Ok(link)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The resolved target of `found`, if it has one.
    fn target(&self, found: &MatchResult, buffer: &StyledText) -> Option<Url> {
        buffer
            .slice(found.whole.clone())
            .and_then(raw_target)
            .and_then(|raw| resolve_link(raw, self.base_url.as_ref()))
    }
}

impl Element for Link {
    fn name(&self) -> &str {
        "link"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Link
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn should_apply(&self, found: &MatchResult, buffer: &StyledText) -> bool {
        let open = found.whole.start;
        let Some(text) = &found.link_text else {
            return false;
        };
        // `![..](..)` left over from the image element is not a link
        !is_escaped(buffer, open)
            && !is_escaped(buffer, text.end)
            && buffer.char_before(open) != Some('!')
            && self.target(found, buffer).is_some()
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        let (Some(text), Some(url)) = (found.link_text.clone(), self.target(found, buffer)) else {
            return;
        };

        buffer.delete_range(text.end..found.whole.end);
        buffer.delete_range(found.whole.start..text.start);

        let label = found.whole.start..found.whole.start + text.len();
        buffer.apply_attributes(&self.attributes.clone().with_link(url), label);
    }

    fn configure(&mut self, options: &ParserOptions) {
        let mut attributes = Attributes::new().with_font(options.style.font.clone());
        attributes.foreground = options.style.link_color;
        self.attributes = attributes;
        self.base_url = options.base_url.clone();
    }
}
