//! Bare URLs such as `https://x.test` or `www.x.test`
//!
//! The URL text stays in place and only gains the link attribute.

use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};
use crate::parser::ParserOptions;
use std::ops::Range;
use url::Url;

pub const AUTOMATIC_LINK_PATTERN: &str =
    r#"\b(?P<url>(?:https?|ftp)://[^\s<>"\[\]()]+|www\.[^\s<>"\[\]()]+)"#;

/// Punctuation that ends a sentence rather than a URL
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '*'];

#[derive(Debug, Clone)]
pub struct AutomaticLink {
    pattern: Pattern,
    attributes: Attributes,
}

impl AutomaticLink {
    pub fn new() -> Result<Self, ElementError> {
        let options = PatternOptions {
            case_insensitive: true,
            ..PatternOptions::default()
        };
        let pattern = Pattern::compile("automatic_link", AUTOMATIC_LINK_PATTERN, options)?
            .require("automatic_link", &[Role::LinkTarget])?;
        let mut automatic_link = AutomaticLink {
            pattern,
            attributes: Attributes::new(),
        };
        automatic_link.configure(&ParserOptions::default());
        Ok(automatic_link)
    }
}

/// The URL range of `found` without trailing punctuation.
fn trimmed_range(found: &MatchResult, buffer: &StyledText) -> Option<Range<usize>> {
    let range = found.link_target.clone()?;
    let text = buffer.slice(range.clone())?;
    let trimmed = text.trim_end_matches(TRAILING_PUNCTUATION);
    (!trimmed.is_empty()).then(|| range.start..range.start + trimmed.len())
}

/// Parses a detected URL, adding a scheme to `www.` hosts.
fn parse_detected(text: &str) -> Option<Url> {
    if text.contains("://") {
        Url::parse(text).ok()
    } else {
        Url::parse(&format!("http://{text}")).ok()
    }
}

impl Element for AutomaticLink {
    fn name(&self) -> &str {
        "automatic_link"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::AutomaticLink
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn should_apply(&self, found: &MatchResult, buffer: &StyledText) -> bool {
        let Some(range) = trimmed_range(found, buffer) else {
            return false;
        };
        buffer
            .attributes_in(range)
            .iter()
            .all(|(_, attributes)| attributes.link.is_none())
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        let Some(range) = trimmed_range(found, buffer) else {
            return;
        };
        let Some(url) = buffer.slice(range.clone()).and_then(parse_detected) else {
            return;
        };
        buffer.apply_attributes(&self.attributes.clone().with_link(url), range);
    }

    fn configure(&mut self, options: &ParserOptions) {
        let mut attributes = Attributes::new();
        attributes.foreground = options.style.link_color;
        self.attributes = attributes;
    }
}
