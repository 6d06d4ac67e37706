//! Shared behavior of token-delimited inline elements
//!
//! A common element matches `lead content trail`, strips both tokens and styles the content.
//! [`CommonElement`] is also the quickest way to build a custom element of that shape.

use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::escape::is_token_escaped;
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};

/// Roles every common element pattern must define
pub const COMMON_ROLES: &[Role] = &[Role::Leading, Role::Content, Role::Trailing];

/// True when the leading or the trailing token of `found` is escaped.
pub fn tokens_escaped(found: &MatchResult, buffer: &StyledText) -> bool {
    is_token_escaped(buffer, found.leading.as_ref())
        || is_token_escaped(buffer, found.trailing.as_ref())
}

/// Deletes the trailing token, styles the content, then deletes the leading token.
///
/// The order keeps every range of `found` valid while the buffer changes.
pub fn apply_tokens(found: &MatchResult, buffer: &mut StyledText, attributes: &Attributes) {
    let (Some(leading), Some(content), Some(trailing)) = (
        found.leading.clone(),
        found.content.clone(),
        found.trailing.clone(),
    ) else {
        return;
    };

    buffer.delete_range(trailing);
    buffer.apply_attributes(attributes, content);
    buffer.delete_range(leading);
}

/// A token-delimited element with fixed attributes
///
/// # Examples
///
/// ```ignore
/// let strike = CommonElement::new(
///     "strikethrough",
///     r"(?P<lead>~~)(?P<content>.+?)(?P<trail>~~)",
///     Attributes::new().with_foreground(Color::GRAY),
/// )?;
/// parser.add_custom_element(Box::new(strike));
/// ```
#[derive(Debug, Clone)]
pub struct CommonElement {
    name: String,
    pattern: Pattern,
    attributes: Attributes,
}

impl CommonElement {
    pub fn new(
        name: impl Into<String>,
        source: &str,
        attributes: Attributes,
    ) -> Result<Self, ElementError> {
        let name = name.into();
        let pattern = Pattern::compile(&name, source, PatternOptions::default())?
            .require(&name, COMMON_ROLES)?;
        Ok(CommonElement {
            name,
            pattern,
            attributes,
        })
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Element for CommonElement {
    fn name(&self) -> &str {
        &self.name
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
}
