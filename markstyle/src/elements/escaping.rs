//! Hiding code span content from inline elements, and restoring it
//!
//! [`CodeEscaping`] rewrites every character inside a `` `code` `` span as
//! `U+E000 <hex code point> U+E001`. Private-use sentinels and lowercase hex digits are not
//! markdown tokens, so bold, italic and links pass over the span. [`Unescaping`] runs last and
//! turns every sequence back into its character.
//!
//! Sentinels already present in the input are encoded as well, outside code spans and inside
//! escaped ones too, so that every sequence [`Unescaping`] sees was written by [`CodeEscaping`].

use super::common::{tokens_escaped, COMMON_ROLES};
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};
use std::fmt::Write;

pub const ENCODED_START: char = '\u{E000}';
pub const ENCODED_END: char = '\u{E001}';

/// A code span, or a lone sentinel character typed by the user
pub const CODE_ESCAPING_PATTERN: &str =
    r"(?P<lead>`)(?P<content>[^`\n]+)(?P<trail>`)|[\x{E000}\x{E001}]";

pub const UNESCAPING_PATTERN: &str = r"\x{E000}(?P<content>[0-9a-f]{1,6})\x{E001}";

/// Encodes every character of `text`.
pub fn encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 4);
    for ch in text.chars() {
        // Writing into a String cannot fail.
        let _ = write!(encoded, "{ENCODED_START}{:x}{ENCODED_END}", ch as u32);
    }
    encoded
}

/// Encodes only the sentinel characters of `text`.
pub fn encode_sentinels(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_sentinel(ch) {
            encoded.push_str(&encode(ch.encode_utf8(&mut [0; 4])));
        } else {
            encoded.push(ch);
        }
    }
    encoded
}

fn is_sentinel(ch: char) -> bool {
    ch == ENCODED_START || ch == ENCODED_END
}

/// Decodes the hex digits of one encoded sequence.
pub fn decode(hex: &str) -> Option<char> {
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

#[derive(Debug, Clone)]
pub struct CodeEscaping {
    pattern: Pattern,
}

impl CodeEscaping {
    pub fn new() -> Result<Self, ElementError> {
        let pattern =
            Pattern::compile("code_escaping", CODE_ESCAPING_PATTERN, PatternOptions::default())?
                .require("code_escaping", COMMON_ROLES)?;
        Ok(CodeEscaping { pattern })
    }
}

impl Element for CodeEscaping {
    fn name(&self) -> &str {
        "code_escaping"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Escaping
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn should_apply(&self, found: &MatchResult, buffer: &StyledText) -> bool {
        !tokens_escaped(found, buffer)
            || buffer
                .slice(found.whole.clone())
                .is_some_and(|text| text.contains(is_sentinel))
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        // A bare sentinel or an escaped span only gets its sentinels encoded.
        let (range, encoded) = match &found.content {
            Some(content) if !tokens_escaped(found, buffer) => {
                (content.clone(), buffer.slice(content.clone()).map(encode))
            }
            _ => (
                found.whole.clone(),
                buffer.slice(found.whole.clone()).map(encode_sentinels),
            ),
        };
        if let Some(encoded) = encoded {
            buffer.replace_range(range, &encoded);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Unescaping {
    pattern: Pattern,
}

impl Unescaping {
    pub fn new() -> Result<Self, ElementError> {
        let pattern =
            Pattern::compile("unescaping", UNESCAPING_PATTERN, PatternOptions::default())?
                .require("unescaping", &[Role::Content])?;
        Ok(Unescaping { pattern })
    }
}

impl Element for Unescaping {
    fn name(&self) -> &str {
        "unescaping"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Unescaping
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        let decoded = found
            .content
            .clone()
            .and_then(|content| buffer.slice(content))
            .and_then(decode);
        if let Some(ch) = decoded {
            buffer.replace_range(found.whole.clone(), ch.encode_utf8(&mut [0; 4]));
        }
    }
}
