//! Backslash escape detection

use crate::buffer::StyledText;
use std::ops::Range;

pub const ESCAPE_CHARACTER: char = '\\';

/// True when the character right before `position` is a backslash.
///
/// Position 0 and positions past the end are never escaped.
pub fn is_escaped(buffer: &StyledText, position: usize) -> bool {
    if position == 0 || position > buffer.len() {
        return false;
    }
    // A backslash is ASCII, so it can never be the tail byte of a wider character.
    buffer.text().as_bytes()[position - 1] == ESCAPE_CHARACTER as u8
}

/// True when the token at `range` is present and escaped.
pub fn is_token_escaped(buffer: &StyledText, range: Option<&Range<usize>>) -> bool {
    range.is_some_and(|range| is_escaped(buffer, range.start))
}
