//! Element trait definition and the scan-and-mutate pass
//!
//! An element owns a [`Pattern`] and knows how to mutate the buffer for one match of it. The
//! parser runs every element once, in pipeline order, through [`run_element`].
//!
//! # The scan loop
//!
//! An element does not collect its matches up front. It searches the live buffer, applies the
//! first match, then searches again from the end of that match shifted by however much the
//! mutation grew or shrank the buffer. Later matches of the same pass therefore always see the
//! effects of earlier ones, and a stale offset can never be applied.

use crate::buffer::StyledText;
use crate::matching::{MatchResult, Pattern};
use crate::parser::ParserOptions;
use std::ops::Range;
use tracing::trace;

/// The closed set of element variants the pipeline knows about
///
/// The kind drives the parser's gating toggles and lets callers inspect a pipeline without
/// downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Style-only inline markup (bold, italic, code)
    Common,
    /// `[text](url)`
    Link,
    /// Bare URLs, gated by automatic link detection
    AutomaticLink,
    /// `![alt](url)`
    Image,
    Header,
    /// Bullet lists, gated by automatic list conversion
    List,
    Quote,
    /// Hides markup from later elements
    Escaping,
    /// Restores what an escaping element hid
    Unescaping,
    /// Caller-defined behavior
    Custom,
}

impl ElementKind {
    /// Whether this kind performs a structural (line-level) rewrite.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            ElementKind::Header | ElementKind::List | ElementKind::Quote
        )
    }
}

/// Trait for pipeline elements
///
/// Implementors provide a pattern and a mutation. The default `should_apply` accepts every
/// match; elements that honor backslash escapes override it.
///
/// # Examples
///
/// ```ignore
/// struct Shout {
///     pattern: Pattern,
/// }
///
/// impl Element for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn pattern(&self) -> &Pattern {
///         &self.pattern
///     }
///
///     fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
///         let upper = buffer.text()[found.whole.clone()].to_uppercase();
///         buffer.replace_range(found.whole.clone(), &upper);
///     }
/// }
/// ```
pub trait Element: Send + Sync {
    /// Unique name within a pipeline (e.g. "bold", "link")
    fn name(&self) -> &str;

    fn kind(&self) -> ElementKind {
        ElementKind::Custom
    }

    fn pattern(&self) -> &Pattern;

    /// Decides whether `found` is mutated or left as literal text.
    fn should_apply(&self, _found: &MatchResult, _buffer: &StyledText) -> bool {
        true
    }

    /// Mutates `buffer` for one accepted match.
    fn apply(&self, found: &MatchResult, buffer: &mut StyledText);

    /// Re-derives the element's attributes and settings from `options`.
    ///
    /// Called when the element joins a parser and whenever the parser is restyled. Elements
    /// with no configurable style keep the default no-op.
    fn configure(&mut self, _options: &ParserOptions) {}
}

/// Match statistics of one element pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub matches: usize,
    pub applied: usize,
}

/// Runs one full scan-and-mutate pass of `element` over `buffer`.
pub fn run_element(element: &dyn Element, buffer: &mut StyledText) -> PassSummary {
    let mut summary = PassSummary::default();
    let mut location = 0;

    while location <= buffer.len() {
        let Some(found) = element.pattern().find_at(buffer.text(), location) else {
            break;
        };
        summary.matches += 1;

        let old_len = buffer.len();
        if element.should_apply(&found, buffer) {
            element.apply(&found, buffer);
            summary.applied += 1;
        } else {
            trace!(
                element = element.name(),
                start = found.whole.start,
                end = found.whole.end,
                "match left as literal text"
            );
        }
        location = resume_location(buffer, &found.whole, old_len);
    }

    summary
}

/// Where the next search of a pass starts, given the match just handled.
///
/// The end of the match is shifted by the change in buffer length. The search always moves
/// forward unless the buffer shrank, which bounds the loop.
fn resume_location(buffer: &StyledText, whole: &Range<usize>, old_len: usize) -> usize {
    let new_len = buffer.len();
    let shifted = (whole.end + new_len)
        .saturating_sub(old_len)
        .max(whole.start);

    let mut next = if shifted == whole.start && new_len >= old_len {
        whole.start + 1
    } else {
        shifted
    };
    while next < new_len && !buffer.text().is_char_boundary(next) {
        next += 1;
    }
    next
}
