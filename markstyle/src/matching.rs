//! Compiled element patterns and their matches
//!
//! Elements name the parts of their grammar with named capture groups instead of relying on
//! group numbers:
//!
//! | group     | role                                   |
//! |-----------|----------------------------------------|
//! | `lead`    | leading markdown token (`**`, `#`, …)  |
//! | `content` | text that receives the element's style |
//! | `trail`   | trailing markdown token                |
//! | `text`    | link or image text                     |
//! | `url`     | raw link target                        |
//!
//! The roles are resolved once, when the [`Pattern`] is compiled. Each match is then turned
//! into a [`MatchResult`] holding plain byte ranges.

use crate::error::ElementError;
use regex::{Captures, Regex, RegexBuilder};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Leading,
    Content,
    Trailing,
    LinkText,
    LinkTarget,
}

impl Role {
    /// Name of the capture group carrying this role
    pub fn group_name(self) -> &'static str {
        match self {
            Role::Leading => "lead",
            Role::Content => "content",
            Role::Trailing => "trail",
            Role::LinkText => "text",
            Role::LinkTarget => "url",
        }
    }
}

/// Capture group index for each role a pattern defines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureRoles {
    pub leading: Option<usize>,
    pub content: Option<usize>,
    pub trailing: Option<usize>,
    pub link_text: Option<usize>,
    pub link_target: Option<usize>,
}

impl CaptureRoles {
    pub fn from_regex(regex: &Regex) -> Self {
        let index_of = |role: Role| {
            regex
                .capture_names()
                .position(|name| name == Some(role.group_name()))
        };
        CaptureRoles {
            leading: index_of(Role::Leading),
            content: index_of(Role::Content),
            trailing: index_of(Role::Trailing),
            link_text: index_of(Role::LinkText),
            link_target: index_of(Role::LinkTarget),
        }
    }

    pub fn index(&self, role: Role) -> Option<usize> {
        match role {
            Role::Leading => self.leading,
            Role::Content => self.content,
            Role::Trailing => self.trailing,
            Role::LinkText => self.link_text,
            Role::LinkTarget => self.link_target,
        }
    }

    pub fn has(&self, role: Role) -> bool {
        self.index(role).is_some()
    }
}

/// Regex flags an element can ask for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// `^` and `$` match at line boundaries
    pub multi_line: bool,
    /// `.` also matches `\n`
    pub dot_matches_new_line: bool,
    pub case_insensitive: bool,
    /// `\r\n` ends a line: `$` stops before the `\r` and `.` never matches it
    pub crlf: bool,
}

impl PatternOptions {
    pub fn multi_line() -> Self {
        PatternOptions {
            multi_line: true,
            crlf: true,
            ..Default::default()
        }
    }

    pub fn dot_matches_new_line() -> Self {
        PatternOptions {
            dot_matches_new_line: true,
            ..Default::default()
        }
    }
}

/// A compiled regex together with its resolved capture roles
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    roles: CaptureRoles,
}

impl Pattern {
    /// Compiles `source` for the element called `element`.
    pub fn compile(
        element: &str,
        source: &str,
        options: PatternOptions,
    ) -> Result<Self, ElementError> {
        let regex = RegexBuilder::new(source)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .case_insensitive(options.case_insensitive)
            .crlf(options.crlf)
            .build()
            .map_err(|err| ElementError::InvalidPattern {
                element: element.to_string(),
                message: err.to_string(),
            })?;
        let roles = CaptureRoles::from_regex(&regex);
        Ok(Pattern { regex, roles })
    }

    /// Fails unless every role in `required` has a capture group.
    pub fn require(self, element: &str, required: &[Role]) -> Result<Self, ElementError> {
        match required.iter().find(|role| !self.roles.has(**role)) {
            Some(role) => Err(ElementError::MissingCapture {
                element: element.to_string(),
                group: role.group_name(),
            }),
            None => Ok(self),
        }
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn roles(&self) -> &CaptureRoles {
        &self.roles
    }

    /// First match starting at or after `start`.
    ///
    /// Anchors and word boundaries still see the text before `start`, so `^` only matches at a
    /// real line start.
    pub fn find_at(&self, haystack: &str, start: usize) -> Option<MatchResult> {
        self.regex
            .captures_at(haystack, start)
            .map(|captures| MatchResult::from_captures(&captures, &self.roles))
    }
}

/// Byte ranges of one match, valid against the buffer it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub whole: Range<usize>,
    pub leading: Option<Range<usize>>,
    pub content: Option<Range<usize>>,
    pub trailing: Option<Range<usize>>,
    pub link_text: Option<Range<usize>>,
    pub link_target: Option<Range<usize>>,
}

impl MatchResult {
    pub fn from_captures(captures: &Captures<'_>, roles: &CaptureRoles) -> Self {
        let range_of = |index: Option<usize>| {
            index
                .and_then(|index| captures.get(index))
                .map(|group| group.range())
        };
        MatchResult {
            whole: captures.get(0).map(|m| m.range()).unwrap_or_default(),
            leading: range_of(roles.leading),
            content: range_of(roles.content),
            trailing: range_of(roles.trailing),
            link_text: range_of(roles.link_text),
            link_target: range_of(roles.link_target),
        }
    }

    /// A match covering `whole` with no role ranges.
    pub fn new(whole: Range<usize>) -> Self {
        MatchResult {
            whole,
            leading: None,
            content: None,
            trailing: None,
            link_text: None,
            link_target: None,
        }
    }

    pub fn role(&self, role: Role) -> Option<Range<usize>> {
        match role {
            Role::Leading => self.leading.clone(),
            Role::Content => self.content.clone(),
            Role::Trailing => self.trailing.clone(),
            Role::LinkText => self.link_text.clone(),
            Role::LinkTarget => self.link_target.clone(),
        }
    }
}
