//! Styled text buffer
//!
//! [`StyledText`] is a UTF-8 string plus a run-length-encoded list of [`Attributes`]. Runs
//! always cover exactly the text: their lengths sum to `text.len()`, no run is empty, and two
//! adjacent runs never carry equal attributes.
//!
//! Positions are byte offsets into the text. Every mutation takes a range, normalizes it (clamps
//! it to the buffer and rejects ranges that split a character) and then edits text and runs in
//! one step, so ranges computed *after* a mutation are always consistent. Ranges computed
//! *before* a mutation are the caller's business: the elements delete trailing markup before
//! leading markup so the earlier offsets of a match stay valid.

use crate::attributes::Attributes;
use std::fmt;
use std::ops::Range;
use tracing::trace;

/// A maximal span of text sharing one attribute set
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    len: usize,
    attributes: Attributes,
}

impl Run {
    pub fn new(len: usize, attributes: Attributes) -> Self {
        Run { len, attributes }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Mutable text with attribute runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    text: String,
    runs: Vec<Run>,
}

impl StyledText {
    /// Plain text with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_attributes(text, Attributes::default())
    }

    /// Text carrying `attributes` over its whole length.
    pub fn with_attributes(text: impl Into<String>, attributes: Attributes) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run::new(text.len(), attributes)]
        };
        StyledText { text, runs }
    }

    /// Appends `text` carrying `attributes`.
    pub fn push(&mut self, text: &str, attributes: Attributes) {
        let end = self.len();
        self.splice(end..end, text, attributes);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Iterates runs together with the byte range each one covers.
    pub fn attributed_ranges(&self) -> impl Iterator<Item = (Range<usize>, &Attributes)> + '_ {
        let mut offset = 0;
        self.runs.iter().map(move |run| {
            let range = offset..offset + run.len;
            offset = range.end;
            (range, &run.attributes)
        })
    }

    /// Attributes of the byte at `position`, `None` past the end.
    pub fn attributes_at(&self, position: usize) -> Option<&Attributes> {
        self.attributed_ranges()
            .find(|(range, _)| range.contains(&position))
            .map(|(_, attributes)| attributes)
    }

    /// Runs overlapping `range`, clipped to it.
    pub fn attributes_in(&self, range: Range<usize>) -> Vec<(Range<usize>, &Attributes)> {
        self.attributed_ranges()
            .filter(|(run, _)| run.start < range.end && range.start < run.end)
            .map(|(run, attributes)| {
                (
                    run.start.max(range.start)..run.end.min(range.end),
                    attributes,
                )
            })
            .collect()
    }

    pub fn slice(&self, range: Range<usize>) -> Option<&str> {
        self.text.get(range)
    }

    /// The character ending right before `position`.
    pub fn char_before(&self, position: usize) -> Option<char> {
        self.text.get(..position)?.chars().next_back()
    }

    /// The character starting at `position`.
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.text.get(position..)?.chars().next()
    }

    /// Removes the characters in `range`.
    pub fn delete_range(&mut self, range: Range<usize>) {
        if let Some(range) = self.normalize(range) {
            self.splice(range, "", Attributes::default());
        }
    }

    /// Replaces `range` with `text`, which inherits the attributes found at `range.start`.
    ///
    /// For an empty range the inserted text inherits from the preceding character, or from the
    /// first character when inserting at the very start.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) {
        if let Some(range) = self.normalize(range) {
            let attributes = self.inherited_attributes(&range);
            self.splice(range, text, attributes);
        }
    }

    /// Replaces `range` with `text` carrying exactly `attributes`.
    pub fn replace_with_run(&mut self, range: Range<usize>, text: &str, attributes: Attributes) {
        if let Some(range) = self.normalize(range) {
            self.splice(range, text, attributes);
        }
    }

    /// Inserts `text` at `position`, inheriting the surrounding attributes.
    pub fn insert(&mut self, position: usize, text: &str) {
        self.replace_range(position..position, text);
    }

    /// Merges `attributes` onto every run inside `range`.
    pub fn apply_attributes(&mut self, attributes: &Attributes, range: Range<usize>) {
        let Some(range) = self.normalize(range) else {
            return;
        };
        if range.is_empty() || attributes.is_empty() {
            return;
        }

        let mut runs = Vec::with_capacity(self.runs.len() + 2);
        let mut offset = 0;
        for run in self.runs.drain(..) {
            let start = offset;
            let end = offset + run.len;
            offset = end;

            if end <= range.start || start >= range.end {
                runs.push(run);
                continue;
            }

            let inner_start = start.max(range.start);
            let inner_end = end.min(range.end);
            if inner_start > start {
                runs.push(Run::new(inner_start - start, run.attributes.clone()));
            }
            runs.push(Run::new(
                inner_end - inner_start,
                run.attributes.merged(attributes),
            ));
            if end > inner_end {
                runs.push(Run::new(end - inner_end, run.attributes));
            }
        }
        self.runs = coalesce(runs);
    }

    /// Clamps `range` to the buffer. Ranges splitting a character are rejected.
    fn normalize(&self, range: Range<usize>) -> Option<Range<usize>> {
        let len = self.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if self.text.is_char_boundary(start) && self.text.is_char_boundary(end) {
            Some(start..end)
        } else {
            trace!(start, end, "range splits a character, ignoring");
            None
        }
    }

    fn inherited_attributes(&self, range: &Range<usize>) -> Attributes {
        let position = if !range.is_empty() || range.start == 0 {
            range.start
        } else {
            range.start - 1
        };
        self.attributes_at(position)
            .or_else(|| self.runs.last().map(|run| &run.attributes))
            .cloned()
            .unwrap_or_default()
    }

    /// Replaces text and runs in `range` (already normalized) in one step.
    fn splice(&mut self, range: Range<usize>, text: &str, attributes: Attributes) {
        let mut head = Vec::with_capacity(self.runs.len() + 1);
        let mut tail = Vec::new();
        let mut offset = 0;
        for run in self.runs.drain(..) {
            let start = offset;
            let end = offset + run.len;
            offset = end;

            if start < range.start {
                head.push(Run::new(end.min(range.start) - start, run.attributes.clone()));
            }
            if end > range.end {
                tail.push(Run::new(end - start.max(range.end), run.attributes));
            }
        }

        head.push(Run::new(text.len(), attributes));
        head.extend(tail);

        self.text.replace_range(range, text);
        self.runs = coalesce(head);
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::new(text)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Drops empty runs and joins neighbours with equal attributes.
fn coalesce(runs: Vec<Run>) -> Vec<Run> {
    let mut coalesced: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.len == 0 {
            continue;
        }
        match coalesced.last_mut() {
            Some(last) if last.attributes == run.attributes => last.len += run.len,
            _ => coalesced.push(run),
        }
    }
    coalesced
}
