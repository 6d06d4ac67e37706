//! The mergeable attribute set carried by every run of styled text

use crate::attachment::Attachment;
use crate::style::{Color, Font, ParagraphStyle};
use url::Url;

/// A set of style attributes, each one optional
///
/// Merging is additive and last-writer-wins per key: merging `other` into `self` overwrites only
/// the keys `other` sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pub font: Option<Font>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub paragraph: Option<ParagraphStyle>,
    pub link: Option<Url>,
    pub attachment: Option<Attachment>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_paragraph(mut self, paragraph: ParagraphStyle) -> Self {
        self.paragraph = Some(paragraph);
        self
    }

    pub fn with_link(mut self, link: Url) -> Self {
        self.link = Some(link);
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// True when no key is set.
    pub fn is_empty(&self) -> bool {
        self == &Attributes::default()
    }

    /// Overwrites every key that `other` sets.
    pub fn merge(&mut self, other: &Attributes) {
        if let Some(font) = &other.font {
            self.font = Some(font.clone());
        }
        if let Some(color) = other.foreground {
            self.foreground = Some(color);
        }
        if let Some(color) = other.background {
            self.background = Some(color);
        }
        if let Some(paragraph) = &other.paragraph {
            self.paragraph = Some(paragraph.clone());
        }
        if let Some(link) = &other.link {
            self.link = Some(link.clone());
        }
        if let Some(attachment) = &other.attachment {
            self.attachment = Some(attachment.clone());
        }
    }

    /// Returns a copy of `self` with `other` merged on top.
    pub fn merged(&self, other: &Attributes) -> Attributes {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }
}
