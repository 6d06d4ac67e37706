//! `![alt](url)` images
//!
//! The whole match collapses into a single [`OBJECT_REPLACEMENT_CHARACTER`] carrying an
//! [`Attachment`]. What the attachment holds depends on the host's [`AttachmentRenderer`];
//! without one, or when it cannot resolve the URL, the attachment is an empty placeholder.

use crate::attachment::{Attachment, AttachmentRenderer, OBJECT_REPLACEMENT_CHARACTER};
use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{Element, ElementKind};
use crate::error::ElementError;
use crate::escape::is_escaped;
use crate::links::{raw_target, resolve_link};
use crate::matching::{MatchResult, Pattern, PatternOptions, Role};
use crate::parser::ParserOptions;
use crate::style::Size;
use std::fmt;
use std::sync::Arc;
use url::Url;

pub const IMAGE_PATTERN: &str = r"!\[(?P<text>[^\[]*?)\]\((?P<url>[^\)]*)\)";

#[derive(Clone)]
pub struct Image {
    pattern: Pattern,
    attributes: Attributes,
    base_url: Option<Url>,
    max_size: Option<Size>,
    renderer: Option<Arc<dyn AttachmentRenderer>>,
}

impl Image {
    pub fn new() -> Result<Self, ElementError> {
        let pattern = Pattern::compile(
            "image",
            IMAGE_PATTERN,
            PatternOptions::dot_matches_new_line(),
        )?
        .require("image", &[Role::LinkText, Role::LinkTarget])?;
        let mut image = Image {
            pattern,
            attributes: Attributes::new(),
            base_url: None,
            max_size: None,
            renderer: None,
        };
        image.configure(&ParserOptions::default());
        Ok(image)
    }

    fn attachment_for(&self, url: Option<&Url>) -> Attachment {
        let rendered = url.zip(self.renderer.as_ref()).and_then(|(url, renderer)| {
            renderer
                .resolve(url)
                .map(|rendered| Attachment::rendered(Some(url.clone()), rendered, self.max_size))
        });
        rendered.unwrap_or_else(|| Attachment::placeholder(url.cloned()))
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("pattern", &self.pattern)
            .field("attributes", &self.attributes)
            .field("base_url", &self.base_url)
            .field("max_size", &self.max_size)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl Element for Image {
    fn name(&self) -> &str {
        "image"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Image
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn should_apply(&self, found: &MatchResult, buffer: &StyledText) -> bool {
        let closing_escaped = found
            .link_text
            .as_ref()
            .is_some_and(|text| is_escaped(buffer, text.end));
        !is_escaped(buffer, found.whole.start) && !closing_escaped
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        let url = buffer
            .slice(found.whole.clone())
            .and_then(raw_target)
            .and_then(|raw| resolve_link(raw, self.base_url.as_ref()));
        let attachment = self.attachment_for(url.as_ref());

        let placeholder = OBJECT_REPLACEMENT_CHARACTER.to_string();
        buffer.replace_with_run(
            found.whole.clone(),
            &placeholder,
            Attributes::new().with_attachment(attachment),
        );

        let mut attributes = self.attributes.clone();
        attributes.link = url;
        let start = found.whole.start;
        buffer.apply_attributes(&attributes, start..start + placeholder.len());
    }

    fn configure(&mut self, options: &ParserOptions) {
        let style = &options.style;
        self.attributes = Attributes::new()
            .with_font(style.font.clone())
            .with_foreground(style.color)
            .with_background(style.background)
            .with_paragraph(style.paragraph.clone());
        self.base_url = options.base_url.clone();
        self.max_size = options.max_image_size;
        self.renderer = options.attachment_renderer.clone();
    }
}
