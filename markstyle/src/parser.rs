//! Parser: options, element pipeline and the parse entry points

use crate::attachment::AttachmentRenderer;
use crate::attributes::Attributes;
use crate::buffer::StyledText;
use crate::element::{run_element, Element, ElementKind};
use crate::error::ElementError;
use crate::pipeline::{restyle, ElementPipeline};
use crate::style::{BaseStyle, Size};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Entity normalized to a plain space before any element runs
pub const NON_BREAKING_SPACE_ENTITY: &str = "&nbsp;";

/// Everything that shapes a parse apart from the custom elements
#[derive(Clone)]
pub struct ParserOptions {
    pub style: BaseStyle,
    /// Images are scaled down to fit within this size
    pub max_image_size: Option<Size>,
    /// Relative link and image targets are joined onto this URL
    pub base_url: Option<Url>,
    /// Link bare `http://`, `ftp://` and `www.` URLs
    pub automatic_link_detection: bool,
    /// Turn `* item` lines into bullets
    pub automatic_list_conversion: bool,
    pub attachment_renderer: Option<Arc<dyn AttachmentRenderer>>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            style: BaseStyle::default(),
            max_image_size: None,
            base_url: None,
            automatic_link_detection: true,
            automatic_list_conversion: true,
            attachment_renderer: None,
        }
    }
}

impl ParserOptions {
    /// Attributes every character starts out with
    pub fn base_attributes(&self) -> Attributes {
        Attributes::new()
            .with_font(self.style.font.clone())
            .with_foreground(self.style.color)
            .with_background(self.style.background)
            .with_paragraph(self.style.paragraph.clone())
    }

    /// Whether elements of `kind` take part in a parse under these options.
    pub fn enables(&self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::AutomaticLink => self.automatic_link_detection,
            ElementKind::List => self.automatic_list_conversion,
            _ => true,
        }
    }
}

impl fmt::Debug for ParserOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserOptions")
            .field("style", &self.style)
            .field("max_image_size", &self.max_image_size)
            .field("base_url", &self.base_url)
            .field("automatic_link_detection", &self.automatic_link_detection)
            .field("automatic_list_conversion", &self.automatic_list_conversion)
            .field("attachment_renderer", &self.attachment_renderer.is_some())
            .finish()
    }
}

/// Markdown-flavored text to [`StyledText`]
///
/// Parsing borrows the parser immutably, so one parser can serve concurrent parses. Every
/// setter takes `&mut self` and reconfigures the affected elements before returning.
///
/// # Examples
///
/// ```ignore
/// let parser = Parser::new()?;
/// let styled = parser.parse("**Hello** [world](https://x.test)");
/// assert_eq!(styled.text(), "Hello world");
/// ```
#[derive(Debug)]
pub struct Parser {
    options: ParserOptions,
    pipeline: ElementPipeline,
}

impl Parser {
    /// A parser with the default options and elements.
    pub fn new() -> Result<Self, ElementError> {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Result<Self, ElementError> {
        let pipeline = ElementPipeline::with_defaults(&options)?;
        Ok(Parser { options, pipeline })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn pipeline(&self) -> &ElementPipeline {
        &self.pipeline
    }

    /// Direct access to the pipeline.
    ///
    /// Elements pushed through this handle are not configured; call [`Parser::reconfigure`]
    /// afterwards to bring them in line with the current options.
    pub fn pipeline_mut(&mut self) -> &mut ElementPipeline {
        &mut self.pipeline
    }

    /// Configures `element` from the current options and appends it to the custom phase.
    pub fn add_custom_element(&mut self, mut element: Box<dyn Element>) {
        element.configure(&self.options);
        self.pipeline.add_custom(element);
    }

    /// Like [`Parser::add_custom_element`], at position `index` among the custom elements.
    pub fn insert_custom_element(&mut self, index: usize, mut element: Box<dyn Element>) {
        element.configure(&self.options);
        self.pipeline.insert_custom(index, element);
    }

    pub fn remove_custom_element(&mut self, name: &str) -> Option<Box<dyn Element>> {
        self.pipeline.remove_custom(name)
    }

    pub fn set_automatic_link_detection(&mut self, enabled: bool) {
        self.options.automatic_link_detection = enabled;
    }

    pub fn set_automatic_list_conversion(&mut self, enabled: bool) {
        self.options.automatic_list_conversion = enabled;
    }

    pub fn set_attachment_renderer(&mut self, renderer: Option<Arc<dyn AttachmentRenderer>>) {
        self.options.attachment_renderer = renderer;
        restyle(&mut self.pipeline, &self.options);
    }

    pub fn set_max_image_size(&mut self, size: Option<Size>) {
        self.options.max_image_size = size;
        restyle(&mut self.pipeline, &self.options);
    }

    pub fn set_base_url(&mut self, base_url: Option<Url>) {
        self.options.base_url = base_url;
        restyle(&mut self.pipeline, &self.options);
    }

    /// Replaces the base style and re-derives every element's attributes from it.
    pub fn restyle(&mut self, style: BaseStyle) {
        self.options.style = style;
        restyle(&mut self.pipeline, &self.options);
    }

    /// Replaces all options and reconfigures every element.
    pub fn reconfigure(&mut self, options: ParserOptions) {
        self.options = options;
        restyle(&mut self.pipeline, &self.options);
    }

    /// Parses plain markdown-flavored text.
    pub fn parse(&self, markdown: &str) -> StyledText {
        self.parse_styled(StyledText::new(markdown))
    }

    /// Parses text that may already carry attributes.
    ///
    /// The base attributes are merged over the existing ones before any element runs.
    pub fn parse_styled(&self, input: StyledText) -> StyledText {
        let mut buffer = input;
        normalize_entities(&mut buffer);

        let full = 0..buffer.len();
        buffer.apply_attributes(&self.options.base_attributes(), full);

        for (phase, element) in self.pipeline.iter() {
            if !self.options.enables(element.kind()) {
                debug!(element = element.name(), "element disabled, skipping");
                continue;
            }
            let summary = run_element(element, &mut buffer);
            debug!(
                element = element.name(),
                ?phase,
                matches = summary.matches,
                applied = summary.applied,
                "element pass finished"
            );
        }

        buffer
    }
}

/// Replaces every `&nbsp;` with a space.
fn normalize_entities(buffer: &mut StyledText) {
    while let Some(position) = buffer.text().find(NON_BREAKING_SPACE_ENTITY) {
        buffer.replace_range(position..position + NON_BREAKING_SPACE_ENTITY.len(), " ");
    }
}
