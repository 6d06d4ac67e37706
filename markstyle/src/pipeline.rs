//! Ordered element pipeline
//!
//! The pipeline holds elements in four phases that always run in the same order:
//!
//!     escaping -> default -> custom -> unescaping
//!
//! Within a phase elements run in insertion order. Callers only add to the custom phase through
//! [`ElementPipeline::add_custom`] and friends, so custom elements always run after every default
//! element and before unescaping.

use crate::element::{Element, ElementKind};
use crate::elements::{
    AutomaticLink, Bold, Code, CodeEscaping, Header, Image, Italic, Link, List, Quote, Unescaping,
};
use crate::error::ElementError;
use crate::parser::ParserOptions;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Escaping,
    Default,
    Custom,
    Unescaping,
}

impl Phase {
    /// Every phase, in execution order
    pub const ALL: [Phase; 4] = [
        Phase::Escaping,
        Phase::Default,
        Phase::Custom,
        Phase::Unescaping,
    ];
}

/// Elements grouped by phase
///
/// # Examples
///
/// ```ignore
/// let mut pipeline = ElementPipeline::with_defaults(&ParserOptions::default())?;
/// pipeline.add_custom(Box::new(my_element));
///
/// for (phase, element) in pipeline.iter() {
///     println!("{phase:?} {}", element.name());
/// }
/// ```
#[derive(Default)]
pub struct ElementPipeline {
    escaping: Vec<Box<dyn Element>>,
    default: Vec<Box<dyn Element>>,
    custom: Vec<Box<dyn Element>>,
    unescaping: Vec<Box<dyn Element>>,
}

impl ElementPipeline {
    /// An empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in elements, configured from `options`.
    pub fn with_defaults(options: &ParserOptions) -> Result<Self, ElementError> {
        let mut pipeline = ElementPipeline::new();
        pipeline.push(Phase::Escaping, Box::new(CodeEscaping::new()?));

        pipeline.push(Phase::Default, Box::new(Header::new()?));
        pipeline.push(Phase::Default, Box::new(List::new()?));
        pipeline.push(Phase::Default, Box::new(Quote::new()?));
        pipeline.push(Phase::Default, Box::new(Code::new()?));
        pipeline.push(Phase::Default, Box::new(Image::new()?));
        pipeline.push(Phase::Default, Box::new(Link::new()?));
        pipeline.push(Phase::Default, Box::new(AutomaticLink::new()?));
        pipeline.push(Phase::Default, Box::new(Bold::new()?));
        pipeline.push(Phase::Default, Box::new(Bold::underscores()?));
        pipeline.push(Phase::Default, Box::new(Italic::new()?));

        pipeline.push(Phase::Unescaping, Box::new(Unescaping::new()?));

        restyle(&mut pipeline, options);
        Ok(pipeline)
    }

    fn phase_mut(&mut self, phase: Phase) -> &mut Vec<Box<dyn Element>> {
        match phase {
            Phase::Escaping => &mut self.escaping,
            Phase::Default => &mut self.default,
            Phase::Custom => &mut self.custom,
            Phase::Unescaping => &mut self.unescaping,
        }
    }

    /// Elements of one phase, in run order
    pub fn phase(&self, phase: Phase) -> &[Box<dyn Element>] {
        match phase {
            Phase::Escaping => &self.escaping,
            Phase::Default => &self.default,
            Phase::Custom => &self.custom,
            Phase::Unescaping => &self.unescaping,
        }
    }

    /// Appends `element` to the end of `phase`.
    pub fn push(&mut self, phase: Phase, element: Box<dyn Element>) {
        self.phase_mut(phase).push(element);
    }

    /// Appends a custom element.
    pub fn add_custom(&mut self, element: Box<dyn Element>) {
        self.push(Phase::Custom, element);
    }

    /// Inserts a custom element at `index`, clamped to the custom phase length.
    pub fn insert_custom(&mut self, index: usize, element: Box<dyn Element>) {
        let index = index.min(self.custom.len());
        self.custom.insert(index, element);
    }

    /// Removes the first custom element called `name`.
    pub fn remove_custom(&mut self, name: &str) -> Option<Box<dyn Element>> {
        let index = self.custom.iter().position(|element| element.name() == name)?;
        Some(self.custom.remove(index))
    }

    /// Every element with its phase, in run order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &dyn Element)> + '_ {
        Phase::ALL.into_iter().flat_map(move |phase| {
            self.phase(phase)
                .iter()
                .map(move |element| (phase, element.as_ref()))
        })
    }

    /// First element called `name`, in any phase.
    pub fn get(&self, name: &str) -> Option<&dyn Element> {
        self.iter()
            .map(|(_, element)| element)
            .find(|element| element.name() == name)
    }

    /// Check if an element exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether any element of `kind` is present.
    pub fn has_kind(&self, kind: ElementKind) -> bool {
        self.iter().any(|(_, element)| element.kind() == kind)
    }

    /// Element names in run order
    pub fn names(&self) -> Vec<String> {
        self.iter()
            .map(|(_, element)| element.name().to_string())
            .collect()
    }

    pub fn custom_names(&self) -> Vec<String> {
        self.custom
            .iter()
            .map(|element| element.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        Phase::ALL.iter().map(|phase| self.phase(*phase).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ElementPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (phase, element) in self.iter() {
            list.entry(&(phase, element.name()));
        }
        list.finish()
    }
}

/// Re-derives the attributes and settings of every element from `options`.
pub fn restyle(pipeline: &mut ElementPipeline, options: &ParserOptions) {
    for phase in Phase::ALL {
        for element in pipeline.phase_mut(phase).iter_mut() {
            element.configure(options);
        }
    }
}
