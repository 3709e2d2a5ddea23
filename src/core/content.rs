//! # Content Units and Panels
//!
//! The leaves of the catalog. A `ContentUnit` is one described block
//! (title, description, optional live example, optional source listing);
//! a `Panel` is the ordered list of units shown under one tab.
//!
//! Both are immutable once built. The engine never looks inside an
//! example: it only hands the `Renderable` to the rendering boundary.

use std::fmt;
use std::sync::Arc;

/// A live demonstration attached to a content unit.
///
/// Implementations produce plain text lines; the TUI decides how to frame
/// and style them.
pub trait Example: Send + Sync {
    /// Short caption shown above the rendered output.
    fn name(&self) -> &str;

    /// Produce the example's output, one entry per line.
    fn render(&self) -> Vec<String>;
}

/// Cheaply clonable handle to an [`Example`].
#[derive(Clone)]
pub struct Renderable(Arc<dyn Example>);

impl Renderable {
    pub fn new(example: impl Example + 'static) -> Self {
        Self(Arc::new(example))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn render(&self) -> Vec<String> {
        self.0.render()
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Renderable").field(&self.0.name()).finish()
    }
}

/// Smallest described block of content.
#[derive(Debug, Clone)]
pub struct ContentUnit {
    pub title: String,
    pub description: String,
    pub example: Option<Renderable>,
    pub source: Option<String>,
    /// Syntax hint for `source` (e.g. "js"). Only used for highlighting.
    pub language: Option<String>,
}

impl ContentUnit {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            example: None,
            source: None,
            language: None,
        }
    }

    pub fn with_example(mut self, example: Renderable) -> Self {
        self.example = Some(example);
        self
    }

    pub fn with_source(mut self, language: impl Into<String>, source: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self.source = Some(source.into());
        self
    }
}

/// Ordered body of one tab. Order is display order.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    units: Vec<ContentUnit>,
}

impl Panel {
    pub fn new(units: Vec<ContentUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[ContentUnit] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl From<Vec<ContentUnit>> for Panel {
    fn from(units: Vec<ContentUnit>) -> Self {
        Self::new(units)
    }
}
