//! Core renderer trait for outline diagrams
//!
//! This trait defines the interface for turning an outline into one
//! diagram flavour (line, box, flow, graph).

use anyhow::Result;

use super::{DiagramStyle, Outline};

/// Core trait for outline renderers
///
/// A renderer is a pure function of its outline and title: it keeps no
/// state between calls and never mutates the outline, so one instance can
/// be shared across threads.
///
/// # Example
/// ```
/// use codeframe::core::{Outline, Renderer, StructureItem};
/// use codeframe::plugins::line::LineRenderer;
///
/// let outline = Outline::from_items(vec![StructureItem::function("main", 0, 1)]);
/// let output = LineRenderer::new().render(&outline, "app.py").unwrap();
/// assert!(output.contains("[FUNCTION] main()"));
/// ```
pub trait Renderer: Send + Sync {
    /// Render the outline into a text document titled `title`
    fn render(&self, outline: &Outline, title: &str) -> Result<String>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the diagram style this renderer produces
    fn style(&self) -> DiagramStyle;
}
