//! Line diagram plugin
//!
//! Renders an outline as indented lines joined by vertical connectors.

mod renderer;

pub use renderer::LineRenderer;
