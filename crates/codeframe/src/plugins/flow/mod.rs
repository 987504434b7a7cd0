//! Flow diagram plugin
//!
//! Renders an outline as a horizontal ASCII-art flow of boxed labels.

mod renderer;

pub use renderer::FlowRenderer;
