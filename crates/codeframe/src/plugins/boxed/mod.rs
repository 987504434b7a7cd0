//! Box diagram plugin
//!
//! Renders an outline as nested boxes; classes become double-walled
//! containers that stay open around their members.

mod renderer;

pub use renderer::BoxRenderer;
