//! Mermaid graph plugin
//!
//! Synthesizes a node/edge graph from an outline and renders it as a
//! Markdown document with a Mermaid block and a component summary.

mod database;
mod renderer;
mod summary;
mod synthesis;

pub use database::GraphDatabase;
pub use renderer::GraphRenderer;
pub use summary::{ClassSummary, ComponentSummary};
pub use synthesis::{node_id, synthesize, METHODS_PER_ROW};
