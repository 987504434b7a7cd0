//! Mermaid graph renderer
//!
//! Emits a GitHub-flavoured Markdown document: a `graph TD` Mermaid block
//! holding every synthesized node and edge, followed by the component
//! summary.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::{synthesize, ComponentSummary, GraphDatabase};
use crate::core::{
    placeholder_block, Database, DiagramStyle, Outline, OutlineTree, Renderer, FENCE,
};

const INDENT: &str = "    ";

/// Renderer for the Markdown + Mermaid document
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer;

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Run node/edge synthesis without emitting text
    pub fn synthesize(&self, outline: &Outline) -> Result<GraphDatabase> {
        synthesize(outline)
    }

    fn mermaid_block(db: &GraphDatabase) -> Vec<String> {
        let mut lines = vec![
            "### 🔄 Execution Flow".to_string(),
            String::new(),
            format!("{}mermaid", FENCE),
            "graph TD".to_string(),
        ];
        lines.extend(db.nodes().map(|node| format!("{}{}", INDENT, node.declaration())));
        lines.extend(db.edges().map(|edge| format!("{}{}", INDENT, edge.statement())));
        lines.push(FENCE.to_string());
        lines.push(String::new());
        lines
    }
}

impl Renderer for GraphRenderer {
    fn render(&self, outline: &Outline, title: &str) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_graph", items = outline.len());
        let _enter = render_span.enter();

        outline.check_contract()?;

        let mut lines = vec![format!("## Code Structure: {}", title), String::new()];
        if outline.is_empty() {
            debug!("Empty outline, emitting placeholder");
            lines.extend(placeholder_block());
            return Ok(lines.join("\n"));
        }

        let db = synthesize(outline)?;
        lines.extend(Self::mermaid_block(&db));

        let tree = OutlineTree::build(outline);
        let summary = ComponentSummary::from_tree(&tree);
        debug!(
            classes = summary.classes.len(),
            functions = summary.functions.len(),
            "Component summary built"
        );
        lines.extend(summary.to_markdown());

        trace!(line_count = lines.len(), "Graph document assembled");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "github-graph"
    }

    fn style(&self) -> DiagramStyle {
        DiagramStyle::GithubGraph
    }
}
