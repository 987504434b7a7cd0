//! Horizontal ASCII-art flow renderer
//!
//! Items are drawn as bracketed boxes indented four columns per level.
//! The connector above each box depends only on the level delta to the
//! previous item; unlike the box renderer nothing is explicitly unwound.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use crate::core::{
    display_width, indent, placeholder_block, plain_heading, DiagramStyle, ItemKind, Outline,
    OutlineTree, Renderer, StructureItem, FENCE,
};

const INDENT: &str = "    ";
const RULE_WIDTH: usize = 60;

/// Renderer for the horizontal flow diagram
///
/// Output is pure ASCII regardless of the configured character set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowRenderer;

impl FlowRenderer {
    pub fn new() -> Self {
        Self
    }

    fn label(item: &StructureItem) -> String {
        match item.kind {
            ItemKind::Function => format!("{}()", item.name),
            ItemKind::Class => format!("CLASS: {}", item.name),
            ItemKind::Conditional => "IF".to_string(),
            ItemKind::Loop => "LOOP".to_string(),
            ItemKind::Other => item.name.clone(),
        }
    }

    fn rule() -> String {
        "-".repeat(RULE_WIDTH)
    }
}

impl Renderer for FlowRenderer {
    fn render(&self, outline: &Outline, title: &str) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_flow", items = outline.len());
        let _enter = render_span.enter();

        outline.check_contract()?;

        let mut lines = plain_heading(title);
        if outline.is_empty() {
            debug!("Empty outline, emitting placeholder");
            lines.extend(placeholder_block());
            return Ok(lines.join("\n"));
        }

        let tree = OutlineTree::build(outline);

        lines.push(FENCE.to_string());
        lines.push("Code Flow:".to_string());
        lines.push(Self::rule());
        lines.push(String::new());

        let mut previous_level: Option<usize> = None;
        for (index, item) in outline.iter().enumerate() {
            let pad = indent(item.level, INDENT);

            if let Some(previous) = previous_level {
                lines.push(format!("{}  |", pad));
                if item.level == previous {
                    lines.push(format!("{}  v", pad));
                } else if item.level > previous {
                    lines.push(format!("{}  +---->", pad));
                }
            }

            let label = Self::label(item);
            let dashes = "-".repeat(display_width(&label) + 2);

            match item.kind {
                ItemKind::Class => {
                    lines.push(format!("{}+{}+", pad, dashes));
                    lines.push(format!("{}| {} |", pad, label));
                    lines.push(format!("{}+{}+", pad, dashes));
                    if tree.has_nested_successor(index) {
                        lines.push(format!("{}| (contains methods below)", pad));
                    }
                }
                ItemKind::Function | ItemKind::Conditional | ItemKind::Loop | ItemKind::Other => {
                    lines.push(format!("{}[{}]", pad, dashes));
                    lines.push(format!("{}| {} |", pad, label));
                    lines.push(format!("{}[{}]", pad, dashes));
                }
            }

            previous_level = Some(item.level);
        }

        lines.push(String::new());
        lines.push(Self::rule());
        lines.push(FENCE.to_string());
        trace!(line_count = lines.len(), "Flow diagram assembled");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "ascii-art"
    }

    fn style(&self) -> DiagramStyle {
        DiagramStyle::AsciiArt
    }
}
