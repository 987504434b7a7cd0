//! Indented line renderer
//!
//! Every item becomes one line, indented two columns per level. When the
//! nesting depth stays equal or drops, one connector line per abandoned
//! level is drawn first so the path visibly closes back down.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use crate::core::{
    indent, placeholder_block, plain_heading, CharacterSet, DiagramStyle, ItemKind, LineChars,
    Outline, RenderConfig, Renderer, StructureItem, FENCE,
};

const INDENT: &str = "  ";

/// Renderer for the indented line diagram
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRenderer {
    style: CharacterSet,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self { style }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self::with_style(config.charset)
    }

    fn lead(chars: &LineChars, kind: ItemKind) -> &'static str {
        match kind {
            ItemKind::Function => chars.function,
            ItemKind::Class => chars.class,
            ItemKind::Conditional | ItemKind::Loop | ItemKind::Other => chars.branch,
        }
    }

    fn label(item: &StructureItem) -> String {
        match item.kind {
            ItemKind::Function => format!("[FUNCTION] {}()", item.name),
            ItemKind::Class => format!("[CLASS] {}", item.name),
            ItemKind::Conditional => format!("[IF] {}", item.name),
            ItemKind::Loop => format!("[LOOP] {}", item.name),
            ItemKind::Other => item.name.clone(),
        }
    }
}

impl Renderer for LineRenderer {
    fn render(&self, outline: &Outline, title: &str) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_line", items = outline.len());
        let _enter = render_span.enter();

        outline.check_contract()?;

        let mut lines = plain_heading(title);
        if outline.is_empty() {
            debug!("Empty outline, emitting placeholder");
            lines.extend(placeholder_block());
            return Ok(lines.join("\n"));
        }

        let chars = LineChars::new(self.style);
        lines.push(FENCE.to_string());

        let mut previous_level: Option<usize> = None;
        for item in outline {
            if let Some(previous) = previous_level {
                // Close the path back down to this item's level
                for level in item.level..previous {
                    lines.push(format!("{}{}", indent(level, INDENT), chars.vertical));
                }
            }

            lines.push(format!(
                "{}{} {}",
                indent(item.level, INDENT),
                Self::lead(&chars, item.kind),
                Self::label(item)
            ));
            previous_level = Some(item.level);
        }

        lines.push(FENCE.to_string());
        trace!(line_count = lines.len(), "Line diagram assembled");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "line"
    }

    fn style(&self) -> DiagramStyle {
        DiagramStyle::Line
    }
}
