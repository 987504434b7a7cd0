//! Nested box renderer
//!
//! Classes open a double-bordered container that stays open while deeper
//! items are drawn and closes once the outline returns to the class's level
//! (or above). Every other item is a self-closing single-bordered box.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use crate::core::{
    display_width, indent, placeholder_block, plain_heading, BoxChars, CharacterSet, DiagramStyle,
    ItemKind, LineChars, Outline, OutlineTree, RenderConfig, Renderer, StructureItem, FENCE,
};

const INDENT: &str = "  ";

/// A class box whose bottom border has not been drawn yet
#[derive(Debug, Clone, Copy)]
struct OpenContainer {
    level: usize,
    width: usize,
}

/// Renderer for the nested box diagram
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxRenderer {
    style: CharacterSet,
}

impl BoxRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self { style }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self::with_style(config.charset)
    }

    fn label(item: &StructureItem) -> String {
        match item.kind {
            ItemKind::Function => format!("FUNCTION: {}()", item.name),
            ItemKind::Class => format!("CLASS: {}", item.name),
            ItemKind::Conditional => format!("IF: {}", item.name),
            ItemKind::Loop => format!("LOOP: {}", item.name),
            ItemKind::Other => item.name.clone(),
        }
    }

    fn close(lines: &mut Vec<String>, double: &BoxChars, container: OpenContainer) {
        lines.push(format!(
            "{}{}",
            indent(container.level, INDENT),
            double.bottom(container.width)
        ));
    }
}

impl Renderer for BoxRenderer {
    fn render(&self, outline: &Outline, title: &str) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_box", items = outline.len());
        let _enter = render_span.enter();

        outline.check_contract()?;

        let mut lines = plain_heading(title);
        if outline.is_empty() {
            debug!("Empty outline, emitting placeholder");
            lines.extend(placeholder_block());
            return Ok(lines.join("\n"));
        }

        let single = BoxChars::single(self.style);
        let double = BoxChars::double(self.style);
        let arrow = LineChars::new(self.style).arrow_down;
        let tree = OutlineTree::build(outline);

        lines.push(FENCE.to_string());
        let mut open: Vec<OpenContainer> = Vec::new();
        let mut previous_level: Option<usize> = None;

        for (index, item) in outline.iter().enumerate() {
            let pad = indent(item.level, INDENT);

            if let Some(previous) = previous_level {
                if item.level <= previous {
                    // Several containers may end here at once
                    while let Some(top) = open.last().copied() {
                        if top.level < item.level {
                            break;
                        }
                        open.pop();
                        Self::close(&mut lines, &double, top);
                    }
                    if item.level == previous {
                        lines.push(format!("{}  {}", pad, arrow));
                    }
                } else {
                    lines.push(format!("{}  {}", pad, arrow));
                }
            }

            let label = Self::label(item);
            let width = display_width(&label) + 2;

            if item.kind.is_container() {
                lines.push(format!("{}{}", pad, double.top(width)));
                lines.push(format!("{}{}", pad, double.row(&label)));
                lines.push(format!("{}{}", pad, double.separator(width)));
                open.push(OpenContainer {
                    level: item.level,
                    width,
                });
            } else {
                if tree.has_nested_successor(index) {
                    trace!(index, kind = %item.kind, "Non-class parent drawn as a leaf box");
                }
                lines.push(format!("{}{}", pad, single.top(width)));
                lines.push(format!("{}{}", pad, single.row(&label)));
                lines.push(format!("{}{}", pad, single.bottom(width)));
            }

            previous_level = Some(item.level);
        }

        while let Some(container) = open.pop() {
            Self::close(&mut lines, &double, container);
        }

        lines.push(FENCE.to_string());
        trace!(line_count = lines.len(), "Box diagram assembled");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "box"
    }

    fn style(&self) -> DiagramStyle {
        DiagramStyle::Box
    }
}
