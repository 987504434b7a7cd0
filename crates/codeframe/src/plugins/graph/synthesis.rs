//! Node and edge synthesis for the Mermaid graph
//!
//! The outline is a tree, not a graph, so edges are invented from its shape
//! in two passes:
//!
//! 1. every item becomes a node `N<index>`;
//! 2. level-0 items are chained in order, and each class fans out to its
//!    direct methods in rows of [`METHODS_PER_ROW`]: a solid edge from the
//!    class to the first method of each row, dotted edges along the row.
//!
//! Anything nested that is not a direct method stays unconnected.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::GraphDatabase;
use crate::core::{
    Database, EdgeData, EdgeType, ItemKind, NodeData, NodeShape, Outline, OutlineTree,
    StructureItem,
};

/// Maximum number of methods chained together in one row
pub const METHODS_PER_ROW: usize = 4;

/// Stable Mermaid identifier for the item at `index`
pub fn node_id(index: usize) -> String {
    format!("N{}", index)
}

/// Mermaid labels are double-quoted; an embedded quote must become an entity
fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

fn node_for(index: usize, item: &StructureItem) -> NodeData {
    let id = node_id(index);
    match item.kind {
        ItemKind::Function => NodeData::new(id, escape_label(&format!("{}()", item.name))),
        ItemKind::Class => NodeData::with_shape(
            id,
            escape_label(&format!("📦 {}", item.name)),
            NodeShape::Module,
        ),
        // All conditionals look alike, as do all loops
        ItemKind::Conditional => NodeData::with_shape(id, "Conditional", NodeShape::Decision),
        ItemKind::Loop => NodeData::with_shape(id, "Loop", NodeShape::Decision),
        ItemKind::Other => NodeData::new(id, escape_label(&item.name)),
    }
}

fn connect(db: &mut GraphDatabase, from: usize, to: usize, edge_type: EdgeType) -> Result<()> {
    db.add_edge(EdgeData::with_type(node_id(from), node_id(to), edge_type))
}

/// Build the graph database for an outline
pub fn synthesize(outline: &Outline) -> Result<GraphDatabase> {
    let synth_span = span!(Level::DEBUG, "synthesize_graph", items = outline.len());
    let _enter = synth_span.enter();

    let tree = OutlineTree::build(outline);
    let mut db = GraphDatabase::new();

    for (index, item) in outline.iter().enumerate() {
        db.add_node(node_for(index, item))?;
    }
    debug!(node_count = db.node_count(), "Nodes synthesized");

    for (index, item) in outline.iter().enumerate() {
        let is_top_level = item.level == 0;
        let previous_top = tree.previous_top_level(index);
        let previous_is_class = previous_top.is_some_and(|p| tree.item(p).kind == ItemKind::Class);

        match item.kind {
            ItemKind::Class => {
                // A preceding class already linked itself to this one
                if is_top_level && !previous_is_class {
                    if let Some(previous) = previous_top {
                        connect(&mut db, previous, index, EdgeType::Arrow)?;
                    }
                }

                let methods = tree.direct_methods(index);
                for row in methods.chunks(METHODS_PER_ROW) {
                    if let Some(&first) = row.first() {
                        connect(&mut db, index, first, EdgeType::Arrow)?;
                    }
                    for pair in row.windows(2) {
                        connect(&mut db, pair[0], pair[1], EdgeType::DottedArrow)?;
                    }
                }
                trace!(index, methods = methods.len(), "Class fan-out");

                if is_top_level {
                    if let Some(next) = tree.next_top_level(index) {
                        connect(&mut db, index, next, EdgeType::Arrow)?;
                    }
                }
            }
            ItemKind::Function | ItemKind::Conditional | ItemKind::Loop | ItemKind::Other => {
                if is_top_level && !previous_is_class {
                    if let Some(previous) = previous_top {
                        connect(&mut db, previous, index, EdgeType::Arrow)?;
                    }
                }
            }
        }
    }

    debug!(edge_count = db.edge_count(), "Edges synthesized");
    Ok(db)
}
