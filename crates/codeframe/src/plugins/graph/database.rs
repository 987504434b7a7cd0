//! Graph database implementation
//!
//! Stores synthesized nodes and edges in insertion order so that emission
//! is deterministic.

use std::collections::HashMap;

use anyhow::Result;
use tracing::trace;

use crate::core::{Database, DiagramError, EdgeData, NodeData};

/// Database holding the nodes and edges of one synthesized graph
#[derive(Debug, Clone, Default)]
pub struct GraphDatabase {
    nodes: Vec<NodeData>,
    index: HashMap<String, usize>,
    edges: Vec<EdgeData>,
}

impl GraphDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges of the given type
    pub fn count_edges(&self, dotted: bool) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.edge_type.is_dotted() == dotted)
            .count()
    }

    /// True if an edge `from → to` exists, whatever its type
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|edge| edge.from == from && edge.to == to)
    }
}

impl Database for GraphDatabase {
    type Node = NodeData;
    type Edge = EdgeData;

    fn add_node(&mut self, node: NodeData) -> Result<()> {
        if self.index.contains_key(&node.id) {
            return Err(DiagramError::render_error(format!("duplicate node id {}", node.id)).into());
        }
        trace!(id = %node.id, shape = %node.shape, "Adding node");
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    fn add_edge(&mut self, edge: EdgeData) -> Result<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.index.contains_key(endpoint) {
                return Err(DiagramError::render_error(format!(
                    "edge {} references unknown node {}",
                    edge.statement(),
                    endpoint
                ))
                .into());
            }
        }
        trace!(edge = %edge.statement(), "Adding edge");
        self.edges.push(edge);
        Ok(())
    }

    fn get_node(&self, id: &str) -> Option<&NodeData> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.edges.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
