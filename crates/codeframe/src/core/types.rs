//! Core type definitions for outline rendering
//!
//! This module contains the fundamental types used throughout codeframe:
//! item kinds, diagram styles, character sets, and the node/edge data
//! synthesized by the graph renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Character set for rendering output
///
/// Controls which glyphs the line and box renderers draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Unicode box-drawing characters: ┌ ┐ └ ┘ ─ │ ╔ ═ ╗
    #[default]
    Unicode,
    /// Pure ASCII characters only: + - | # =
    Ascii,
}

impl CharacterSet {
    /// Returns true if this character set uses only ASCII
    pub fn is_ascii(&self) -> bool {
        matches!(self, CharacterSet::Ascii)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Unicode => write!(f, "unicode"),
            CharacterSet::Ascii => write!(f, "ascii"),
        }
    }
}

/// Diagram flavour produced from an outline
///
/// The four styles are mutually exclusive; `Line` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DiagramStyle {
    /// Indented lines with vertical connectors
    #[default]
    Line,
    /// Nested ASCII boxes, classes drawn as double-walled containers
    Box,
    /// Horizontal ASCII-art flow with boxed labels
    AsciiArt,
    /// Markdown document with a Mermaid graph and a component summary
    GithubGraph,
}

impl DiagramStyle {
    /// All styles in presentation order
    pub fn all() -> &'static [DiagramStyle] {
        &[
            DiagramStyle::Line,
            DiagramStyle::Box,
            DiagramStyle::AsciiArt,
            DiagramStyle::GithubGraph,
        ]
    }

    /// Short human description of the style
    pub fn description(&self) -> &'static str {
        match self {
            DiagramStyle::Line => "Indented line diagram with vertical connectors",
            DiagramStyle::Box => "Nested boxes, classes as double-walled containers",
            DiagramStyle::AsciiArt => "Horizontal ASCII-art flow with boxed labels",
            DiagramStyle::GithubGraph => "Markdown with a Mermaid graph and component summary",
        }
    }
}

impl fmt::Display for DiagramStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramStyle::Line => write!(f, "line"),
            DiagramStyle::Box => write!(f, "box"),
            DiagramStyle::AsciiArt => write!(f, "ascii-art"),
            DiagramStyle::GithubGraph => write!(f, "github-graph"),
        }
    }
}

impl FromStr for DiagramStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(DiagramStyle::Line),
            "box" => Ok(DiagramStyle::Box),
            "ascii-art" | "ascii" => Ok(DiagramStyle::AsciiArt),
            "github-graph" | "github" | "graph" => Ok(DiagramStyle::GithubGraph),
            _ => Err(format!("Unknown diagram style: {}", s)),
        }
    }
}

/// Kind of a structural item in an outline
///
/// Kinds arriving from JSON that are not listed here map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Function,
    Class,
    Conditional,
    Loop,
    #[serde(other)]
    Other,
}

impl ItemKind {
    /// Returns true for kinds that can enclose other items as a container
    pub fn is_container(&self) -> bool {
        matches!(self, ItemKind::Class)
    }

    /// Returns true for control-flow markers
    pub fn is_control_flow(&self) -> bool {
        matches!(self, ItemKind::Conditional | ItemKind::Loop)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Function => write!(f, "function"),
            ItemKind::Class => write!(f, "class"),
            ItemKind::Conditional => write!(f, "conditional"),
            ItemKind::Loop => write!(f, "loop"),
            ItemKind::Other => write!(f, "other"),
        }
    }
}

/// Rendering options shared by the text renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub charset: CharacterSet,
}

impl RenderConfig {
    pub fn new(charset: CharacterSet) -> Self {
        Self { charset }
    }
}

/// Node shapes available in the Mermaid graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NodeShape {
    /// Rectangle: `N0["label"]`
    #[default]
    Rectangle,
    /// Parallelogram used for class modules: `N0[/"label"/]`
    Module,
    /// Decision rhombus: `N0{"label"}`
    Decision,
}

impl NodeShape {
    /// Wrap an already-quoted label in this shape's Mermaid delimiters
    pub fn wrap(&self, label: &str) -> String {
        match self {
            NodeShape::Rectangle => format!("[\"{}\"]", label),
            NodeShape::Module => format!("[/\"{}\"/]", label),
            NodeShape::Decision => format!("{{\"{}\"}}", label),
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeShape::Rectangle => write!(f, "rectangle"),
            NodeShape::Module => write!(f, "module"),
            NodeShape::Decision => write!(f, "decision"),
        }
    }
}

/// Edge types emitted into the Mermaid graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum EdgeType {
    /// Solid arrow: `-->`
    #[default]
    Arrow,
    /// Dotted arrow: `-.->`
    DottedArrow,
}

impl EdgeType {
    /// Returns true if this edge type uses dotted lines
    pub fn is_dotted(&self) -> bool {
        matches!(self, EdgeType::DottedArrow)
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeType::Arrow => write!(f, "-->"),
            EdgeType::DottedArrow => write!(f, "-.->"),
        }
    }
}

/// A graph node with all its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Unique identifier for the node
    pub id: String,
    /// Display label
    pub label: String,
    /// Visual shape of the node
    pub shape: NodeShape,
}

impl NodeData {
    /// Create a new node with default rectangle shape
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape: NodeShape::Rectangle,
        }
    }

    /// Create a new node with a specific shape
    pub fn with_shape(id: impl Into<String>, label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
        }
    }

    /// Mermaid declaration, e.g. `N0["main()"]`
    pub fn declaration(&self) -> String {
        format!("{}{}", self.id, self.shape.wrap(&self.label))
    }
}

/// A directed edge between two graph nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeData {
    /// Source node ID
    pub from: String,
    /// Target node ID
    pub to: String,
    /// Visual type of the edge
    pub edge_type: EdgeType,
}

impl EdgeData {
    /// Create a new edge with default arrow type
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: EdgeType::Arrow,
        }
    }

    /// Create a new edge with a specific type
    pub fn with_type(from: impl Into<String>, to: impl Into<String>, edge_type: EdgeType) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type,
        }
    }

    /// Mermaid statement, e.g. `N0 --> N1`
    pub fn statement(&self) -> String {
        format!("{} {} {}", self.from, self.edge_type, self.to)
    }
}
