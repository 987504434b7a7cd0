//! Codeframe - Render code outlines as text diagrams
//!
//! A library for turning a flat, leveled outline of functions, classes and
//! control-flow markers into line, box, ASCII-art flow and Mermaid graph
//! diagrams.
//!
//! # Quick Start
//!
//! ```rust
//! use codeframe::{analyze_python, render, DiagramStyle};
//!
//! let source = "class Greeter:\n    def hello(self):\n        pass\n";
//! let outline = analyze_python(source, false).unwrap();
//! let diagram = render(&outline, "greeter.py", DiagramStyle::Line).unwrap();
//! assert!(diagram.contains("[CLASS] Greeter"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use codeframe::prelude::*;
//!
//! let outline = Outline::from_items(vec![
//!     StructureItem::class("Foo", 0, 1),
//!     StructureItem::function("bar", 1, 2),
//! ]);
//!
//! // Inspect the synthesized graph before rendering
//! let graph = GraphRenderer::new().synthesize(&outline).unwrap();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//!
//! // Render with pure ASCII glyphs
//! let renderer = BoxRenderer::with_style(CharacterSet::Ascii);
//! let ascii = renderer.render(&outline, "foo.py").unwrap();
//! assert!(ascii.is_ascii());
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AnalyzeOptions, Analyzer, CharacterSet, Database, DiagramError, DiagramStyle, EdgeData,
        EdgeType, ItemKind, NodeData, NodeShape, Outline, OutlineTree, RenderConfig, Renderer,
        StructureItem,
    };
    pub use crate::plugins::{
        BoxRenderer, FlowRenderer, GraphDatabase, GraphRenderer, LineRenderer, Orchestrator,
        PythonAnalyzer,
    };
}

/// Render an outline in the given style
///
/// Uses the default Unicode character set.
///
/// # Example
/// ```rust
/// use codeframe::{render, DiagramStyle, Outline};
///
/// let empty = render(&Outline::new(), "empty.py", DiagramStyle::Box).unwrap();
/// assert!(empty.contains("(No structure detected)"));
/// ```
pub fn render(outline: &Outline, title: &str, style: DiagramStyle) -> anyhow::Result<String> {
    render_with_config(outline, title, style, RenderConfig::default())
}

/// Render an outline with a specific render configuration
///
/// # Example
/// ```rust
/// use codeframe::{render_with_config, CharacterSet, DiagramStyle, Outline, RenderConfig, StructureItem};
///
/// let outline = Outline::from_items(vec![StructureItem::function("main", 0, 1)]);
/// let config = RenderConfig::new(CharacterSet::Ascii);
/// let ascii = render_with_config(&outline, "main.py", DiagramStyle::Line, config).unwrap();
/// assert!(ascii.contains("+- [FUNCTION] main()"));
/// ```
pub fn render_with_config(
    outline: &Outline,
    title: &str,
    style: DiagramStyle,
    config: RenderConfig,
) -> anyhow::Result<String> {
    use crate::plugins::orchestrator::Orchestrator;

    Orchestrator::with_config(config).render(outline, title, style)
}

/// Extract the outline of Python source text
///
/// Unlike [`plugins::Orchestrator::analyze`], indentation errors are returned
/// to the caller rather than replaced by an empty outline.
///
/// # Example
/// ```rust
/// use codeframe::{analyze_python, ItemKind};
///
/// let outline = analyze_python("for x in xs:\n    pass\n", true).unwrap();
/// assert_eq!(outline.get(0).map(|i| i.kind), Some(ItemKind::Loop));
/// ```
pub fn analyze_python(source: &str, include_control_flow: bool) -> anyhow::Result<Outline> {
    use crate::plugins::python::PythonAnalyzer;

    PythonAnalyzer::new().analyze(source, &AnalyzeOptions::new(include_control_flow))
}
