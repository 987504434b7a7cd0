//! Plugin orchestrator for coordinating the outline pipeline
//!
//! The orchestrator manages the flow of data through the plugins:
//! Analyzer → Outline → Renderer

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{
    AnalyzeOptions, Analyzer, DiagramError, DiagramStyle, Outline, RenderConfig, Renderer,
};
use crate::plugins::boxed::BoxRenderer;
use crate::plugins::flow::FlowRenderer;
use crate::plugins::graph::GraphRenderer;
use crate::plugins::line::LineRenderer;
use crate::plugins::python::PythonAnalyzer;

/// Analyzer used when nothing claims a file's extension
pub const FALLBACK_ANALYZER: &str = "python";

/// Plugin orchestrator that coordinates the entire pipeline
///
/// Holds the registered analyzers and the render configuration so callers
/// can go from source text to a finished diagram in one call.
pub struct Orchestrator {
    analyzers: HashMap<String, Box<dyn Analyzer>>,
    config: RenderConfig,
}

impl Orchestrator {
    /// Create a new orchestrator without analyzers
    pub fn new() -> Self {
        Self {
            analyzers: HashMap::new(),
            config: RenderConfig::default(),
        }
    }

    /// Create an orchestrator with every bundled analyzer registered
    pub fn with_default_plugins() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Bundled analyzers plus a specific render configuration
    pub fn with_config(config: RenderConfig) -> Self {
        let mut orchestrator = Self {
            analyzers: HashMap::new(),
            config,
        };
        orchestrator.register_analyzer(Box::new(PythonAnalyzer::new()));
        orchestrator
    }

    /// Register an analyzer under its own name, replacing any previous one
    pub fn register_analyzer(&mut self, analyzer: Box<dyn Analyzer>) {
        let name = analyzer.name().to_string();
        if self.analyzers.insert(name.clone(), analyzer).is_some() {
            debug!(analyzer = %name, "Replaced registered analyzer");
        }
    }

    /// Names of the registered analyzers, sorted
    pub fn get_analyzers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.analyzers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Look up an analyzer by name
    pub fn analyzer(&self, name: &str) -> Result<&dyn Analyzer> {
        self.analyzers
            .get(name)
            .map(|analyzer| analyzer.as_ref())
            .ok_or_else(|| DiagramError::unknown_analyzer(name.to_string()).into())
    }

    /// Pick the analyzer for a file by its extension
    ///
    /// Falls back to the Python analyzer when no registered analyzer claims
    /// the extension.
    pub fn analyzer_for_path(&self, path: &Path) -> Result<&dyn Analyzer> {
        let mut names = self.get_analyzers();
        names.retain(|name| {
            self.analyzers
                .get(name)
                .is_some_and(|analyzer| analyzer.can_analyze(path))
        });

        if let Some(name) = names.first() {
            trace!(analyzer = %name, path = %path.display(), "Analyzer matched by extension");
            return self.analyzer(name);
        }

        warn!(
            path = %path.display(),
            fallback = FALLBACK_ANALYZER,
            "No analyzer claims this file, falling back"
        );
        self.analyzer(FALLBACK_ANALYZER)
    }

    /// Extract the outline of `source`
    ///
    /// An analysis failure is not an error here: it is logged and yields an
    /// empty outline, which renders as the placeholder diagram.
    pub fn analyze(&self, source: &str, path: &Path, options: &AnalyzeOptions) -> Result<Outline> {
        let analyze_span = span!(
            Level::INFO,
            "analyze",
            path = %path.display(),
            source_len = source.len()
        );
        let _enter = analyze_span.enter();

        let analyzer = self.analyzer_for_path(path)?;
        debug!(analyzer = analyzer.name(), "Analyzing source");

        match analyzer.analyze(source, options) {
            Ok(outline) => {
                let control_flow = outline
                    .iter()
                    .filter(|item| item.kind.is_control_flow())
                    .count();
                info!(
                    items = outline.len(),
                    control_flow,
                    depth = outline.max_level(),
                    "Analysis completed"
                );
                Ok(outline)
            }
            Err(err) => {
                warn!(error = %err, path = %path.display(), "Analysis failed, using empty outline");
                Ok(Outline::new())
            }
        }
    }

    /// Renderer for a diagram style, configured with this orchestrator's charset
    pub fn renderer_for(&self, style: DiagramStyle) -> Box<dyn Renderer> {
        match style {
            DiagramStyle::Line => Box::new(LineRenderer::with_config(self.config)),
            DiagramStyle::Box => Box::new(BoxRenderer::with_config(self.config)),
            DiagramStyle::AsciiArt => Box::new(FlowRenderer::new()),
            DiagramStyle::GithubGraph => Box::new(GraphRenderer::new()),
        }
    }

    /// Render an outline in the requested style
    pub fn render(&self, outline: &Outline, title: &str, style: DiagramStyle) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render",
            style = %style,
            items = outline.len()
        );
        let _enter = render_span.enter();

        for issue in outline.diagnostics() {
            warn!(%issue, "Irregular outline, rendering best effort");
        }

        let renderer = self.renderer_for(style);
        let output = renderer.render(outline, title)?;
        debug!(renderer = renderer.name(), output_len = output.len(), "Rendering completed");
        Ok(output)
    }

    /// Analyze and render in one step, titling the diagram with the file name
    pub fn process(
        &self,
        source: &str,
        path: &Path,
        options: &AnalyzeOptions,
        style: DiagramStyle,
    ) -> Result<String> {
        let process_span = span!(Level::INFO, "process", path = %path.display());
        let _enter = process_span.enter();

        let outline = self.analyze(source, path, options)?;
        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.render(&outline, &title, style)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
