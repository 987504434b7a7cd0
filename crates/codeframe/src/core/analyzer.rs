//! Core analyzer trait for outline extraction
//!
//! An analyzer turns source text into an [`Outline`]. Renderers never see
//! the source, so analyzers for other languages plug in here.

use std::path::Path;

use anyhow::Result;

use super::Outline;

/// Options consulted while extracting an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzeOptions {
    /// Record conditionals and loops as well as functions and classes
    pub include_control_flow: bool,
}

impl AnalyzeOptions {
    pub fn new(include_control_flow: bool) -> Self {
        Self {
            include_control_flow,
        }
    }
}

/// Core trait for source analyzers
///
/// # Example
/// ```
/// use codeframe::core::{AnalyzeOptions, Analyzer};
/// use codeframe::plugins::python::PythonAnalyzer;
///
/// let analyzer = PythonAnalyzer::new();
/// let outline = analyzer
///     .analyze("class A:\n    def f(self):\n        pass\n", &AnalyzeOptions::default())
///     .unwrap();
/// assert_eq!(outline.len(), 2);
/// ```
pub trait Analyzer: Send + Sync {
    /// Extract the outline of `source`
    fn analyze(&self, source: &str, options: &AnalyzeOptions) -> Result<Outline>;

    /// Get the name of this analyzer
    fn name(&self) -> &'static str;

    /// File extensions (without the dot) this analyzer understands
    fn extensions(&self) -> &'static [&'static str];

    /// Check whether a file looks like something this analyzer handles
    fn can_analyze(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }
}
