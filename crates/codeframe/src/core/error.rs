//! Core error types for outline processing
//!
//! This module defines the error types used throughout the analyze → render pipeline.

use thiserror::Error;

/// Core error types for outline processing
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Invalid outline: {message}")]
    InvalidOutline { message: String },

    #[error("Analysis error: {message} at line {line}")]
    AnalysisError { message: String, line: usize },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Unknown analyzer: {name}")]
    UnknownAnalyzer { name: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Outline JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

impl DiagramError {
    /// Create a new invalid-outline error
    pub fn invalid_outline(message: String) -> Self {
        Self::InvalidOutline { message }
    }

    /// Create a new analysis error
    pub fn analysis_error(message: String, line: usize) -> Self {
        Self::AnalysisError { message, line }
    }

    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::RenderError { message }
    }

    /// Create a new unknown-analyzer error
    pub fn unknown_analyzer(name: String) -> Self {
        Self::UnknownAnalyzer { name }
    }
}
