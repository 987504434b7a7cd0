//! Plugin implementations for analyzers and diagram styles
//!
//! Each renderer plugin implements [`crate::core::Renderer`] for one
//! [`crate::core::DiagramStyle`]; analyzer plugins implement
//! [`crate::core::Analyzer`] for one source language.

pub mod boxed;
pub mod flow;
pub mod graph;
pub mod line;
pub mod orchestrator;
pub mod python;

pub use boxed::*;
pub use flow::*;
pub use graph::*;
pub use line::*;
pub use orchestrator::*;
pub use python::*;
