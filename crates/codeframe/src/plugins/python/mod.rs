//! Python analyzer plugin
//!
//! Extracts functions, classes and (optionally) conditionals and loops from
//! Python source without executing or fully parsing it.

mod analyzer;
mod lexer;

pub use analyzer::PythonAnalyzer;
pub use lexer::{logical_lines, LogicalLine};
