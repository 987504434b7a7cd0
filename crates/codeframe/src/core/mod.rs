//! Core abstractions for outline rendering
//!
//! This module defines the outline model, the traits every analyzer and
//! renderer implements, and the shared glyph/text helpers.

mod analyzer;
mod box_drawing;
mod database;
mod error;
pub mod logging;
mod outline;
mod renderer;
mod text;
mod tree;
mod types;

pub use analyzer::*;
pub use box_drawing::*;
pub use database::*;
pub use error::*;
pub use logging::*;
pub use outline::*;
pub use renderer::*;
pub use text::*;
pub use tree::*;
pub use types::*;
