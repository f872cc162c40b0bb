//! Export functionality for topograph diagrams.
//!
//! This module converts the semantic model into the description consumed by
//! the rendering engine. It is the stage between declaration and rendering:
//!
//! ```text
//! Diagram (semantic model)
//!     ↓ export (this module)
//! DOT graph (dot-structures)
//!     ↓ render
//! Image file
//! ```
//!
//! # Available Backends
//!
//! - [`dot`] — Graphviz DOT output via [`dot::DotExporter`]

/// DOT export backend.
pub mod dot;
