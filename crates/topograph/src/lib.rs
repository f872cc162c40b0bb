//! topograph - a service-topology diagram generator.
//!
//! A declarative model for small architecture diagrams (typed nodes, one or
//! more clusters, directed edges) rendered to an image file through the
//! external Graphviz engine. Declaration, DOT export, and engine invocation
//! are the whole pipeline; layout itself is the engine's job.

pub mod config;
pub mod export;
pub mod identifier;
pub mod render;
pub mod semantic;

mod error;

pub use error::TopographError;
pub use render::{RenderFormat, derive_output_path};

use std::path::{Path, PathBuf};

use log::{debug, info};

use config::AppConfig;
use export::dot::DotExporter;
use semantic::Diagram;

/// Builder for exporting and rendering topology diagrams.
///
/// Wraps an [`AppConfig`] and drives a [`Diagram`] through DOT export and
/// engine rendering.
///
/// # Examples
///
/// ```rust,no_run
/// use topograph::{DiagramBuilder, RenderFormat, config::AppConfig};
/// use topograph::semantic::{Diagram, NodeKind, Orientation};
///
/// let mut diagram = Diagram::new("demo", Orientation::TopToBottom);
/// let app = diagram.add_node("app", NodeKind::Deployment)?;
/// let smtp = diagram.add_node("SMTP", NodeKind::Server)?;
/// diagram.connect(&[app], &[smtp])?;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Inspect the DOT text without an engine...
/// let dot = builder.render_dot(&diagram);
/// assert!(dot.starts_with("digraph"));
///
/// // ...or render an image (requires Graphviz on PATH).
/// let path = builder.render_to_file(&diagram, RenderFormat::Png, None)?;
/// assert_eq!(path, std::path::PathBuf::from("demo.png"));
/// # Ok::<(), topograph::TopographError>(())
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Export a diagram to DOT text.
    ///
    /// Deterministic: identical declarations produce identical text. No
    /// rendering engine is involved.
    pub fn render_dot(&self, diagram: &Diagram) -> String {
        info!(title = diagram.title(); "Exporting diagram");
        let graph = DotExporter::new(&self.config).export(diagram);
        render::print_dot(&graph)
    }

    /// Render a diagram to a file, returning the path written.
    ///
    /// When `output` is `None` the path is derived from the diagram title in
    /// the working directory (see [`derive_output_path`]). Exactly one file
    /// is written; an existing file at the path is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`TopographError::Engine`] if the Graphviz binary is missing
    /// or fails, or [`TopographError::Io`] if the path is not writable. On
    /// engine failure no new output file is produced.
    pub fn render_to_file(
        &self,
        diagram: &Diagram,
        format: RenderFormat,
        output: Option<&Path>,
    ) -> Result<PathBuf, TopographError> {
        let path = match output {
            Some(path) => path.to_path_buf(),
            None => derive_output_path(diagram.title(), format),
        };
        info!(
            title = diagram.title(),
            path = path.display().to_string();
            "Rendering diagram"
        );

        let graph = DotExporter::new(&self.config).export(diagram);
        render::render_to_file(graph, format, &path)?;

        debug!(path = path.display().to_string(); "Diagram rendered");
        Ok(path)
    }
}
