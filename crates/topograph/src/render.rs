//! Rendering-engine invocation.
//!
//! The actual pixel/vector work is delegated to the external Graphviz `dot`
//! binary, treated as an opaque collaborator: we hand it the DOT graph and
//! an output path, and never inspect what it produced. The one format that
//! needs no engine is [`RenderFormat::Dot`], which writes the printed graph
//! text directly; everything else requires Graphviz on `PATH`.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use dot_structures::Graph;
use graphviz_rust::{
    cmd::{CommandArg, Format},
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info};

use crate::TopographError;

/// Output format for a rendered diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// Raster output (the default, matching the original generator).
    #[default]
    Png,
    /// Vector output.
    Svg,
    /// Printable vector output.
    Pdf,
    /// Raw DOT text; needs no engine.
    Dot,
}

impl RenderFormat {
    /// The file extension used when deriving an output path.
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Png => "png",
            RenderFormat::Svg => "svg",
            RenderFormat::Pdf => "pdf",
            RenderFormat::Dot => "dot",
        }
    }

    /// The engine-side format, or `None` when no engine run is needed.
    fn engine_format(&self) -> Option<Format> {
        match self {
            RenderFormat::Png => Some(Format::Png),
            RenderFormat::Svg => Some(Format::Svg),
            RenderFormat::Pdf => Some(Format::Pdf),
            RenderFormat::Dot => None,
        }
    }
}

impl FromStr for RenderFormat {
    type Err = TopographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(RenderFormat::Png),
            "svg" => Ok(RenderFormat::Svg),
            "pdf" => Ok(RenderFormat::Pdf),
            "dot" => Ok(RenderFormat::Dot),
            other => Err(TopographError::Config(format!(
                "unknown output format '{other}' (expected png, svg, pdf or dot)"
            ))),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Derives the output file name from the diagram title.
///
/// Whitespace runs collapse to `_` and the result is lowercased, the same
/// rule the original generator applied, plus the format extension:
/// `"Mailer Topology"` with PNG output becomes `mailer_topology.png`.
pub fn derive_output_path(title: &str, format: RenderFormat) -> PathBuf {
    let stem = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    let stem = if stem.is_empty() {
        "diagram".to_string()
    } else {
        stem
    };
    PathBuf::from(format!("{stem}.{}", format.extension()))
}

/// Prints `graph` as DOT text.
pub fn print_dot(graph: &Graph) -> String {
    graph.print(&mut PrinterContext::default())
}

/// Renders `graph` to `path` in the requested format.
///
/// # Errors
///
/// Returns [`TopographError::Engine`] when the Graphviz binary cannot be
/// found or exits unsuccessfully, and [`TopographError::Io`] when the output
/// path is not writable.
pub(crate) fn render_to_file(
    graph: Graph,
    format: RenderFormat,
    path: &Path,
) -> Result<(), TopographError> {
    match format.engine_format() {
        None => {
            debug!(path = path.display().to_string(); "Writing DOT text");
            fs::write(path, print_dot(&graph))?;
        }
        Some(engine_format) => {
            info!(path = path.display().to_string(), format = format.extension(); "Invoking rendering engine");
            let args = vec![
                CommandArg::Format(engine_format),
                CommandArg::Output(path.to_string_lossy().into_owned()),
            ];
            let _ = graphviz_rust::exec(graph, &mut PrinterContext::default(), args).map_err(
                |err| match err.kind() {
                    io::ErrorKind::NotFound => TopographError::Engine(
                        "Graphviz 'dot' binary not found on PATH; install Graphviz to render images"
                            .to_string(),
                    ),
                    _ => TopographError::Engine(format!("'dot' failed: {err}")),
                },
            )?;
        }
    }
    Ok(())
}
