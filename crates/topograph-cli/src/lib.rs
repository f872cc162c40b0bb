//! CLI logic for the topograph diagram tool.
//!
//! The binary is a one-shot, non-interactive build step: declare the fixed
//! mailer topology, render it to one file, exit. No retries and no state
//! survives the run.

mod args;
mod config;

pub mod topology;

pub use args::Args;

use std::path::Path;

use log::info;

use topograph::{DiagramBuilder, RenderFormat, TopographError, semantic::Orientation};

/// Run the topograph CLI application
///
/// Declares the built-in topology from the parsed arguments and renders it
/// to the output file.
///
/// # Errors
///
/// Returns `TopographError` for:
/// - Configuration loading errors
/// - Invalid format or orientation values
/// - Rendering-engine or file I/O errors
pub fn run(args: &Args) -> Result<(), TopographError> {
    info!(title = args.title, format = args.format; "Processing diagram");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Resolve format and orientation; the command line overrides the config
    let format: RenderFormat = args.format.parse()?;
    let orientation = match args.orientation.as_deref() {
        Some(value) => value.parse::<Orientation>()?,
        None => app_config.layout().orientation(),
    };

    // Declare the fixed topology and render it
    let diagram = topology::mailer(&args.title, orientation)?;
    let builder = DiagramBuilder::new(app_config);
    let output = args.output.as_deref().map(Path::new);
    let path = builder.render_to_file(&diagram, format, output)?;

    info!(output_file = path.display().to_string(); "Diagram exported successfully");

    Ok(())
}
