//! Command-line argument definitions for the topograph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The baseline invocation needs no arguments: it renders
//! the built-in mailer topology to a file named after the title.

use clap::Parser;

/// Command-line arguments for the topograph diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram title; also the stem of the derived output file name
    #[arg(long, default_value = "mailer")]
    pub title: String,

    /// Path to the output file (derived from the title when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (png, svg, pdf, dot)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Diagram orientation (tb, lr, bt, rl); overrides the configured default
    #[arg(long)]
    pub orientation: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
