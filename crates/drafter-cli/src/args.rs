//! Command-line argument definitions for the Drafter CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use std::path::Path;

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Drafter scene exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file
    #[arg(help = "Path to the input scene JSON file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Export target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Png,
    /// The normalized scene document
    Json,
}

impl OutputFormat {
    /// Picks the format from the extension of `path`, defaulting to SVG.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Self::Png,
            Some("json") => Self::Json,
            _ => Self::Svg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path("out.png"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path("scene.JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("out.svg"), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path("no_extension"), OutputFormat::Svg);
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["drafter", "scene.json", "-o", "x.out", "-f", "png"]);
        assert_eq!(args.input, "scene.json");
        assert_eq!(args.output, "x.out");
        assert_eq!(args.format, Some(OutputFormat::Png));
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
    }
}
