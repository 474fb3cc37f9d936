//! CLI logic for the Drafter scene exporter.
//!
//! Loads a scene JSON file into an [`Editor`] and writes it back out as SVG,
//! PNG, or a normalized scene document.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};
pub use config::ConfigError;

use std::fs;

use log::info;

use drafter::{Editor, Error};

/// Run the Drafter CLI application
///
/// Reads the input scene, exports it in the requested format and writes the
/// result to the output path. Nothing is written when any step fails.
///
/// # Errors
///
/// Returns `Error` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed scene files
/// - Export of an empty scene, or rasterization failures
pub fn run(args: &Args) -> Result<(), Error> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    let mut editor = Editor::new(&app_config)?;
    editor.import_json(&source)?;

    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&args.output));

    let bytes = match format {
        OutputFormat::Svg => editor.export_svg()?.into_bytes(),
        OutputFormat::Png => editor.export_png()?,
        OutputFormat::Json => editor.export_json()?.into_bytes(),
    };

    fs::write(&args.output, bytes)?;

    info!(output_file = args.output, format:?; "Scene exported successfully");

    Ok(())
}
