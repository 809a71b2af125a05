//! CLI logic for the Newsgraph tool.
//!
//! This module contains the core CLI logic: load configuration, read the
//! graph payload, lay it out and write the rendered result.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::info;

use newsgraph::{GraphBuilder, NewsGraphError};

/// Run the Newsgraph CLI application
///
/// This function processes the input file through the Newsgraph pipeline
/// and writes the rendered SVG or JSON to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `NewsGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Invalid payloads (no usable news document)
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), NewsGraphError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    args.apply_overrides(&mut app_config);

    let source = fs::read_to_string(&args.input)?;

    let builder = GraphBuilder::new(app_config);
    let payload = builder.parse(&source)?;
    let layout = builder.layout(&payload)?;

    let rendered = match args.format {
        OutputFormat::Svg => builder.render_svg(&layout)?,
        OutputFormat::Json => builder.render_json(&layout)?,
    };

    fs::write(&args.output, rendered)?;

    info!(output_file = args.output, format:? = args.format; "Graph exported successfully");

    Ok(())
}
