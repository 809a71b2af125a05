//! Command-line argument definitions for the Newsgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, layout overrides, and logging verbosity.

use clap::{Parser, ValueEnum};

use newsgraph::{config::AppConfig, theme::Theme};

/// Output format of the rendered graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SVG document
    #[default]
    Svg,
    /// Positioned nodes and edges as JSON
    Json,
}

/// Command-line arguments for the Newsgraph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Color theme (light, dark), overriding the configuration
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Canvas width, overriding the configuration
    #[arg(long)]
    pub width: Option<f32>,

    /// Canvas height, overriding the configuration
    #[arg(long)]
    pub height: Option<f32>,

    /// Seed for the placement jitter, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Applies the flags that override configuration values.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(theme) = self.theme {
            config.style_mut().set_theme(theme);
        }

        if self.width.is_some() || self.height.is_some() {
            let canvas = config.layout().canvas();
            config.layout_mut().set_canvas(
                self.width.unwrap_or(canvas.width()),
                self.height.unwrap_or(canvas.height()),
            );
        }

        if self.seed.is_some() {
            config.layout_mut().set_seed(self.seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["newsgraph", "graph.json"]);

        assert_eq!(args.input, "graph.json");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.format, OutputFormat::Svg);
        assert!(args.theme.is_none());
        assert!(args.seed.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "newsgraph",
            "graph.json",
            "--format",
            "json",
            "--theme",
            "dark",
            "--width",
            "400",
            "--seed",
            "42",
        ]);

        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.theme, Some(Theme::Dark));

        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.style().theme(), Theme::Dark);
        assert_eq!(config.layout().canvas().width(), 400.0);
        assert_eq!(config.layout().canvas().height(), 1000.0);
        assert_eq!(config.layout().seed(), Some(42));
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        let result = Args::try_parse_from(["newsgraph", "graph.json", "--theme", "sepia"]);
        assert!(result.is_err());
    }
}
