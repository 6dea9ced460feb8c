//! Shared helper functions for CLI commands

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

/// Effective output format: an explicit flag wins, then the configured default
pub fn resolve_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }

    config
        .default_format
        .as_deref()
        .and_then(|s| OutputFormat::from_str(s, true).ok())
        .unwrap_or(OutputFormat::Auto)
}

/// Write content to a file, or stdout when no path is given
pub fn write_output(content: &str, output_path: Option<&Path>, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        let file = File::create(path).into_diagnostic()?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes()).into_diagnostic()?;
        writer.flush().into_diagnostic()?;
        if !quiet {
            eprintln!("{} Report written to {}", style("✓").green(), style(path.display()).cyan());
        }
    } else {
        print!("{}", content);
    }
    Ok(())
}
