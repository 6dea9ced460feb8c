//! Tabular rendering shared by the list-style commands
//!
//! TSV and CSV go through the `csv` writer so values are quoted consistently;
//! Markdown and terminal output go through `tabled`.

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;

/// Render a header row plus data rows in the given format
///
/// Structured formats (YAML/JSON) are not tables; callers serialize those
/// themselves. They fall back to the terminal table here.
pub fn render_rows(format: OutputFormat, headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    match format {
        OutputFormat::Tsv => render_delimited(b'\t', headers, rows),
        OutputFormat::Csv => render_delimited(b',', headers, rows),
        OutputFormat::Md => Ok(render_table(headers, rows, true)),
        OutputFormat::Auto | OutputFormat::Yaml | OutputFormat::Json => {
            Ok(render_table(headers, rows, false))
        }
    }
}

fn render_delimited(delimiter: u8, headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(headers).into_diagnostic()?;
    for row in rows {
        writer.write_record(row).into_diagnostic()?;
    }

    let bytes = writer.into_inner().into_diagnostic()?;
    String::from_utf8(bytes).into_diagnostic()
}

fn render_table(headers: &[&str], rows: &[Vec<String>], markdown: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for row in rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    if markdown {
        table.with(Style::markdown());
    } else {
        table.with(Style::rounded());
    }

    let mut output = table.to_string();
    output.push('\n');
    output
}
