//! `partcheck catalog` command - Show required part quantities

use miette::{IntoDiagnostic, Result};
use std::collections::BTreeMap;

use crate::cli::helpers::resolve_format;
use crate::cli::table::render_rows;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::{PartType, REQUIRED_QUANTITIES};

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {}

pub fn run(_args: CatalogArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let catalog: BTreeMap<PartType, u32> = REQUIRED_QUANTITIES.into_iter().collect();

    match resolve_format(global, config) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&catalog).into_diagnostic()?);
        }
        format => {
            let rows: Vec<Vec<String>> = catalog
                .iter()
                .map(|(t, n)| vec![t.to_string(), n.to_string()])
                .collect();
            print!("{}", render_rows(format, &["type", "required"], &rows)?);
        }
    }

    Ok(())
}
