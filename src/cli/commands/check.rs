//! `partcheck check` command - Report missing parts for car documents

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::helpers::{resolve_format, write_output};
use crate::cli::table::render_rows;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::inventory::{compute_shortfalls, ExcessParts, LogObserver, ShortfallReport};
use crate::core::loader::{load_all, load_car};
use crate::core::Config;
use crate::entities::{Car, PartType};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Car documents (.yaml, .yml, .json) or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Also show how many parts are still needed for each short type
    #[arg(long)]
    pub deficit: bool,

    /// Exit with an error if any car is missing parts
    #[arg(long)]
    pub strict: bool,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Result of checking one car document
#[derive(Debug, Serialize)]
struct CarCheck {
    file: String,
    car: String,
    complete: bool,
    missing: ShortfallReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    deficit: Option<BTreeMap<PartType, u32>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    excess: Vec<ExcessParts>,
}

impl CarCheck {
    fn new(path: PathBuf, car: &Car, with_deficit: bool) -> Self {
        let mut excess: Vec<ExcessParts> = Vec::new();
        let missing = compute_shortfalls(car, &mut (LogObserver, &mut excess));

        let deficit = with_deficit.then(|| {
            missing
                .iter()
                .filter_map(|(t, _)| missing.deficit(t).map(|d| (t, d)))
                .collect()
        });

        Self {
            file: path.display().to_string(),
            car: car.label(),
            complete: missing.is_complete(),
            missing,
            deficit,
            excess,
        }
    }
}

pub fn run(args: CheckArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let cars = load_paths(&args.paths)?;

    let checks: Vec<CarCheck> = cars
        .into_iter()
        .map(|(path, car)| CarCheck::new(path, &car, args.deficit))
        .collect();

    let content = match resolve_format(global, config) {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&checks).into_diagnostic()?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yml::to_string(&checks).into_diagnostic()?,
        format @ (OutputFormat::Tsv | OutputFormat::Csv | OutputFormat::Md) => {
            render_flat(format, &checks, args.deficit)?
        }
        OutputFormat::Auto => render_pretty(&checks, args.deficit, global.quiet)?,
    };

    write_output(&content, args.output.as_deref(), global.quiet)?;

    let incomplete = checks.iter().filter(|c| !c.complete).count();
    if args.strict && incomplete > 0 {
        return Err(miette::miette!(
            "{} of {} car(s) are missing parts",
            incomplete,
            checks.len()
        ));
    }

    Ok(())
}

/// Load every named file, and every readable car document under named directories.
///
/// Files named explicitly must load; bad documents inside a directory are
/// skipped with a warning.
fn load_paths(paths: &[PathBuf]) -> Result<Vec<(PathBuf, Car)>> {
    let mut cars = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = load_all(path);
            if found.is_empty() {
                tracing::warn!(dir = %path.display(), "no car documents found");
            }
            cars.extend(found);
        } else {
            let car = load_car(path)?;
            cars.push((path.clone(), car));
        }
    }

    if cars.is_empty() {
        return Err(miette::miette!("No car documents to check"));
    }

    Ok(cars)
}

/// One row per missing part type, for TSV/CSV/Markdown
fn render_flat(format: OutputFormat, checks: &[CarCheck], with_deficit: bool) -> Result<String> {
    let mut headers = vec!["file", "car", "type", "installed", "required"];
    if with_deficit {
        headers.push("deficit");
    }

    let mut rows = Vec::new();
    for check in checks {
        for (part_type, installed) in check.missing.iter() {
            let mut row = vec![
                check.file.clone(),
                check.car.clone(),
                part_type.to_string(),
                installed.to_string(),
                part_type.required_quantity().to_string(),
            ];
            if with_deficit {
                row.push(check.missing.deficit(part_type).unwrap_or(0).to_string());
            }
            rows.push(row);
        }
    }

    render_rows(format, &headers, &rows)
}

fn render_pretty(checks: &[CarCheck], with_deficit: bool, quiet: bool) -> Result<String> {
    let mut out = String::new();

    for check in checks {
        out.push_str(&format!("{}\n", style("─".repeat(60)).dim()));
        out.push_str(&format!(
            "{}: {}\n",
            style("Car").bold(),
            style(&check.car).yellow()
        ));
        out.push_str(&format!("{}: {}\n", style("File").bold(), style(&check.file).dim()));

        if check.complete {
            out.push_str(&format!("{} All required parts present\n", style("✓").green()));
        } else {
            out.push_str(&format!(
                "{} Missing {} part type(s)\n",
                style("✗").red(),
                check.missing.len()
            ));

            let mut headers = vec!["Type", "Installed", "Required"];
            if with_deficit {
                headers.push("Deficit");
            }
            let rows: Vec<Vec<String>> = check
                .missing
                .iter()
                .map(|(t, installed)| {
                    let mut row = vec![
                        t.to_string(),
                        installed.to_string(),
                        t.required_quantity().to_string(),
                    ];
                    if with_deficit {
                        row.push(check.missing.deficit(t).unwrap_or(0).to_string());
                    }
                    row
                })
                .collect();
            out.push_str(&render_rows(OutputFormat::Auto, &headers, &rows)?);
        }

        if !quiet {
            for excess in &check.excess {
                out.push_str(&format!(
                    "{} {} x{} installed, {} required\n",
                    style("!").yellow(),
                    excess.part_type,
                    excess.installed,
                    excess.required
                ));
            }
        }
    }

    if !quiet && checks.len() > 1 {
        let complete = checks.iter().filter(|c| c.complete).count();
        out.push_str(&format!(
            "\n{} of {} car(s) complete\n",
            style(complete).cyan(),
            checks.len()
        ));
    }

    Ok(out)
}
