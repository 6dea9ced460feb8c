//! Car document loading
//!
//! Reads car records from YAML (`.yaml`/`.yml`) or JSON (`.json`) files into
//! [`Car`] values. Parse failures carry source spans for miette rendering.

use miette::Diagnostic;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::entities::Car;
use crate::yaml::YamlSyntaxError;

/// Errors raised while reading a car document
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read {}", path.display())]
    #[diagnostic(code(partcheck::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlSyntaxError),

    #[error("Invalid JSON in {}: {source}", path.display())]
    #[diagnostic(code(partcheck::load::json))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported car document: {}", path.display())]
    #[diagnostic(
        code(partcheck::load::format),
        help("car documents must end in .yaml, .yml or .json")
    )]
    UnsupportedFormat { path: PathBuf },
}

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "json" => Some(DocumentFormat::Json),
            _ => None,
        }
    }
}

/// Parse a car from YAML source; `name` labels the source in diagnostics
pub fn parse_car_yaml(source: &str, name: &str) -> Result<Car, LoadError> {
    serde_yml::from_str(source)
        .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, name).into())
}

/// Parse a car from JSON source
pub fn parse_car_json(source: &str, path: &Path) -> Result<Car, LoadError> {
    serde_json::from_str(source).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a single car document
pub fn load_car(path: &Path) -> Result<Car, LoadError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loading car document");

    match format {
        DocumentFormat::Yaml => parse_car_yaml(&content, &path.display().to_string()),
        DocumentFormat::Json => parse_car_json(&content, path),
    }
}

/// Car documents under a directory, sorted by path
pub fn find_car_documents(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| DocumentFormat::from_path(p).is_some())
        .collect();

    files.sort();
    files
}

/// Load every car document under a directory
///
/// Documents that fail to load are skipped with a warning.
pub fn load_all(dir: &Path) -> Vec<(PathBuf, Car)> {
    find_car_documents(dir)
        .into_iter()
        .filter_map(|path| match load_car(&path) {
            Ok(car) => Some((path, car)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping car document");
                None
            }
        })
        .collect()
}
