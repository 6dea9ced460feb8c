//! Car entity - A vehicle assembly record and its installed parts

use serde::{Deserialize, Serialize};

use crate::core::inventory::{compute_shortfalls, LogObserver, ShortfallReport};
use crate::entities::part::{Part, PartType};

/// Vehicle assembly record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Model year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Manufacturer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    /// Model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Installed parts. `None` means the record lists no parts at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

impl Car {
    /// Create a car record with no parts
    pub fn new(
        year: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            year: Some(year.into()),
            make: Some(make.into()),
            model: Some(model.into()),
            parts: None,
        }
    }

    /// Create an anonymous car holding parts of the given types
    pub fn with_part_types(types: impl IntoIterator<Item = PartType>) -> Self {
        Self {
            parts: Some(types.into_iter().map(Part::new).collect()),
            ..Default::default()
        }
    }

    /// Install a part
    pub fn add_part(&mut self, part: Part) {
        self.parts.get_or_insert_with(Vec::new).push(part);
    }

    /// Installed parts; empty when the record has none
    pub fn parts(&self) -> &[Part] {
        self.parts.as_deref().unwrap_or(&[])
    }

    /// Short human label, e.g. "2014 Honda Civic"
    pub fn label(&self) -> String {
        let fields: Vec<&str> = [&self.year, &self.make, &self.model]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .filter(|f| !f.is_empty())
            .collect();

        if fields.is_empty() {
            "unnamed car".to_string()
        } else {
            fields.join(" ")
        }
    }

    /// Part types that are absent or under-count, keyed to their installed count
    ///
    /// Excess parts are logged as warnings and do not appear in the result.
    pub fn missing_parts(&self) -> ShortfallReport {
        compute_shortfalls(self, &mut LogObserver)
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} part(s))", self.label(), self.parts().len())
    }
}
