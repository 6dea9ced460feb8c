//! Part entity type - Installed vehicle components

use serde::{Deserialize, Serialize};

/// Category of vehicle part subject to a completeness requirement
///
/// The set is closed: every car is checked against all of these, in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartType {
    Engine,
    Electrical,
    FuelFilter,
    OilFilter,
    Tire,
}

/// Required quantity of each part type for a complete car
pub const REQUIRED_QUANTITIES: [(PartType, u32); 5] = [
    (PartType::Engine, 1),
    (PartType::Electrical, 1),
    (PartType::FuelFilter, 1),
    (PartType::OilFilter, 1),
    (PartType::Tire, 4),
];

impl PartType {
    /// Every part type, in declaration order
    pub const ALL: [PartType; 5] = [
        PartType::Engine,
        PartType::Electrical,
        PartType::FuelFilter,
        PartType::OilFilter,
        PartType::Tire,
    ];

    /// Number of parts of this type a complete car carries
    pub const fn required_quantity(self) -> u32 {
        match self {
            PartType::Tire => 4,
            PartType::Engine
            | PartType::Electrical
            | PartType::FuelFilter
            | PartType::OilFilter => 1,
        }
    }

    /// Canonical document spelling (e.g. `FUEL_FILTER`)
    pub const fn as_str(self) -> &'static str {
        match self {
            PartType::Engine => "ENGINE",
            PartType::Electrical => "ELECTRICAL",
            PartType::FuelFilter => "FUEL_FILTER",
            PartType::OilFilter => "OIL_FILTER",
            PartType::Tire => "TIRE",
        }
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        PartType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Invalid part type: {}. Use ENGINE, ELECTRICAL, FUEL_FILTER, OIL_FILTER, or TIRE",
                    s
                )
            })
    }
}

/// Recorded condition of an installed part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    New,
    Good,
    Worn,
    Used,
    Damaged,
    Broken,
    Salvage,
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionType::New => write!(f, "new"),
            ConditionType::Good => write!(f, "good"),
            ConditionType::Worn => write!(f, "worn"),
            ConditionType::Used => write!(f, "used"),
            ConditionType::Damaged => write!(f, "damaged"),
            ConditionType::Broken => write!(f, "broken"),
            ConditionType::Salvage => write!(f, "salvage"),
        }
    }
}

/// An installed component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Inventory identifier, if the record carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_id: Option<String>,

    /// Part category
    #[serde(rename = "type")]
    pub part_type: PartType,

    /// Recorded condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionType>,
}

impl Part {
    /// Create a part of the given type with no inventory id or condition
    pub fn new(part_type: PartType) -> Self {
        Self {
            inventory_id: None,
            part_type,
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: ConditionType) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_inventory_id(mut self, id: impl Into<String>) -> Self {
        self.inventory_id = Some(id.into());
        self
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.part_type)?;
        if let Some(ref id) = self.inventory_id {
            write!(f, " [{}]", id)?;
        }
        if let Some(condition) = self.condition {
            write!(f, " ({})", condition)?;
        }
        Ok(())
    }
}
