//! Parts inventory checking
//!
//! Compares a car's installed parts against the required quantity of every
//! [`PartType`] and reports the types that fall short. Excess parts are not
//! an error; they are handed to an [`InventoryObserver`] and otherwise ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{Car, Part, PartType};

/// Count of installed parts per type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartTally {
    counts: BTreeMap<PartType, u32>,
}

impl PartTally {
    /// Installed count for a type, 0 when none are present
    pub fn get(&self, part_type: PartType) -> u32 {
        self.counts.get(&part_type).copied().unwrap_or(0)
    }

    /// Types with at least one installed part, with their counts
    pub fn iter(&self) -> impl Iterator<Item = (PartType, u32)> + '_ {
        self.counts.iter().map(|(t, n)| (*t, *n))
    }

    pub fn total(&self) -> u32 {
        self.counts.values().fold(0, |acc, n| acc.saturating_add(*n))
    }

    /// Count one more part of a type; saturates at `u32::MAX`
    fn add(&mut self, part_type: PartType) {
        let count = self.counts.entry(part_type).or_insert(0);
        *count = count.saturating_add(1);
    }
}

/// Tally installed parts by type
pub fn tally_parts<'a>(parts: impl IntoIterator<Item = &'a Part>) -> PartTally {
    let mut tally = PartTally::default();
    for part in parts {
        tally.add(part.part_type);
    }
    tally
}

/// Part types below their required quantity, keyed to the *installed* count
///
/// A type that is fully satisfied or in excess never appears. Reports built
/// from a map or iterator drop such entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<PartType, u32>", into = "BTreeMap<PartType, u32>")]
pub struct ShortfallReport {
    entries: BTreeMap<PartType, u32>,
}

impl ShortfallReport {
    /// Installed count for a short type, `None` if the type is not short
    pub fn get(&self, part_type: PartType) -> Option<u32> {
        self.entries.get(&part_type).copied()
    }

    pub fn contains(&self, part_type: PartType) -> bool {
        self.entries.contains_key(&part_type)
    }

    /// Number of parts still needed to satisfy a short type
    pub fn deficit(&self, part_type: PartType) -> Option<u32> {
        self.get(part_type)
            .map(|installed| part_type.required_quantity().saturating_sub(installed))
    }

    /// Short types with their installed counts, in part type order
    pub fn iter(&self) -> impl Iterator<Item = (PartType, u32)> + '_ {
        self.entries.iter().map(|(t, n)| (*t, *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no part type is short
    pub fn is_complete(&self) -> bool {
        self.is_empty()
    }

    /// Total number of parts needed to complete the car
    pub fn total_deficit(&self) -> u32 {
        self.iter()
            .map(|(t, installed)| t.required_quantity().saturating_sub(installed))
            .sum()
    }
}

impl FromIterator<(PartType, u32)> for ShortfallReport {
    fn from_iter<I: IntoIterator<Item = (PartType, u32)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .filter(|(t, installed)| *installed < t.required_quantity())
                .collect(),
        }
    }
}

impl From<BTreeMap<PartType, u32>> for ShortfallReport {
    fn from(entries: BTreeMap<PartType, u32>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ShortfallReport> for BTreeMap<PartType, u32> {
    fn from(report: ShortfallReport) -> Self {
        report.entries
    }
}

/// More parts of one type installed than a complete car requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcessParts {
    pub part_type: PartType,
    pub installed: u32,
    pub required: u32,
    /// Label of the car the parts were found on
    pub car: String,
}

impl ExcessParts {
    pub fn surplus(&self) -> u32 {
        self.installed.saturating_sub(self.required)
    }
}

impl std::fmt::Display for ExcessParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Too many parts of type '{}' specified for '{}': {} (required {})",
            self.part_type, self.car, self.installed, self.required
        )
    }
}

/// Receives non-fatal observations made while checking a car
pub trait InventoryObserver {
    fn on_excess(&mut self, excess: &ExcessParts);
}

/// Discards every observation
impl InventoryObserver for () {
    fn on_excess(&mut self, _excess: &ExcessParts) {}
}

/// Collects observations in order
impl InventoryObserver for Vec<ExcessParts> {
    fn on_excess(&mut self, excess: &ExcessParts) {
        self.push(excess.clone());
    }
}

impl<O: InventoryObserver + ?Sized> InventoryObserver for &mut O {
    fn on_excess(&mut self, excess: &ExcessParts) {
        (**self).on_excess(excess);
    }
}

/// Forwards every observation to both observers
impl<A: InventoryObserver, B: InventoryObserver> InventoryObserver for (A, B) {
    fn on_excess(&mut self, excess: &ExcessParts) {
        self.0.on_excess(excess);
        self.1.on_excess(excess);
    }
}

/// Adapts a closure into an observer
///
/// ```
/// use partcheck::core::inventory::{compute_shortfalls, ExcessParts, FnObserver};
/// use partcheck::entities::{Car, PartType};
///
/// let mut seen = 0;
/// let car = Car::with_part_types([PartType::Engine; 2]);
/// compute_shortfalls(&car, &mut FnObserver(|_: &ExcessParts| seen += 1));
/// assert_eq!(seen, 1);
/// ```
pub struct FnObserver<F>(pub F);

impl<F: FnMut(&ExcessParts)> InventoryObserver for FnObserver<F> {
    fn on_excess(&mut self, excess: &ExcessParts) {
        (self.0)(excess);
    }
}

/// Emits each observation as a `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl InventoryObserver for LogObserver {
    fn on_excess(&mut self, excess: &ExcessParts) {
        tracing::warn!(
            part_type = %excess.part_type,
            installed = excess.installed,
            required = excess.required,
            car = %excess.car,
            "too many parts of type specified"
        );
    }
}

/// Compute which required part types a car is short of
///
/// Every [`PartType`] is evaluated exactly once. A type whose installed count
/// is below its required quantity is reported with the installed count; a type
/// above it is passed to `observer` and left out of the report.
pub fn compute_shortfalls<O: InventoryObserver + ?Sized>(
    car: &Car,
    observer: &mut O,
) -> ShortfallReport {
    let tally = tally_parts(car.parts());
    let mut report = ShortfallReport::default();

    for part_type in PartType::ALL {
        let installed = tally.get(part_type);
        let required = part_type.required_quantity();

        if installed < required {
            report.entries.insert(part_type, installed);
        } else if installed > required {
            observer.on_excess(&ExcessParts {
                part_type,
                installed,
                required,
                car: car.label(),
            });
        }
    }

    tracing::debug!(
        car = %car.label(),
        parts = tally.total(),
        shortfalls = report.len(),
        "checked parts inventory"
    );

    report
}
