//! partcheck: vehicle assembly parts inventory checker
//!
//! Validates a car's installed parts against the fixed set of required part
//! types and reports which types are missing or under-count.
//!
//! ```
//! use partcheck::core::inventory::{compute_shortfalls, ExcessParts};
//! use partcheck::entities::{Car, PartType};
//!
//! let car = Car::with_part_types([PartType::Tire; 3]);
//! let mut excess: Vec<ExcessParts> = Vec::new();
//! let report = compute_shortfalls(&car, &mut excess);
//!
//! assert_eq!(report.get(PartType::Tire), Some(3));
//! assert_eq!(report.get(PartType::Engine), Some(0));
//! assert!(excess.is_empty());
//! ```

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
