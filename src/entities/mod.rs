//! Entity type definitions
//!
//! - [`Car`] - A vehicle assembly record with its installed parts
//! - [`Part`] - An installed component of a given [`PartType`]

pub mod car;
pub mod part;

pub use car::Car;
pub use part::{ConditionType, Part, PartType, REQUIRED_QUANTITIES};
