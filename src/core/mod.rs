//! Core module - inventory checking, loading and configuration

pub mod config;
pub mod inventory;
pub mod loader;

pub use config::Config;
pub use inventory::{
    compute_shortfalls, tally_parts, ExcessParts, FnObserver, InventoryObserver, LogObserver,
    PartTally, ShortfallReport,
};
pub use loader::{load_all, load_car, LoadError};
