//! # Plantao Domain
//!
//! Business domain types and models for the shift rotation and overtime
//! ledger engine.
//!
//! This crate contains:
//! - Agents, teams, shift schedules and day-off exceptions
//! - Overtime (time-bank) entries, money and month keys
//! - Aggregation result types
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Plantao crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::calendar::{month_label, parse_date};
