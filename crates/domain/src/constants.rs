//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Overtime ledger invariants
pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;
pub const CENTS_PER_UNIT: i64 = 100;
/// Largest `total_value` a single entry may carry, in cents.
pub const MAX_ENTRY_TOTAL_CENTS: i64 = 1_000_000_000_000;

// Rotation patterns shipped by default
pub const PATTERN_24X72: &str = "24x72";
pub const PATTERN_24X48: &str = "24x48";
pub const PATTERN_12X36: &str = "12x36";

// Aggregation and roster defaults
pub const DEFAULT_ROLLING_WINDOW_MONTHS: u32 = 6;
pub const DEFAULT_ROSTER_DAYS: u32 = 7;
pub const MAX_ROLLING_WINDOW_MONTHS: u32 = 120;

// Date formats (calendar dates only, no time-of-day)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";
