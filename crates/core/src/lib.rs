//! # Plantao Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Rotation calendar and pattern lookup table
//! - Day-off overlay and team roster builder
//! - Overtime ledger validation and aggregation
//! - Port interfaces (traits) for the persistence gateway
//! - Services that fetch through ports and recompute results
//!
//! ## Architecture Principles
//! - Only depends on `plantao-domain`
//! - No database, HTTP, or platform code
//! - Never reads the clock: "today" is always a parameter
//! - All external dependencies via traits

pub mod overtime;
pub mod roster;
pub mod rotation;
pub mod schedule;

// Re-export specific items to avoid ambiguity
pub use overtime::aggregation;
pub use overtime::ledger::OvertimeLedger;
pub use overtime::ports::OvertimeRepository;
pub use overtime::{LedgerUpdate, OvertimeService};
pub use roster::builder::{build_roster, build_team_roster, RosterDay, RosterException};
pub use roster::overlay::{effective_status, DutyOverlay};
pub use roster::ports::AgentDirectory;
pub use roster::RosterService;
pub use rotation::{PatternRegistry, RotationCalendar, RotationPattern};
pub use schedule::ports::{DayOffRepository, ScheduleRepository};
pub use schedule::ScheduleService;
