//! Duty overlay and team roster

pub mod builder;
pub mod overlay;
pub mod ports;
pub mod service;

pub use builder::{build_roster, build_team_roster, RosterDay, RosterException};
pub use overlay::{effective_status, DutyOverlay};
pub use service::RosterService;
