//! Domain types and models

pub mod agent;
pub mod money;
pub mod month;
pub mod overtime;
pub mod schedule;
pub mod stats;

pub use agent::{Agent, Team};
pub use money::Money;
pub use month::MonthKey;
pub use overtime::{Actor, OvertimeEntry, OvertimePatch, OvertimeRequest, ShiftType};
pub use schedule::{DayOff, DutyStatus, OffType, ShiftSchedule};
pub use stats::{
    LedgerOverview, LedgerStatistics, MonthBucket, MonthlySummary, ShiftHours, YearlySummary,
};
