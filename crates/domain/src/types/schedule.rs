//! Shift schedules, day-off exceptions and effective duty status

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Rotation anchor for one agent (one-to-one with `Agent`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    pub agent_id: String,
    /// First on-duty date; fixes the phase of the rotation cycle.
    pub first_shift_date: NaiveDate,
    /// Rotation rule identifier, e.g. `24x72`.
    pub pattern: String,
    #[serde(default)]
    pub is_locked: bool,
}

impl ShiftSchedule {
    pub fn new(agent_id: impl Into<String>, first_shift_date: NaiveDate, pattern: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            first_shift_date,
            pattern: pattern.into(),
            is_locked: false,
        }
    }

    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }
}

/// Reason an agent is excused from duty on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffType {
    Vacation,
    Medical,
    #[serde(alias = "other")]
    Personal,
}

impl_domain_enum_conversions!(OffType {
    Vacation => "vacation",
    Medical => "medical",
    Personal => "personal" | "other",
});

/// Explicit day-off record, unique per `(agent_id, off_date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOff {
    pub agent_id: String,
    pub off_date: NaiveDate,
    pub off_type: OffType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DayOff {
    pub fn new(agent_id: impl Into<String>, off_date: NaiveDate, off_type: OffType) -> Self {
        Self { agent_id: agent_id.into(), off_date, off_type, reason: None }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Effective status of one agent on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyStatus {
    pub working: bool,
    /// Set only when a day-off exception produced the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_type: Option<OffType>,
}

impl DutyStatus {
    pub const fn on_duty() -> Self {
        Self { working: true, off_type: None }
    }

    pub const fn off_duty() -> Self {
        Self { working: false, off_type: None }
    }

    pub const fn excused(off_type: OffType) -> Self {
        Self { working: false, off_type: Some(off_type) }
    }

    pub const fn is_exception(&self) -> bool {
        self.off_type.is_some()
    }
}
