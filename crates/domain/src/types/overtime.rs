//! Overtime (time-bank) entries
//!
//! `month_year` and `total_value` are derived fields: the ledger recomputes
//! them on every create and update and nothing else should write them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_enum_conversions;
use crate::types::{Money, MonthKey};

/// Shift during which the extra hours were worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Day,
    Night,
}

impl_domain_enum_conversions!(ShiftType {
    Day => "day",
    Night => "night",
});

impl ShiftType {
    pub const ALL: [Self; 2] = [Self::Day, Self::Night];
}

/// Validated time-bank entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    pub id: Uuid,
    pub agent_id: String,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub hour_value: f64,
    pub shift_type: ShiftType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub month_year: MonthKey,
    pub total_value: Money,
}

/// Raw creation request as it arrives from a form or the gateway.
///
/// Dates and shift types are still text here; the ledger parses them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    pub agent_id: String,
    pub date: String,
    pub hours_worked: f64,
    pub hour_value: f64,
    pub shift_type: String,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update. `None` leaves a field untouched; for the two optional
/// text fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OvertimePatch {
    pub date: Option<String>,
    pub hours_worked: Option<f64>,
    pub hour_value: Option<f64>,
    pub shift_type: Option<String>,
    pub scheduled_time: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

impl OvertimePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether applying this patch requires recomputing derived fields.
    pub fn touches_derived_fields(&self) -> bool {
        self.date.is_some() || self.hours_worked.is_some() || self.hour_value.is_some()
    }
}

/// Who is performing a ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub agent_id: String,
    pub is_admin: bool,
}

impl Actor {
    pub fn agent(agent_id: impl Into<String>) -> Self {
        Self { agent_id: agent_id.into(), is_admin: false }
    }

    pub fn admin(agent_id: impl Into<String>) -> Self {
        Self { agent_id: agent_id.into(), is_admin: true }
    }

    /// Owners and administrators may modify an entry.
    pub fn can_modify(&self, entry: &OvertimeEntry) -> bool {
        self.is_admin || self.agent_id == entry.agent_id
    }
}
