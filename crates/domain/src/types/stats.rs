//! Aggregation result types
//!
//! None of these are persisted: they are derived from the current entry
//! collection every time they are requested.

use serde::{Deserialize, Serialize};

use crate::types::{Money, MonthKey, OvertimeEntry, ShiftType};

/* -------------------------------------------------------------------------- */
/* Monthly / Yearly */
/* -------------------------------------------------------------------------- */

/// Totals for one `YYYY-MM` month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub total_hours: f64,
    pub total_value: Money,
    pub day_shift_count: usize,
    pub night_shift_count: usize,
    pub count: usize,
}

/// Totals for one calendar year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub total_hours: f64,
    pub total_value: Money,
    pub count: usize,
}

/* -------------------------------------------------------------------------- */
/* Rolling evolution */
/* -------------------------------------------------------------------------- */

/// One month of the rolling evolution. Empty months are zero-valued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month: MonthKey,
    /// Display label such as `Mar 2024`.
    pub label: String,
    pub hours: f64,
    pub value: Money,
    pub count: usize,
}

/* -------------------------------------------------------------------------- */
/* Distribution / Statistics */
/* -------------------------------------------------------------------------- */

/// Hours per shift type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftHours {
    pub shift_type: ShiftType,
    pub total_hours: f64,
}

/// Descriptive statistics over an entry collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerStatistics {
    /// Zero when the collection is empty.
    pub average_hours_per_entry: f64,
    /// First entry with the largest `hours_worked`.
    pub max_hours_entry: Option<OvertimeEntry>,
    /// Mean of `hour_value`; zero when the collection is empty.
    pub average_hourly_rate: f64,
}

/// Everything a ledger dashboard shows, recomputed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerOverview {
    pub reference_month: MonthKey,
    pub month: MonthlySummary,
    pub year: YearlySummary,
    pub evolution: Vec<MonthBucket>,
    pub distribution: Vec<ShiftHours>,
    pub statistics: LedgerStatistics,
    pub available_months: Vec<MonthKey>,
}
