//! Overtime ledger - validation and derivation for time-bank entries
//!
//! The ledger holds no state. Each operation takes the current data, checks
//! the entry invariants and returns the new value; persisting it is the
//! caller's job.
//!
//! Invariants enforced on every create and update:
//! - `0 < hours_worked <= 24`
//! - `hour_value > 0`
//! - `total_value` stays within `MAX_ENTRY_TOTAL_CENTS`
//! - `date` is a real calendar date, `shift_type` is `day` or `night`
//! - `month_year` and `total_value` are derived, never taken from input

use plantao_domain::constants::{CENTS_PER_UNIT, MAX_ENTRY_TOTAL_CENTS, MAX_HOURS_PER_ENTRY};
use plantao_domain::{
    parse_date, Money, MonthKey, OvertimeEntry, OvertimePatch, OvertimeRequest, PlantaoError,
    Result, ShiftType,
};
use uuid::Uuid;

/// Stateless validator for overtime entries
#[derive(Debug, Clone, Copy, Default)]
pub struct OvertimeLedger;

impl OvertimeLedger {
    pub fn new() -> Self {
        Self
    }

    /// Validate a request and build a new entry with a fresh id.
    ///
    /// # Errors
    /// Returns `PlantaoError::Validation` describing the first invalid field.
    pub fn create_entry(&self, request: OvertimeRequest) -> Result<OvertimeEntry> {
        let agent_id = request.agent_id.trim();
        if agent_id.is_empty() {
            return Err(PlantaoError::Validation("agent_id must not be empty".to_string()));
        }

        let date = parse_date(&request.date)?;
        let hours_worked = validate_hours(request.hours_worked)?;
        let hour_value = validate_hour_value(request.hour_value)?;
        let shift_type = request.shift_type.parse::<ShiftType>()?;

        validate_total(hours_worked, hour_value)?;

        Ok(derive(OvertimeEntry {
            id: Uuid::now_v7(),
            agent_id: agent_id.to_string(),
            date,
            hours_worked,
            hour_value,
            shift_type,
            scheduled_time: clean_text(request.scheduled_time),
            description: clean_text(request.description),
            month_year: MonthKey::from_date(date),
            total_value: Money::ZERO,
        }))
    }

    /// Apply a partial update to an existing entry.
    ///
    /// Changed fields go through the same checks as on creation; derived
    /// fields are recomputed from the result.
    pub fn apply_patch(&self, existing: &OvertimeEntry, patch: OvertimePatch) -> Result<OvertimeEntry> {
        let mut entry = existing.clone();

        if let Some(date) = patch.date {
            entry.date = parse_date(&date)?;
        }
        if let Some(hours) = patch.hours_worked {
            entry.hours_worked = validate_hours(hours)?;
        }
        if let Some(rate) = patch.hour_value {
            entry.hour_value = validate_hour_value(rate)?;
        }
        if let Some(shift_type) = patch.shift_type {
            entry.shift_type = shift_type.parse()?;
        }
        if let Some(scheduled_time) = patch.scheduled_time {
            entry.scheduled_time = clean_text(scheduled_time);
        }
        if let Some(description) = patch.description {
            entry.description = clean_text(description);
        }

        validate_total(entry.hours_worked, entry.hour_value)?;
        Ok(derive(entry))
    }

    /// Locate entry `id` in `entries` and apply `patch` to it.
    ///
    /// # Errors
    /// `NotFound` when no entry has that id, `Validation` for bad fields.
    pub fn update_entry(
        &self,
        entries: &[OvertimeEntry],
        id: Uuid,
        patch: OvertimePatch,
    ) -> Result<OvertimeEntry> {
        let existing = find(entries, id)?;
        self.apply_patch(existing, patch)
    }

    /// Return `entries` without entry `id`.
    ///
    /// # Errors
    /// `NotFound` when no entry has that id.
    pub fn delete_entry(&self, entries: &[OvertimeEntry], id: Uuid) -> Result<Vec<OvertimeEntry>> {
        find(entries, id)?;
        Ok(entries.iter().filter(|e| e.id != id).cloned().collect())
    }
}

/// Recompute `month_year` and `total_value` from the primary fields.
pub fn derive(mut entry: OvertimeEntry) -> OvertimeEntry {
    entry.month_year = MonthKey::from_date(entry.date);
    entry.total_value = Money::from_product(entry.hours_worked, entry.hour_value);
    entry
}

fn find(entries: &[OvertimeEntry], id: Uuid) -> Result<&OvertimeEntry> {
    entries
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| PlantaoError::NotFound(format!("Overtime entry {id}")))
}

fn validate_hours(hours: f64) -> Result<f64> {
    if hours.is_finite() && hours > 0.0 && hours <= MAX_HOURS_PER_ENTRY {
        Ok(hours)
    } else {
        Err(PlantaoError::Validation(format!(
            "hours_worked must be greater than 0 and at most {MAX_HOURS_PER_ENTRY}, got {hours}"
        )))
    }
}

fn validate_hour_value(rate: f64) -> Result<f64> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(PlantaoError::Validation(format!("hour_value must be positive, got {rate}")))
    }
}

fn validate_total(hours: f64, rate: f64) -> Result<()> {
    let cents = hours * rate * CENTS_PER_UNIT as f64;
    if cents <= MAX_ENTRY_TOTAL_CENTS as f64 {
        Ok(())
    } else {
        Err(PlantaoError::Validation(format!(
            "total_value of {hours} h at {rate} exceeds the per-entry limit of {}",
            MAX_ENTRY_TOTAL_CENTS / CENTS_PER_UNIT
        )))
    }
}

fn clean_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
