//! On-duty computation for rotation patterns

use chrono::NaiveDate;
use plantao_domain::utils::calendar::days_between;

use super::pattern::{PatternRegistry, RotationPattern};

/// Whether an agent anchored at `anchor` is on duty on `query`.
///
/// Dates before the anchor are never working days. Otherwise the day's
/// position in the cycle is `days_between(anchor, query) mod cycle_length`.
pub fn is_working_day(anchor: NaiveDate, pattern: &RotationPattern, query: NaiveDate) -> bool {
    let diff = days_between(anchor, query);
    if diff < 0 {
        return false;
    }

    let cycle_day = diff.rem_euclid(i64::from(pattern.cycle_length()));
    u32::try_from(cycle_day).is_ok_and(|day| pattern.is_working_offset(day))
}

/// Rotation calendar over a pattern table.
///
/// Unknown pattern names mean "no schedule": the agent is never on duty.
/// Callers that need strict validation check [`PatternRegistry::contains`]
/// first.
#[derive(Debug, Clone, Default)]
pub struct RotationCalendar {
    registry: PatternRegistry,
}

impl RotationCalendar {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn is_working_day(&self, anchor: NaiveDate, pattern: &str, query: NaiveDate) -> bool {
        self.registry.get(pattern).is_some_and(|p| is_working_day(anchor, p, query))
    }

    /// The next `count` on-duty dates on or after `from`.
    pub fn upcoming_shifts(
        &self,
        anchor: NaiveDate,
        pattern: &str,
        from: NaiveDate,
        count: usize,
    ) -> Vec<NaiveDate> {
        let Some(rotation) = self.registry.get(pattern) else {
            return Vec::new();
        };

        // every cycle holds offset 0, so `count` cycles always suffice
        let horizon = count.saturating_mul(rotation.cycle_length() as usize);
        from.max(anchor)
            .iter_days()
            .take(horizon)
            .filter(|day| is_working_day(anchor, rotation, *day))
            .take(count)
            .collect()
    }

    /// On-duty days in the inclusive range `start..=end`.
    pub fn working_days_between(
        &self,
        anchor: NaiveDate,
        pattern: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> usize {
        let Some(rotation) = self.registry.get(pattern) else {
            return 0;
        };
        if end < start {
            return 0;
        }

        start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| is_working_day(anchor, rotation, *day))
            .count()
    }
}
