//! Day-off overlay on top of the rotation calendar
//!
//! An explicit day-off record always wins over the computed rotation. The
//! underlying cycle is never shifted by an exception.

use std::collections::HashMap;

use chrono::NaiveDate;
use plantao_domain::{DayOff, DutyStatus, ShiftSchedule};
use tracing::debug;

use crate::rotation::RotationCalendar;

/// Effective status of one agent on one date.
///
/// Without a schedule the agent has no anchor and is never on duty.
pub fn effective_status(
    calendar: &RotationCalendar,
    schedule: Option<&ShiftSchedule>,
    day_off: Option<&DayOff>,
    date: NaiveDate,
) -> DutyStatus {
    if let Some(day_off) = day_off {
        return DutyStatus::excused(day_off.off_type);
    }

    match schedule {
        Some(s) if calendar.is_working_day(s.first_shift_date, &s.pattern, date) => {
            DutyStatus::on_duty()
        }
        _ => DutyStatus::off_duty(),
    }
}

/// Lookup maps over schedules and day-off records, built once and queried
/// per `(agent, date)` in constant time.
#[derive(Debug)]
pub struct DutyOverlay<'a> {
    calendar: &'a RotationCalendar,
    schedules: HashMap<&'a str, &'a ShiftSchedule>,
    days_off: HashMap<&'a str, HashMap<NaiveDate, &'a DayOff>>,
}

impl<'a> DutyOverlay<'a> {
    /// Index the given records. When the input holds duplicates for the same
    /// agent (or agent and date) the first record wins.
    pub fn new(
        calendar: &'a RotationCalendar,
        schedules: &'a [ShiftSchedule],
        days_off: &'a [DayOff],
    ) -> Self {
        let mut schedule_map = HashMap::with_capacity(schedules.len());
        for schedule in schedules {
            if !calendar.registry().contains(&schedule.pattern) {
                debug!(
                    agent_id = %schedule.agent_id,
                    pattern = %schedule.pattern,
                    "unknown rotation pattern, agent treated as off duty"
                );
            }
            schedule_map.entry(schedule.agent_id.as_str()).or_insert(schedule);
        }

        let mut day_off_map: HashMap<&str, HashMap<NaiveDate, &DayOff>> = HashMap::new();
        for day_off in days_off {
            day_off_map
                .entry(day_off.agent_id.as_str())
                .or_default()
                .entry(day_off.off_date)
                .or_insert(day_off);
        }

        Self { calendar, schedules: schedule_map, days_off: day_off_map }
    }

    pub fn schedule(&self, agent_id: &str) -> Option<&'a ShiftSchedule> {
        self.schedules.get(agent_id).copied()
    }

    pub fn day_off(&self, agent_id: &str, date: NaiveDate) -> Option<&'a DayOff> {
        self.days_off.get(agent_id).and_then(|by_date| by_date.get(&date)).copied()
    }

    pub fn status(&self, agent_id: &str, date: NaiveDate) -> DutyStatus {
        effective_status(
            self.calendar,
            self.schedule(agent_id),
            self.day_off(agent_id, date),
            date,
        )
    }
}

#[cfg(test)]
mod tests {
    use plantao_domain::OffType;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_off_overrides_working_day() {
        let calendar = RotationCalendar::default();
        let schedules = vec![ShiftSchedule::new("a-1", ymd(2024, 1, 1), "24x72")];
        let days_off = vec![DayOff::new("a-1", ymd(2024, 1, 5), OffType::Medical)];
        let overlay = DutyOverlay::new(&calendar, &schedules, &days_off);

        assert_eq!(overlay.status("a-1", ymd(2024, 1, 1)), DutyStatus::on_duty());
        assert_eq!(overlay.status("a-1", ymd(2024, 1, 5)), DutyStatus::excused(OffType::Medical));
        // cycle is not shifted by the exception
        assert_eq!(overlay.status("a-1", ymd(2024, 1, 9)), DutyStatus::on_duty());
    }

    #[test]
    fn test_day_off_on_rest_day_still_reports_off_type() {
        let calendar = RotationCalendar::default();
        let schedules = vec![ShiftSchedule::new("a-1", ymd(2024, 1, 1), "24x72")];
        let days_off = vec![DayOff::new("a-1", ymd(2024, 1, 2), OffType::Personal)];
        let overlay = DutyOverlay::new(&calendar, &schedules, &days_off);

        let status = overlay.status("a-1", ymd(2024, 1, 2));
        assert!(!status.working);
        assert_eq!(status.off_type, Some(OffType::Personal));
    }

    #[test]
    fn test_agent_without_schedule_is_off() {
        let calendar = RotationCalendar::default();
        let overlay = DutyOverlay::new(&calendar, &[], &[]);

        assert_eq!(overlay.status("ghost", ymd(2024, 1, 1)), DutyStatus::off_duty());
    }

    #[test]
    fn test_unknown_pattern_is_off() {
        let calendar = RotationCalendar::default();
        let schedules = vec![ShiftSchedule::new("a-1", ymd(2024, 1, 1), "9x9")];
        let overlay = DutyOverlay::new(&calendar, &schedules, &[]);

        assert!(!overlay.status("a-1", ymd(2024, 1, 1)).working);
    }

    #[test]
    fn test_first_duplicate_record_wins() {
        let calendar = RotationCalendar::default();
        let schedules = vec![
            ShiftSchedule::new("a-1", ymd(2024, 1, 1), "24x72"),
            ShiftSchedule::new("a-1", ymd(2024, 1, 2), "24x72"),
        ];
        let days_off = vec![
            DayOff::new("a-1", ymd(2024, 1, 3), OffType::Vacation),
            DayOff::new("a-1", ymd(2024, 1, 3), OffType::Medical),
        ];
        let overlay = DutyOverlay::new(&calendar, &schedules, &days_off);

        assert_eq!(overlay.schedule("a-1").unwrap().first_shift_date, ymd(2024, 1, 1));
        assert_eq!(overlay.day_off("a-1", ymd(2024, 1, 3)).unwrap().off_type, OffType::Vacation);
    }
}
