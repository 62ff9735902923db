//! Team roster builder
//!
//! Partitions a set of agents into "working" and "off" for each day of a
//! window. Lookup maps are built once, so the cost is linear in
//! `agents x days`. Agents keep their input order inside each list.

use chrono::NaiveDate;
use plantao_domain::utils::calendar::date_range;
use plantao_domain::{Agent, DayOff, OffType, ShiftSchedule, Team};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::overlay::DutyOverlay;
use crate::rotation::RotationCalendar;

/// Agent excused by an explicit day-off record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterException {
    pub agent_id: String,
    pub off_type: OffType,
}

/// Roster for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDay {
    pub date: NaiveDate,
    pub working: Vec<Agent>,
    pub off: Vec<Agent>,
    /// Subset of `off` that is off because of a day-off record.
    pub exceptions: Vec<RosterException>,
}

impl RosterDay {
    fn new(date: NaiveDate) -> Self {
        Self { date, working: Vec::new(), off: Vec::new(), exceptions: Vec::new() }
    }

    pub fn is_working(&self, agent_id: &str) -> bool {
        self.working.iter().any(|agent| agent.id == agent_id)
    }

    pub fn exception_for(&self, agent_id: &str) -> Option<OffType> {
        self.exceptions.iter().find(|e| e.agent_id == agent_id).map(|e| e.off_type)
    }
}

/// Build the roster for `day_count` consecutive dates starting at `start`.
///
/// The whole window is produced eagerly; `day_count == 0` yields an empty
/// roster.
pub fn build_roster(
    calendar: &RotationCalendar,
    agents: &[Agent],
    schedules: &[ShiftSchedule],
    days_off: &[DayOff],
    start: NaiveDate,
    day_count: u32,
) -> Vec<RosterDay> {
    debug!(agents = agents.len(), %start, day_count, "building roster");

    let overlay = DutyOverlay::new(calendar, schedules, days_off);

    date_range(start, day_count)
        .map(|date| {
            let mut day = RosterDay::new(date);
            for agent in agents {
                let status = overlay.status(&agent.id, date);
                if status.working {
                    day.working.push(agent.clone());
                } else {
                    if let Some(off_type) = status.off_type {
                        day.exceptions
                            .push(RosterException { agent_id: agent.id.clone(), off_type });
                    }
                    day.off.push(agent.clone());
                }
            }
            day
        })
        .collect()
}

/// Same as [`build_roster`] restricted to the agents of one team.
pub fn build_team_roster(
    calendar: &RotationCalendar,
    team: Team,
    agents: &[Agent],
    schedules: &[ShiftSchedule],
    days_off: &[DayOff],
    start: NaiveDate,
    day_count: u32,
) -> Vec<RosterDay> {
    let members: Vec<Agent> = agents.iter().filter(|a| a.is_in_team(team)).cloned().collect();
    build_roster(calendar, &members, schedules, days_off, start, day_count)
}
