//! Roster service - fetches agents, schedules and exceptions, then builds

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use plantao_domain::constants::DEFAULT_ROSTER_DAYS;
use plantao_domain::{Agent, DutyStatus, Result, RosterConfig, Team};
use tracing::debug;

use super::builder::{build_roster, RosterDay};
use super::overlay::effective_status;
use super::ports::AgentDirectory;
use crate::rotation::{PatternRegistry, RotationCalendar};
use crate::schedule::ports::{DayOffRepository, ScheduleRepository};

/// Roster service
///
/// Every call fetches fresh data through the ports and recomputes; nothing
/// is cached between calls.
pub struct RosterService {
    agents: Arc<dyn AgentDirectory>,
    schedules: Arc<dyn ScheduleRepository>,
    days_off: Arc<dyn DayOffRepository>,
    calendar: RotationCalendar,
    default_days: u32,
}

impl RosterService {
    /// Create a new roster service using the built-in patterns
    pub fn new(
        agents: Arc<dyn AgentDirectory>,
        schedules: Arc<dyn ScheduleRepository>,
        days_off: Arc<dyn DayOffRepository>,
    ) -> Self {
        Self {
            agents,
            schedules,
            days_off,
            calendar: RotationCalendar::default(),
            default_days: DEFAULT_ROSTER_DAYS,
        }
    }

    /// Use a custom rotation calendar (e.g. with configured patterns)
    pub fn with_calendar(mut self, calendar: RotationCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Apply roster configuration: extra patterns and the default length.
    ///
    /// # Errors
    /// Returns `PlantaoError::Validation` for an invalid pattern definition.
    pub fn with_config(mut self, config: &RosterConfig) -> Result<Self> {
        self.calendar = RotationCalendar::new(PatternRegistry::from_config(config)?);
        self.default_days = config.default_days;
        Ok(self)
    }

    pub fn calendar(&self) -> &RotationCalendar {
        &self.calendar
    }

    /// Roster of every agent for `day_count` days from `start`
    pub async fn roster(&self, start: NaiveDate, day_count: u32) -> Result<Vec<RosterDay>> {
        if day_count == 0 {
            return Ok(Vec::new());
        }
        let agents = self.agents.fetch_agents().await?;
        self.roster_for(&agents, start, day_count).await
    }

    /// Roster of every agent for the configured default number of days
    pub async fn default_roster(&self, start: NaiveDate) -> Result<Vec<RosterDay>> {
        self.roster(start, self.default_days).await
    }

    /// Roster of one team for `day_count` days from `start`
    pub async fn team_roster(
        &self,
        team: Team,
        start: NaiveDate,
        day_count: u32,
    ) -> Result<Vec<RosterDay>> {
        if day_count == 0 {
            return Ok(Vec::new());
        }
        let agents = self.agents.fetch_team(team).await?;
        self.roster_for(&agents, start, day_count).await
    }

    /// Effective status of a single agent on a single date
    pub async fn agent_status(&self, agent_id: &str, date: NaiveDate) -> Result<DutyStatus> {
        let schedule = self.schedules.fetch_schedule(agent_id).await?;
        let day_off = self.days_off.find_day_off(agent_id, date).await?;
        Ok(effective_status(&self.calendar, schedule.as_ref(), day_off.as_ref(), date))
    }

    async fn roster_for(
        &self,
        agents: &[Agent],
        start: NaiveDate,
        day_count: u32,
    ) -> Result<Vec<RosterDay>> {
        let agent_ids: Vec<String> = agents.iter().map(|a| a.id.clone()).collect();
        let end = start
            .checked_add_days(Days::new(u64::from(day_count.saturating_sub(1))))
            .unwrap_or(NaiveDate::MAX);

        let schedules = self.schedules.fetch_schedules(&agent_ids).await?;
        let days_off = self.days_off.fetch_days_off(&agent_ids, start, end).await?;
        debug!(
            agents = agents.len(),
            schedules = schedules.len(),
            days_off = days_off.len(),
            %start,
            %end,
            "roster inputs fetched"
        );

        Ok(build_roster(&self.calendar, agents, &schedules, &days_off, start, day_count))
    }
}
