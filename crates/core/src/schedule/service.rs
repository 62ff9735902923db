//! Schedule service - maintains rotation anchors and day-off exceptions

use std::sync::Arc;

use chrono::NaiveDate;
use plantao_domain::{DayOff, PlantaoError, Result, ShiftSchedule};
use tracing::{info, warn};

use super::ports::{DayOffRepository, ScheduleRepository};
use crate::rotation::PatternRegistry;

/// Schedule maintenance service
pub struct ScheduleService {
    schedules: Arc<dyn ScheduleRepository>,
    days_off: Arc<dyn DayOffRepository>,
    registry: PatternRegistry,
}

impl ScheduleService {
    /// Create a new schedule service using the built-in patterns
    pub fn new(schedules: Arc<dyn ScheduleRepository>, days_off: Arc<dyn DayOffRepository>) -> Self {
        Self { schedules, days_off, registry: PatternRegistry::builtin() }
    }

    /// Validate patterns against a custom table instead of the built-ins
    pub fn with_registry(mut self, registry: PatternRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub async fn schedule(&self, agent_id: &str) -> Result<Option<ShiftSchedule>> {
        self.schedules.fetch_schedule(agent_id).await
    }

    /// Set (or replace) the rotation anchor of an agent.
    ///
    /// # Errors
    /// - `Validation` for an empty agent id or an unregistered pattern
    /// - `Locked` when the existing schedule is locked
    pub async fn assign_schedule(
        &self,
        agent_id: &str,
        first_shift_date: NaiveDate,
        pattern: &str,
    ) -> Result<ShiftSchedule> {
        if agent_id.trim().is_empty() {
            return Err(PlantaoError::Validation("agent_id must not be empty".to_string()));
        }
        if !self.registry.contains(pattern) {
            return Err(PlantaoError::Validation(format!("Unknown rotation pattern: {pattern}")));
        }

        if let Some(existing) = self.schedules.fetch_schedule(agent_id).await? {
            if existing.is_locked {
                warn!(agent_id, "attempt to edit locked schedule");
                return Err(PlantaoError::Locked(format!("Schedule of agent {agent_id} is locked")));
            }
        }

        let schedule = ShiftSchedule::new(agent_id, first_shift_date, pattern.trim());
        self.schedules.save_schedule(schedule.clone()).await?;
        info!(agent_id, %first_shift_date, pattern, "schedule assigned");
        Ok(schedule)
    }

    /// Lock a schedule against further edits. Locking twice is a no-op.
    pub async fn lock_schedule(&self, agent_id: &str) -> Result<ShiftSchedule> {
        let schedule = self.schedules.fetch_schedule(agent_id).await?.ok_or_else(|| {
            PlantaoError::NotFound(format!("No schedule for agent {agent_id}"))
        })?;
        if schedule.is_locked {
            return Ok(schedule);
        }

        let locked = schedule.locked();
        self.schedules.save_schedule(locked.clone()).await?;
        info!(agent_id, "schedule locked");
        Ok(locked)
    }

    /// Record a day-off exception.
    ///
    /// # Errors
    /// - `Validation` for an empty agent id
    /// - `Conflict` when the agent already has a record on that date
    pub async fn register_day_off(&self, day_off: DayOff) -> Result<DayOff> {
        if day_off.agent_id.trim().is_empty() {
            return Err(PlantaoError::Validation("agent_id must not be empty".to_string()));
        }
        if self.days_off.find_day_off(&day_off.agent_id, day_off.off_date).await?.is_some() {
            return Err(PlantaoError::Conflict(format!(
                "Agent {} already has a day off on {}",
                day_off.agent_id, day_off.off_date
            )));
        }

        self.days_off.insert_day_off(day_off.clone()).await?;
        info!(
            agent_id = %day_off.agent_id,
            off_date = %day_off.off_date,
            off_type = %day_off.off_type,
            "day off registered"
        );
        Ok(day_off)
    }

    pub async fn remove_day_off(&self, agent_id: &str, date: NaiveDate) -> Result<()> {
        if self.days_off.find_day_off(agent_id, date).await?.is_none() {
            return Err(PlantaoError::NotFound(format!("No day off for agent {agent_id} on {date}")));
        }

        self.days_off.delete_day_off(agent_id, date).await?;
        info!(agent_id, %date, "day off removed");
        Ok(())
    }

    pub async fn days_off(
        &self,
        agent_ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayOff>> {
        self.days_off.fetch_days_off(agent_ids, start, end).await
    }
}
