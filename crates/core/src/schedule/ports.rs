//! Port interfaces for shift schedules and day-off records
//!
//! These traits define the boundary between the roster logic and the
//! persistence gateway. The gateway owns atomicity of each single write.

use async_trait::async_trait;
use chrono::NaiveDate;
use plantao_domain::{DayOff, Result, ShiftSchedule};

/// Trait for shift schedule persistence
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Schedule of one agent, if any
    async fn fetch_schedule(&self, agent_id: &str) -> Result<Option<ShiftSchedule>>;

    /// Schedules of the given agents (agents without one are skipped)
    async fn fetch_schedules(&self, agent_ids: &[String]) -> Result<Vec<ShiftSchedule>>;

    /// Insert or replace the schedule of `schedule.agent_id`
    async fn save_schedule(&self, schedule: ShiftSchedule) -> Result<()>;
}

/// Trait for day-off persistence
#[async_trait]
pub trait DayOffRepository: Send + Sync {
    /// Day-off records of the given agents within `start..=end`
    async fn fetch_days_off(
        &self,
        agent_ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayOff>>;

    /// Record for one `(agent, date)`, if any
    async fn find_day_off(&self, agent_id: &str, date: NaiveDate) -> Result<Option<DayOff>>;

    /// Insert a new record
    async fn insert_day_off(&self, day_off: DayOff) -> Result<()>;

    /// Delete the record for `(agent, date)`
    async fn delete_day_off(&self, agent_id: &str, date: NaiveDate) -> Result<()>;
}
