//! Mock repository implementations for testing
//!
//! `InMemoryStore` implements every core port on top of `tokio::sync::Mutex`
//! guarded vectors. `FailingOvertimeRepository` reports a persistence error
//! on every write.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use plantao_core::{AgentDirectory, DayOffRepository, OvertimeRepository, ScheduleRepository};
use plantao_domain::{
    Agent, DayOff, OvertimeEntry, PlantaoError, Result as DomainResult, ShiftSchedule, Team,
};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct InMemoryStore {
    agents: Arc<Mutex<Vec<Agent>>>,
    schedules: Arc<Mutex<Vec<ShiftSchedule>>>,
    days_off: Arc<Mutex<Vec<DayOff>>>,
    entries: Arc<Mutex<Vec<OvertimeEntry>>>,
}

impl InMemoryStore {
    pub fn with_agents(agents: Vec<Agent>) -> Self {
        Self { agents: Arc::new(Mutex::new(agents)), ..Self::default() }
    }

    pub async fn seed_schedule(&self, schedule: ShiftSchedule) {
        self.schedules.lock().await.push(schedule);
    }

    pub async fn seed_day_off(&self, day_off: DayOff) {
        self.days_off.lock().await.push(day_off);
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.lock().await.len()
    }
}

#[async_trait]
impl AgentDirectory for InMemoryStore {
    async fn fetch_agents(&self) -> DomainResult<Vec<Agent>> {
        Ok(self.agents.lock().await.clone())
    }

    async fn fetch_team(&self, team: Team) -> DomainResult<Vec<Agent>> {
        Ok(self.agents.lock().await.iter().filter(|a| a.is_in_team(team)).cloned().collect())
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryStore {
    async fn fetch_schedule(&self, agent_id: &str) -> DomainResult<Option<ShiftSchedule>> {
        Ok(self.schedules.lock().await.iter().find(|s| s.agent_id == agent_id).cloned())
    }

    async fn fetch_schedules(&self, agent_ids: &[String]) -> DomainResult<Vec<ShiftSchedule>> {
        Ok(self
            .schedules
            .lock()
            .await
            .iter()
            .filter(|s| agent_ids.contains(&s.agent_id))
            .cloned()
            .collect())
    }

    async fn save_schedule(&self, schedule: ShiftSchedule) -> DomainResult<()> {
        let mut guard = self.schedules.lock().await;
        guard.retain(|s| s.agent_id != schedule.agent_id);
        guard.push(schedule);
        Ok(())
    }
}

#[async_trait]
impl DayOffRepository for InMemoryStore {
    async fn fetch_days_off(
        &self,
        agent_ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<DayOff>> {
        Ok(self
            .days_off
            .lock()
            .await
            .iter()
            .filter(|d| agent_ids.contains(&d.agent_id) && d.off_date >= start && d.off_date <= end)
            .cloned()
            .collect())
    }

    async fn find_day_off(&self, agent_id: &str, date: NaiveDate) -> DomainResult<Option<DayOff>> {
        Ok(self
            .days_off
            .lock()
            .await
            .iter()
            .find(|d| d.agent_id == agent_id && d.off_date == date)
            .cloned())
    }

    async fn insert_day_off(&self, day_off: DayOff) -> DomainResult<()> {
        self.days_off.lock().await.push(day_off);
        Ok(())
    }

    async fn delete_day_off(&self, agent_id: &str, date: NaiveDate) -> DomainResult<()> {
        self.days_off.lock().await.retain(|d| !(d.agent_id == agent_id && d.off_date == date));
        Ok(())
    }
}

#[async_trait]
impl OvertimeRepository for InMemoryStore {
    async fn fetch_entries(&self, agent_id: &str) -> DomainResult<Vec<OvertimeEntry>> {
        Ok(self.entries.lock().await.iter().filter(|e| e.agent_id == agent_id).cloned().collect())
    }

    async fn find_entry(&self, id: Uuid) -> DomainResult<Option<OvertimeEntry>> {
        Ok(self.entries.lock().await.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_entry(&self, entry: OvertimeEntry) -> DomainResult<()> {
        self.entries.lock().await.push(entry);
        Ok(())
    }

    async fn update_entry(&self, entry: OvertimeEntry) -> DomainResult<()> {
        let mut guard = self.entries.lock().await;
        match guard.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => {
                *slot = entry;
                Ok(())
            }
            None => Err(PlantaoError::NotFound(format!("Overtime entry {}", entry.id))),
        }
    }

    async fn delete_entry(&self, id: Uuid) -> DomainResult<()> {
        self.entries.lock().await.retain(|e| e.id != id);
        Ok(())
    }
}

/// Reads succeed with nothing stored; every write fails.
#[derive(Default)]
pub struct FailingOvertimeRepository;

#[async_trait]
impl OvertimeRepository for FailingOvertimeRepository {
    async fn fetch_entries(&self, _agent_id: &str) -> DomainResult<Vec<OvertimeEntry>> {
        Ok(Vec::new())
    }

    async fn find_entry(&self, _id: Uuid) -> DomainResult<Option<OvertimeEntry>> {
        Ok(None)
    }

    async fn insert_entry(&self, _entry: OvertimeEntry) -> DomainResult<()> {
        Err(PlantaoError::Persistence("gateway unavailable".to_string()))
    }

    async fn update_entry(&self, _entry: OvertimeEntry) -> DomainResult<()> {
        Err(PlantaoError::Persistence("gateway unavailable".to_string()))
    }

    async fn delete_entry(&self, _id: Uuid) -> DomainResult<()> {
        Err(PlantaoError::Persistence("gateway unavailable".to_string()))
    }
}
