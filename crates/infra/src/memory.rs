//! In-memory persistence gateway
//!
//! Implements every `plantao-core` port over `parking_lot` locks. Intended
//! for local wiring and tests; nothing survives the process. Locks are
//! never held across an `.await`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use plantao_core::{AgentDirectory, DayOffRepository, OvertimeRepository, ScheduleRepository};
use plantao_domain::{Agent, DayOff, OvertimeEntry, PlantaoError, Result, ShiftSchedule, Team};
use tracing::debug;
use uuid::Uuid;

type DayOffKey = (String, NaiveDate);

#[derive(Debug, Default)]
struct Tables {
    agents: Vec<Agent>,
    schedules: HashMap<String, ShiftSchedule>,
    days_off: BTreeMap<DayOffKey, DayOff>,
    entries: Vec<OvertimeEntry>,
}

/// Shared in-memory store. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent, or replace the one with the same id in place.
    pub fn upsert_agent(&self, agent: Agent) {
        let mut tables = self.tables.write();
        match tables.agents.iter().position(|a| a.id == agent.id) {
            Some(idx) => tables.agents[idx] = agent,
            None => tables.agents.push(agent),
        }
    }

    /// Move an agent to another team (or out of every team).
    ///
    /// # Errors
    /// `NotFound` when no agent has that id.
    pub fn transfer_agent(&self, agent_id: &str, team: Option<Team>) -> Result<()> {
        let mut tables = self.tables.write();
        let agent = tables
            .agents
            .iter_mut()
            .find(|a| a.id == agent_id)
            .ok_or_else(|| PlantaoError::NotFound(format!("Agent {agent_id}")))?;
        agent.team = team;
        debug!(agent_id, ?team, "agent transferred");
        Ok(())
    }
}

#[async_trait]
impl AgentDirectory for InMemoryGateway {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        Ok(self.tables.read().agents.clone())
    }

    async fn fetch_team(&self, team: Team) -> Result<Vec<Agent>> {
        Ok(self.tables.read().agents.iter().filter(|a| a.is_in_team(team)).cloned().collect())
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryGateway {
    async fn fetch_schedule(&self, agent_id: &str) -> Result<Option<ShiftSchedule>> {
        Ok(self.tables.read().schedules.get(agent_id).cloned())
    }

    async fn fetch_schedules(&self, agent_ids: &[String]) -> Result<Vec<ShiftSchedule>> {
        let tables = self.tables.read();
        Ok(agent_ids.iter().filter_map(|id| tables.schedules.get(id).cloned()).collect())
    }

    async fn save_schedule(&self, schedule: ShiftSchedule) -> Result<()> {
        self.tables.write().schedules.insert(schedule.agent_id.clone(), schedule);
        Ok(())
    }
}

#[async_trait]
impl DayOffRepository for InMemoryGateway {
    async fn fetch_days_off(
        &self,
        agent_ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayOff>> {
        if end < start {
            return Ok(Vec::new());
        }

        let tables = self.tables.read();
        Ok(agent_ids
            .iter()
            .flat_map(|id| {
                tables
                    .days_off
                    .range((id.clone(), start)..=(id.clone(), end))
                    .map(|(_, day_off)| day_off.clone())
            })
            .collect())
    }

    async fn find_day_off(&self, agent_id: &str, date: NaiveDate) -> Result<Option<DayOff>> {
        Ok(self.tables.read().days_off.get(&(agent_id.to_string(), date)).cloned())
    }

    async fn insert_day_off(&self, day_off: DayOff) -> Result<()> {
        let mut tables = self.tables.write();
        let key = (day_off.agent_id.clone(), day_off.off_date);
        if tables.days_off.contains_key(&key) {
            return Err(PlantaoError::Conflict(format!(
                "Agent {} already has a day off on {}",
                day_off.agent_id, day_off.off_date
            )));
        }
        tables.days_off.insert(key, day_off);
        Ok(())
    }

    async fn delete_day_off(&self, agent_id: &str, date: NaiveDate) -> Result<()> {
        self.tables
            .write()
            .days_off
            .remove(&(agent_id.to_string(), date))
            .map(|_| ())
            .ok_or_else(|| PlantaoError::NotFound(format!("No day off for agent {agent_id} on {date}")))
    }
}

#[async_trait]
impl OvertimeRepository for InMemoryGateway {
    async fn fetch_entries(&self, agent_id: &str) -> Result<Vec<OvertimeEntry>> {
        Ok(self.tables.read().entries.iter().filter(|e| e.agent_id == agent_id).cloned().collect())
    }

    async fn find_entry(&self, id: Uuid) -> Result<Option<OvertimeEntry>> {
        Ok(self.tables.read().entries.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_entry(&self, entry: OvertimeEntry) -> Result<()> {
        let mut tables = self.tables.write();
        if tables.entries.iter().any(|e| e.id == entry.id) {
            return Err(PlantaoError::Conflict(format!("Overtime entry {} already exists", entry.id)));
        }
        tables.entries.push(entry);
        Ok(())
    }

    async fn update_entry(&self, entry: OvertimeEntry) -> Result<()> {
        let mut tables = self.tables.write();
        let slot = tables
            .entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| PlantaoError::NotFound(format!("Overtime entry {}", entry.id)))?;
        *slot = entry;
        Ok(())
    }

    async fn delete_entry(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write();
        let before = tables.entries.len();
        tables.entries.retain(|e| e.id != id);
        if tables.entries.len() == before {
            return Err(PlantaoError::NotFound(format!("Overtime entry {id}")));
        }
        Ok(())
    }
}
