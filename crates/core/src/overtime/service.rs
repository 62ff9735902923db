//! Overtime service - ledger mutations through the persistence port
//!
//! Every mutation is followed by a fresh fetch and a full recompute of the
//! agent's overview. There is no cached aggregate to patch, so concurrent
//! edits by other callers are picked up on the next call.

use std::sync::Arc;

use chrono::NaiveDate;
use plantao_domain::constants::DEFAULT_ROLLING_WINDOW_MONTHS;
use plantao_domain::{
    Actor, LedgerConfig, LedgerOverview, OvertimeEntry, OvertimePatch, OvertimeRequest,
    PlantaoError, Result,
};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use super::aggregation;
use super::ledger::OvertimeLedger;
use super::ports::OvertimeRepository;

/// Result of a ledger mutation: the written entry (none for deletes) and
/// the agent's overview recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerUpdate {
    pub entry: Option<OvertimeEntry>,
    pub overview: LedgerOverview,
}

/// Overtime ledger service
pub struct OvertimeService {
    repository: Arc<dyn OvertimeRepository>,
    ledger: OvertimeLedger,
    window_months: u32,
}

impl OvertimeService {
    /// Create a new overtime service with the default rolling window
    pub fn new(repository: Arc<dyn OvertimeRepository>) -> Self {
        Self {
            repository,
            ledger: OvertimeLedger::new(),
            window_months: DEFAULT_ROLLING_WINDOW_MONTHS,
        }
    }

    /// Apply ledger settings from configuration
    pub fn with_config(mut self, config: &LedgerConfig) -> Self {
        self.window_months = config.rolling_window_months;
        self
    }

    /// All entries of an agent
    pub async fn entries(&self, agent_id: &str) -> Result<Vec<OvertimeEntry>> {
        self.repository.fetch_entries(agent_id).await
    }

    /// Dashboard figures for an agent as of `reference_date`
    pub async fn overview(&self, agent_id: &str, reference_date: NaiveDate) -> Result<LedgerOverview> {
        let entries = self.repository.fetch_entries(agent_id).await?;
        Ok(aggregation::overview(&entries, reference_date, self.window_months))
    }

    /// Validate and store a new entry.
    ///
    /// # Errors
    /// - `Forbidden` when a non-admin actor records hours for someone else
    /// - `Validation` for invalid fields
    /// - whatever the repository reports
    pub async fn create(
        &self,
        actor: &Actor,
        request: OvertimeRequest,
        reference_date: NaiveDate,
    ) -> Result<LedgerUpdate> {
        if !actor.is_admin && actor.agent_id != request.agent_id.trim() {
            return Err(PlantaoError::Forbidden(format!(
                "Agent {} cannot record hours for {}",
                actor.agent_id, request.agent_id
            )));
        }

        let entry = self.ledger.create_entry(request)?;
        self.repository.insert_entry(entry.clone()).await.inspect_err(|err| {
            error!(
                entry_id = %entry.id,
                error = %err,
                error_kind = err.label(),
                "failed to insert overtime entry"
            );
        })?;
        info!(
            agent_id = %entry.agent_id,
            entry_id = %entry.id,
            month = %entry.month_year,
            total_value = %entry.total_value,
            "overtime entry created"
        );

        self.recompute(entry, reference_date).await
    }

    /// Apply a partial update to an existing entry.
    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        patch: OvertimePatch,
        reference_date: NaiveDate,
    ) -> Result<LedgerUpdate> {
        let existing = self.authorized_entry(actor, id).await?;
        let entry = self.ledger.apply_patch(&existing, patch)?;

        self.repository.update_entry(entry.clone()).await.inspect_err(|err| {
            error!(entry_id = %id, error = %err, error_kind = err.label(), "failed to update overtime entry");
        })?;
        info!(agent_id = %entry.agent_id, entry_id = %id, month = %entry.month_year, "overtime entry updated");

        self.recompute(entry, reference_date).await
    }

    /// Remove an entry. Confirmation is the caller's concern.
    pub async fn delete(&self, actor: &Actor, id: Uuid, reference_date: NaiveDate) -> Result<LedgerUpdate> {
        let existing = self.authorized_entry(actor, id).await?;

        self.repository.delete_entry(id).await.inspect_err(|err| {
            error!(entry_id = %id, error = %err, error_kind = err.label(), "failed to delete overtime entry");
        })?;
        info!(agent_id = %existing.agent_id, entry_id = %id, "overtime entry deleted");

        let overview = self.overview(&existing.agent_id, reference_date).await?;
        Ok(LedgerUpdate { entry: None, overview })
    }

    async fn authorized_entry(&self, actor: &Actor, id: Uuid) -> Result<OvertimeEntry> {
        let existing = self
            .repository
            .find_entry(id)
            .await?
            .ok_or_else(|| PlantaoError::NotFound(format!("Overtime entry {id}")))?;

        if !actor.can_modify(&existing) {
            return Err(PlantaoError::Forbidden(format!(
                "Agent {} cannot modify entry {id}",
                actor.agent_id
            )));
        }
        Ok(existing)
    }

    async fn recompute(&self, entry: OvertimeEntry, reference_date: NaiveDate) -> Result<LedgerUpdate> {
        let overview = self.overview(&entry.agent_id, reference_date).await?;
        Ok(LedgerUpdate { entry: Some(entry), overview })
    }
}
