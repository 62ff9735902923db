//! Port interfaces for overtime persistence
//!
//! Each write touches a single entry; the gateway is responsible for its
//! atomicity.

use async_trait::async_trait;
use plantao_domain::{OvertimeEntry, Result};
use uuid::Uuid;

/// Trait for overtime entry persistence
#[async_trait]
pub trait OvertimeRepository: Send + Sync {
    /// All entries of one agent, in the order the gateway stores them
    async fn fetch_entries(&self, agent_id: &str) -> Result<Vec<OvertimeEntry>>;

    /// Entry by id, if any
    async fn find_entry(&self, id: Uuid) -> Result<Option<OvertimeEntry>>;

    /// Insert a new entry
    async fn insert_entry(&self, entry: OvertimeEntry) -> Result<()>;

    /// Replace an existing entry
    async fn update_entry(&self, entry: OvertimeEntry) -> Result<()>;

    /// Delete an entry by id
    async fn delete_entry(&self, id: Uuid) -> Result<()>;
}
