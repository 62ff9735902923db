//! Port interfaces for agent lookup
//!
//! Agents are registered and transferred between teams outside the core;
//! the roster only needs to read them.

use async_trait::async_trait;
use plantao_domain::{Agent, Result, Team};

/// Trait for reading the agent directory
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// All agents, in a stable order
    async fn fetch_agents(&self) -> Result<Vec<Agent>>;

    /// Agents currently assigned to `team`
    async fn fetch_team(&self, team: Team) -> Result<Vec<Agent>>;
}
