//! Agents and the teams they rotate in

use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// One of the four fixed field teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Alfa,
    Bravo,
    Charlie,
    Delta,
}

impl_domain_enum_conversions!(Team {
    Alfa => "alfa",
    Bravo => "bravo",
    Charlie => "charlie",
    Delta => "delta",
});

impl Team {
    pub const ALL: [Self; 4] = [Self::Alfa, Self::Bravo, Self::Charlie, Self::Delta];
}

/// A field agent. Team reassignment happens outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl Agent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, team: Option<Team>) -> Self {
        Self { id: id.into(), name: name.into(), team }
    }

    pub fn is_in_team(&self, team: Team) -> bool {
        self.team == Some(team)
    }
}
