//! Shared test helpers for `plantao-core` integration tests.
//!
//! Fixtures plus an in-memory store implementing every core port, so the
//! service tests can focus on behaviour instead of wiring.

#![allow(dead_code)]

pub mod repositories;

use chrono::NaiveDate;
use plantao_domain::{Agent, OvertimeRequest, Team};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Six agents, two per team for Alfa and Bravo, one each for Charlie and
/// Delta.
pub fn sample_agents() -> Vec<Agent> {
    vec![
        Agent::new("a-1", "Ana", Some(Team::Alfa)),
        Agent::new("a-2", "Bruno", Some(Team::Alfa)),
        Agent::new("b-1", "Carla", Some(Team::Bravo)),
        Agent::new("b-2", "Diego", Some(Team::Bravo)),
        Agent::new("c-1", "Elisa", Some(Team::Charlie)),
        Agent::new("d-1", "Fabio", Some(Team::Delta)),
    ]
}

pub fn overtime_request(agent_id: &str, date: &str, hours: f64, rate: f64) -> OvertimeRequest {
    OvertimeRequest {
        agent_id: agent_id.to_string(),
        date: date.to_string(),
        hours_worked: hours,
        hour_value: rate,
        shift_type: "day".to_string(),
        scheduled_time: None,
        description: None,
    }
}
