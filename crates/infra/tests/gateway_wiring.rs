//! End-to-end wiring of the core services over the in-memory gateway.

use std::sync::Arc;

use chrono::NaiveDate;
use plantao_core::{OvertimeService, PatternRegistry, RosterService, RotationCalendar, ScheduleService};
use plantao_domain::{
    Actor, Agent, Config, DayOff, OffType, OvertimePatch, OvertimeRequest, PatternDefinition, Team,
};
use plantao_infra::InMemoryGateway;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn gateway() -> InMemoryGateway {
    let gateway = InMemoryGateway::new();
    gateway.upsert_agent(Agent::new("a-1", "Ana", Some(Team::Alfa)));
    gateway.upsert_agent(Agent::new("a-2", "Bruno", Some(Team::Alfa)));
    gateway.upsert_agent(Agent::new("b-1", "Carla", Some(Team::Bravo)));
    gateway
}

#[tokio::test]
async fn test_schedule_roster_and_exceptions() {
    let gateway = gateway();
    let schedules = ScheduleService::new(Arc::new(gateway.clone()), Arc::new(gateway.clone()));
    let roster = RosterService::new(
        Arc::new(gateway.clone()),
        Arc::new(gateway.clone()),
        Arc::new(gateway.clone()),
    );

    schedules.assign_schedule("a-1", ymd(2024, 1, 1), "24x72").await.unwrap();
    schedules.assign_schedule("a-2", ymd(2024, 1, 3), "24x72").await.unwrap();
    schedules.assign_schedule("b-1", ymd(2024, 1, 1), "12x36").await.unwrap();
    schedules
        .register_day_off(DayOff::new("a-1", ymd(2024, 1, 5), OffType::Medical))
        .await
        .unwrap();

    let days = roster.team_roster(Team::Alfa, ymd(2024, 1, 1), 7).await.unwrap();
    let working: Vec<Vec<&str>> = days
        .iter()
        .map(|day| day.working.iter().map(|a| a.id.as_str()).collect())
        .collect();

    assert_eq!(
        working,
        vec![vec!["a-1"], vec![], vec!["a-2"], vec![], vec![], vec![], vec!["a-2"]]
    );
    assert_eq!(days[4].exception_for("a-1"), Some(OffType::Medical));
    assert_eq!(days[4].off.len(), 2);
}

#[tokio::test]
async fn test_configured_pattern_drives_roster() {
    let gateway = gateway();
    let mut config = Config::default();
    config.roster.patterns.push(PatternDefinition {
        name: "5x2".to_string(),
        cycle_length: 7,
        working_offsets: vec![0, 1, 2, 3, 4],
    });
    let registry = PatternRegistry::from_config(&config.roster).unwrap();

    let schedules = ScheduleService::new(Arc::new(gateway.clone()), Arc::new(gateway.clone()))
        .with_registry(registry.clone());
    let roster = RosterService::new(
        Arc::new(gateway.clone()),
        Arc::new(gateway.clone()),
        Arc::new(gateway.clone()),
    )
    .with_calendar(RotationCalendar::new(registry));

    schedules.assign_schedule("b-1", ymd(2024, 1, 1), "5x2").await.unwrap();

    let days = roster.team_roster(Team::Bravo, ymd(2024, 1, 1), 7).await.unwrap();
    let on_duty = days.iter().filter(|day| day.is_working("b-1")).count();
    assert_eq!(on_duty, 5);
    assert!(!days[5].is_working("b-1"));
    assert!(!days[6].is_working("b-1"));
}

#[tokio::test]
async fn test_overtime_round_trip_through_gateway() {
    let gateway = gateway();
    let service = OvertimeService::new(Arc::new(gateway.clone()));
    let actor = Actor::agent("a-1");
    let today = ymd(2024, 3, 20);

    let request = OvertimeRequest {
        agent_id: "a-1".to_string(),
        date: "2024-03-10".to_string(),
        hours_worked: 6.0,
        hour_value: 15.75,
        shift_type: "night".to_string(),
        scheduled_time: Some("19:00-01:00".to_string()),
        description: Some("event cover".to_string()),
    };
    let created = service.create(&actor, request, today).await.unwrap().entry.unwrap();

    let patch = OvertimePatch { hour_value: Some(20.0), ..Default::default() };
    let update = service.update(&actor, created.id, patch, today).await.unwrap();
    assert_eq!(update.overview.month.total_value.cents(), 12_000);
    assert_eq!(update.overview.month.night_shift_count, 1);

    let stored = service.entries("a-1").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].hour_value, 20.0);

    let after_delete = service.delete(&actor, created.id, today).await.unwrap();
    assert_eq!(after_delete.overview.month.count, 0);
    assert!(service.entries("a-1").await.unwrap().is_empty());
}
