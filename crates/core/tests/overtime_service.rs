//! Integration tests for `OvertimeService` against the in-memory store.

mod support;

use std::sync::Arc;

use plantao_core::OvertimeService;
use plantao_domain::{Actor, LedgerConfig, Money, MonthKey, OvertimePatch, PlantaoError};
use support::repositories::{FailingOvertimeRepository, InMemoryStore};
use support::{overtime_request, ymd};
use uuid::Uuid;

fn service(store: &InMemoryStore) -> OvertimeService {
    OvertimeService::new(Arc::new(store.clone()))
}

#[tokio::test]
async fn test_create_returns_entry_and_fresh_overview() {
    let store = InMemoryStore::default();
    let service = service(&store);
    let actor = Actor::agent("a-1");

    let update = service
        .create(&actor, overtime_request("a-1", "2024-03-10", 6.0, 15.75), ymd(2024, 3, 31))
        .await
        .unwrap();

    let entry = update.entry.unwrap();
    assert_eq!(entry.total_value, Money::from_cents(9450));
    assert_eq!(update.overview.month.count, 1);
    assert_eq!(update.overview.month.total_value, Money::from_cents(9450));
    assert_eq!(update.overview.evolution.len(), 6);
    assert_eq!(update.overview.available_months, vec![MonthKey::new(2024, 3).unwrap()]);
    assert_eq!(store.entry_count().await, 1);
}

#[tokio::test]
async fn test_overview_only_counts_the_agents_own_entries() {
    let store = InMemoryStore::default();
    let service = service(&store);
    let admin = Actor::admin("root");
    let today = ymd(2024, 3, 31);

    service.create(&admin, overtime_request("a-1", "2024-03-01", 4.0, 10.0), today).await.unwrap();
    service.create(&admin, overtime_request("a-2", "2024-03-02", 8.0, 10.0), today).await.unwrap();

    let overview = service.overview("a-1", today).await.unwrap();
    assert_eq!(overview.month.count, 1);
    assert_eq!(overview.month.total_hours, 4.0);
}

#[tokio::test]
async fn test_agent_cannot_create_for_someone_else() {
    let store = InMemoryStore::default();
    let result = service(&store)
        .create(&Actor::agent("a-2"), overtime_request("a-1", "2024-03-10", 6.0, 15.0), ymd(2024, 3, 31))
        .await;

    assert!(matches!(result, Err(PlantaoError::Forbidden(_))));
    assert_eq!(store.entry_count().await, 0);
}

#[tokio::test]
async fn test_invalid_request_is_not_stored() {
    let store = InMemoryStore::default();
    let result = service(&store)
        .create(&Actor::agent("a-1"), overtime_request("a-1", "2024-03-10", 30.0, 15.0), ymd(2024, 3, 31))
        .await;

    assert!(matches!(result, Err(PlantaoError::Validation(_))));
    assert_eq!(store.entry_count().await, 0);
}

#[tokio::test]
async fn test_update_moves_entry_between_months() {
    let store = InMemoryStore::default();
    let service = service(&store);
    let actor = Actor::agent("a-1");
    let today = ymd(2024, 4, 15);

    let created = service
        .create(&actor, overtime_request("a-1", "2024-03-10", 6.0, 10.0), today)
        .await
        .unwrap()
        .entry
        .unwrap();
    assert_eq!(created.month_year.to_string(), "2024-03");

    let patch = OvertimePatch { date: Some("2024-04-02".to_string()), ..Default::default() };
    let update = service.update(&actor, created.id, patch, today).await.unwrap();

    let updated = update.entry.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.month_year.to_string(), "2024-04");
    assert_eq!(update.overview.month.count, 1);
    assert_eq!(update.overview.available_months, vec![MonthKey::new(2024, 4).unwrap()]);
}

#[tokio::test]
async fn test_only_owner_or_admin_can_modify() {
    let store = InMemoryStore::default();
    let service = service(&store);
    let today = ymd(2024, 3, 31);

    let entry = service
        .create(&Actor::agent("a-1"), overtime_request("a-1", "2024-03-10", 6.0, 10.0), today)
        .await
        .unwrap()
        .entry
        .unwrap();

    let patch = OvertimePatch { hours_worked: Some(2.0), ..Default::default() };
    let denied = service.update(&Actor::agent("a-2"), entry.id, patch.clone(), today).await;
    assert!(matches!(denied, Err(PlantaoError::Forbidden(_))));

    let denied = service.delete(&Actor::agent("a-2"), entry.id, today).await;
    assert!(matches!(denied, Err(PlantaoError::Forbidden(_))));

    let allowed = service.update(&Actor::admin("root"), entry.id, patch, today).await.unwrap();
    assert_eq!(allowed.entry.unwrap().total_value, Money::from_cents(2000));
}

#[tokio::test]
async fn test_delete_recomputes_overview() {
    let store = InMemoryStore::default();
    let service = service(&store);
    let actor = Actor::agent("a-1");
    let today = ymd(2024, 3, 31);

    let entry = service
        .create(&actor, overtime_request("a-1", "2024-03-10", 6.0, 10.0), today)
        .await
        .unwrap()
        .entry
        .unwrap();

    let update = service.delete(&actor, entry.id, today).await.unwrap();

    assert!(update.entry.is_none());
    assert_eq!(update.overview.month.count, 0);
    assert!(update.overview.available_months.is_empty());
    assert_eq!(store.entry_count().await, 0);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let store = InMemoryStore::default();
    let service = service(&store);
    let actor = Actor::admin("root");

    let update = service.update(&actor, Uuid::nil(), OvertimePatch::default(), ymd(2024, 3, 1)).await;
    assert!(matches!(update, Err(PlantaoError::NotFound(_))));

    let delete = service.delete(&actor, Uuid::nil(), ymd(2024, 3, 1)).await;
    assert!(matches!(delete, Err(PlantaoError::NotFound(_))));
}

#[tokio::test]
async fn test_configured_window_changes_evolution_length() {
    let store = InMemoryStore::default();
    let service = service(&store).with_config(&LedgerConfig { rolling_window_months: 12 });

    let overview = service.overview("a-1", ymd(2024, 3, 31)).await.unwrap();
    assert_eq!(overview.evolution.len(), 12);
    assert_eq!(overview.evolution[0].month.to_string(), "2023-04");
}

#[tokio::test]
async fn test_gateway_failure_propagates() {
    let service = OvertimeService::new(Arc::new(FailingOvertimeRepository));

    let result = service
        .create(&Actor::agent("a-1"), overtime_request("a-1", "2024-03-10", 6.0, 10.0), ymd(2024, 3, 31))
        .await;

    assert!(matches!(result, Err(PlantaoError::Persistence(_))));
}
