//! Integration tests for `SqliteStore` against an in-memory database.

use agrihub_core::{
  crop::Crop,
  hub::Hub,
  store::{Record, RecordStore},
  tender::{Tender, TenderStatus},
  user::{Role, User},
};
use chrono::Utc;
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn hub(code: &str, capacity_kg: u32) -> Hub {
  Hub {
    hub_id: Uuid::new_v4(),
    code: code.into(),
    name: format!("{code} facility"),
    capacity_kg,
    used_kg: 0,
  }
}

// ─── Load/save ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn absent_collection_loads_empty() {
  let s = store().await;
  let hubs: Vec<Hub> = s.load().await.unwrap();
  assert!(hubs.is_empty());
}

#[tokio::test]
async fn save_then_load_round_trips() {
  let s = store().await;
  let hubs = vec![hub("HUB-1", 5000), hub("HUB-2", 4000)];
  s.save(&hubs).await.unwrap();

  let loaded: Vec<Hub> = s.load().await.unwrap();
  assert_eq!(loaded.len(), 2);
  assert_eq!(loaded[0].hub_id, hubs[0].hub_id);
  assert_eq!(loaded[1].code, "HUB-2");
}

#[tokio::test]
async fn save_overwrites_whole_list() {
  let s = store().await;
  s.save(&[hub("HUB-1", 5000), hub("HUB-2", 4000)])
    .await
    .unwrap();
  s.save(&[hub("HUB-3", 3000)]).await.unwrap();

  let loaded: Vec<Hub> = s.load().await.unwrap();
  assert_eq!(loaded.len(), 1);
  assert_eq!(loaded[0].code, "HUB-3");
}

#[tokio::test]
async fn collections_are_independent() {
  let s = store().await;
  s.save(&[hub("HUB-1", 5000)]).await.unwrap();
  s.save(&[User {
    user_id: Uuid::new_v4(),
    name:    "Farmer One".into(),
    phone:   "+919999900001".into(),
    role:    Role::Farmer,
    reg_id:  Some("F-001".into()),
  }])
  .await
  .unwrap();

  let hubs: Vec<Hub> = s.load().await.unwrap();
  let users: Vec<User> = s.load().await.unwrap();
  assert_eq!(hubs.len(), 1);
  assert_eq!(users.len(), 1);
  assert_eq!(users[0].role, Role::Farmer);
}

#[tokio::test]
async fn enum_wire_form_is_upper_case() {
  let s = store().await;
  s.save(&[Tender {
    tender_id:    Uuid::new_v4(),
    hub_id:       Uuid::new_v4(),
    crop:         Crop::Tomato,
    price_per_kg: 58.0,
    qty_needed:   500,
    valid_until:  Utc::now(),
    status:       TenderStatus::Open,
  }])
  .await
  .unwrap();

  let raw = s.load_raw(Tender::KEY).await.unwrap().unwrap();
  assert!(raw.contains("\"TOMATO\""));
  assert!(raw.contains("\"OPEN\""));
}

// ─── Corruption handling ─────────────────────────────────────────────────────

#[tokio::test]
async fn corrupt_payload_loads_as_empty() {
  let s = store().await;
  s.save_raw(Hub::KEY, "{not json]".into()).await.unwrap();

  let hubs: Vec<Hub> = s.load().await.unwrap();
  assert!(hubs.is_empty());
}

#[tokio::test]
async fn wrong_shape_payload_loads_as_empty() {
  let s = store().await;
  // Valid JSON, wrong shape for a hub list.
  s.save_raw(Hub::KEY, "[{\"unexpected\": 1}]".into())
    .await
    .unwrap();

  let hubs: Vec<Hub> = s.load().await.unwrap();
  assert!(hubs.is_empty());
}

#[tokio::test]
async fn save_after_corruption_recovers() {
  let s = store().await;
  s.save_raw(Hub::KEY, "garbage".into()).await.unwrap();
  s.save(&[hub("HUB-1", 5000)]).await.unwrap();

  let hubs: Vec<Hub> = s.load().await.unwrap();
  assert_eq!(hubs.len(), 1);
}
