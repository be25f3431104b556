//! First-run demo data.
//!
//! Each collection is seeded only when empty, so re-running is a no-op for
//! any list that already has records.

use chrono::{Duration, Utc};
use uuid::Uuid;

use agrihub_core::{
  booking::Booking,
  crop::Crop,
  hub::Hub,
  inventory::InventoryLot,
  order::Order,
  store::RecordStore,
  tender::{Tender, TenderStatus},
  user::{Role, User},
};

use crate::{DomainError, Result};

/// What `seed_if_empty` actually wrote.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
  pub hubs_seeded:    usize,
  pub users_seeded:   usize,
  pub tenders_seeded: usize,
}

/// Populate the store with the fixed demo hubs, users, and tender.
///
/// Idempotent per collection: non-empty lists are left untouched. Also
/// initialises the bookings/inventory/orders lists so later loads see an
/// explicit empty array rather than an absent key.
pub async fn seed_if_empty<S: RecordStore>(store: &S) -> Result<SeedReport> {
  let mut report = SeedReport::default();

  let hubs: Vec<Hub> = store.load().await.map_err(DomainError::store)?;
  if hubs.is_empty() {
    let seeded = vec![
      demo_hub("HUB-1", "Bhubaneswar", 5000),
      demo_hub("HUB-2", "Cuttack", 4000),
      demo_hub("HUB-3", "Berhampur", 3000),
    ];
    store.save(&seeded).await.map_err(DomainError::store)?;
    report.hubs_seeded = seeded.len();
  }

  let users: Vec<User> = store.load().await.map_err(DomainError::store)?;
  if users.is_empty() {
    let seeded = vec![
      demo_user("Farmer One", "+919999900001", Role::Farmer, Some("F-001")),
      demo_user("Hub Admin", "+919999900002", Role::Hub, None),
      demo_user("Buyer Co.", "+919999900003", Role::Buyer, None),
    ];
    store.save(&seeded).await.map_err(DomainError::store)?;
    report.users_seeded = seeded.len();
  }

  let tenders: Vec<Tender> = store.load().await.map_err(DomainError::store)?;
  if tenders.is_empty() {
    // The demo tender is pinned to HUB-1. Seeded directly, not via
    // `publish_tender` — there is no inventory yet to reserve against.
    let hubs: Vec<Hub> = store.load().await.map_err(DomainError::store)?;
    if let Some(hub1) = hubs.iter().find(|h| h.code == "HUB-1") {
      let seeded = vec![Tender {
        tender_id:    Uuid::new_v4(),
        hub_id:       hub1.hub_id,
        crop:         Crop::Tomato,
        price_per_kg: 58.0,
        qty_needed:   500,
        valid_until:  Utc::now() + Duration::hours(24),
        status:       TenderStatus::Open,
      }];
      store.save(&seeded).await.map_err(DomainError::store)?;
      report.tenders_seeded = seeded.len();
    }
  }

  // Initialise the remaining lists if absent.
  let bookings: Vec<Booking> = store.load().await.map_err(DomainError::store)?;
  store.save(&bookings).await.map_err(DomainError::store)?;
  let lots: Vec<InventoryLot> = store.load().await.map_err(DomainError::store)?;
  store.save(&lots).await.map_err(DomainError::store)?;
  let orders: Vec<Order> = store.load().await.map_err(DomainError::store)?;
  store.save(&orders).await.map_err(DomainError::store)?;

  Ok(report)
}

fn demo_hub(code: &str, name: &str, capacity_kg: u32) -> Hub {
  Hub {
    hub_id: Uuid::new_v4(),
    code: code.into(),
    name: name.into(),
    capacity_kg,
    used_kg: 0,
  }
}

fn demo_user(name: &str, phone: &str, role: Role, reg_id: Option<&str>) -> User {
  User {
    user_id: Uuid::new_v4(),
    name: name.into(),
    phone: phone.into(),
    role,
    reg_id: reg_id.map(Into::into),
  }
}
