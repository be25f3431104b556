//! Integration tests for the domain operations against an in-memory
//! SQLite-backed store.

use chrono::{Duration, Utc};
use uuid::Uuid;

use agrihub_core::{
  booking::{Booking, BookingStatus},
  crop::Crop,
  hub::Hub,
  inventory::{InventoryLot, LotStatus},
  store::RecordStore,
  tender::Tender,
  user::User,
};
use agrihub_store_sqlite::SqliteStore;

use crate::{
  DomainError,
  auth::{DEMO_OTP, verify_otp},
  booking::{
    BookingDecision, NewBooking, create_booking, decide_booking,
    list_bookings_by_farmer, list_pending_bookings_by_hub,
  },
  inventory::{
    available_inventory, reserve_inventory, summarize_inventory,
  },
  order::{NewOrderItem, list_orders_by_buyer, place_order},
  seed::seed_if_empty,
  tender::{NewTender, list_tenders, publish_tender},
};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// A seeded store plus the id of HUB-1.
async fn seeded() -> (SqliteStore, Uuid) {
  let s = store().await;
  seed_if_empty(&s).await.unwrap();
  let hubs: Vec<Hub> = s.load().await.unwrap();
  let hub1 = hubs.iter().find(|h| h.code == "HUB-1").unwrap().hub_id;
  (s, hub1)
}

/// Insert a lot directly, bypassing the booking flow.
async fn insert_lot(
  s: &SqliteStore,
  hub_id: Uuid,
  crop: Crop,
  qty_kg: u32,
  reserved_kg: u32,
) -> Uuid {
  let mut lots: Vec<InventoryLot> = s.load().await.unwrap();
  let lot_id = Uuid::new_v4();
  lots.push(InventoryLot {
    lot_id,
    booking_id: Uuid::new_v4(),
    hub_id,
    crop,
    qty_kg,
    reserved_kg,
    status: LotStatus::InStock,
    grade: None,
    in_at: Some(Utc::now()),
    out_at: None,
  });
  s.save(&lots).await.unwrap();
  lot_id
}

fn tender_input(hub_id: Uuid, crop: Crop, qty_needed: u32) -> NewTender {
  NewTender {
    hub_id,
    crop,
    price_per_kg: 58.0,
    qty_needed,
    valid_until: Utc::now() + Duration::hours(24),
  }
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_populates_fixed_demo_data() {
  let s = store().await;
  let report = seed_if_empty(&s).await.unwrap();
  assert_eq!(report.hubs_seeded, 3);
  assert_eq!(report.users_seeded, 3);
  assert_eq!(report.tenders_seeded, 1);

  let hubs: Vec<Hub> = s.load().await.unwrap();
  let users: Vec<User> = s.load().await.unwrap();
  let tenders: Vec<Tender> = s.load().await.unwrap();
  assert_eq!(hubs.len(), 3);
  assert_eq!(users.len(), 3);
  assert_eq!(tenders.len(), 1);
  assert_eq!(tenders[0].crop, Crop::Tomato);
  assert_eq!(tenders[0].qty_needed, 500);
}

#[tokio::test]
async fn seed_is_idempotent() {
  let s = store().await;
  seed_if_empty(&s).await.unwrap();
  let report = seed_if_empty(&s).await.unwrap();
  assert_eq!(report, Default::default());

  let hubs: Vec<Hub> = s.load().await.unwrap();
  let users: Vec<User> = s.load().await.unwrap();
  let tenders: Vec<Tender> = s.load().await.unwrap();
  assert_eq!((hubs.len(), users.len(), tenders.len()), (3, 3, 1));
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn verify_otp_resolves_seeded_user() {
  let (s, _) = seeded().await;
  let user = verify_otp(&s, "+919999900001", DEMO_OTP).await.unwrap();
  assert_eq!(user.name, "Farmer One");
  assert_eq!(user.reg_id.as_deref(), Some("F-001"));
}

#[tokio::test]
async fn verify_otp_rejects_wrong_code_and_unknown_phone() {
  let (s, _) = seeded().await;
  assert!(matches!(
    verify_otp(&s, "+919999900001", "000000").await,
    Err(DomainError::InvalidOtp)
  ));
  assert!(matches!(
    verify_otp(&s, "+910000000000", DEMO_OTP).await,
    Err(DomainError::UnknownPhone(_))
  ));
}

// ─── Bookings ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_booking_appends_pending_with_token() {
  let (s, hub1) = seeded().await;
  let farmer = Uuid::new_v4();

  let booking = create_booking(&s, NewBooking {
    farmer_id: farmer,
    hub_id:    hub1,
    crop:      Crop::Tomato,
    qty_kg:    200,
  })
  .await
  .unwrap();

  assert_eq!(booking.status, BookingStatus::Pending);
  assert_eq!(booking.token.len(), 10);
  assert!(booking.drop_start.is_none());

  let mine = list_bookings_by_farmer(&s, farmer).await.unwrap();
  assert_eq!(mine.len(), 1);
  let queue = list_pending_bookings_by_hub(&s, hub1).await.unwrap();
  assert_eq!(queue.len(), 1);

  // No inventory yet.
  assert_eq!(available_inventory(&s, hub1, Crop::Tomato).await.unwrap(), 0);
}

#[tokio::test]
async fn create_booking_validates_input() {
  let (s, hub1) = seeded().await;
  assert!(matches!(
    create_booking(&s, NewBooking {
      farmer_id: Uuid::new_v4(),
      hub_id:    hub1,
      crop:      Crop::Okra,
      qty_kg:    0,
    })
    .await,
    Err(DomainError::InvalidQuantity)
  ));
  assert!(matches!(
    create_booking(&s, NewBooking {
      farmer_id: Uuid::new_v4(),
      hub_id:    Uuid::new_v4(),
      crop:      Crop::Okra,
      qty_kg:    10,
    })
    .await,
    Err(DomainError::HubNotFound(_))
  ));
}

#[tokio::test]
async fn bookings_list_newest_first() {
  let (s, hub1) = seeded().await;
  let farmer = Uuid::new_v4();
  for qty in [10, 20, 30] {
    create_booking(&s, NewBooking {
      farmer_id: farmer,
      hub_id:    hub1,
      crop:      Crop::Onion,
      qty_kg:    qty,
    })
    .await
    .unwrap();
  }

  let mine = list_bookings_by_farmer(&s, farmer).await.unwrap();
  assert_eq!(mine.len(), 3);
  assert!(mine.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn accepting_a_booking_creates_exactly_one_lot() {
  let (s, hub1) = seeded().await;
  let booking = create_booking(&s, NewBooking {
    farmer_id: Uuid::new_v4(),
    hub_id:    hub1,
    crop:      Crop::Tomato,
    qty_kg:    500,
  })
  .await
  .unwrap();

  let start = Utc::now() + Duration::hours(2);
  let decided = decide_booking(&s, booking.booking_id, BookingDecision {
    accept:     true,
    drop_start: Some(start),
    drop_end:   Some(start + Duration::hours(2)),
  })
  .await
  .unwrap();

  assert_eq!(decided.status, BookingStatus::Confirmed);
  assert_eq!(decided.drop_start, Some(start));

  let lots: Vec<InventoryLot> = s.load().await.unwrap();
  assert_eq!(lots.len(), 1);
  assert_eq!(lots[0].booking_id, booking.booking_id);
  assert_eq!(lots[0].qty_kg, 500);
  assert_eq!(lots[0].reserved_kg, 0);
  assert_eq!(lots[0].status, LotStatus::InStock);
  assert!(lots[0].in_at.is_some());

  assert_eq!(
    available_inventory(&s, hub1, Crop::Tomato).await.unwrap(),
    500
  );
}

#[tokio::test]
async fn rejecting_a_booking_creates_no_lot() {
  let (s, hub1) = seeded().await;
  let booking = create_booking(&s, NewBooking {
    farmer_id: Uuid::new_v4(),
    hub_id:    hub1,
    crop:      Crop::Okra,
    qty_kg:    100,
  })
  .await
  .unwrap();

  let decided =
    decide_booking(&s, booking.booking_id, BookingDecision::default())
      .await
      .unwrap();
  assert_eq!(decided.status, BookingStatus::Rejected);

  let lots: Vec<InventoryLot> = s.load().await.unwrap();
  assert!(lots.is_empty());
}

#[tokio::test]
async fn deciding_twice_is_an_error() {
  let (s, hub1) = seeded().await;
  let booking = create_booking(&s, NewBooking {
    farmer_id: Uuid::new_v4(),
    hub_id:    hub1,
    crop:      Crop::Tomato,
    qty_kg:    50,
  })
  .await
  .unwrap();

  decide_booking(&s, booking.booking_id, BookingDecision {
    accept: true,
    ..Default::default()
  })
  .await
  .unwrap();

  let again = decide_booking(&s, booking.booking_id, BookingDecision {
    accept: true,
    ..Default::default()
  })
  .await;
  assert!(matches!(again, Err(DomainError::BookingAlreadyDecided(_))));

  // Still exactly one lot.
  let lots: Vec<InventoryLot> = s.load().await.unwrap();
  assert_eq!(lots.len(), 1);
}

#[tokio::test]
async fn deciding_unknown_booking_is_an_error() {
  let (s, _) = seeded().await;
  let missing =
    decide_booking(&s, Uuid::new_v4(), BookingDecision::default()).await;
  assert!(matches!(missing, Err(DomainError::BookingNotFound(_))));

  let bookings: Vec<Booking> = s.load().await.unwrap();
  assert!(bookings.is_empty());
}

// ─── Inventory & reservation ─────────────────────────────────────────────────

#[tokio::test]
async fn availability_sums_unreserved_in_stock_lots() {
  let (s, hub1) = seeded().await;
  insert_lot(&s, hub1, Crop::Tomato, 300, 100).await;
  insert_lot(&s, hub1, Crop::Tomato, 200, 0).await;
  insert_lot(&s, hub1, Crop::Onion, 400, 0).await;

  assert_eq!(
    available_inventory(&s, hub1, Crop::Tomato).await.unwrap(),
    400
  );
  assert_eq!(
    available_inventory(&s, hub1, Crop::Onion).await.unwrap(),
    400
  );
  assert_eq!(available_inventory(&s, hub1, Crop::Okra).await.unwrap(), 0);
  assert_eq!(
    available_inventory(&s, Uuid::new_v4(), Crop::Tomato)
      .await
      .unwrap(),
    0
  );
}

#[tokio::test]
async fn out_lots_do_not_count_toward_availability() {
  let (s, hub1) = seeded().await;
  insert_lot(&s, hub1, Crop::Okra, 300, 0).await;

  let mut lots: Vec<InventoryLot> = s.load().await.unwrap();
  lots[0].status = LotStatus::Out;
  lots[0].out_at = Some(Utc::now());
  s.save(&lots).await.unwrap();

  assert_eq!(available_inventory(&s, hub1, Crop::Okra).await.unwrap(), 0);
}

#[tokio::test]
async fn reservation_fills_lots_greedily_in_store_order() {
  let (s, hub1) = seeded().await;
  let first = insert_lot(&s, hub1, Crop::Tomato, 300, 0).await;
  let second = insert_lot(&s, hub1, Crop::Tomato, 300, 0).await;

  let plan = reserve_inventory(&s, hub1, Crop::Tomato, 500).await.unwrap();
  assert_eq!(plan.total_kg(), 500);
  assert_eq!(plan.lot_count(), 2);

  let lots: Vec<InventoryLot> = s.load().await.unwrap();
  let by_id = |id| lots.iter().find(|l| l.lot_id == id).unwrap();
  assert_eq!(by_id(first).reserved_kg, 300);
  assert_eq!(by_id(second).reserved_kg, 200);
  assert!(lots.iter().all(|l| l.reserved_kg <= l.qty_kg));
}

#[tokio::test]
async fn failed_reservation_leaves_no_partial_effect() {
  let (s, hub1) = seeded().await;
  let first = insert_lot(&s, hub1, Crop::Tomato, 300, 0).await;
  insert_lot(&s, hub1, Crop::Tomato, 100, 50).await;

  // 350 kg available in total; ask for more.
  let err = reserve_inventory(&s, hub1, Crop::Tomato, 400)
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    DomainError::InsufficientInventory { available_kg: 350, requested_kg: 400 }
  ));

  let lots: Vec<InventoryLot> = s.load().await.unwrap();
  assert_eq!(
    lots.iter().find(|l| l.lot_id == first).unwrap().reserved_kg,
    0
  );
  assert_eq!(
    available_inventory(&s, hub1, Crop::Tomato).await.unwrap(),
    350
  );
}

#[tokio::test]
async fn reserved_never_exceeds_quantity_across_sequences() {
  let (s, hub1) = seeded().await;
  insert_lot(&s, hub1, Crop::Onion, 250, 0).await;
  insert_lot(&s, hub1, Crop::Onion, 250, 0).await;

  for qty in [100, 100, 100, 100, 100] {
    let _ = reserve_inventory(&s, hub1, Crop::Onion, qty).await;
  }
  // Sixth request must fail: everything is reserved.
  assert!(reserve_inventory(&s, hub1, Crop::Onion, 1).await.is_err());

  let lots: Vec<InventoryLot> = s.load().await.unwrap();
  assert!(lots.iter().all(|l| l.reserved_kg <= l.qty_kg));
  assert_eq!(available_inventory(&s, hub1, Crop::Onion).await.unwrap(), 0);
}

#[tokio::test]
async fn summary_covers_all_three_crops() {
  let (s, hub1) = seeded().await;
  insert_lot(&s, hub1, Crop::Tomato, 300, 120).await;
  insert_lot(&s, hub1, Crop::Onion, 200, 0).await;

  let summary = summarize_inventory(&s, hub1).await.unwrap();
  assert_eq!(summary.len(), 3);

  let by_crop =
    |crop| summary.iter().find(|row| row.crop == crop).unwrap();
  assert_eq!(by_crop(Crop::Tomato).total_kg, 300);
  assert_eq!(by_crop(Crop::Tomato).reserved_kg, 120);
  assert_eq!(by_crop(Crop::Tomato).available_kg, 180);
  assert_eq!(by_crop(Crop::Onion).available_kg, 200);
  assert_eq!(by_crop(Crop::Okra).total_kg, 0);
}

// ─── Tenders ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn publishing_a_covered_tender_reserves_and_appends() {
  let (s, hub1) = seeded().await;
  insert_lot(&s, hub1, Crop::Tomato, 500, 0).await;
  let before = list_tenders(&s, Some(hub1)).await.unwrap().len();

  let tender = publish_tender(&s, tender_input(hub1, Crop::Tomato, 500))
    .await
    .unwrap();
  assert_eq!(tender.qty_needed, 500);

  assert_eq!(
    available_inventory(&s, hub1, Crop::Tomato).await.unwrap(),
    0
  );
  let after = list_tenders(&s, Some(hub1)).await.unwrap();
  assert_eq!(after.len(), before + 1);
}

#[tokio::test]
async fn publishing_an_uncovered_tender_fails_with_amounts() {
  let (s, hub1) = seeded().await;
  insert_lot(&s, hub1, Crop::Tomato, 500, 0).await;
  let before = list_tenders(&s, Some(hub1)).await.unwrap().len();

  let err = publish_tender(&s, tender_input(hub1, Crop::Tomato, 600))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    DomainError::InsufficientInventory { available_kg: 500, requested_kg: 600 }
  ));

  // No tender appended, no lot mutated.
  let after = list_tenders(&s, Some(hub1)).await.unwrap();
  assert_eq!(after.len(), before);
  let lots: Vec<InventoryLot> = s.load().await.unwrap();
  assert!(lots.iter().all(|l| l.reserved_kg == 0));
}

#[tokio::test]
async fn publish_tender_validates_hub_and_quantity() {
  let (s, hub1) = seeded().await;
  assert!(matches!(
    publish_tender(&s, tender_input(Uuid::new_v4(), Crop::Okra, 10)).await,
    Err(DomainError::HubNotFound(_))
  ));
  assert!(matches!(
    publish_tender(&s, tender_input(hub1, Crop::Okra, 0)).await,
    Err(DomainError::InvalidQuantity)
  ));
}

// ─── Orders ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn placing_an_order_derives_the_total() {
  let (s, hub1) = seeded().await;
  let buyer = Uuid::new_v4();

  let order = place_order(&s, buyer, hub1, vec![NewOrderItem {
    crop:         Crop::Tomato,
    qty_kg:       50,
    price_per_kg: 58.0,
  }])
  .await
  .unwrap();

  assert_eq!(order.total_amount, 2900.0);
  assert_eq!(order.items.len(), 1);

  let mine = list_orders_by_buyer(&s, buyer).await.unwrap();
  assert_eq!(mine.len(), 1);
  assert_eq!(mine[0].order_id, order.order_id);
}

#[tokio::test]
async fn order_totals_sum_across_lines() {
  let (s, hub1) = seeded().await;
  let order = place_order(&s, Uuid::new_v4(), hub1, vec![
    NewOrderItem { crop: Crop::Tomato, qty_kg: 50, price_per_kg: 58.0 },
    NewOrderItem { crop: Crop::Onion, qty_kg: 100, price_per_kg: 22.5 },
  ])
  .await
  .unwrap();
  assert_eq!(order.total_amount, 2900.0 + 2250.0);
}

#[tokio::test]
async fn placing_an_order_does_not_touch_inventory() {
  let (s, hub1) = seeded().await;
  insert_lot(&s, hub1, Crop::Tomato, 500, 0).await;

  place_order(&s, Uuid::new_v4(), hub1, vec![NewOrderItem {
    crop:         Crop::Tomato,
    qty_kg:       500,
    price_per_kg: 58.0,
  }])
  .await
  .unwrap();

  assert_eq!(
    available_inventory(&s, hub1, Crop::Tomato).await.unwrap(),
    500
  );
}

#[tokio::test]
async fn order_validation() {
  let (s, hub1) = seeded().await;
  assert!(matches!(
    place_order(&s, Uuid::new_v4(), hub1, Vec::new()).await,
    Err(DomainError::EmptyOrder)
  ));
  assert!(matches!(
    place_order(&s, Uuid::new_v4(), hub1, vec![NewOrderItem {
      crop:         Crop::Okra,
      qty_kg:       0,
      price_per_kg: 10.0,
    }])
    .await,
    Err(DomainError::InvalidQuantity)
  ));
  assert!(matches!(
    place_order(&s, Uuid::new_v4(), Uuid::new_v4(), vec![NewOrderItem {
      crop:         Crop::Okra,
      qty_kg:       5,
      price_per_kg: 10.0,
    }])
    .await,
    Err(DomainError::HubNotFound(_))
  ));
}
