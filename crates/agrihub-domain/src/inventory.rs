//! Inventory availability and reservation.
//!
//! Reservation is two-phase: a read-only pass computes per-lot deltas
//! (greedy, in store order), the plan is checked against the requested
//! quantity, and only a complete plan is ever applied and persisted. A
//! shortfall leaves no effect, in memory or in the store.

use serde::Serialize;
use strum::IntoEnumIterator as _;
use uuid::Uuid;

use agrihub_core::{
  crop::Crop,
  inventory::{InventoryLot, LotStatus},
  store::RecordStore,
};

use crate::{DomainError, Result};

// ─── Availability ────────────────────────────────────────────────────────────

/// Unreserved kilograms of `crop` across IN_STOCK lots at `hub_id`.
/// Zero when no lots match.
pub fn availability(lots: &[InventoryLot], hub_id: Uuid, crop: Crop) -> u32 {
  lots
    .iter()
    .filter(|l| {
      l.hub_id == hub_id && l.crop == crop && l.status == LotStatus::InStock
    })
    .map(InventoryLot::available_kg)
    .sum()
}

/// Load the lot list and compute [`availability`].
pub async fn available_inventory<S: RecordStore>(
  store: &S,
  hub_id: Uuid,
  crop: Crop,
) -> Result<u32> {
  let lots: Vec<InventoryLot> =
    store.load().await.map_err(DomainError::store)?;
  Ok(availability(&lots, hub_id, crop))
}

/// All lots still at the hub (everything except OUT).
pub async fn list_inventory_by_hub<S: RecordStore>(
  store: &S,
  hub_id: Uuid,
) -> Result<Vec<InventoryLot>> {
  let lots: Vec<InventoryLot> =
    store.load().await.map_err(DomainError::store)?;
  Ok(
    lots
      .into_iter()
      .filter(|l| l.hub_id == hub_id && l.status != LotStatus::Out)
      .collect(),
  )
}

// ─── Reservation plan ────────────────────────────────────────────────────────

/// A complete set of per-lot reservation deltas covering one request.
///
/// Only constructible through [`plan_reservation`], which guarantees the
/// deltas sum to the full requested quantity.
#[derive(Debug, Clone)]
pub struct ReservationPlan {
  deltas: Vec<(Uuid, u32)>,
}

impl ReservationPlan {
  /// Total kilograms the plan reserves.
  pub fn total_kg(&self) -> u32 {
    self.deltas.iter().map(|(_, kg)| kg).sum()
  }

  /// Number of lots touched.
  pub fn lot_count(&self) -> usize {
    self.deltas.len()
  }

  /// Apply the deltas to `lots`. Lots not named in the plan are untouched.
  pub(crate) fn apply_to(&self, lots: &mut [InventoryLot]) {
    for (lot_id, delta_kg) in &self.deltas {
      if let Some(lot) = lots.iter_mut().find(|l| l.lot_id == *lot_id) {
        lot.reserved_kg += delta_kg;
      }
    }
  }
}

/// Compute a reservation plan for `qty_kg` of `crop` at `hub_id`.
///
/// Greedy fill over IN_STOCK lots in store order. Read-only: no lot is
/// mutated. Fails with [`DomainError::InsufficientInventory`] (carrying the
/// exact available total) when the lots cannot cover the request.
pub fn plan_reservation(
  lots: &[InventoryLot],
  hub_id: Uuid,
  crop: Crop,
  qty_kg: u32,
) -> Result<ReservationPlan> {
  if qty_kg == 0 {
    return Err(DomainError::InvalidQuantity);
  }

  let mut deltas = Vec::new();
  let mut remaining = qty_kg;
  for lot in lots {
    if remaining == 0 {
      break;
    }
    if lot.hub_id != hub_id
      || lot.crop != crop
      || lot.status != LotStatus::InStock
    {
      continue;
    }
    let take = lot.available_kg().min(remaining);
    if take > 0 {
      deltas.push((lot.lot_id, take));
      remaining -= take;
    }
  }

  if remaining > 0 {
    return Err(DomainError::InsufficientInventory {
      available_kg: availability(lots, hub_id, crop),
      requested_kg: qty_kg,
    });
  }

  Ok(ReservationPlan { deltas })
}

/// Reserve `qty_kg` of `crop` at `hub_id`: plan, apply, persist.
///
/// On failure nothing is mutated and nothing is written.
pub async fn reserve_inventory<S: RecordStore>(
  store: &S,
  hub_id: Uuid,
  crop: Crop,
  qty_kg: u32,
) -> Result<ReservationPlan> {
  let mut lots: Vec<InventoryLot> =
    store.load().await.map_err(DomainError::store)?;
  let plan = plan_reservation(&lots, hub_id, crop, qty_kg)?;
  plan.apply_to(&mut lots);
  store.save(&lots).await.map_err(DomainError::store)?;
  Ok(plan)
}

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Per-crop totals over a hub's IN_STOCK lots.
#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
  pub crop:         Crop,
  pub total_kg:     u32,
  pub reserved_kg:  u32,
  pub available_kg: u32,
}

/// Summarise a hub's IN_STOCK inventory, one entry per crop kind.
/// Pure read, no mutation.
pub async fn summarize_inventory<S: RecordStore>(
  store: &S,
  hub_id: Uuid,
) -> Result<Vec<InventorySummary>> {
  let lots: Vec<InventoryLot> =
    store.load().await.map_err(DomainError::store)?;

  Ok(
    Crop::iter()
      .map(|crop| {
        let matching = lots.iter().filter(|l| {
          l.hub_id == hub_id && l.crop == crop && l.status == LotStatus::InStock
        });
        let mut total_kg = 0;
        let mut reserved_kg = 0;
        let mut available_kg = 0;
        for lot in matching {
          total_kg += lot.qty_kg;
          reserved_kg += lot.reserved_kg;
          available_kg += lot.available_kg();
        }
        InventorySummary { crop, total_kg, reserved_kg, available_kg }
      })
      .collect(),
  )
}
