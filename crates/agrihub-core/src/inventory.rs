//! Inventory lots held at hubs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crop::Crop, store::Record};

/// Whether a lot is physically present at the hub.
///
/// `Out` is terminal; reservation logic never touches lots once they leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LotStatus {
  InStock,
  Out,
}

/// A physical quantity of one crop held at one hub, originating from one
/// confirmed booking.
///
/// Invariant: `reserved_kg <= qty_kg`. The unreserved remainder is what
/// tenders can still claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLot {
  pub lot_id:      Uuid,
  pub booking_id:  Uuid,
  pub hub_id:      Uuid,
  pub crop:        Crop,
  pub qty_kg:      u32,
  /// Kilograms earmarked against open tenders.
  pub reserved_kg: u32,
  pub status:      LotStatus,
  pub grade:       Option<String>,
  pub in_at:       Option<DateTime<Utc>>,
  pub out_at:      Option<DateTime<Utc>>,
}

impl InventoryLot {
  /// Unreserved kilograms, clamped at zero.
  pub fn available_kg(&self) -> u32 {
    self.qty_kg.saturating_sub(self.reserved_kg)
  }
}

impl Record for InventoryLot {
  const KEY: &'static str = "inventory";
}
