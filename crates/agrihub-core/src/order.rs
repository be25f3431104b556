//! Buyer orders.
//!
//! Orders are tracked independently of inventory reservations: placing an
//! order does not decrement any lot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crop::Crop, store::Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
  Pending,
  Confirmed,
  Fulfilled,
  Cancelled,
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub item_id:      Uuid,
  pub crop:         Crop,
  pub qty_kg:       u32,
  pub price_per_kg: f64,
}

impl OrderItem {
  /// Line total in rupees.
  pub fn line_total(&self) -> f64 {
    f64::from(self.qty_kg) * self.price_per_kg
  }
}

/// A buyer's order against one hub.
///
/// `total_amount` is derived at placement time: the sum of line totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub order_id:     Uuid,
  pub buyer_id:     Uuid,
  pub hub_id:       Uuid,
  pub total_amount: f64,
  pub status:       OrderStatus,
  pub items:        Vec<OrderItem>,
}

impl Record for Order {
  const KEY: &'static str = "orders";
}
