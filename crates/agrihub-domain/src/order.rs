//! Order placement.
//!
//! Orders do not decrement inventory or reservations; the two ledgers are
//! tracked independently.

use uuid::Uuid;

use agrihub_core::{
  crop::Crop,
  hub::Hub,
  order::{Order, OrderItem, OrderStatus},
  store::RecordStore,
};

use crate::{DomainError, Result};

/// One requested line of a new order.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
  pub crop:         Crop,
  pub qty_kg:       u32,
  pub price_per_kg: f64,
}

/// Append a PENDING order with the derived total.
///
/// Validates that the hub exists and that there is at least one item, each
/// with a positive quantity.
pub async fn place_order<S: RecordStore>(
  store: &S,
  buyer_id: Uuid,
  hub_id: Uuid,
  items: Vec<NewOrderItem>,
) -> Result<Order> {
  if items.is_empty() {
    return Err(DomainError::EmptyOrder);
  }
  if items.iter().any(|i| i.qty_kg == 0) {
    return Err(DomainError::InvalidQuantity);
  }

  let hubs: Vec<Hub> = store.load().await.map_err(DomainError::store)?;
  if !hubs.iter().any(|h| h.hub_id == hub_id) {
    return Err(DomainError::HubNotFound(hub_id));
  }

  let items: Vec<OrderItem> = items
    .into_iter()
    .map(|i| OrderItem {
      item_id:      Uuid::new_v4(),
      crop:         i.crop,
      qty_kg:       i.qty_kg,
      price_per_kg: i.price_per_kg,
    })
    .collect();
  let total_amount = items.iter().map(OrderItem::line_total).sum();

  let order = Order {
    order_id: Uuid::new_v4(),
    buyer_id,
    hub_id,
    total_amount,
    status: OrderStatus::Pending,
    items,
  };

  let mut orders: Vec<Order> = store.load().await.map_err(DomainError::store)?;
  orders.push(order.clone());
  store.save(&orders).await.map_err(DomainError::store)?;

  Ok(order)
}

/// A buyer's orders, in store order.
pub async fn list_orders_by_buyer<S: RecordStore>(
  store: &S,
  buyer_id: Uuid,
) -> Result<Vec<Order>> {
  let orders: Vec<Order> = store.load().await.map_err(DomainError::store)?;
  Ok(orders.into_iter().filter(|o| o.buyer_id == buyer_id).collect())
}
