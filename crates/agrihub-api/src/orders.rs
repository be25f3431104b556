//! Handlers for `/orders` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/orders` | Buyer checkout; total derived server-side |
//! | `GET`  | `/orders?buyer_id=` | Buyer's order history |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use agrihub_core::{crop::Crop, order::Order, store::RecordStore};
use agrihub_domain::order::NewOrderItem;

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ItemBody {
  pub crop:         Crop,
  pub qty_kg:       u32,
  pub price_per_kg: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub buyer_id: Uuid,
  pub hub_id:   Uuid,
  pub items:    Vec<ItemBody>,
}

/// `POST /orders`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let items = body
    .items
    .into_iter()
    .map(|i| NewOrderItem {
      crop:         i.crop,
      qty_kg:       i.qty_kg,
      price_per_kg: i.price_per_kg,
    })
    .collect();
  let order = agrihub_domain::order::place_order(
    store.as_ref(),
    body.buyer_id,
    body.hub_id,
    items,
  )
  .await?;
  Ok((StatusCode::CREATED, Json(order)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub buyer_id: Uuid,
}

/// `GET /orders?buyer_id=<id>`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Order>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let orders = agrihub_domain::order::list_orders_by_buyer(
    store.as_ref(),
    params.buyer_id,
  )
  .await?;
  Ok(Json(orders))
}
