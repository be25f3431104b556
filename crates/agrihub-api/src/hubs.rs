//! Handlers for `/hubs` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/hubs` | All hubs |
//! | `GET`  | `/hubs/:id` | 404 if not found |
//! | `GET`  | `/hubs/:id/inventory` | Lots still at the hub |
//! | `GET`  | `/hubs/:id/inventory/summary` | Per-crop totals |
//! | `GET`  | `/hubs/:id/availability?crop=` | Unreserved kg |
//! | `GET`  | `/hubs/:id/advisory?crop=` | Simulated reading + spoilage ETA |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agrihub_core::{
  crop::Crop, hub::Hub, inventory::InventoryLot, store::RecordStore,
};
use agrihub_domain::{
  advisory::{
    Ambient, PriceTrend, ReadingSource as _, SensorReading, SimulatedSensor,
    SpoilageEstimate, price_trend, spoilage_estimate,
  },
  inventory::InventorySummary,
};

use crate::error::ApiError;

// ─── Hubs ─────────────────────────────────────────────────────────────────────

/// `GET /hubs`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Hub>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let hubs = agrihub_domain::hub::list_hubs(store.as_ref()).await?;
  Ok(Json(hubs))
}

/// `GET /hubs/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Hub>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let hub = agrihub_domain::hub::get_hub(store.as_ref(), id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("hub {id} not found")))?;
  Ok(Json(hub))
}

// ─── Inventory ───────────────────────────────────────────────────────────────

/// `GET /hubs/:id/inventory`
pub async fn inventory<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<InventoryLot>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let lots =
    agrihub_domain::inventory::list_inventory_by_hub(store.as_ref(), id)
      .await?;
  Ok(Json(lots))
}

/// `GET /hubs/:id/inventory/summary`
pub async fn inventory_summary<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<InventorySummary>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let summary =
    agrihub_domain::inventory::summarize_inventory(store.as_ref(), id).await?;
  Ok(Json(summary))
}

#[derive(Debug, Deserialize)]
pub struct CropParam {
  pub crop: Crop,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
  pub crop:         Crop,
  pub available_kg: u32,
}

/// `GET /hubs/:id/availability?crop=TOMATO`
pub async fn availability<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Query(params): Query<CropParam>,
) -> Result<Json<AvailabilityResponse>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let available_kg = agrihub_domain::inventory::available_inventory(
    store.as_ref(),
    id,
    params.crop,
  )
  .await?;
  Ok(Json(AvailabilityResponse { crop: params.crop, available_kg }))
}

// ─── Advisory ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AdvisoryResponse {
  pub hub_code:    String,
  pub crop:        Crop,
  pub reading:     SensorReading,
  pub estimate:    SpoilageEstimate,
  pub advice_text: &'static str,
  pub trend:       PriceTrend,
  pub trend_text:  &'static str,
}

/// `GET /hubs/:id/advisory?crop=TOMATO`
///
/// Returns one fresh simulated reading with the derived spoilage estimate.
/// Clients poll it for the notice-board widgets.
pub async fn advisory<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Query(params): Query<CropParam>,
) -> Result<Json<AdvisoryResponse>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let hub = agrihub_domain::hub::get_hub(store.as_ref(), id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("hub {id} not found")))?;

  let reading = SimulatedSensor::from_entropy().next_reading();
  let estimate = spoilage_estimate(params.crop, &reading, Ambient::default());
  let trend = price_trend(params.crop, Utc::now().date_naive());

  Ok(Json(AdvisoryResponse {
    hub_code: hub.code,
    crop: params.crop,
    reading,
    advice_text: estimate.advice.message(),
    estimate,
    trend,
    trend_text: trend.message(),
  }))
}
