//! Handlers for `/bookings` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/bookings` | Farmer creates a PENDING booking |
//! | `GET`  | `/bookings?farmer_id=` | Farmer's bookings, newest first |
//! | `GET`  | `/bookings?hub_id=` | Hub's PENDING queue |
//! | `POST` | `/bookings/:id/decision` | Hub accepts or rejects |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use agrihub_core::{booking::Booking, crop::Crop, store::RecordStore};
use agrihub_domain::booking::{BookingDecision, NewBooking};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub farmer_id: Uuid,
  pub hub_id:    Uuid,
  pub crop:      Crop,
  pub qty_kg:    u32,
}

/// `POST /bookings`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let booking = agrihub_domain::booking::create_booking(
    store.as_ref(),
    NewBooking {
      farmer_id: body.farmer_id,
      hub_id:    body.hub_id,
      crop:      body.crop,
      qty_kg:    body.qty_kg,
    },
  )
  .await?;
  Ok((StatusCode::CREATED, Json(booking)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub farmer_id: Option<Uuid>,
  pub hub_id:    Option<Uuid>,
}

/// `GET /bookings?farmer_id=<id>` or `GET /bookings?hub_id=<id>`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Booking>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let bookings = match (params.farmer_id, params.hub_id) {
    (Some(farmer_id), None) => {
      agrihub_domain::booking::list_bookings_by_farmer(
        store.as_ref(),
        farmer_id,
      )
      .await?
    }
    (None, Some(hub_id)) => {
      agrihub_domain::booking::list_pending_bookings_by_hub(
        store.as_ref(),
        hub_id,
      )
      .await?
    }
    _ => {
      return Err(ApiError::BadRequest(
        "exactly one of farmer_id or hub_id is required".into(),
      ));
    }
  };
  Ok(Json(bookings))
}

// ─── Decide ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DecisionBody {
  pub accept:     bool,
  pub drop_start: Option<DateTime<Utc>>,
  pub drop_end:   Option<DateTime<Utc>>,
}

/// `POST /bookings/:id/decision`
pub async fn decide<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<DecisionBody>,
) -> Result<Json<Booking>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let booking = agrihub_domain::booking::decide_booking(
    store.as_ref(),
    id,
    BookingDecision {
      accept:     body.accept,
      drop_start: body.drop_start,
      drop_end:   body.drop_end,
    },
  )
  .await?;
  Ok(Json(booking))
}
