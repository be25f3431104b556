//! Handlers for `/tenders` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/tenders[?hub_id=]` | All or per-hub tenders |
//! | `POST` | `/tenders` | 409 with amounts when inventory cannot cover |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use agrihub_core::{crop::Crop, store::RecordStore, tender::Tender};
use agrihub_domain::tender::NewTender;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub hub_id: Option<Uuid>,
}

/// `GET /tenders[?hub_id=<id>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Tender>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let tenders =
    agrihub_domain::tender::list_tenders(store.as_ref(), params.hub_id)
      .await?;
  Ok(Json(tenders))
}

// ─── Publish ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PublishBody {
  pub hub_id:       Uuid,
  pub crop:         Crop,
  pub price_per_kg: f64,
  pub qty_needed:   u32,
  pub valid_until:  DateTime<Utc>,
}

/// `POST /tenders`
pub async fn publish<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<PublishBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let tender = agrihub_domain::tender::publish_tender(
    store.as_ref(),
    NewTender {
      hub_id:       body.hub_id,
      crop:         body.crop,
      price_per_kg: body.price_per_kg,
      qty_needed:   body.qty_needed,
      valid_until:  body.valid_until,
    },
  )
  .await?;
  Ok((StatusCode::CREATED, Json(tender)))
}
