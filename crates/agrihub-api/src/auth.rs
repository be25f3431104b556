//! Handlers for the demo OTP login flow.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth/otp/send`   | Demo only: no SMS is sent |
//! | `POST` | `/auth/otp/verify` | Fixed code, phone must be registered |

use std::sync::Arc;

use axum::{Json, extract::State};
use agrihub_core::{store::RecordStore, user::User};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── Send ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SendBody {
  pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
  pub sent: bool,
}

/// `POST /auth/otp/send` — body: `{"phone":"+91..."}`
///
/// There is no OTP channel; this endpoint only mirrors the real flow's
/// shape so clients can keep the two-step UX.
pub async fn send_otp(
  Json(body): Json<SendBody>,
) -> Result<Json<SendResponse>, ApiError> {
  if body.phone.trim().is_empty() {
    return Err(ApiError::BadRequest("phone is required".into()));
  }
  tracing::info!(phone = %body.phone, "demo OTP requested");
  Ok(Json(SendResponse { sent: true }))
}

// ─── Verify ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct VerifyBody {
  pub phone: String,
  pub otp:   String,
}

/// `POST /auth/otp/verify` — body: `{"phone":"+91...","otp":"123456"}`
pub async fn verify_otp<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<VerifyBody>,
) -> Result<Json<User>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user =
    agrihub_domain::auth::verify_otp(store.as_ref(), &body.phone, &body.otp)
      .await?;
  Ok(Json(user))
}
