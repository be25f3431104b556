//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use agrihub_domain::DomainError;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("unauthorized: {0}")]
  Unauthorized(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error(
    "insufficient inventory: {available_kg} kg available, {requested_kg} kg requested"
  )]
  InsufficientInventory {
    available_kg: u32,
    requested_kg: u32,
  },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<DomainError> for ApiError {
  fn from(e: DomainError) -> Self {
    match e {
      DomainError::HubNotFound(_)
      | DomainError::BookingNotFound(_)
      | DomainError::UnknownPhone(_) => Self::NotFound(e.to_string()),
      DomainError::InvalidOtp => Self::Unauthorized(e.to_string()),
      DomainError::InvalidQuantity | DomainError::EmptyOrder => {
        Self::BadRequest(e.to_string())
      }
      DomainError::BookingAlreadyDecided(_) => Self::Conflict(e.to_string()),
      DomainError::InsufficientInventory { available_kg, requested_kg } => {
        Self::InsufficientInventory { available_kg, requested_kg }
      }
      DomainError::Store(inner) => Self::Store(inner),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, json!({ "error": m }))
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, json!({ "error": m }))
      }
      ApiError::Unauthorized(m) => {
        (StatusCode::UNAUTHORIZED, json!({ "error": m }))
      }
      ApiError::Conflict(m) => (StatusCode::CONFLICT, json!({ "error": m })),
      ApiError::InsufficientInventory { available_kg, requested_kg } => (
        StatusCode::CONFLICT,
        json!({
          "error":        self.to_string(),
          "available_kg": available_kg,
          "requested_kg": requested_kg,
        }),
      ),
      ApiError::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": e.to_string() }),
      ),
    };
    (status, Json(body)).into_response()
  }
}
