//! Error types for `agrihub-domain`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
  #[error("hub not found: {0}")]
  HubNotFound(Uuid),

  #[error("booking not found: {0}")]
  BookingNotFound(Uuid),

  #[error("booking {0} is already decided")]
  BookingAlreadyDecided(Uuid),

  #[error("no user registered for phone {0}")]
  UnknownPhone(String),

  #[error("invalid one-time code")]
  InvalidOtp,

  #[error("quantity must be positive")]
  InvalidQuantity,

  #[error("order has no items")]
  EmptyOrder,

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

impl DomainError {
  /// Wrap a backend error from any [`RecordStore`] implementation.
  ///
  /// [`RecordStore`]: agrihub_core::store::RecordStore
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = DomainError> = std::result::Result<T, E>;
