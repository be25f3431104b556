//! Drop-off bookings.
//!
//! A booking is a farmer's request for a drop-off slot at a hub. It starts
//! PENDING and is decided exactly once by the hub; acceptance is what brings
//! inventory into existence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crop::Crop, store::Record};

/// Lifecycle status of a booking. Transitions are one-way:
/// `Pending → {Confirmed, Rejected}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
  Pending,
  Confirmed,
  Rejected,
}

/// A farmer's drop-off slot request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
  pub booking_id: Uuid,
  /// Opaque access token shown to the farmer (gate pass / QR payload).
  pub token:      String,
  pub farmer_id:  Uuid,
  pub hub_id:     Uuid,
  pub crop:       Crop,
  pub qty_kg:     u32,
  pub status:     BookingStatus,
  /// Drop-off window, assigned by the hub on acceptance.
  pub drop_start: Option<DateTime<Utc>>,
  pub drop_end:   Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
}

impl Record for Booking {
  const KEY: &'static str = "bookings";
}
