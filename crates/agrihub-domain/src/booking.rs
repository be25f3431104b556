//! Booking creation and decision.

use chrono::{DateTime, Utc};
use rand::{Rng as _, distributions::Alphanumeric};
use uuid::Uuid;

use agrihub_core::{
  booking::{Booking, BookingStatus},
  crop::Crop,
  hub::Hub,
  inventory::{InventoryLot, LotStatus},
  store::RecordStore,
};

use crate::{DomainError, Result};

/// Length of the farmer-facing access token.
const TOKEN_LEN: usize = 10;

/// Input to [`create_booking`].
#[derive(Debug, Clone)]
pub struct NewBooking {
  pub farmer_id: Uuid,
  pub hub_id:    Uuid,
  pub crop:      Crop,
  pub qty_kg:    u32,
}

/// The hub's decision on a pending booking.
#[derive(Debug, Clone, Default)]
pub struct BookingDecision {
  pub accept:     bool,
  pub drop_start: Option<DateTime<Utc>>,
  pub drop_end:   Option<DateTime<Utc>>,
}

/// Append a new PENDING booking with a fresh access token.
///
/// Validates that the quantity is positive and the hub exists. Has no
/// inventory effect; inventory appears only when the hub accepts.
pub async fn create_booking<S: RecordStore>(
  store: &S,
  input: NewBooking,
) -> Result<Booking> {
  if input.qty_kg == 0 {
    return Err(DomainError::InvalidQuantity);
  }

  let hubs: Vec<Hub> = store.load().await.map_err(DomainError::store)?;
  if !hubs.iter().any(|h| h.hub_id == input.hub_id) {
    return Err(DomainError::HubNotFound(input.hub_id));
  }

  let booking = Booking {
    booking_id: Uuid::new_v4(),
    token:      access_token(),
    farmer_id:  input.farmer_id,
    hub_id:     input.hub_id,
    crop:       input.crop,
    qty_kg:     input.qty_kg,
    status:     BookingStatus::Pending,
    drop_start: None,
    drop_end:   None,
    created_at: Utc::now(),
  };

  let mut bookings: Vec<Booking> =
    store.load().await.map_err(DomainError::store)?;
  bookings.push(booking.clone());
  store.save(&bookings).await.map_err(DomainError::store)?;

  Ok(booking)
}

/// A farmer's bookings, newest first.
pub async fn list_bookings_by_farmer<S: RecordStore>(
  store: &S,
  farmer_id: Uuid,
) -> Result<Vec<Booking>> {
  let mut bookings: Vec<Booking> =
    store.load().await.map_err(DomainError::store)?;
  bookings.retain(|b| b.farmer_id == farmer_id);
  bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  Ok(bookings)
}

/// The PENDING queue for a hub.
pub async fn list_pending_bookings_by_hub<S: RecordStore>(
  store: &S,
  hub_id: Uuid,
) -> Result<Vec<Booking>> {
  let bookings: Vec<Booking> =
    store.load().await.map_err(DomainError::store)?;
  Ok(
    bookings
      .into_iter()
      .filter(|b| b.hub_id == hub_id && b.status == BookingStatus::Pending)
      .collect(),
  )
}

/// Decide a PENDING booking.
///
/// Accepting sets CONFIRMED, records the drop window, and creates exactly one
/// full-quantity unreserved IN_STOCK lot tied to the booking. Rejecting sets
/// REJECTED with no inventory effect. Deciding a booking twice is an error —
/// the transition is one-way.
pub async fn decide_booking<S: RecordStore>(
  store: &S,
  booking_id: Uuid,
  decision: BookingDecision,
) -> Result<Booking> {
  let mut bookings: Vec<Booking> =
    store.load().await.map_err(DomainError::store)?;
  let booking = bookings
    .iter_mut()
    .find(|b| b.booking_id == booking_id)
    .ok_or(DomainError::BookingNotFound(booking_id))?;

  if booking.status != BookingStatus::Pending {
    return Err(DomainError::BookingAlreadyDecided(booking_id));
  }

  if decision.accept {
    booking.status = BookingStatus::Confirmed;
    booking.drop_start = decision.drop_start;
    booking.drop_end = decision.drop_end;

    let lot = InventoryLot {
      lot_id:      Uuid::new_v4(),
      booking_id:  booking.booking_id,
      hub_id:      booking.hub_id,
      crop:        booking.crop,
      qty_kg:      booking.qty_kg,
      reserved_kg: 0,
      status:      LotStatus::InStock,
      grade:       None,
      in_at:       Some(Utc::now()),
      out_at:      None,
    };
    let mut lots: Vec<InventoryLot> =
      store.load().await.map_err(DomainError::store)?;
    lots.push(lot);
    store.save(&lots).await.map_err(DomainError::store)?;
  } else {
    booking.status = BookingStatus::Rejected;
  }

  let decided = booking.clone();
  store.save(&bookings).await.map_err(DomainError::store)?;
  Ok(decided)
}

/// A short opaque token the farmer presents at the hub gate.
fn access_token() -> String {
  rand::thread_rng()
    .sample_iter(&Alphanumeric)
    .take(TOKEN_LEN)
    .map(char::from)
    .collect()
}
