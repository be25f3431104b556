//! Tender listing and publication.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use agrihub_core::{
  crop::Crop,
  hub::Hub,
  inventory::InventoryLot,
  store::RecordStore,
  tender::{Tender, TenderStatus},
};

use crate::{DomainError, Result, inventory::plan_reservation};

/// Input to [`publish_tender`].
#[derive(Debug, Clone)]
pub struct NewTender {
  pub hub_id:       Uuid,
  pub crop:         Crop,
  pub price_per_kg: f64,
  pub qty_needed:   u32,
  pub valid_until:  DateTime<Utc>,
}

/// All tenders, optionally restricted to one hub.
pub async fn list_tenders<S: RecordStore>(
  store: &S,
  hub_id: Option<Uuid>,
) -> Result<Vec<Tender>> {
  let tenders: Vec<Tender> = store.load().await.map_err(DomainError::store)?;
  Ok(match hub_id {
    Some(hub_id) => tenders.into_iter().filter(|t| t.hub_id == hub_id).collect(),
    None => tenders,
  })
}

/// Publish a tender backed by reserved inventory.
///
/// Plans the reservation first; on a shortfall the
/// [`DomainError::InsufficientInventory`] error carries the available and
/// requested amounts and neither the lot list nor the tender list is
/// written. On success the reservation is committed and exactly one OPEN
/// tender is appended.
pub async fn publish_tender<S: RecordStore>(
  store: &S,
  input: NewTender,
) -> Result<Tender> {
  if input.qty_needed == 0 {
    return Err(DomainError::InvalidQuantity);
  }

  let hubs: Vec<Hub> = store.load().await.map_err(DomainError::store)?;
  if !hubs.iter().any(|h| h.hub_id == input.hub_id) {
    return Err(DomainError::HubNotFound(input.hub_id));
  }

  let mut lots: Vec<InventoryLot> =
    store.load().await.map_err(DomainError::store)?;
  let plan =
    plan_reservation(&lots, input.hub_id, input.crop, input.qty_needed)?;

  tracing::info!(
    hub_id = %input.hub_id,
    crop = %input.crop,
    qty_kg = input.qty_needed,
    lots = plan.lot_count(),
    "publishing tender"
  );

  plan.apply_to(&mut lots);
  store.save(&lots).await.map_err(DomainError::store)?;

  let tender = Tender {
    tender_id:    Uuid::new_v4(),
    hub_id:       input.hub_id,
    crop:         input.crop,
    price_per_kg: input.price_per_kg,
    qty_needed:   input.qty_needed,
    valid_until:  input.valid_until,
    status:       TenderStatus::Open,
  };
  let mut tenders: Vec<Tender> =
    store.load().await.map_err(DomainError::store)?;
  tenders.push(tender.clone());
  store.save(&tenders).await.map_err(DomainError::store)?;

  Ok(tender)
}
