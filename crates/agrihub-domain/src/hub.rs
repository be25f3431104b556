//! Hub lookups.

use uuid::Uuid;

use agrihub_core::{hub::Hub, store::RecordStore};

use crate::{DomainError, Result};

/// All hubs, in store order.
pub async fn list_hubs<S: RecordStore>(store: &S) -> Result<Vec<Hub>> {
  store.load().await.map_err(DomainError::store)
}

/// A hub by id. Returns `None` if not found.
pub async fn get_hub<S: RecordStore>(
  store: &S,
  hub_id: Uuid,
) -> Result<Option<Hub>> {
  let hubs: Vec<Hub> = store.load().await.map_err(DomainError::store)?;
  Ok(hubs.into_iter().find(|h| h.hub_id == hub_id))
}
