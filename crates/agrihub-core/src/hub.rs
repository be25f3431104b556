//! Cold-storage hubs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

/// A cold-storage/collection facility with finite capacity.
///
/// `used_kg` is tracked for dashboard display but is not authoritatively
/// reconciled against the inventory list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
  pub hub_id:      Uuid,
  /// Short stable code shown in the UI, e.g. `HUB-1`.
  pub code:        String,
  pub name:        String,
  pub capacity_kg: u32,
  pub used_kg:     u32,
}

impl Record for Hub {
  const KEY: &'static str = "hubs";
}
