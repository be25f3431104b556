//! Tenders — a hub's standing offer to buy a crop quantity at a price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crop::Crop, store::Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenderStatus {
  Open,
  Closed,
}

/// A published tender, backed by inventory reserved at publication time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tender {
  pub tender_id:    Uuid,
  pub hub_id:       Uuid,
  pub crop:         Crop,
  pub price_per_kg: f64,
  pub qty_needed:   u32,
  pub valid_until:  DateTime<Utc>,
  pub status:       TenderStatus,
}

impl Record for Tender {
  const KEY: &'static str = "tenders";
}
