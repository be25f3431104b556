//! The closed set of crops the marketplace trades in.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A crop kind. The set is closed; every record that names a crop uses one
/// of these three values, serialised in the upper-case wire form.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Crop {
  Tomato,
  Onion,
  Okra,
}

impl Crop {
  /// Human-readable label for display surfaces.
  pub fn label(&self) -> &'static str {
    match self {
      Self::Tomato => "Tomato",
      Self::Onion => "Onion",
      Self::Okra => "Okra",
    }
  }
}
