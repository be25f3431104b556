//! Users and their roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

/// Which side of the marketplace a user acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
  Farmer,
  Hub,
  Buyer,
}

/// A registered participant. The phone number is the unique login key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub user_id: Uuid,
  pub name:    String,
  pub phone:   String,
  pub role:    Role,
  /// Government/cooperative registration id, where one exists.
  pub reg_id:  Option<String>,
}

impl Record for User {
  const KEY: &'static str = "users";
}
