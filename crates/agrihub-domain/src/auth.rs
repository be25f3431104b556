//! Demo login: phone lookup plus a fixed one-time code.
//!
//! There is no real OTP channel. `DEMO_OTP` is accepted for any phone; the
//! only authentication is that the phone matches a seeded user.

use agrihub_core::{store::RecordStore, user::User};

use crate::{DomainError, Result};

/// The fixed six-digit code accepted for every phone number.
pub const DEMO_OTP: &str = "123456";

/// Look up a user by phone number. Returns `None` if no user matches.
pub async fn find_user_by_phone<S: RecordStore>(
  store: &S,
  phone: &str,
) -> Result<Option<User>> {
  let users: Vec<User> = store.load().await.map_err(DomainError::store)?;
  Ok(users.into_iter().find(|u| u.phone == phone))
}

/// Verify the demo OTP and resolve the user for `phone`.
pub async fn verify_otp<S: RecordStore>(
  store: &S,
  phone: &str,
  otp: &str,
) -> Result<User> {
  if otp != DEMO_OTP {
    return Err(DomainError::InvalidOtp);
  }
  find_user_by_phone(store, phone)
    .await?
    .ok_or_else(|| DomainError::UnknownPhone(phone.to_string()))
}
