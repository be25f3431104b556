//! JSON REST API for AgriHub.
//!
//! Exposes an axum [`Router`] backed by any
//! [`agrihub_core::store::RecordStore`]. TLS and transport concerns are the
//! caller's responsibility; authentication is the demo OTP flow only.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", agrihub_api::api_router(store.clone()))
//! ```

pub mod auth;
pub mod bookings;
pub mod error;
pub mod hubs;
pub mod orders;
pub mod tenders;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use agrihub_core::store::RecordStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Login
    .route("/auth/otp/send", post(auth::send_otp))
    .route("/auth/otp/verify", post(auth::verify_otp::<S>))
    // Hubs and their inventory
    .route("/hubs", get(hubs::list::<S>))
    .route("/hubs/{id}", get(hubs::get_one::<S>))
    .route("/hubs/{id}/inventory", get(hubs::inventory::<S>))
    .route("/hubs/{id}/inventory/summary", get(hubs::inventory_summary::<S>))
    .route("/hubs/{id}/availability", get(hubs::availability::<S>))
    .route("/hubs/{id}/advisory", get(hubs::advisory::<S>))
    // Bookings
    .route("/bookings", get(bookings::list::<S>).post(bookings::create::<S>))
    .route("/bookings/{id}/decision", post(bookings::decide::<S>))
    // Tenders
    .route("/tenders", get(tenders::list::<S>).post(tenders::publish::<S>))
    // Orders
    .route("/orders", get(orders::list::<S>).post(orders::create::<S>))
    .with_state(store)
}
