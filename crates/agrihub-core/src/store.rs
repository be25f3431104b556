//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `agrihub-store-sqlite`).
//! Higher layers (`agrihub-domain`, `agrihub-api`) depend on this
//! abstraction, not on any concrete backend.
//!
//! The store is a string-keyed map of whole record lists: every operation is
//! a wholesale `load` or `save` of one named collection. There are no partial
//! updates and no locking; if two independent store instances write the same
//! key, the last writer wins.

use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};

/// A record type that lives in a named collection of the store.
///
/// `KEY` is the fixed collection key the whole list is stored under.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
  const KEY: &'static str;
}

/// Abstraction over an AgriHub record store backend.
///
/// `load` never fails on malformed persisted data: a corrupt list is treated
/// as empty (and logged by the backend), matching the behaviour callers rely
/// on for first-run seeding.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the full list stored under `R::KEY`.
  ///
  /// Returns an empty list when the key is absent or the stored payload
  /// cannot be decoded.
  fn load<R: Record>(
    &self,
  ) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + '_;

  /// Overwrite the full list stored under `R::KEY`.
  fn save<'a, R: Record>(
    &'a self,
    records: &'a [R],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
