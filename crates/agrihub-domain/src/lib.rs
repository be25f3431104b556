//! Domain operations for the AgriHub marketplace.
//!
//! Every operation is a read-modify-write over whole record lists behind any
//! [`agrihub_core::store::RecordStore`]. Operations validate their inputs at
//! this boundary (positive quantities, known ids, one-way status
//! transitions); reads over unknown ids simply return empty lists.

pub mod advisory;
pub mod auth;
pub mod booking;
pub mod error;
pub mod hub;
pub mod inventory;
pub mod order;
pub mod seed;
pub mod tender;

pub use error::{DomainError, Result};

#[cfg(test)]
mod tests;
