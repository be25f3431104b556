//! Core types and trait definitions for the AgriHub marketplace.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod booking;
pub mod crop;
pub mod hub;
pub mod inventory;
pub mod order;
pub mod store;
pub mod tender;
pub mod user;

pub use crop::Crop;
