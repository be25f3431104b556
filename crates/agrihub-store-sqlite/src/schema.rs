//! SQL schema for the AgriHub SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per named collection; the whole record list is a JSON array.
-- Writes always replace the full row, never patch it.
CREATE TABLE IF NOT EXISTS collections (
    key        TEXT PRIMARY KEY,   -- 'hubs' | 'users' | 'bookings' | ...
    value_json TEXT NOT NULL
);

PRAGMA user_version = 1;
";
