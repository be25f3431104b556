//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use agrihub_core::store::{Record, RecordStore};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An AgriHub record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch the raw JSON payload stored under `key`, if any.
  pub(crate) async fn load_raw(&self, key: &'static str) -> Result<Option<String>> {
    let raw = self
      .conn
      .call(move |conn| {
        let raw: Option<String> = conn
          .query_row(
            "SELECT value_json FROM collections WHERE key = ?1",
            rusqlite::params![key],
            |r| r.get(0),
          )
          .optional()?;
        Ok(raw)
      })
      .await?;
    Ok(raw)
  }

  /// Overwrite the payload stored under `key`.
  pub(crate) async fn save_raw(&self, key: &'static str, json: String) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO collections (key, value_json) VALUES (?1, ?2)
           ON CONFLICT (key) DO UPDATE SET value_json = excluded.value_json",
          rusqlite::params![key, json],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn load<R: Record>(&self) -> Result<Vec<R>> {
    let Some(raw) = self.load_raw(R::KEY).await? else {
      return Ok(Vec::new());
    };

    // Malformed persisted data is treated as empty, never raised.
    match serde_json::from_str(&raw) {
      Ok(records) => Ok(records),
      Err(e) => {
        tracing::warn!(key = R::KEY, error = %e, "corrupt collection; treating as empty");
        Ok(Vec::new())
      }
    }
  }

  async fn save<R: Record>(&self, records: &[R]) -> Result<()> {
    let json = serde_json::to_string(records)?;
    self.save_raw(R::KEY, json).await
  }
}
