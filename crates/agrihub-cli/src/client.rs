//! Async HTTP client wrapping the AgriHub JSON API.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use uuid::Uuid;

use agrihub_core::{
  booking::Booking, crop::Crop, hub::Hub, inventory::InventoryLot,
  order::Order, tender::Tender, user::User,
};

/// Async HTTP client for the AgriHub JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: String) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }

  async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      bail!("server returned {status}: {body}");
    }
    resp.json().await.context("failed to decode response body")
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let resp = self
      .client
      .get(self.url(path))
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;
    Self::decode(resp).await
  }

  async fn post_json<T: DeserializeOwned>(
    &self,
    path: &str,
    body: &Value,
  ) -> Result<T> {
    let resp = self
      .client
      .post(self.url(path))
      .json(body)
      .send()
      .await
      .with_context(|| format!("POST {path} failed"))?;
    Self::decode(resp).await
  }

  // ── Login ─────────────────────────────────────────────────────────────────

  /// `POST /api/auth/otp/verify`
  pub async fn login(&self, phone: &str, otp: &str) -> Result<User> {
    self
      .post_json("/auth/otp/verify", &json!({ "phone": phone, "otp": otp }))
      .await
  }

  // ── Hubs ──────────────────────────────────────────────────────────────────

  /// `GET /api/hubs`
  pub async fn hubs(&self) -> Result<Vec<Hub>> {
    self.get_json("/hubs").await
  }

  /// `GET /api/hubs/:id/inventory`
  pub async fn inventory(&self, hub_id: Uuid) -> Result<Vec<InventoryLot>> {
    self.get_json(&format!("/hubs/{hub_id}/inventory")).await
  }

  /// `GET /api/hubs/:id/inventory/summary`
  pub async fn inventory_summary(&self, hub_id: Uuid) -> Result<Value> {
    self
      .get_json(&format!("/hubs/{hub_id}/inventory/summary"))
      .await
  }

  /// `GET /api/hubs/:id/advisory?crop=`
  pub async fn advisory(&self, hub_id: Uuid, crop: Crop) -> Result<Value> {
    self
      .get_json(&format!("/hubs/{hub_id}/advisory?crop={crop}"))
      .await
  }

  // ── Bookings ──────────────────────────────────────────────────────────────

  /// `POST /api/bookings`
  pub async fn create_booking(
    &self,
    farmer_id: Uuid,
    hub_id: Uuid,
    crop: Crop,
    qty_kg: u32,
  ) -> Result<Booking> {
    self
      .post_json("/bookings", &json!({
        "farmer_id": farmer_id,
        "hub_id":    hub_id,
        "crop":      crop,
        "qty_kg":    qty_kg,
      }))
      .await
  }

  /// `GET /api/bookings?farmer_id=`
  pub async fn bookings_by_farmer(&self, farmer_id: Uuid) -> Result<Vec<Booking>> {
    self.get_json(&format!("/bookings?farmer_id={farmer_id}")).await
  }

  /// `GET /api/bookings?hub_id=` — the PENDING queue.
  pub async fn pending_queue(&self, hub_id: Uuid) -> Result<Vec<Booking>> {
    self.get_json(&format!("/bookings?hub_id={hub_id}")).await
  }

  /// `POST /api/bookings/:id/decision`
  pub async fn decide_booking(
    &self,
    booking_id: Uuid,
    accept: bool,
    drop_start: Option<DateTime<Utc>>,
    drop_end: Option<DateTime<Utc>>,
  ) -> Result<Booking> {
    self
      .post_json(&format!("/bookings/{booking_id}/decision"), &json!({
        "accept":     accept,
        "drop_start": drop_start,
        "drop_end":   drop_end,
      }))
      .await
  }

  // ── Tenders ───────────────────────────────────────────────────────────────

  /// `GET /api/tenders[?hub_id=]`
  pub async fn tenders(&self, hub_id: Option<Uuid>) -> Result<Vec<Tender>> {
    match hub_id {
      Some(id) => self.get_json(&format!("/tenders?hub_id={id}")).await,
      None => self.get_json("/tenders").await,
    }
  }

  /// `POST /api/tenders`
  pub async fn publish_tender(
    &self,
    hub_id: Uuid,
    crop: Crop,
    price_per_kg: f64,
    qty_needed: u32,
    valid_until: DateTime<Utc>,
  ) -> Result<Tender> {
    self
      .post_json("/tenders", &json!({
        "hub_id":       hub_id,
        "crop":         crop,
        "price_per_kg": price_per_kg,
        "qty_needed":   qty_needed,
        "valid_until":  valid_until,
      }))
      .await
  }

  // ── Orders ────────────────────────────────────────────────────────────────

  /// `POST /api/orders`
  pub async fn place_order(
    &self,
    buyer_id: Uuid,
    hub_id: Uuid,
    items: Vec<(Crop, u32, f64)>,
  ) -> Result<Order> {
    let items: Vec<Value> = items
      .into_iter()
      .map(|(crop, qty_kg, price_per_kg)| {
        json!({ "crop": crop, "qty_kg": qty_kg, "price_per_kg": price_per_kg })
      })
      .collect();
    self
      .post_json("/orders", &json!({
        "buyer_id": buyer_id,
        "hub_id":   hub_id,
        "items":    items,
      }))
      .await
  }

  /// `GET /api/orders?buyer_id=`
  pub async fn orders_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>> {
    self.get_json(&format!("/orders?buyer_id={buyer_id}")).await
  }
}
