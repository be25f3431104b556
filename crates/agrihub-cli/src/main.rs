//! `agrihub` — command-line client for the AgriHub server.
//!
//! Covers the three role flows end to end: a farmer books a drop-off, the
//! hub works its queue and publishes tenders, a buyer browses and orders.

mod client;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use agrihub_core::crop::Crop;
use client::ApiClient;

#[derive(Parser)]
#[command(author, version, about = "AgriHub marketplace client")]
struct Cli {
  /// Base URL of the AgriHub server.
  #[arg(long, default_value = "http://127.0.0.1:8080")]
  url: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Verify the demo OTP for a phone number and print the user.
  Login {
    #[arg(long)]
    phone: String,
    #[arg(long, default_value = "123456")]
    otp:   String,
  },
  /// List all hubs.
  Hubs,
  /// Create a drop-off booking (farmer).
  Book {
    #[arg(long)]
    farmer_id: Uuid,
    #[arg(long)]
    hub_id:    Uuid,
    #[arg(long)]
    crop:      Crop,
    #[arg(long)]
    qty_kg:    u32,
  },
  /// List a farmer's bookings, newest first.
  Bookings {
    #[arg(long)]
    farmer_id: Uuid,
  },
  /// Show a hub's pending booking queue.
  Queue {
    #[arg(long)]
    hub_id: Uuid,
  },
  /// Accept or reject a pending booking (hub).
  Decide {
    booking_id: Uuid,
    #[arg(long, conflicts_with = "reject")]
    accept:     bool,
    #[arg(long)]
    reject:     bool,
    /// Drop-off window start (RFC 3339); only meaningful with --accept.
    #[arg(long)]
    drop_start: Option<DateTime<Utc>>,
    #[arg(long)]
    drop_end:   Option<DateTime<Utc>>,
  },
  /// List a hub's inventory lots.
  Inventory {
    #[arg(long)]
    hub_id:  Uuid,
    /// Print the per-crop summary instead of the lot list.
    #[arg(long)]
    summary: bool,
  },
  /// List tenders, optionally for one hub.
  Tenders {
    #[arg(long)]
    hub_id: Option<Uuid>,
  },
  /// Publish a tender backed by reserved inventory (hub).
  Publish {
    #[arg(long)]
    hub_id:       Uuid,
    #[arg(long)]
    crop:         Crop,
    #[arg(long)]
    price_per_kg: f64,
    #[arg(long)]
    qty_needed:   u32,
    /// Validity in hours from now.
    #[arg(long, default_value_t = 24)]
    valid_hours:  i64,
  },
  /// Place an order (buyer). Items as CROP:QTY_KG:PRICE_PER_KG.
  Order {
    #[arg(long)]
    buyer_id: Uuid,
    #[arg(long)]
    hub_id:   Uuid,
    #[arg(long = "item", required = true)]
    items:    Vec<String>,
  },
  /// List a buyer's orders.
  Orders {
    #[arg(long)]
    buyer_id: Uuid,
  },
  /// Show the spoilage advisory for a crop at a hub.
  Advisory {
    #[arg(long)]
    hub_id: Uuid,
    #[arg(long)]
    crop:   Crop,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let api = ApiClient::new(cli.url)?;

  match cli.command {
    Command::Login { phone, otp } => {
      print_json(&api.login(&phone, &otp).await?)?;
    }
    Command::Hubs => print_json(&api.hubs().await?)?,
    Command::Book { farmer_id, hub_id, crop, qty_kg } => {
      print_json(&api.create_booking(farmer_id, hub_id, crop, qty_kg).await?)?;
    }
    Command::Bookings { farmer_id } => {
      print_json(&api.bookings_by_farmer(farmer_id).await?)?;
    }
    Command::Queue { hub_id } => print_json(&api.pending_queue(hub_id).await?)?,
    Command::Decide { booking_id, accept, reject, drop_start, drop_end } => {
      if accept == reject {
        anyhow::bail!("pass exactly one of --accept or --reject");
      }
      print_json(
        &api
          .decide_booking(booking_id, accept, drop_start, drop_end)
          .await?,
      )?;
    }
    Command::Inventory { hub_id, summary } => {
      if summary {
        print_json(&api.inventory_summary(hub_id).await?)?;
      } else {
        print_json(&api.inventory(hub_id).await?)?;
      }
    }
    Command::Tenders { hub_id } => print_json(&api.tenders(hub_id).await?)?,
    Command::Publish { hub_id, crop, price_per_kg, qty_needed, valid_hours } => {
      let valid_until = Utc::now() + Duration::hours(valid_hours);
      print_json(
        &api
          .publish_tender(hub_id, crop, price_per_kg, qty_needed, valid_until)
          .await?,
      )?;
    }
    Command::Order { buyer_id, hub_id, items } => {
      let items = items
        .iter()
        .map(|raw| parse_item(raw))
        .collect::<Result<Vec<_>>>()?;
      print_json(&api.place_order(buyer_id, hub_id, items).await?)?;
    }
    Command::Orders { buyer_id } => {
      print_json(&api.orders_by_buyer(buyer_id).await?)?;
    }
    Command::Advisory { hub_id, crop } => {
      print_json(&api.advisory(hub_id, crop).await?)?;
    }
  }

  Ok(())
}

/// Parse an order line of the form `TOMATO:50:58`.
fn parse_item(raw: &str) -> Result<(Crop, u32, f64)> {
  let parts: Vec<&str> = raw.split(':').collect();
  let [crop, qty, price] = parts.as_slice() else {
    anyhow::bail!("expected CROP:QTY_KG:PRICE_PER_KG, got {raw:?}");
  };
  Ok((crop.parse()?, qty.parse()?, price.parse()?))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
