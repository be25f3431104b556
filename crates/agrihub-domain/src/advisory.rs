//! Simulated cold-room sensors and the spoilage heuristic.
//!
//! Nothing here talks to real hardware. Readings come from a uniform random
//! generator behind the [`ReadingSource`] trait so tests (and any future
//! real integration) can swap the source; everything derived from a reading
//! is a pure function of it.
//!
//! The ETA formula is a hand-tuned linear adjustment of a per-crop base
//! shelf life against temperature, humidity, pH, moisture, and ambient
//! conditions — advisory output, not a forecast.

use chrono::{DateTime, Datelike as _, NaiveDate, Utc};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use serde::Serialize;

use agrihub_core::crop::Crop;

// ─── Readings ────────────────────────────────────────────────────────────────

/// One simulated sensor sample.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SensorReading {
  pub at:           DateTime<Utc>,
  pub temp_c:       f64,
  pub humidity_pct: f64,
  pub ph:           f64,
  pub moisture_pct: f64,
}

/// Source of sensor readings. Pull-based: one sample per call.
pub trait ReadingSource {
  fn next_reading(&mut self) -> SensorReading;
}

/// Random readings in the ranges a demo cold room would report.
pub struct SimulatedSensor {
  rng: StdRng,
}

impl SimulatedSensor {
  pub fn from_entropy() -> Self {
    Self { rng: StdRng::from_entropy() }
  }

  /// Fixed seed, for deterministic tests.
  pub fn with_seed(seed: u64) -> Self {
    Self { rng: StdRng::seed_from_u64(seed) }
  }
}

impl ReadingSource for SimulatedSensor {
  fn next_reading(&mut self) -> SensorReading {
    SensorReading {
      at:           Utc::now(),
      temp_c:       round1(self.rng.gen_range(6.0..12.0)),
      humidity_pct: self.rng.gen_range(60.0_f64..80.0).round(),
      ph:           round1(self.rng.gen_range(5.2..7.4)),
      moisture_pct: self.rng.gen_range(70.0_f64..100.0).round(),
    }
  }
}

/// Ambient (outside-the-cold-room) conditions.
#[derive(Debug, Clone, Copy)]
pub struct Ambient {
  pub temp_c:       f64,
  pub humidity_pct: f64,
}

impl Default for Ambient {
  fn default() -> Self {
    Self { temp_c: 30.0, humidity_pct: 70.0 }
  }
}

// ─── Spoilage estimate ───────────────────────────────────────────────────────

/// Base shelf life in hours at reference conditions.
fn base_shelf_hours(crop: Crop) -> f64 {
  match crop {
    Crop::Tomato => 60.0,
    Crop::Onion => 72.0,
    Crop::Okra => 48.0,
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advice {
  SellNow,
  BookSoon,
  SafeToHold,
}

impl Advice {
  pub fn message(&self) -> &'static str {
    match self {
      Self::SellNow => "Book or sell now.",
      Self::BookSoon => "Prefer booking within the next 12 hours.",
      Self::SafeToHold => "Safe to hold for 1 day.",
    }
  }
}

/// Derived spoilage/freshness figures for one reading.
#[derive(Debug, Clone, Serialize)]
pub struct SpoilageEstimate {
  pub eta_hours:      u32,
  pub eta_low_hours:  u32,
  pub eta_high_hours: u32,
  pub advice:         Advice,
  /// 0–100, higher is fresher.
  pub freshness:      u8,
}

/// Estimate hours-to-spoilage for `crop` under `reading` and `ambient`.
///
/// Pure function; the clamps guarantee `12 <= eta <= 84` and
/// `eta_low <= eta <= eta_high` within 12–96 h.
pub fn spoilage_estimate(
  crop: Crop,
  reading: &SensorReading,
  ambient: Ambient,
) -> SpoilageEstimate {
  let temp = reading.temp_c;
  let hum = reading.humidity_pct;
  let ph = reading.ph;
  let moisture = reading.moisture_pct;

  let mut hours = base_shelf_hours(crop) - (temp - 8.0) * 6.0;
  if temp < 8.0 {
    // Colder buys time.
    hours += (8.0 - temp) * 3.0;
  }
  if hum > 75.0 {
    hours -= (hum - 75.0) * 0.8;
  }
  if ambient.temp_c > 28.0 {
    hours -= (ambient.temp_c - 28.0) * 0.7;
  }

  // pH effect; optimal band is roughly 5.5–7.0.
  let ph_penalty = if ph < 5.5 {
    (5.5 - ph) * 4.0
  } else if ph > 7.0 {
    (ph - 7.0) * 3.0
  } else {
    0.0
  };
  hours -= ph_penalty;

  // Moisture content effect; optimal band is roughly 72–90 %.
  let moist_penalty = if moisture > 90.0 {
    (moisture - 90.0) * 0.8
  } else if moisture < 72.0 {
    (72.0 - moisture) * 0.3
  } else {
    0.0
  };
  hours -= moist_penalty;

  hours = hours.clamp(12.0, 84.0);

  let low = (hours * 0.8).round().max(12.0);
  let high = (hours * 1.2).round().min(96.0);

  let advice = if hours <= 24.0 {
    Advice::SellNow
  } else if hours <= 36.0 {
    Advice::BookSoon
  } else {
    Advice::SafeToHold
  };

  SpoilageEstimate {
    eta_hours:      hours.round() as u32,
    eta_low_hours:  low as u32,
    eta_high_hours: high as u32,
    advice,
    freshness:      freshness_score(reading),
  }
}

/// Freshness score 0–100, higher is better.
pub fn freshness_score(reading: &SensorReading) -> u8 {
  let temp = reading.temp_c;
  let mut score = 100.0;
  score -= ((temp - 8.0) * 8.0).max(0.0);
  if temp < 8.0 {
    score -= ((8.0 - temp) * 2.0).max(0.0);
  }
  score -= (reading.humidity_pct - 75.0).max(0.0) * 0.7;
  score -= (6.3 - reading.ph).abs() * 6.0;
  score -= (reading.moisture_pct - 88.0).max(0.0) * 0.9;
  score.clamp(0.0, 100.0).round() as u8
}

// ─── Price trend ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceTrend {
  Rising,
  Softening,
}

impl PriceTrend {
  pub fn message(&self) -> &'static str {
    match self {
      Self::Rising => "Prices rising in 24h",
      Self::Softening => "Prices softening in 24-48h",
    }
  }
}

/// Day-parity pseudo-trend: no market data feeds this, it only varies the
/// notice board between days and crops.
pub fn price_trend(crop: Crop, date: NaiveDate) -> PriceTrend {
  let seed = date.day() as usize + crop.to_string().len();
  if seed % 2 == 0 { PriceTrend::Rising } else { PriceTrend::Softening }
}

// ─── Storage status ──────────────────────────────────────────────────────────

/// Temperature excursions above this threshold degrade the tile status.
const TEMP_LIMIT_C: f64 = 8.0;

/// A sustained excursion: more samples over the limit than this means the
/// cold room has been warm for roughly ten minutes at a 5 s cadence.
const SUSTAINED_EXCURSION_SAMPLES: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageStatus {
  Ok,
  Warn,
  Alert,
}

/// Tile status over a window of readings.
pub fn storage_status(readings: &[SensorReading]) -> StorageStatus {
  let over = readings.iter().filter(|r| r.temp_c > TEMP_LIMIT_C).count();
  if over > SUSTAINED_EXCURSION_SAMPLES {
    return StorageStatus::Alert;
  }
  match readings.last() {
    Some(last) if last.temp_c > TEMP_LIMIT_C => StorageStatus::Warn,
    _ => StorageStatus::Ok,
  }
}

fn round1(x: f64) -> f64 {
  (x * 10.0).round() / 10.0
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn reading(temp_c: f64, humidity_pct: f64, ph: f64, moisture_pct: f64) -> SensorReading {
    SensorReading { at: Utc::now(), temp_c, humidity_pct, ph, moisture_pct }
  }

  #[test]
  fn ideal_conditions_hold_near_base_shelf_life() {
    let est =
      spoilage_estimate(Crop::Onion, &reading(8.0, 70.0, 6.3, 80.0), Ambient {
        temp_c:       25.0,
        humidity_pct: 60.0,
      });
    assert_eq!(est.eta_hours, 72);
    assert_eq!(est.advice, Advice::SafeToHold);
  }

  #[test]
  fn eta_is_clamped_to_floor_under_hostile_conditions() {
    let est = spoilage_estimate(
      Crop::Okra,
      &reading(14.0, 95.0, 4.5, 99.0),
      Ambient { temp_c: 40.0, humidity_pct: 90.0 },
    );
    assert_eq!(est.eta_hours, 12);
    assert_eq!(est.eta_low_hours, 12);
    assert_eq!(est.advice, Advice::SellNow);
  }

  #[test]
  fn eta_is_clamped_to_ceiling_when_very_cold() {
    let est =
      spoilage_estimate(Crop::Onion, &reading(2.0, 65.0, 6.3, 80.0), Ambient {
        temp_c:       20.0,
        humidity_pct: 60.0,
      });
    assert_eq!(est.eta_hours, 84);
    assert!(est.eta_high_hours <= 96);
  }

  #[test]
  fn warmer_readings_never_extend_the_eta() {
    let ambient = Ambient::default();
    let cool = spoilage_estimate(Crop::Tomato, &reading(7.0, 70.0, 6.3, 80.0), ambient);
    let warm = spoilage_estimate(Crop::Tomato, &reading(11.0, 70.0, 6.3, 80.0), ambient);
    assert!(warm.eta_hours <= cool.eta_hours);
  }

  #[test]
  fn advice_tiers_follow_eta() {
    let ambient = Ambient { temp_c: 25.0, humidity_pct: 60.0 };
    // Tomato at 12 C: 60 - 4*6 = 36 h => book soon.
    let mid = spoilage_estimate(Crop::Tomato, &reading(12.0, 70.0, 6.3, 80.0), ambient);
    assert_eq!(mid.advice, Advice::BookSoon);
    // Okra at 12 C: 48 - 24 = 24 h => sell now.
    let urgent = spoilage_estimate(Crop::Okra, &reading(12.0, 70.0, 6.3, 80.0), ambient);
    assert_eq!(urgent.advice, Advice::SellNow);
  }

  #[test]
  fn freshness_score_stays_in_bounds() {
    assert_eq!(freshness_score(&reading(8.0, 70.0, 6.3, 80.0)), 100);
    assert_eq!(freshness_score(&reading(25.0, 99.0, 3.0, 100.0)), 0);
  }

  #[test]
  fn simulated_readings_stay_in_range() {
    let mut sensor = SimulatedSensor::with_seed(7);
    for _ in 0..100 {
      let r = sensor.next_reading();
      assert!((6.0..=12.0).contains(&r.temp_c));
      assert!((60.0..=80.0).contains(&r.humidity_pct));
      assert!((5.2..=7.4).contains(&r.ph));
      assert!((70.0..=100.0).contains(&r.moisture_pct));
    }
  }

  #[test]
  fn seeded_sensor_is_deterministic() {
    let mut a = SimulatedSensor::with_seed(42);
    let mut b = SimulatedSensor::with_seed(42);
    let ra = a.next_reading();
    let rb = b.next_reading();
    assert_eq!(ra.temp_c, rb.temp_c);
    assert_eq!(ra.ph, rb.ph);
  }

  #[test]
  fn storage_status_tiers() {
    let cold: Vec<_> = (0..10).map(|_| reading(6.5, 70.0, 6.3, 80.0)).collect();
    assert_eq!(storage_status(&cold), StorageStatus::Ok);

    let mut warm_tail = cold.clone();
    warm_tail.push(reading(9.0, 70.0, 6.3, 80.0));
    assert_eq!(storage_status(&warm_tail), StorageStatus::Warn);

    let sustained: Vec<_> =
      (0..121).map(|_| reading(9.0, 70.0, 6.3, 80.0)).collect();
    assert_eq!(storage_status(&sustained), StorageStatus::Alert);

    assert_eq!(storage_status(&[]), StorageStatus::Ok);
  }
}
