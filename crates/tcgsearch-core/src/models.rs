//! Upstream wire types
//!
//! All entities are read-only snapshots fetched per request.

use crate::serde_util;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response wrapper used by every upstream list endpoint: `{ "data": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "serde_util::list::deserialize")]
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// A game the upstream tracks prices for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub name: String,
    /// Filter key passed back as the `game` query parameter
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub slug: String,
}

/// A card and all of its priced variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub game: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub set: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub number: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub rarity: String,
    /// TCGplayer product id
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub tcgplayer_id: String,
    #[serde(default, deserialize_with = "serde_util::list::deserialize")]
    pub variants: Vec<Variant>,
}

/// One printing/condition/language of a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub condition: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub printing: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub language: String,
    #[serde(default, deserialize_with = "serde_util::number::deserialize")]
    pub price: Option<f64>,
    /// Unix timestamp of the last price update
    #[serde(default, deserialize_with = "serde_util::timestamp::deserialize")]
    pub last_updated: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::number::deserialize")]
    pub price_change_24hr: Option<f64>,
    #[serde(default, deserialize_with = "serde_util::number::deserialize")]
    pub price_change_7d: Option<f64>,
    #[serde(default, deserialize_with = "serde_util::number::deserialize")]
    pub price_change_30d: Option<f64>,
    #[serde(default, deserialize_with = "serde_util::list::deserialize")]
    pub price_history: Vec<PriceHistoryPoint>,
}

impl Variant {
    /// Last update time, if the timestamp is present and in range.
    ///
    /// Millisecond timestamps are recognised by magnitude.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        let ts = self.last_updated?;
        if ts.unsigned_abs() >= 100_000_000_000 {
            DateTime::from_timestamp_millis(ts)
        } else {
            DateTime::from_timestamp(ts, 0)
        }
    }
}

/// A single `(price, timestamp)` sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    #[serde(rename = "p", default, deserialize_with = "serde_util::number::deserialize")]
    pub price: Option<f64>,
    #[serde(rename = "t", default, deserialize_with = "serde_util::timestamp::deserialize")]
    pub timestamp: Option<i64>,
}

impl PriceHistoryPoint {
    pub fn new(price: f64, timestamp: i64) -> Self {
        Self {
            price: Some(price),
            timestamp: Some(timestamp),
        }
    }
}
