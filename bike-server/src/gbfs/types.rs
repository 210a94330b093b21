//! GBFS document types.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::station_id::StationId;

/// Response envelope shared by every feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedResponse<T> {
    /// Epoch seconds at which the data was produced.
    pub last_updated: i64,
    /// Seconds the data may be considered fresh.
    pub ttl: u64,
    pub data: T,
}

/// Timestamp and TTL applied to freshly produced feeds.
///
/// Adapters take a `Stamp` instead of reading the clock so their output is
/// fully determined by their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    /// Epoch seconds used for `last_updated` and `last_reported`.
    pub now: i64,
    /// Envelope TTL in seconds.
    pub ttl: u64,
}

impl Stamp {
    /// Stamp with the current wall-clock time.
    pub fn now(ttl: Duration) -> Self {
        Self {
            now: Utc::now().timestamp(),
            ttl: ttl.as_secs(),
        }
    }

    /// Stamp with a fixed time (for tests and static catalogs).
    pub fn at(now: i64, ttl: u64) -> Self {
        Self { now, ttl }
    }

    /// Wrap `data` in an envelope carrying this stamp.
    pub fn wrap<T>(&self, data: T) -> FeedResponse<T> {
        FeedResponse {
            last_updated: self.now,
            ttl: self.ttl,
            data,
        }
    }
}

/// `system_information` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInformation {
    pub system_id: String,
    pub language: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `station_information` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationsInformation {
    pub stations: Vec<StationInformation>,
}

/// Static description of one docking station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationInformation {
    pub station_id: StationId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub capacity: u32,
}

/// `station_status` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStatuses {
    pub stations: Vec<StationStatus>,
}

/// Live availability at one docking station.
///
/// The three flags serialize as `0`/`1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStatus {
    pub station_id: StationId,
    #[serde(serialize_with = "flag::serialize")]
    pub is_installed: bool,
    #[serde(serialize_with = "flag::serialize")]
    pub is_renting: bool,
    #[serde(serialize_with = "flag::serialize")]
    pub is_returning: bool,
    pub last_reported: i64,
    pub num_bikes_available: u32,
    pub num_docks_available: u32,
}

impl StationStatus {
    /// Total docking points reported by this status record.
    pub fn capacity(&self) -> u32 {
        self.num_bikes_available + self.num_docks_available
    }
}

/// `system_pricing_plans` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemPricingPlans {
    pub plans: Vec<PricePlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePlan {
    pub plan_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub name: String,
    pub currency: String,
    pub price: f64,
    #[serde(serialize_with = "flag::serialize")]
    pub is_taxable: bool,
    pub description: String,
}

/// `gbfs.json` discovery payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discovery {
    pub nb: DiscoveryLanguage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryLanguage {
    pub feeds: Vec<DiscoveryFeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryFeed {
    pub name: String,
    pub url: String,
}

/// Serde helpers for GBFS integer flags.
///
/// Upstreams disagree on whether flags are `true`/`false` or `1`/`0`; both
/// are accepted on input and `0`/`1` is always written.
pub(crate) mod flag {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(b),
            Raw::Int(0) => Ok(false),
            Raw::Int(1) => Ok(true),
            Raw::Int(n) => Err(de::Error::custom(format!("expected 0 or 1, got {n}"))),
        }
    }
}
