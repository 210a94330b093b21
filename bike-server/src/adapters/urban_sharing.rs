//! Upstreams that already publish GBFS (Urban Sharing).
//!
//! The payload shape is kept as-is. Station ids are remapped into the
//! operator namespace and the envelope is restamped with our own
//! `last_updated` and `ttl`.

use serde::Deserialize;

use crate::gbfs::{
    FeedResponse, Stamp, StationInformation, StationStatus, StationStatuses, StationsInformation,
    SystemInformation, flag,
};
use crate::operators::Operator;

/// A GBFS envelope as published upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub last_updated: i64,
    pub ttl: u64,
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NativeStations {
    pub stations: Vec<NativeStation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NativeStation {
    #[serde(deserialize_with = "super::native_id::deserialize")]
    pub station_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub capacity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NativeStatuses {
    pub stations: Vec<NativeStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NativeStatus {
    #[serde(deserialize_with = "super::native_id::deserialize")]
    pub station_id: String,
    #[serde(deserialize_with = "flag::deserialize")]
    pub is_installed: bool,
    #[serde(deserialize_with = "flag::deserialize")]
    pub is_renting: bool,
    #[serde(deserialize_with = "flag::deserialize")]
    pub is_returning: bool,
    pub last_reported: i64,
    pub num_bikes_available: u32,
    pub num_docks_available: u32,
}

pub fn to_system_information(
    native: Envelope<SystemInformation>,
    stamp: Stamp,
) -> FeedResponse<SystemInformation> {
    stamp.wrap(native.data)
}

pub fn to_station_information(
    operator: Operator,
    native: Envelope<NativeStations>,
    stamp: Stamp,
) -> FeedResponse<StationsInformation> {
    let stations = native
        .data
        .stations
        .into_iter()
        .map(|s| StationInformation {
            station_id: operator.station_id(&s.station_id),
            name: s.name,
            address: s.address,
            lat: s.lat,
            lon: s.lon,
            capacity: s.capacity,
        })
        .collect();
    stamp.wrap(StationsInformation { stations })
}

/// Upstream `last_reported` values are kept; only the envelope is restamped.
pub fn to_station_status(
    operator: Operator,
    native: Envelope<NativeStatuses>,
    stamp: Stamp,
) -> FeedResponse<StationStatuses> {
    let stations = native
        .data
        .stations
        .into_iter()
        .map(|s| StationStatus {
            station_id: operator.station_id(&s.station_id),
            is_installed: s.is_installed,
            is_renting: s.is_renting,
            is_returning: s.is_returning,
            last_reported: s.last_reported,
            num_bikes_available: s.num_bikes_available,
            num_docks_available: s.num_docks_available,
        })
        .collect();
    stamp.wrap(StationStatuses { stations })
}
