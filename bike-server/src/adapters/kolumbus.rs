//! Kolumbus city-bike parkings.
//!
//! One call returns every parking with both its location and its live
//! counts, so station information and station status come from the same
//! payload.

use serde::Deserialize;

use crate::gbfs::{
    FeedResponse, Stamp, StationInformation, StationStatus, StationStatuses, StationsInformation,
    SystemInformation,
};
use crate::operators::Operator;

#[derive(Debug, Clone, Deserialize)]
pub struct Parking {
    #[serde(deserialize_with = "super::native_id::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "super::native_id::deserialize_opt")]
    pub external_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub capacity: u32,
    pub available_slots: u32,
    pub available_vehicles: u32,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl Parking {
    /// The public parking id; records without one fall back to the internal id.
    fn native_id(&self) -> &str {
        self.external_id.as_deref().unwrap_or(&self.id)
    }
}

pub fn system_information(stamp: Stamp) -> FeedResponse<SystemInformation> {
    stamp.wrap(SystemInformation {
        system_id: "kolumbusbysykkel".to_string(),
        language: "nb".to_string(),
        name: "Kolumbus bysykkel".to_string(),
        operator: None,
        timezone: "Europe/Oslo".to_string(),
        phone_number: None,
        email: None,
    })
}

pub fn to_station_information(parkings: &[Parking], stamp: Stamp) -> FeedResponse<StationsInformation> {
    let stations = parkings
        .iter()
        .map(|p| StationInformation {
            station_id: Operator::Kolumbus.station_id(p.native_id()),
            name: p.name.clone(),
            address: None,
            lat: p.latitude,
            lon: p.longitude,
            capacity: p.capacity,
        })
        .collect();
    stamp.wrap(StationsInformation { stations })
}

/// Parkings carry no open/closed state, so every flag is set.
pub fn to_station_status(parkings: &[Parking], stamp: Stamp) -> FeedResponse<StationStatuses> {
    let stations = parkings
        .iter()
        .map(|p| StationStatus {
            station_id: Operator::Kolumbus.station_id(p.native_id()),
            is_installed: true,
            is_renting: true,
            is_returning: true,
            last_reported: stamp.now,
            num_bikes_available: p.available_vehicles,
            num_docks_available: p.available_slots,
        })
        .collect();
    stamp.wrap(StationStatuses { stations })
}
