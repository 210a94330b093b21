//! JCDecaux v3 stations.

use serde::Deserialize;

use crate::gbfs::{
    FeedResponse, Stamp, StationInformation, StationStatus, StationStatuses, StationsInformation,
    SystemInformation,
};
use crate::operators::Operator;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub position: Position,
    pub status: StationState,
    pub connected: bool,
    pub total_stands: Stands,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StationState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stands {
    pub availabilities: Availabilities,
    pub capacity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Availabilities {
    pub bikes: u32,
    pub stands: u32,
}

pub fn system_information(stamp: Stamp) -> FeedResponse<SystemInformation> {
    stamp.wrap(SystemInformation {
        system_id: "lillestrom".to_string(),
        language: "nb".to_string(),
        name: "Lillestrøm bysykkel".to_string(),
        operator: None,
        timezone: "Europe/Oslo".to_string(),
        phone_number: None,
        email: None,
    })
}

pub fn to_station_information(
    operator: Operator,
    stations: &[Station],
    stamp: Stamp,
) -> FeedResponse<StationsInformation> {
    let stations = stations
        .iter()
        .map(|s| StationInformation {
            station_id: operator.station_id(&s.number.to_string()),
            name: s.name.clone(),
            address: s.address.clone(),
            lat: s.position.latitude,
            lon: s.position.longitude,
            capacity: s.total_stands.capacity,
        })
        .collect();
    stamp.wrap(StationsInformation { stations })
}

pub fn to_station_status(
    operator: Operator,
    stations: &[Station],
    stamp: Stamp,
) -> FeedResponse<StationStatuses> {
    let stations = stations
        .iter()
        .map(|s| {
            let open = s.status == StationState::Open;
            StationStatus {
                station_id: operator.station_id(&s.number.to_string()),
                is_installed: s.connected,
                is_renting: open,
                is_returning: open,
                last_reported: stamp.now,
                num_bikes_available: s.total_stands.availabilities.bikes,
                num_docks_available: s.total_stands.availabilities.stands,
            }
        })
        .collect();
    stamp.wrap(StationStatuses { stations })
}
