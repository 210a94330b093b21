//! Normalized GBFS feed model.
//!
//! Every operator is served in these shapes regardless of its upstream
//! format. The JSON field names are the wire format and follow the GBFS
//! standard (`last_updated`, `station_id`, `num_bikes_available`, ...).
//!
//! Station identifiers are always namespaced ([`StationId`]); the raw
//! upstream id never reaches a normalized record.

mod feed;
mod station_id;
mod types;

pub use feed::{Feed, FeedKind, InvalidFeedKind};
pub use station_id::StationId;
pub use types::{
    Discovery, DiscoveryFeed, DiscoveryLanguage, FeedResponse, PricePlan, Stamp,
    StationInformation, StationStatus, StationStatuses, StationsInformation, SystemInformation,
    SystemPricingPlans,
};

pub(crate) use types::flag;
