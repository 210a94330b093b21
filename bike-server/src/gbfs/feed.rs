//! Feed kinds and the cached feed variant.

use std::fmt;

use serde::Serialize;

use super::types::{
    FeedResponse, StationStatuses, StationsInformation, SystemInformation, SystemPricingPlans,
};

/// Error returned when parsing an unknown feed name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feed: {0}")]
pub struct InvalidFeedKind(String);

/// A GBFS document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedKind {
    /// `gbfs.json` discovery. Built by the HTTP layer, never cached.
    Gbfs,
    SystemInformation,
    StationInformation,
    StationStatus,
    SystemPricingPlans,
    /// Known to GBFS but not produced for any operator.
    FreeBikeStatus,
}

impl FeedKind {
    pub const ALL: [FeedKind; 6] = [
        FeedKind::Gbfs,
        FeedKind::SystemInformation,
        FeedKind::StationInformation,
        FeedKind::StationStatus,
        FeedKind::SystemPricingPlans,
        FeedKind::FreeBikeStatus,
    ];

    /// Feeds produced for every operator and listed in discovery documents.
    pub const SERVED: [FeedKind; 4] = [
        FeedKind::SystemInformation,
        FeedKind::StationInformation,
        FeedKind::StationStatus,
        FeedKind::SystemPricingPlans,
    ];

    /// Parse a feed name as it appears in URLs (`station_status`).
    pub fn parse(s: &str) -> Result<Self, InvalidFeedKind> {
        FeedKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InvalidFeedKind(s.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Gbfs => "gbfs",
            FeedKind::SystemInformation => "system_information",
            FeedKind::StationInformation => "station_information",
            FeedKind::StationStatus => "station_status",
            FeedKind::SystemPricingPlans => "system_pricing_plans",
            FeedKind::FreeBikeStatus => "free_bike_status",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized feed of any kind, as stored in the cache.
///
/// Serializes as the bare envelope, with no variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Feed {
    SystemInformation(FeedResponse<SystemInformation>),
    StationInformation(FeedResponse<StationsInformation>),
    StationStatus(FeedResponse<StationStatuses>),
    SystemPricingPlans(FeedResponse<SystemPricingPlans>),
}

impl Feed {
    pub fn kind(&self) -> FeedKind {
        match self {
            Feed::SystemInformation(_) => FeedKind::SystemInformation,
            Feed::StationInformation(_) => FeedKind::StationInformation,
            Feed::StationStatus(_) => FeedKind::StationStatus,
            Feed::SystemPricingPlans(_) => FeedKind::SystemPricingPlans,
        }
    }

    pub fn last_updated(&self) -> i64 {
        match self {
            Feed::SystemInformation(r) => r.last_updated,
            Feed::StationInformation(r) => r.last_updated,
            Feed::StationStatus(r) => r.last_updated,
            Feed::SystemPricingPlans(r) => r.last_updated,
        }
    }

    pub fn as_system_information(&self) -> Option<&FeedResponse<SystemInformation>> {
        match self {
            Feed::SystemInformation(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_station_information(&self) -> Option<&FeedResponse<StationsInformation>> {
        match self {
            Feed::StationInformation(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_station_status(&self) -> Option<&FeedResponse<StationStatuses>> {
        match self {
            Feed::StationStatus(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_pricing_plans(&self) -> Option<&FeedResponse<SystemPricingPlans>> {
        match self {
            Feed::SystemPricingPlans(r) => Some(r),
            _ => None,
        }
    }
}

impl From<FeedResponse<SystemInformation>> for Feed {
    fn from(r: FeedResponse<SystemInformation>) -> Self {
        Feed::SystemInformation(r)
    }
}

impl From<FeedResponse<StationsInformation>> for Feed {
    fn from(r: FeedResponse<StationsInformation>) -> Self {
        Feed::StationInformation(r)
    }
}

impl From<FeedResponse<StationStatuses>> for Feed {
    fn from(r: FeedResponse<StationStatuses>) -> Self {
        Feed::StationStatus(r)
    }
}

impl From<FeedResponse<SystemPricingPlans>> for Feed {
    fn from(r: FeedResponse<SystemPricingPlans>) -> Self {
        Feed::SystemPricingPlans(r)
    }
}
