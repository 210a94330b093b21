//! Upstream endpoint table.

use crate::gbfs::FeedKind;

use super::operator::{AdapterKind, Operator};

const URBAN_SHARING_BASE: &str = "https://gbfs.urbansharing.com";
const KOLUMBUS_URL: &str = "https://sanntidapi-web-prod.azurewebsites.net/api/parkings?type=CityBike";
const JCDECAUX_BASE: &str = "https://api.jcdecaux.com/vls/v3";
const JCDECAUX_CONTRACT: &str = "lillestrom";
const SMARTBIKE_BASE: &str = "https://drammen.pub.api.smartbike.com";

/// Secrets for the upstreams that need them.
///
/// Any field may be missing; the affected operator then fails its refreshes
/// while the others keep working.
#[derive(Clone, Default)]
pub struct Credentials {
    pub lillestrom_api_key: Option<String>,
    pub drammen_public_id: Option<String>,
    pub drammen_secret: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("lillestrom_api_key", &mask(&self.lillestrom_api_key))
            .field("drammen_public_id", &mask(&self.drammen_public_id))
            .field("drammen_secret", &mask(&self.drammen_secret))
            .finish()
    }
}

/// Maps `(operator, feed)` to the upstream URL that serves it.
#[derive(Debug, Clone)]
pub struct Registry {
    credentials: Credentials,
    urban_sharing_base: String,
    kolumbus_url: String,
    jcdecaux_base: String,
    smartbike_base: String,
}

impl Registry {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            urban_sharing_base: URBAN_SHARING_BASE.to_string(),
            kolumbus_url: KOLUMBUS_URL.to_string(),
            jcdecaux_base: JCDECAUX_BASE.to_string(),
            smartbike_base: SMARTBIKE_BASE.to_string(),
        }
    }

    /// Point every upstream at `base` (for testing against a local server).
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.urban_sharing_base = base.clone();
        self.kolumbus_url = format!("{base}/api/parkings?type=CityBike");
        self.jcdecaux_base = base.clone();
        self.smartbike_base = base;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Upstream URL for a feed.
    ///
    /// Returns `None` when the operator has no upstream for `kind` (static
    /// feeds, discovery, free bikes) or when a required credential is
    /// missing. `token` is only consulted for token-gated operators.
    pub fn url_for(&self, operator: Operator, kind: FeedKind, token: Option<&str>) -> Option<String> {
        match operator.adapter_kind() {
            AdapterKind::UrbanSharing => match kind {
                FeedKind::SystemInformation
                | FeedKind::StationInformation
                | FeedKind::StationStatus => Some(format!(
                    "{}/{}/{}.json",
                    self.urban_sharing_base,
                    urban_sharing_system(operator)?,
                    kind
                )),
                _ => None,
            },
            AdapterKind::Kolumbus => match kind {
                FeedKind::StationInformation | FeedKind::StationStatus => {
                    Some(self.kolumbus_url.clone())
                }
                _ => None,
            },
            AdapterKind::JcDecaux => match kind {
                FeedKind::StationInformation | FeedKind::StationStatus => {
                    let key = self.credentials.lillestrom_api_key.as_deref()?;
                    Some(format!(
                        "{}/stations?contract={JCDECAUX_CONTRACT}&apiKey={key}",
                        self.jcdecaux_base
                    ))
                }
                _ => None,
            },
            AdapterKind::SmartBike => {
                let token = token?;
                match kind {
                    FeedKind::StationInformation => Some(format!(
                        "{}/api/en/v3/stations.json?access_token={token}",
                        self.smartbike_base
                    )),
                    FeedKind::StationStatus => Some(format!(
                        "{}/api/en/v3/stations/status.json?access_token={token}",
                        self.smartbike_base
                    )),
                    _ => None,
                }
            }
        }
    }

    /// OAuth token endpoint for a token-gated operator.
    pub fn token_url(&self, operator: Operator) -> Option<String> {
        if !operator.adapter_kind().is_token_gated() {
            return None;
        }
        let id = self.credentials.drammen_public_id.as_deref()?;
        let secret = self.credentials.drammen_secret.as_deref()?;
        Some(format!(
            "{}/oauth/v2/token?client_id={id}&client_secret={secret}&grant_type=client_credentials",
            self.smartbike_base
        ))
    }
}

fn urban_sharing_system(operator: Operator) -> Option<&'static str> {
    match operator {
        Operator::Oslo => Some("oslobysykkel.no"),
        Operator::Bergen => Some("bergenbysykkel.no"),
        Operator::Trondheim => Some("trondheimbysykkel.no"),
        _ => None,
    }
}
