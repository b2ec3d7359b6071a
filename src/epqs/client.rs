use crate::domain::{Coordinate, Elevation, Unit};
use crate::epqs::epqs_response::EpqsResponse;
use crate::epqs::query_url::query_url;
use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode, header};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub fn new_client() -> Result<Client, EpqsClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum EpqsClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("invalid coordinate ({longitude}, {latitude}), longitude and latitude must be finite")]
    InvalidCoordinate { longitude: f64, latitude: f64 },
    #[error("invalid elevation service url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("elevation service responded with status {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct EpqsClient {
    client: Client,
    url: String,
}

impl EpqsClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        EpqsClient { client, url: url.into() }
    }

    /// Queries the elevation at `coordinate`, failures are returned as typed errors.
    ///
    /// A `-1000` elevation is the service telling us it has no data there, it's returned as is.
    #[instrument(skip(self))]
    pub async fn query(&self, coordinate: Coordinate, unit: Unit) -> Result<Elevation, ElevationError> {
        if !coordinate.is_finite() {
            return Err(ElevationError::InvalidCoordinate {
                longitude: coordinate.longitude,
                latitude: coordinate.latitude,
            });
        }

        let url = query_url(&self.url, coordinate, unit)?;
        debug!(%url, "⛰️ Querying elevation...");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ElevationError::Status(status));
        }

        let body = response.text().await?;
        let epqs_response = serde_json::from_str::<EpqsResponse>(&body)?;
        let query = epqs_response.service.elevation_query;
        debug!(units = ?query.units, data_source = ?query.data_source, "⛰️ Querying elevation... OK");

        let elevation = Elevation::new(query.elevation, unit);
        if elevation.is_not_found() {
            info!("⛰️ No elevation data available at ({}, {})", coordinate.longitude, coordinate.latitude);
        }

        Ok(elevation)
    }

    /// Queries the elevation and collapses every failure into `None`.
    pub async fn query_elevation(&self, longitude: f64, latitude: f64, unit: Unit) -> Option<f64> {
        match self.query(Coordinate::new(longitude, latitude), unit).await {
            Ok(elevation) => Some(elevation.value),
            Err(e) => {
                warn!("⚠️ Unable to query elevation: {}", e);
                None
            }
        }
    }
}
