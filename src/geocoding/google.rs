use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::app::{Result, ShopError};
use crate::config::GeocodingConfig;
use crate::domain::{GeocodingResult, LocationCoordinate};
use crate::geocoding::AddressResolver;

/// Response envelope of the geocode JSON API.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    pub fn into_results(self) -> Result<Vec<GeocodingResult>> {
        match self.status.as_str() {
            "OK" => Ok(self.results),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(ShopError::Geocoding {
                message: self
                    .error_message
                    .unwrap_or_else(|| "no error message".to_string()),
                status: self.status,
            }),
        }
    }
}

pub struct GoogleGeocoder {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ShopError::Config(
                "geocoding.api_key is not set".to_string(),
            ));
        }

        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("shoplist/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: Url::parse(&config.endpoint)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn request_url(&self, coordinate: LocationCoordinate) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latlng", &coordinate.to_latlng())
            .append_pair("key", &self.api_key);
        url
    }
}

#[async_trait]
impl AddressResolver for GoogleGeocoder {
    async fn resolve_address(
        &self,
        coordinate: LocationCoordinate,
    ) -> Result<Vec<GeocodingResult>> {
        tracing::debug!("Reverse geocoding {}", coordinate.to_latlng());

        let response = self
            .client
            .get(self.request_url(coordinate))
            .send()
            .await?
            .error_for_status()?;

        let body: GeocodeResponse = response.json().await?;
        let results = body.into_results()?;
        tracing::info!(
            "Resolved {} address candidate(s) for {}",
            results.len(),
            coordinate
        );
        Ok(results)
    }
}
