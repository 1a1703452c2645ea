//! Air quality API client for Open-Meteo
//!
//! This module provides the HTTP client that retrieves the hourly pollen
//! series. Open-Meteo is API-key-free, so the request carries no
//! authentication.

use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::PollentalError;
use crate::models::{Location, PollenResponse, PollenType};

/// Production endpoint of the Open-Meteo air quality API
pub const DEFAULT_BASE_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

/// Data model/region selector for the hourly series
const DOMAINS: &str = "cams_europe";

/// HTTP client for the air quality API
#[derive(Debug)]
pub struct PollenApiClient {
    client: Client,
    base_url: String,
}

impl PollenApiClient {
    /// Create a client against the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn request_url(&self, location: &Location) -> String {
        let hourly = PollenType::ALL
            .iter()
            .map(|pollen| pollen.api_name())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}?latitude={}&longitude={}&hourly={}&domains={}",
            self.base_url, location.latitude, location.longitude, hourly, DOMAINS
        )
    }

    /// Fetch the hourly pollen series for a location.
    ///
    /// Issues exactly one request, no retry. Transport failures, non-success
    /// statuses and malformed bodies all surface as
    /// [`PollentalError::NetworkError`].
    #[instrument(skip(self))]
    pub async fn fetch_pollen_data(
        &self,
        location: &Location,
    ) -> Result<PollenResponse, PollentalError> {
        let url = self.request_url(location);
        debug!("Calling the air quality API");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(PollentalError::NetworkError(format!(
                "Could not fetch data from the Open-Meteo server (status {})",
                response.status()
            )));
        }

        let data: PollenResponse = response.json().await.map_err(|err| {
            PollentalError::NetworkError(format!("Failed to parse air quality response: {err}"))
        })?;

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url() {
        let client = PollenApiClient::new("https://example.invalid/v1/air-quality");
        let url = client.request_url(&Location::hvidovre());
        assert_eq!(
            url,
            "https://example.invalid/v1/air-quality?latitude=55.65&longitude=12.47\
             &hourly=alder_pollen,birch_pollen,grass_pollen,mugwort_pollen,ragweed_pollen\
             &domains=cams_europe"
        );
    }
}
