use super::{CountryRecord, ReferenceDataProvider};
use crate::config::DEFAULT_REFERENCE_ENDPOINT;
use crate::error::{CheckError, CheckResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RestCountry {
    name: RestCountryName,
    /// Language code to language name, absent for uninhabited territories
    #[serde(default)]
    languages: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RestCountryName {
    common: String,
}

impl From<RestCountry> for CountryRecord {
    fn from(country: RestCountry) -> Self {
        CountryRecord {
            name: country.name.common,
            languages: country.languages.into_values().collect(),
        }
    }
}

/// Live provider backed by a restcountries.com compatible endpoint
///
/// Every [`fetch`](ReferenceDataProvider::fetch) issues a fresh GET; wrap it in
/// [`CachedProvider`](super::CachedProvider) to avoid that.
#[derive(Debug, Clone)]
pub struct RestCountriesProvider {
    endpoint: String,
    http_client: Client,
}

impl RestCountriesProvider {
    pub fn new(endpoint: &str, timeout: Duration) -> CheckResult<Self> {
        url::Url::parse(endpoint).map_err(|e| {
            CheckError::Configuration(format!("Invalid reference endpoint {}: {}", endpoint, e))
        })?;

        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("registration-checker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            http_client,
        })
    }

    /// Public endpoint with a 10 second timeout
    pub fn with_defaults() -> CheckResult<Self> {
        Self::new(DEFAULT_REFERENCE_ENDPOINT, Duration::from_secs(10))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReferenceDataProvider for RestCountriesProvider {
    async fn fetch(&self) -> CheckResult<Arc<[CountryRecord]>> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(CheckError::Fetch(format!(
                "{} returned {}",
                self.endpoint, status
            )));
        }

        let countries: Vec<RestCountry> = response.json().await?;
        debug!(
            endpoint = %self.endpoint,
            count = countries.len(),
            "Fetched country reference data"
        );

        Ok(countries.into_iter().map(CountryRecord::from).collect())
    }
}
