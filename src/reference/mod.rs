//! Country and language checks against reference data.
//!
//! The data comes from a [`ReferenceDataProvider`], so callers can plug in the
//! live REST endpoint, a cached wrapper around it, or a fixed in-memory set.

use crate::config::ReferenceConfig;
use crate::error::CheckResult;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

pub mod cache;
pub mod rest_countries;

pub use cache::CachedProvider;
pub use rest_countries::RestCountriesProvider;

/// One country with the names of its languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: String,
    pub languages: Vec<String>,
}

impl CountryRecord {
    pub fn new<S: Into<String>>(name: S, languages: &[&str]) -> Self {
        Self {
            name: name.into(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Source of country reference data
#[async_trait]
pub trait ReferenceDataProvider: Send + Sync {
    /// Fetch the complete current dataset
    async fn fetch(&self) -> CheckResult<Arc<[CountryRecord]>>;
}

#[async_trait]
impl<P> ReferenceDataProvider for Arc<P>
where
    P: ReferenceDataProvider + ?Sized,
{
    async fn fetch(&self) -> CheckResult<Arc<[CountryRecord]>> {
        (**self).fetch().await
    }
}

/// Fixed in-memory dataset, for offline use and tests
#[derive(Debug, Clone)]
pub struct StaticProvider {
    records: Arc<[CountryRecord]>,
}

impl StaticProvider {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

#[async_trait]
impl ReferenceDataProvider for StaticProvider {
    async fn fetch(&self) -> CheckResult<Arc<[CountryRecord]>> {
        Ok(self.records.clone())
    }
}

/// Build the live provider described by `config`, cached when a TTL is set
pub fn provider_from_config(config: &ReferenceConfig) -> CheckResult<Arc<dyn ReferenceDataProvider>> {
    let live = RestCountriesProvider::new(&config.endpoint, config.timeout())?;

    match config.cache_ttl() {
        Some(ttl) => Ok(Arc::new(CachedProvider::new(live, ttl))),
        None => Ok(Arc::new(live)),
    }
}

/// Country and language membership checks
///
/// The plain checks fail closed: when the provider errors they return `false`
/// and log the cause at warn level. The `try_` variants return the error.
#[derive(Debug, Clone)]
pub struct ReferenceChecker<P> {
    provider: P,
}

impl<P: ReferenceDataProvider> ReferenceChecker<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Exact, case-sensitive match against a country's common name
    pub async fn try_is_valid_country(&self, country: &str) -> CheckResult<bool> {
        let records = self.provider.fetch().await?;
        Ok(records.iter().any(|record| record.name == country))
    }

    /// Membership in the union of every country's language names
    pub async fn try_is_valid_language(&self, language: &str) -> CheckResult<bool> {
        let records = self.provider.fetch().await?;
        let languages: HashSet<&str> = records
            .iter()
            .flat_map(|record| record.languages.iter().map(String::as_str))
            .collect();
        Ok(languages.contains(language))
    }

    pub async fn is_valid_country(&self, country: &str) -> bool {
        match self.try_is_valid_country(country).await {
            Ok(valid) => valid,
            Err(e) => {
                warn!(country, error = %e, "Country lookup failed, treating as invalid");
                false
            }
        }
    }

    pub async fn is_valid_language(&self, language: &str) -> bool {
        match self.try_is_valid_language(language).await {
            Ok(valid) => valid,
            Err(e) => {
                warn!(language, error = %e, "Language lookup failed, treating as invalid");
                false
            }
        }
    }
}
