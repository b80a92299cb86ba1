use crate::config::CheckerConfig;
use crate::error::CheckResult;
use crate::files;
use crate::identity;
use crate::reference::{provider_from_config, ReferenceChecker, ReferenceDataProvider};
use chrono::{Local, NaiveDate};
use std::path::Path;
use std::sync::Arc;

/// All registration checks behind one value
///
/// Holds the configured limits and the reference-data provider; it carries no
/// other state, so one instance can be shared across tasks.
pub struct RegistrationChecker<P = Arc<dyn ReferenceDataProvider>> {
    config: CheckerConfig,
    reference: ReferenceChecker<P>,
}

impl RegistrationChecker {
    /// Default limits and the live country endpoint, uncached
    pub fn new() -> CheckResult<Self> {
        Self::from_config(CheckerConfig::default())
    }

    /// Live country endpoint configured by `config.reference`
    pub fn from_config(config: CheckerConfig) -> CheckResult<Self> {
        config.validate()?;
        let provider = provider_from_config(&config.reference)?;
        Ok(Self::with_provider(config, provider))
    }
}

impl<P: ReferenceDataProvider> RegistrationChecker<P> {
    pub fn with_provider(config: CheckerConfig, provider: P) -> Self {
        Self {
            config,
            reference: ReferenceChecker::new(provider),
        }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        identity::is_valid_email(email)
    }

    /// At least `identity.min_password_length` bytes
    pub fn is_valid_password(&self, password: &str) -> bool {
        identity::has_min_length(password, self.config.identity.min_password_length)
    }

    pub fn is_valid_phone_number(&self, phone_number: &str) -> bool {
        identity::is_valid_phone_number(phone_number)
    }

    /// At least `identity.minimum_age` years old today
    pub fn is_age_valid(&self, date_of_birth: &str) -> CheckResult<bool> {
        self.is_age_valid_on(date_of_birth, Local::now().date_naive())
    }

    pub fn is_age_valid_on(&self, date_of_birth: &str, today: NaiveDate) -> CheckResult<bool> {
        identity::is_at_least_on(date_of_birth, self.config.identity.minimum_age, today)
    }

    /// Image extension within `files.max_image_size`
    pub fn is_valid_image<Q: AsRef<Path>>(&self, path: Q) -> CheckResult<bool> {
        files::is_valid_image(path, self.config.files.max_image_size)
    }

    pub fn is_valid_image_with_limit<Q: AsRef<Path>>(&self, path: Q, max_size: u64) -> CheckResult<bool> {
        files::is_valid_image(path, max_size)
    }

    /// Document extension within `files.max_document_size`
    pub fn is_valid_document<Q: AsRef<Path>>(&self, path: Q) -> CheckResult<bool> {
        files::is_valid_document(path, self.config.files.max_document_size)
    }

    pub fn is_valid_document_with_limit<Q: AsRef<Path>>(
        &self,
        path: Q,
        max_size: u64,
    ) -> CheckResult<bool> {
        files::is_valid_document(path, max_size)
    }

    pub fn is_valid_custom_extension<Q, S>(&self, path: Q, allowed_extensions: &[S]) -> bool
    where
        Q: AsRef<Path>,
        S: AsRef<str>,
    {
        files::is_valid_custom_extension(path, allowed_extensions)
    }

    pub fn has_minimum_dimensions<Q: AsRef<Path>>(
        &self,
        path: Q,
        min_width: u32,
        min_height: u32,
    ) -> CheckResult<bool> {
        files::has_minimum_dimensions(path, min_width, min_height)
    }

    pub fn exceeds_maximum_dimensions<Q: AsRef<Path>>(
        &self,
        path: Q,
        max_width: u32,
        max_height: u32,
    ) -> CheckResult<bool> {
        files::exceeds_maximum_dimensions(path, max_width, max_height)
    }

    pub fn meets_minimum_size<Q: AsRef<Path>>(&self, path: Q, min_size: u64) -> CheckResult<bool> {
        files::meets_minimum_size(path, min_size)
    }

    pub fn exceeds_maximum_size<Q: AsRef<Path>>(&self, path: Q, max_size: u64) -> CheckResult<bool> {
        files::exceeds_maximum_size(path, max_size)
    }

    /// Heuristic signature scan, see [`files::malware`]
    pub fn contains_malware<Q: AsRef<Path>>(&self, path: Q) -> CheckResult<bool> {
        files::contains_malware(path)
    }

    /// Fails closed when the reference data cannot be fetched
    pub async fn is_valid_country(&self, country: &str) -> bool {
        self.reference.is_valid_country(country).await
    }

    /// Fails closed when the reference data cannot be fetched
    pub async fn is_valid_language(&self, language: &str) -> bool {
        self.reference.is_valid_language(language).await
    }

    pub async fn try_is_valid_country(&self, country: &str) -> CheckResult<bool> {
        self.reference.try_is_valid_country(country).await
    }

    pub async fn try_is_valid_language(&self, language: &str) -> CheckResult<bool> {
        self.reference.try_is_valid_language(language).await
    }
}
