use crate::error::{CheckError, CheckResult};
use crate::files::{DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_MAX_IMAGE_SIZE};
use crate::identity::{MINIMUM_AGE, MIN_PASSWORD_LENGTH};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Public country dataset, restricted to the fields the checks read
pub const DEFAULT_REFERENCE_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,languages";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CheckerConfig {
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub files: FileConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IdentityConfig {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    #[serde(default = "default_minimum_age")]
    pub minimum_age: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default = "default_max_image_size")]
    pub max_image_size: u64,
    #[serde(default = "default_max_document_size")]
    pub max_document_size: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReferenceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 0 disables caching
    #[serde(default)]
    pub cache_ttl_secs: u64,
}

fn default_min_password_length() -> usize {
    MIN_PASSWORD_LENGTH
}

fn default_minimum_age() -> u32 {
    MINIMUM_AGE
}

fn default_max_image_size() -> u64 {
    DEFAULT_MAX_IMAGE_SIZE
}

fn default_max_document_size() -> u64 {
    DEFAULT_MAX_DOCUMENT_SIZE
}

fn default_endpoint() -> String {
    DEFAULT_REFERENCE_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            min_password_length: default_min_password_length(),
            minimum_age: default_minimum_age(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        FileConfig {
            max_image_size: default_max_image_size(),
            max_document_size: default_max_document_size(),
        }
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        ReferenceConfig {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: 0,
        }
    }
}

impl ReferenceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `None` when caching is disabled
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }
}

impl CheckerConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> CheckResult<Self> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(CheckError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CheckError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            CheckError::Configuration(msg) => {
                CheckError::Configuration(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse YAML; placeholders are not expanded and the environment is never read
    pub fn from_yaml_str(content: &str) -> CheckResult<Self> {
        let config: CheckerConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CheckResult<()> {
        if self.reference.timeout_secs == 0 {
            return Err(CheckError::Configuration(
                "reference.timeout_secs must be greater than zero".to_string(),
            ));
        }

        let endpoint = url::Url::parse(&self.reference.endpoint).map_err(|e| {
            CheckError::Configuration(format!(
                "Invalid reference endpoint {}: {}",
                self.reference.endpoint, e
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CheckError::Configuration(format!(
                "Reference endpoint must be http or https: {}",
                self.reference.endpoint
            )));
        }

        if self.identity.min_password_length == 0 {
            return Err(CheckError::Configuration(
                "identity.min_password_length must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
