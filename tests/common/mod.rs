#![allow(dead_code)]

use image::RgbImage;
use registration_checker::{CheckerConfig, RegistrationChecker};
use registration_checker::reference::RestCountriesProvider;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Route test output through the test harness; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Write `len` bytes of filler text to `dir/name`
pub fn create_file(dir: &TempDir, name: &str, len: usize) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, "x".repeat(len)).unwrap();
    path
}

/// Write a real PNG of the given size to `dir/name`
pub fn create_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::new(width, height).save(&path).unwrap();
    path
}

/// A trimmed-down restcountries.com payload
pub fn sample_countries_json() -> Value {
    json!([
        {
            "name": {"common": "Bangladesh", "official": "People's Republic of Bangladesh"},
            "languages": {"ben": "Bengali"}
        },
        {
            "name": {"common": "United Kingdom", "official": "United Kingdom of Great Britain and Northern Ireland"},
            "languages": {"eng": "English"}
        },
        {
            "name": {"common": "Switzerland", "official": "Swiss Confederation"},
            "languages": {"fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh"}
        },
        {
            "name": {"common": "Bouvet Island", "official": "Bouvet Island"},
            "languages": {}
        }
    ])
}

/// Checker pointed at a mock server endpoint
pub fn create_test_checker(endpoint: &str) -> RegistrationChecker<RestCountriesProvider> {
    let provider = RestCountriesProvider::new(endpoint, Duration::from_secs(2)).unwrap();
    RegistrationChecker::with_provider(CheckerConfig::default(), provider)
}
