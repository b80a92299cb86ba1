pub mod checker;
pub mod config;
pub mod error;
pub mod files;
pub mod identity;
pub mod reference;

// Re-export commonly used types for easier access
pub use checker::RegistrationChecker;
pub use config::CheckerConfig;
pub use error::{CheckError, CheckResult};
pub use identity::{is_age_valid, is_valid_email, is_valid_password, is_valid_phone_number};
pub use reference::{CountryRecord, ReferenceChecker, ReferenceDataProvider, StaticProvider};
