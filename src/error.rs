use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum CheckError {
    Parse(String),
    NotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
    ImageDecode(String),
    Fetch(String),
    Http(reqwest::Error),
    Serialization(serde_json::Error),
    Configuration(String),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Parse(e) => write!(f, "Parse error: {}", e),
            CheckError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            CheckError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            CheckError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            CheckError::Fetch(e) => write!(f, "Reference data fetch failed: {}", e),
            CheckError::Http(e) => write!(f, "HTTP error: {}", e),
            CheckError::Serialization(e) => write!(f, "Serialization error: {}", e),
            CheckError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Io { source, .. } => Some(source),
            CheckError::Http(e) => Some(e),
            CheckError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        CheckError::Http(err)
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::Serialization(err)
    }
}

impl From<serde_yaml::Error> for CheckError {
    fn from(err: serde_yaml::Error) -> Self {
        CheckError::Configuration(err.to_string())
    }
}

impl CheckError {
    /// Map an I/O error on `path`, keeping "missing file" distinct from other failures
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            CheckError::NotFound(path.to_path_buf())
        } else {
            CheckError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// True for failures that mean "could not evaluate" rather than "bad input"
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CheckError::Fetch(_) | CheckError::Http(_))
    }
}

pub type CheckResult<T> = Result<T, CheckError>;
