//! Signature-based scan for suspicious script content.
//!
//! This is a crude heuristic, not a malware detector. It flags plenty of
//! harmless files (any text mentioning `exec(` or `fopen(`, bare `<?php>`
//! tags) and misses anything obfuscated beyond these literal calls. A `false` result says nothing about whether a file is safe.

use crate::error::{CheckError, CheckResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A named content pattern
#[derive(Debug)]
pub struct Signature {
    pub name: &'static str,
    pub pattern: Regex,
}

lazy_static! {
    /// Signatures in scan order, all case-insensitive
    static ref SIGNATURES: Vec<Signature> = [
        ("eval", r"(?i)eval\("),
        ("base64_decode", r"(?i)base64_decode\("),
        ("exec", r"(?i)exec\("),
        ("shell_exec", r"(?i)shell_exec\("),
        ("system", r"(?i)system\("),
        ("passthru", r"(?i)passthru\("),
        ("preg_replace", r"(?i)preg_replace\("),
        ("phpinfo", r"(?i)phpinfo\("),
        ("fopen", r"(?i)fopen\("),
        ("empty_open_tag", r"(?i)<\?php\s*?>"),
        ("die", r"(?i)\s*<\?php\s*.*?die\("),
    ]
    .into_iter()
    .map(|(name, pattern)| Signature {
        name,
        pattern: Regex::new(pattern).unwrap(),
    })
    .collect();
}

/// All signatures, in the order they are tried
pub fn signatures() -> &'static [Signature] {
    &SIGNATURES
}

/// First signature matching `content`, if any
pub fn scan_content(content: &str) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|sig| sig.pattern.is_match(content))
}

/// Reads the whole file and returns the first matching signature
///
/// Non-UTF-8 bytes are replaced, so binary uploads are scanned rather than rejected.
pub fn scan_for_malware<P: AsRef<Path>>(path: P) -> CheckResult<Option<&'static Signature>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| CheckError::from_io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let hit = scan_content(&content);
    if let Some(signature) = hit {
        debug!(
            path = %path.display(),
            signature = signature.name,
            "Suspicious content signature matched"
        );
    }

    Ok(hit)
}

/// True when any signature matches the file content
pub fn contains_malware<P: AsRef<Path>>(path: P) -> CheckResult<bool> {
    Ok(scan_for_malware(path)?.is_some())
}
