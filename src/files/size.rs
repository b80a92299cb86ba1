use super::extension::{has_extension_in, DOCUMENT_EXTENSIONS, IMAGE_EXTENSIONS};
use crate::error::{CheckError, CheckResult};
use std::fs;
use std::path::Path;

/// Default image size limit (2 MiB)
pub const DEFAULT_MAX_IMAGE_SIZE: u64 = 2 * 1024 * 1024;

/// Default document size limit (5 MiB)
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 5 * 1024 * 1024;

/// Size of the file at `path` in bytes
pub fn file_size<P: AsRef<Path>>(path: P) -> CheckResult<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CheckError::from_io(path, e))?;

    if !metadata.is_file() {
        return Err(CheckError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    Ok(metadata.len())
}

/// Image extension and size no larger than `max_size`
///
/// The file is stat'ed before the extension is looked at, so a missing file
/// is always an error, whatever its name.
pub fn is_valid_image<P: AsRef<Path>>(path: P, max_size: u64) -> CheckResult<bool> {
    let size = file_size(&path)?;
    Ok(has_extension_in(&path, IMAGE_EXTENSIONS) && size <= max_size)
}

/// Document extension and size no larger than `max_size`
pub fn is_valid_document<P: AsRef<Path>>(path: P, max_size: u64) -> CheckResult<bool> {
    let size = file_size(&path)?;
    Ok(has_extension_in(&path, DOCUMENT_EXTENSIONS) && size <= max_size)
}

pub fn meets_minimum_size<P: AsRef<Path>>(path: P, min_size: u64) -> CheckResult<bool> {
    Ok(file_size(path)? >= min_size)
}

pub fn exceeds_maximum_size<P: AsRef<Path>>(path: P, max_size: u64) -> CheckResult<bool> {
    Ok(file_size(path)? > max_size)
}
