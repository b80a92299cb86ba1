use crate::error::{CheckError, CheckResult};
use image::ImageReader;
use std::fs;
use std::path::Path;

/// Pixel `(width, height)` read from the image header
///
/// The format is sniffed from the leading bytes, so upload temp files without
/// an extension and misnamed files still resolve. Vector formats (svg) and
/// formats without a decoder (heif, heic) fail with `ImageDecode`.
pub fn image_dimensions<P: AsRef<Path>>(path: P) -> CheckResult<(u32, u32)> {
    let path = path.as_ref();
    fs::metadata(path).map_err(|e| CheckError::from_io(path, e))?;

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| CheckError::from_io(path, e))?;

    reader.into_dimensions().map_err(|e| match e {
        image::ImageError::IoError(io) => CheckError::from_io(path, io),
        other => CheckError::ImageDecode(format!("{}: {}", path.display(), other)),
    })
}

pub fn has_minimum_dimensions<P: AsRef<Path>>(
    path: P,
    min_width: u32,
    min_height: u32,
) -> CheckResult<bool> {
    let (width, height) = image_dimensions(path)?;
    Ok(width >= min_width && height >= min_height)
}

pub fn exceeds_maximum_dimensions<P: AsRef<Path>>(
    path: P,
    max_width: u32,
    max_height: u32,
) -> CheckResult<bool> {
    let (width, height) = image_dimensions(path)?;
    Ok(width > max_width || height > max_height)
}
