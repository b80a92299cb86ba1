//! Checks on files that have already been stored on disk.
//!
//! Every check that touches the filesystem returns [`CheckResult`]: a missing
//! file is [`CheckError::NotFound`](crate::error::CheckError::NotFound), any
//! other read failure is [`CheckError::Io`](crate::error::CheckError::Io).

pub mod dimensions;
pub mod extension;
pub mod malware;
pub mod size;

pub use dimensions::{exceeds_maximum_dimensions, has_minimum_dimensions, image_dimensions};
pub use extension::{
    file_extension, is_valid_custom_extension, DOCUMENT_EXTENSIONS, IMAGE_EXTENSIONS,
};
pub use malware::{contains_malware, scan_content, scan_for_malware, Signature};
pub use size::{
    exceeds_maximum_size, file_size, is_valid_document, is_valid_image, meets_minimum_size,
    DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_MAX_IMAGE_SIZE,
};
