use std::path::Path;

/// Image extensions accepted by [`is_valid_image`](super::is_valid_image)
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "svg", "ico", "heif", "heic",
];

/// Document extensions accepted by [`is_valid_document`](super::is_valid_document)
pub const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf",   // Portable Document Format
    "rtf",   // Rich Text Format
    "doc",   // Word 97-2003
    "docx",  // Word 2007+
    "txt",   // Plain text
    "odt",   // OpenDocument text
    "wps",   // Works
    "dot",   // Word template
    "dotx",  // Word template 2007+
    "xml",   // XML
    "xls",   // Excel 97-2003
    "xlsx",  // Excel 2007+
    "ppt",   // PowerPoint 97-2003
    "pptx",  // PowerPoint 2007+
    "csv",   // Comma-separated values
    "epub",  // Electronic publication
    "md",    // Markdown
    "pages", // Apple Pages
];

/// Lower-cased extension of `path`, without the dot
///
/// Only the last extension counts (`archive.tar.gz` is `gz`); dotfiles such as
/// `.env` have none.
pub fn file_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Checks the extension of `path` against a caller-supplied allow-list
///
/// Comparison is case-insensitive on both sides and a leading dot in an
/// allow-list entry is ignored. The file itself is never opened.
pub fn is_valid_custom_extension<P, S>(path: P, allowed_extensions: &[S]) -> bool
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let Some(extension) = file_extension(path) else {
        return false;
    };

    allowed_extensions.iter().any(|allowed| {
        allowed
            .as_ref()
            .trim_start_matches('.')
            .eq_ignore_ascii_case(&extension)
    })
}

pub(crate) fn has_extension_in<P: AsRef<Path>>(path: P, extensions: &[&str]) -> bool {
    file_extension(path).is_some_and(|ext| extensions.contains(&ext.as_str()))
}
