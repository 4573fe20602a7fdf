//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on a bare file extension.

/// Extension to Content-Type table, checked in order
static CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("css", "text/css"),
    ("ico", "image/x-icon"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
];

/// Content-Type for anything not in the table
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Get MIME Content-Type based on file extension
///
/// The extension is compared verbatim: no case folding and no leading dot.
///
/// # Examples
/// ```
/// use netp::http::mime::content_type;
/// assert_eq!(content_type("html"), "text/html");
/// assert_eq!(content_type("HTML"), "text/plain");
/// assert_eq!(content_type(""), "text/plain");
/// ```
pub fn content_type(extension: &str) -> &'static str {
    CONTENT_TYPES
        .iter()
        .find(|&&(ext, _)| ext == extension)
        .map_or(DEFAULT_CONTENT_TYPE, |&(_, mime)| mime)
}

/// Extract the bare extension from a resolved filename
///
/// Only the last path segment is considered, so `./v1.2/app` has no
/// extension. Returns an empty string when there is none.
pub fn extension_of(filename: &str) -> &str {
    let segment = filename.rsplit('/').next().unwrap_or(filename);
    segment.rsplit_once('.').map_or("", |(_, extension)| extension)
}
