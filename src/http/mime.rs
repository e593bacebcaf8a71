//! MIME type detection based on file extension.
//!
//! Unknown extensions are an error rather than a silent
//! `application/octet-stream`: serving a file we cannot label is treated as a
//! server-side fault and surfaces as a 500 from the response builders.

#[derive(Debug, thiserror::Error)]
pub enum MimeError {
    #[error("unsupported MIME type for {0:?}")]
    UnsupportedMimeType(String),
}

/// Resolves the Content-Type for a file path from its extension.
///
/// The extension is the text after the last `.` of the final path segment and
/// is matched case-insensitively.
///
/// # Example
///
/// ```
/// # use webserver::http::mime::content_type_for;
/// assert_eq!(content_type_for("/index.html").unwrap(), "text/html");
/// assert_eq!(content_type_for("/css/styles.css").unwrap(), "text/css");
/// assert!(content_type_for("/README").is_err());
/// ```
pub fn content_type_for(path: &str) -> Result<&'static str, MimeError> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    lookup(extension.as_deref()).ok_or_else(|| MimeError::UnsupportedMimeType(path.to_string()))
}

fn lookup(extension: Option<&str>) -> Option<&'static str> {
    let content_type = match extension? {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "xml" => "application/xml",

        // Scripts and data
        "js" => "application/javascript",
        "json" => "application/json",

        // Images
        "ico" => "image/x-icon",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",

        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(content_type)
}
