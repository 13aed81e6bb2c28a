/// Content type used when the extension is unknown or empty.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Maps a file extension to the Content-Type sent with it.
///
/// Matching is ASCII case-insensitive. Anything outside the table,
/// including the empty extension, is served as `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use fileserve::http::mime::content_type;
/// assert_eq!(content_type("HTML"), "text/html");
/// assert_eq!(content_type("tar"), "application/octet-stream");
/// ```
pub fn content_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => OCTET_STREAM,
    }
}

/// Returns the text after the last `.` in `file_name`.
///
/// Yields `""` when there is no dot, or when the only dot is the first
/// character (`.bashrc`). The result borrows from `file_name`.
///
/// ```
/// # use fileserve::http::mime::extension_of;
/// assert_eq!(extension_of("a.txt"), "txt");
/// assert_eq!(extension_of(".bashrc"), "");
/// ```
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => "",
        Some(dot) => &file_name[dot + 1..],
    }
}
