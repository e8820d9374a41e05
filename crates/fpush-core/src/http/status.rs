//! Status line parsing.

/// Extracts the reason phrase from an HTTP status line.
///
/// `"HTTP/1.1 404 Not Found"` gives `"Not Found"`; a line without a reason
/// (`"HTTP/2 200"`) gives `""`.
pub fn reason_from_status_line(line: &str) -> &str {
    let mut parts = line.trim().splitn(3, ' ');
    let _version = parts.next();
    let _code = parts.next();
    parts.next().map(str::trim).unwrap_or("")
}
