//! Plain HTTP POST of a byte payload.
//!
//! Uses the curl crate (libcurl). One easy handle per request, no proxy, no
//! redirects, and no `Content-Type`/`Expect` headers: the body goes out as-is.

mod classify;
mod status;

pub use classify::{classify_curl_error, NetworkErrorKind};
pub use status::reason_from_status_line;

use std::str;
use std::time::Duration;
use url::Url;

/// Fixed connect timeout; there is no knob for it.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
/// Abort if throughput stays under `LOW_SPEED_LIMIT` bytes/s for `LOW_SPEED_TIME`.
const LOW_SPEED_LIMIT: u32 = 1024;
const LOW_SPEED_TIME: Duration = Duration::from_secs(60);

/// Status and reason phrase of a completed POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResponse {
    pub status: u32,
    /// Reason phrase from the status line; empty if the server sent none (e.g. HTTP/2).
    pub reason: String,
}

impl PostResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// POSTs `body` to `url` and returns the final status.
///
/// Runs in the current thread. The response body is read and discarded.
pub fn post_bytes(url: &Url, body: &[u8]) -> Result<PostResponse, curl::Error> {
    let mut status_line: Option<String> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.noproxy("*")?;
    easy.follow_location(false)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.low_speed_limit(LOW_SPEED_LIMIT)?;
    easy.low_speed_time(LOW_SPEED_TIME)?;
    easy.post(true)?;
    // Streamed from `body` by the read callback below, so libcurl never holds a second copy.
    easy.post_field_size(body.len() as u64)?;

    // An empty value tells libcurl to drop a header it would otherwise add.
    let mut list = curl::easy::List::new();
    list.append("Content-Type:")?;
    list.append("Expect:")?;
    easy.http_headers(list)?;

    let mut remaining = body;
    {
        let mut transfer = easy.transfer();
        transfer.read_function(|buf| {
            let n = buf.len().min(remaining.len());
            buf[..n].copy_from_slice(&remaining[..n]);
            remaining = &remaining[n..];
            Ok(n)
        })?;
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                if s.starts_with("HTTP/") {
                    status_line = Some(s.trim_end().to_string());
                }
            }
            true
        })?;
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let reason = status_line
        .as_deref()
        .map(reason_from_status_line)
        .unwrap_or_default()
        .to_string();

    Ok(PostResponse { status, reason })
}
