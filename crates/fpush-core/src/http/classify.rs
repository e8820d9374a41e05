//! Classify curl errors into the network failure kinds we report.

use serde::Serialize;
use std::fmt;

/// Coarse kind of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkErrorKind {
    /// Connect or transfer timed out.
    Timeout,
    /// Refused, unreachable, DNS failure, reset mid-transfer.
    Connection,
    /// Anything else libcurl reports.
    Other,
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NetworkErrorKind::Timeout => "timeout",
            NetworkErrorKind::Connection => "connection",
            NetworkErrorKind::Other => "other",
        };
        f.write_str(s)
    }
}

pub fn classify_curl_error(e: &curl::Error) -> NetworkErrorKind {
    if e.is_operation_timedout() {
        return NetworkErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return NetworkErrorKind::Connection;
    }
    NetworkErrorKind::Other
}
