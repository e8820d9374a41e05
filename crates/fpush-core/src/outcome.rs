//! Per-request outcomes and the aggregate batch summary.

use serde::Serialize;
use std::fmt;

use crate::http::{classify_curl_error, NetworkErrorKind, PostResponse};

/// Result of uploading one file to one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// Server answered 2xx.
    Success { status: u32, reason: String },
    /// The local file could not be read; no request was sent.
    ReadError { message: String },
    /// The request did not complete (refused, timeout, reset...).
    NetworkError {
        error: NetworkErrorKind,
        message: String,
    },
    /// Server answered with a non-2xx status.
    HttpError { status: u32, reason: String },
}

impl UploadOutcome {
    pub fn from_response(resp: PostResponse) -> Self {
        if resp.is_success() {
            UploadOutcome::Success {
                status: resp.status,
                reason: resp.reason,
            }
        } else {
            UploadOutcome::HttpError {
                status: resp.status,
                reason: resp.reason,
            }
        }
    }

    pub fn from_curl_error(e: &curl::Error) -> Self {
        UploadOutcome::NetworkError {
            error: classify_curl_error(e),
            message: e.to_string(),
        }
    }

    pub fn from_read_error(e: &std::io::Error) -> Self {
        UploadOutcome::ReadError {
            message: e.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success { .. })
    }

    /// Short label for report lines: the reason phrase, or the failure description.
    pub fn reason(&self) -> String {
        match self {
            UploadOutcome::Success { status, reason }
            | UploadOutcome::HttpError { status, reason } => {
                if reason.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    reason.clone()
                }
            }
            UploadOutcome::ReadError { message } => format!("read error: {}", message),
            UploadOutcome::NetworkError { error, message } => {
                format!("network error ({}): {}", error, message)
            }
        }
    }
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.reason(), self.is_success())
    }
}

/// One (host, file) attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRecord {
    pub host: String,
    pub name: String,
    /// Payload size; `None` when the file could not be read.
    pub bytes: Option<u64>,
    pub outcome: UploadOutcome,
}

/// All records of a batch run, in execution order (host order in parallel mode).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub records: Vec<UploadRecord>,
}

impl BatchSummary {
    pub fn attempted(&self) -> usize {
        self.records.len()
    }

    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    /// True when nothing failed (an empty run counts as success).
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Bytes delivered by successful uploads.
    pub fn bytes_sent(&self) -> u64 {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .filter_map(|r| r.bytes)
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &UploadRecord> {
        self.records.iter().filter(|r| !r.outcome.is_success())
    }
}
