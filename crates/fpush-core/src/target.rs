//! Upload targets: validated host addresses and per-file upload URLs.

use std::fmt;
use std::str::FromStr;
use url::Url;

/// Characters that would change the meaning of `http://<host>/` if allowed in a host.
const FORBIDDEN: &[char] = &['/', '\\', '?', '#', '@'];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("empty host")]
    Empty,
    #[error("host {host:?} contains invalid character {found:?}")]
    InvalidChar { host: String, found: char },
    #[error("host {host:?} is not a valid address: {reason}")]
    InvalidAddress { host: String, reason: String },
}

/// A host files are uploaded to, e.g. `192.168.1.5` or `192.168.1.5:8080`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    host: String,
    base: Url,
}

impl UploadTarget {
    pub fn parse(host: &str) -> Result<Self, TargetError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(TargetError::Empty);
        }
        if let Some(found) = host
            .chars()
            .find(|c| c.is_whitespace() || FORBIDDEN.contains(c))
        {
            return Err(TargetError::InvalidChar {
                host: host.to_string(),
                found,
            });
        }
        let base = Url::parse(&format!("http://{}/", host)).map_err(|e| {
            TargetError::InvalidAddress {
                host: host.to_string(),
                reason: e.to_string(),
            }
        })?;
        if base.host_str().map_or(true, str::is_empty) {
            return Err(TargetError::InvalidAddress {
                host: host.to_string(),
                reason: "missing host".to_string(),
            });
        }
        Ok(Self {
            host: host.to_string(),
            base,
        })
    }

    /// The host string as given.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// `http://<host>/<name>`, with `name` percent-encoded as a single path segment.
    pub fn url_for(&self, name: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url
    }
}

impl FromStr for UploadTarget {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}
