use std::path::PathBuf;
use std::time::Duration;

use crate::scan::{ExclusionSet, NameFilter};
use crate::target::{TargetError, UploadTarget};

/// Pause between consecutive requests.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Environment variable holding the built-in host list (comma or whitespace separated).
pub const HOSTS_ENV: &str = "FPUSH_HOSTS";

/// Everything a batch run needs. Built by the caller; nothing is read from disk.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory whose files are uploaded (not recursed).
    pub source_dir: PathBuf,
    /// Hosts to upload to, in order.
    pub hosts: Vec<UploadTarget>,
    /// Basenames never uploaded.
    pub exclusions: ExclusionSet,
    /// Which names are picked up from `source_dir`.
    pub name_filter: NameFilter,
    /// Pause between requests sharing a pacer.
    pub delay: Duration,
    /// One thread per host instead of a single sequential loop.
    pub parallel_hosts: bool,
    /// File left out of the scan (the running executable).
    pub skip_path: Option<PathBuf>,
}

impl UploadConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            hosts: Vec::new(),
            exclusions: ExclusionSet::new(),
            name_filter: NameFilter::default(),
            delay: DEFAULT_DELAY,
            parallel_hosts: false,
            skip_path: None,
        }
    }
}

/// Parses a host list separated by commas and/or whitespace. Empty items are ignored.
pub fn parse_host_list(s: &str) -> Result<Vec<UploadTarget>, TargetError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(UploadTarget::parse)
        .collect()
}

/// Built-in hosts from `FPUSH_HOSTS`; empty when unset.
pub fn hosts_from_env() -> Result<Vec<UploadTarget>, TargetError> {
    match std::env::var(HOSTS_ENV) {
        Ok(v) => parse_host_list(&v),
        Err(_) => Ok(Vec::new()),
    }
}

/// Built-in hosts first, then `extra`; later exact duplicates are dropped.
pub fn merge_hosts(builtin: Vec<UploadTarget>, extra: Vec<UploadTarget>) -> Vec<UploadTarget> {
    let mut merged: Vec<UploadTarget> = Vec::with_capacity(builtin.len() + extra.len());
    for target in builtin.into_iter().chain(extra) {
        if merged.iter().any(|t| t.host() == target.host()) {
            tracing::debug!(host = %target, "dropping duplicate host");
            continue;
        }
        merged.push(target);
    }
    merged
}
