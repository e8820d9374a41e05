//! The batch loop: every host × every file, one POST each, paced.
//!
//! Failures are captured per request as
//! [`UploadOutcome`](crate::outcome::UploadOutcome)s and never abort the run.
//! Progress is reported through a caller-supplied event callback so the CLI
//! can print as it goes.

mod host;
mod pacer;
mod parallel;

pub use pacer::Pacer;

use anyhow::Result;

use crate::config::UploadConfig;
use crate::outcome::{BatchSummary, UploadRecord};
use crate::scan::{self, FileEntry};
use crate::target::UploadTarget;

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, Copy)]
pub enum UploadEvent<'a> {
    /// About to upload the file list to `target`.
    HostStarted { target: &'a UploadTarget },
    /// `name` is in the exclusion set; nothing sent.
    Skipped { target: &'a UploadTarget, name: &'a str },
    /// Payload read; the POST is about to go out.
    Sending {
        target: &'a UploadTarget,
        name: &'a str,
        bytes: u64,
    },
    /// The attempt is over (any outcome).
    Finished { record: &'a UploadRecord },
}

/// Uploads `files` to every host in `config`.
///
/// Sequential by default with one pacer for the whole run. With
/// `config.parallel_hosts`, each host runs on its own thread with its own
/// pacer; records are still returned in host order.
pub fn run_batch<F>(config: &UploadConfig, files: &[FileEntry], on_event: F) -> BatchSummary
where
    F: Fn(&UploadEvent<'_>) + Sync,
{
    if config.hosts.is_empty() {
        tracing::info!("no target hosts; nothing to upload");
        return BatchSummary::default();
    }

    tracing::info!(
        hosts = config.hosts.len(),
        files = files.len(),
        excluded = config.exclusions.len(),
        parallel = config.parallel_hosts,
        "starting batch upload"
    );

    let records = if config.parallel_hosts && config.hosts.len() > 1 {
        parallel::run_hosts_parallel(config, files, &on_event)
    } else {
        let mut pacer = Pacer::new(config.delay);
        let mut records = Vec::new();
        for target in &config.hosts {
            records.extend(host::upload_to_host(
                target,
                files,
                &config.exclusions,
                &mut pacer,
                &on_event,
            ));
        }
        records
    };

    let summary = BatchSummary { records };
    tracing::info!(
        attempted = summary.attempted(),
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "batch upload finished"
    );
    summary
}

/// Scans `config.source_dir` and runs the batch over what it finds.
///
/// Only an unreadable source directory is an error; per-file failures end up
/// in the summary.
pub fn upload_dir<F>(config: &UploadConfig, on_event: F) -> Result<BatchSummary>
where
    F: Fn(&UploadEvent<'_>) + Sync,
{
    let files = scan::list_files(
        &config.source_dir,
        config.name_filter,
        config.skip_path.as_deref(),
    )?;
    Ok(run_batch(config, &files, on_event))
}
