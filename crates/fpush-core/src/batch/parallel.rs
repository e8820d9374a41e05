//! One thread per host. Each host keeps its own file order and pacer.

use std::thread;

use crate::config::UploadConfig;
use crate::outcome::UploadRecord;
use crate::scan::FileEntry;

use super::host::upload_to_host;
use super::{Pacer, UploadEvent};

pub(super) fn run_hosts_parallel<F>(
    config: &UploadConfig,
    files: &[FileEntry],
    on_event: &F,
) -> Vec<UploadRecord>
where
    F: Fn(&UploadEvent<'_>) + Sync,
{
    thread::scope(|scope| {
        let handles: Vec<_> = config
            .hosts
            .iter()
            .map(|target| {
                let handle = scope.spawn(move || {
                    let mut pacer = Pacer::new(config.delay);
                    upload_to_host(target, files, &config.exclusions, &mut pacer, on_event)
                });
                (target, handle)
            })
            .collect();

        let mut records = Vec::new();
        for (target, handle) in handles {
            match handle.join() {
                Ok(host_records) => records.extend(host_records),
                Err(_) => {
                    tracing::error!(host = %target, "upload thread panicked; its results are lost");
                }
            }
        }
        records
    })
}
