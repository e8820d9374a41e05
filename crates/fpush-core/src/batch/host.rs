//! Sequential upload of the file list to a single host.

use crate::http;
use crate::outcome::{UploadOutcome, UploadRecord};
use crate::scan::{ExclusionSet, FileEntry};
use crate::target::UploadTarget;

use super::{Pacer, UploadEvent};

pub(super) fn upload_to_host<F>(
    target: &UploadTarget,
    files: &[FileEntry],
    exclusions: &ExclusionSet,
    pacer: &mut Pacer,
    on_event: &F,
) -> Vec<UploadRecord>
where
    F: Fn(&UploadEvent<'_>) + Sync,
{
    on_event(&UploadEvent::HostStarted { target });
    let mut records = Vec::with_capacity(files.len());

    for file in files {
        if exclusions.contains(&file.name) {
            tracing::debug!(host = %target, name = %file.name, "excluded");
            on_event(&UploadEvent::Skipped {
                target,
                name: &file.name,
            });
            continue;
        }
        let record = upload_one(target, file, pacer, on_event);
        on_event(&UploadEvent::Finished { record: &record });
        records.push(record);
    }
    records
}

fn upload_one<F>(
    target: &UploadTarget,
    file: &FileEntry,
    pacer: &mut Pacer,
    on_event: &F,
) -> UploadRecord
where
    F: Fn(&UploadEvent<'_>) + Sync,
{
    let payload = match file.read_payload() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(host = %target, path = %file.path.display(), error = %e, "could not read file");
            return UploadRecord {
                host: target.host().to_string(),
                name: file.name.clone(),
                bytes: None,
                outcome: UploadOutcome::from_read_error(&e),
            };
        }
    };
    let bytes = payload.len() as u64;

    pacer.wait();
    on_event(&UploadEvent::Sending {
        target,
        name: &file.name,
        bytes,
    });
    let url = target.url_for(&file.name);
    tracing::info!(host = %target, name = %file.name, bytes, %url, "sending");

    let outcome = match http::post_bytes(&url, &payload) {
        Ok(resp) => {
            tracing::debug!(host = %target, name = %file.name, status = resp.status, reason = %resp.reason, "response");
            UploadOutcome::from_response(resp)
        }
        Err(e) => UploadOutcome::from_curl_error(&e),
    };
    if !outcome.is_success() {
        tracing::warn!(host = %target, name = %file.name, outcome = %outcome.reason(), "upload failed");
    }

    UploadRecord {
        host: target.host().to_string(),
        name: file.name.clone(),
        bytes: Some(bytes),
        outcome,
    }
}
