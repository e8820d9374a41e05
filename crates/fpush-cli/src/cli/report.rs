//! Human-readable progress lines and the end-of-run summary.

use anyhow::Result;
use fpush_core::batch::UploadEvent;
use fpush_core::outcome::{BatchSummary, UploadRecord};
use serde::Serialize;
use std::io::{self, Write};

/// Prints progress as the batch runs. In JSON mode progress goes to stderr so
/// stdout carries only the summary document.
pub struct Reporter {
    json: bool,
}

impl Reporter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn event(&self, event: &UploadEvent<'_>) {
        self.emit(&event_line(event));
    }

    pub fn summary(&self, summary: &BatchSummary) -> Result<()> {
        write_summary(&mut io::stdout().lock(), summary, self.json)
    }

    fn emit(&self, line: &str) {
        if self.json {
            write_line(&mut io::stderr().lock(), line);
        } else {
            write_line(&mut io::stdout().lock(), line);
        }
    }
}

/// Writes one report line. A closed pipe (`fpush ... | head`) must not panic
/// the run mid-batch, so write errors are only logged.
pub(super) fn write_line<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{}", line).and_then(|()| out.flush()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            tracing::debug!("report output closed: {}", e);
        } else {
            tracing::warn!("failed to write report line: {}", e);
        }
    }
}

pub(super) fn write_summary<W: Write>(
    out: &mut W,
    summary: &BatchSummary,
    json: bool,
) -> Result<()> {
    if json {
        write_line(out, &summary_json(summary)?);
        return Ok(());
    }
    for line in summary_lines(summary) {
        write_line(out, &line);
    }
    Ok(())
}

pub(super) fn event_line(event: &UploadEvent<'_>) -> String {
    match event {
        UploadEvent::HostStarted { target } => format!("uploading to {}", target),
        UploadEvent::Skipped { name, .. } => format!("skip {}", name),
        UploadEvent::Sending {
            target,
            name,
            bytes,
        } => format!("send {}, {}B to {}", name, bytes, target),
        UploadEvent::Finished { record } => record.outcome.to_string(),
    }
}

pub(super) fn summary_lines(summary: &BatchSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "done: {} of {} upload(s) succeeded, {} failed, {} byte(s) sent",
        summary.succeeded(),
        summary.attempted(),
        summary.failed(),
        summary.bytes_sent()
    )];
    for record in summary.failures() {
        lines.push(format!(
            "  failed: {} -> {}: {}",
            record.name,
            record.host,
            record.outcome.reason()
        ));
    }
    lines
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    attempted: usize,
    succeeded: usize,
    failed: usize,
    bytes_sent: u64,
    records: &'a [UploadRecord],
}

pub(super) fn summary_json(summary: &BatchSummary) -> Result<String> {
    let report = SummaryReport {
        attempted: summary.attempted(),
        succeeded: summary.succeeded(),
        failed: summary.failed(),
        bytes_sent: summary.bytes_sent(),
        records: &summary.records,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
