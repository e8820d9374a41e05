//! CLI for fpush: POST every file in a directory to one or more hosts.

mod report;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use fpush_core::batch;
use fpush_core::config::{self, UploadConfig, DEFAULT_DELAY, HOSTS_ENV};
use fpush_core::scan::{ExclusionSet, NameFilter};
use fpush_core::target::UploadTarget;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use report::Reporter;

/// Exit code for fatal errors: bad arguments, bad FPUSH_HOSTS, unreadable source dir.
pub const EXIT_FATAL: i32 = 1;
/// Exit code when the run completed but at least one upload failed.
pub const EXIT_SOME_FAILED: i32 = 2;

/// How a completed run ended; fatal errors are returned as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Clean,
    SomeFailed,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::SomeFailed => EXIT_SOME_FAILED,
        }
    }
}

/// Process exit code for the result of `Cli::run_from_args`.
pub fn exit_code(result: &Result<RunStatus>) -> i32 {
    match result {
        Ok(status) => status.exit_code(),
        Err(_) => EXIT_FATAL,
    }
}

/// Upload every file in a directory to each host via HTTP POST.
#[derive(Debug, Parser)]
#[command(name = "fpush", version)]
#[command(about = "fpush: POST each file in a directory to http://<host>/<filename>", long_about = None)]
pub struct Cli {
    /// Target hosts, e.g. 192.168.1.5 or 192.168.1.5:8080. Merged after FPUSH_HOSTS.
    #[arg(value_name = "HOST")]
    pub hosts: Vec<UploadTarget>,

    /// Directory to upload from (not recursed).
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Basename to skip; may be given several times.
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Pause between requests, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Also upload files without a dot in their name (default matches `*.*` only).
    #[arg(long)]
    pub all_files: bool,

    /// Upload to each host on its own thread (per-host order and delay are kept).
    #[arg(long)]
    pub parallel_hosts: bool,

    /// Ignore the built-in host list from FPUSH_HOSTS.
    #[arg(long)]
    pub no_env_hosts: bool,

    /// Print the run summary as JSON on stdout (progress lines go to stderr).
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<RunStatus> {
        Cli::parse_args(std::env::args_os())?.run()
    }

    /// Like `Cli::parse`, but usage errors come back as `Err` (exit 1) instead of
    /// clap's own exit code 2, which is reserved for failed uploads.
    /// `--help` and `--version` still print and exit 0.
    pub fn parse_args<I, T>(args: I) -> Result<Cli>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).or_else(|e| match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            _ => {
                let _ = e.print();
                Err(anyhow::anyhow!("invalid command-line arguments"))
            }
        })
    }

    pub fn run(self) -> Result<RunStatus> {
        let cfg = self.upload_config()?;
        tracing::debug!("upload config: {:?}", cfg);

        let reporter = Reporter::new(self.json);
        let summary = batch::upload_dir(&cfg, |event| reporter.event(event))?;
        reporter.summary(&summary)?;

        Ok(if summary.is_success() {
            RunStatus::Clean
        } else {
            RunStatus::SomeFailed
        })
    }

    fn upload_config(&self) -> Result<UploadConfig> {
        let builtin = if self.no_env_hosts {
            Vec::new()
        } else {
            config::hosts_from_env().with_context(|| format!("invalid host in {}", HOSTS_ENV))?
        };

        let mut cfg = UploadConfig::new(&self.dir);
        cfg.hosts = config::merge_hosts(builtin, self.hosts.clone());
        cfg.exclusions = self.exclude.iter().cloned().collect::<ExclusionSet>();
        cfg.name_filter = if self.all_files {
            NameFilter::All
        } else {
            NameFilter::Dotted
        };
        cfg.delay = Duration::from_millis(self.delay_ms);
        cfg.parallel_hosts = self.parallel_hosts;
        cfg.skip_path = std::env::current_exe().ok();
        Ok(cfg)
    }
}
