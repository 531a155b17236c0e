//! Cleanup Binary - One sweep of the output video directory
//!
//! Meant to be triggered by an external scheduler (cron, systemd timer).
//! Per-file failures are logged and do not change the exit code.
//!
//! Environment Variables:
//! - VIDEO_DIR: directory to sweep (not recursive)
//! - VIDEO_MAX_AGE_SECS: files older than this are deleted (default 48 hours)
//! - VIDEO_SUFFIX: exact filename suffix a file must end with
//!
//! Flags:
//! - --json: print the sweep report as JSON on stdout

use std::env;
use tracing_subscriber::EnvFilter;
use video_janitor::application::Sweeper;
use video_janitor::config::SweepConfig;

#[tokio::main]
async fn main() {
    let config = match SweepConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let as_json = env::args().skip(1).any(|arg| arg == "--json");

    let sweeper = Sweeper::from_config(&config);
    let report = match sweeper.run().await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Cannot read directory {:?}: {}", sweeper.dir(), e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Sweep of {:?} done: {} scanned, {} deleted, {} failed",
        sweeper.dir(),
        report.scanned,
        report.deleted.len(),
        report.failures.len()
    );

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize sweep report: {}", e),
        }
    }
}
