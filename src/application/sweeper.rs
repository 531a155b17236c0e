use crate::config::SweepConfig;
use crate::domain::sweep::{is_expired, matches_suffix, SweepFailure, SweepReport};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, error, info};

/// Deletes expired videos from a single directory.
///
/// Best effort: a file that cannot be inspected or removed is logged and
/// recorded in the report, and the sweep moves on.
pub struct Sweeper {
    dir: PathBuf,
    max_age: Duration,
    suffix: String,
}

impl Sweeper {
    pub fn new(dir: impl Into<PathBuf>, max_age: Duration, suffix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            max_age,
            suffix: suffix.into(),
        }
    }

    pub fn from_config(config: &SweepConfig) -> Self {
        Self::new(&config.video_dir, config.max_age, config.suffix.as_str())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn run(&self) -> io::Result<SweepReport> {
        self.run_at(SystemTime::now()).await
    }

    /// Sweep using `now` as the reference time for every file.
    /// Only failing to open the directory is returned as an error; anything
    /// that goes wrong afterwards is recorded in the report.
    pub async fn run_at(&self, now: SystemTime) -> io::Result<SweepReport> {
        let listing = self.list().await?;
        Ok(self.sweep_listing(listing, now).await)
    }

    /// Entries directly inside the directory. A read error stops the listing
    /// and is kept as the last item so the entries before it are still swept.
    async fn list(&self) -> io::Result<Vec<io::Result<PathBuf>>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut listing = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => listing.push(Ok(entry.path())),
                Ok(None) => break,
                Err(e) => {
                    listing.push(Err(e));
                    break;
                }
            }
        }
        Ok(listing)
    }

    async fn sweep_listing(
        &self,
        listing: Vec<io::Result<PathBuf>>,
        now: SystemTime,
    ) -> SweepReport {
        let mut report = SweepReport::default();

        for item in listing {
            let path = match item {
                Ok(p) => p,
                Err(e) => {
                    self.record_failure(&mut report, self.dir.clone(), Step::List, e);
                    continue;
                }
            };
            report.scanned += 1;

            let matched = path
                .file_name()
                .map(|name| matches_suffix(name, &self.suffix))
                .unwrap_or(false);
            if !matched {
                report.skipped += 1;
                continue;
            }

            let metadata = match tokio::fs::metadata(&path).await {
                Ok(m) => m,
                Err(e) => {
                    self.record_failure(&mut report, path, Step::Inspect, e);
                    continue;
                }
            };

            if !metadata.is_file() {
                debug!("Skipping non-file entry {:?}", path);
                report.skipped += 1;
                continue;
            }

            let modified = match metadata.modified() {
                Ok(t) => t,
                Err(e) => {
                    self.record_failure(&mut report, path, Step::Inspect, e);
                    continue;
                }
            };

            if !is_expired(modified, now, self.max_age) {
                report.skipped += 1;
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    info!("File deleted: {:?}", path);
                    report.deleted.push(path);
                }
                Err(e) => self.record_failure(&mut report, path, Step::Delete, e),
            }
        }

        report
    }

    fn record_failure(&self, report: &mut SweepReport, path: PathBuf, step: Step, err: io::Error) {
        error!("Error {} {:?}: {}", step.as_str(), path, err);
        report.failures.push(SweepFailure {
            path,
            reason: format!("{}: {}", step.as_str(), err),
        });
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    List,
    Inspect,
    Delete,
}

impl Step {
    fn as_str(self) -> &'static str {
        match self {
            Step::List => "listing",
            Step::Inspect => "inspecting",
            Step::Delete => "deleting",
        }
    }
}
