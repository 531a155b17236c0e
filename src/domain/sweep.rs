use serde::Serialize;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

/// Literal filename suffix match on the raw name bytes. No normalisation is
/// applied, and names that are not valid UTF-8 still match.
pub fn matches_suffix(file_name: &OsStr, suffix: &str) -> bool {
    file_name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// A file is expired when its age is strictly greater than `max_age`.
/// Modification times in the future never expire.
pub fn is_expired(modified: SystemTime, now: SystemTime, max_age: Duration) -> bool {
    match now.duration_since(modified) {
        Ok(age) => age > max_age,
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one sweep over the video directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    /// Entries listed in the directory
    pub scanned: usize,
    /// Entries ignored (suffix mismatch, directories, not yet expired)
    pub skipped: usize,
    pub deleted: Vec<PathBuf>,
    pub failures: Vec<SweepFailure>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
