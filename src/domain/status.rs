use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal state written by the status updater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Completed,
    Failed,
    Error,
}

impl JobStatus {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Error => "error",
        }
    }

    pub fn from_arg(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "completed" | "success" => Some(JobStatus::Completed),
            "failed" => Some(JobStatus::Failed),
            "error" => Some(JobStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row update: `status` and `error_message` for a record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: i64,
    pub status: JobStatus,
    pub error_message: Option<String>,
}

impl StatusUpdate {
    /// Completion always clears a previous error message.
    pub fn completed(id: i64) -> Self {
        Self {
            id,
            status: JobStatus::Completed,
            error_message: None,
        }
    }

    pub fn failed(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            status: JobStatus::Failed,
            error_message: Some(message.into()),
        }
    }

    pub fn error(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            status: JobStatus::Error,
            error_message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated,
    /// The statement ran but no row has this id.
    NotFound,
}

impl UpdateOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        }
    }
}
