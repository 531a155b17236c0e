//! Job Status Binary - Update one video processing record
//!
//! Usage:
//! - job-status completed <id>
//! - job-status failed <id> <message>
//! - job-status error <id> <message>
//!
//! Database failures are logged and the process still exits 0, so callers
//! relying on the log-only behaviour are unaffected. Usage errors exit 2.
//!
//! Environment Variables:
//! - DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME: MySQL connection
//! - DB_TABLE: table holding the records (default videos_processed)

use std::env;
use tracing_subscriber::EnvFilter;
use video_janitor::adapters::MySqlStatusRepository;
use video_janitor::application::StatusService;
use video_janitor::config::DatabaseConfig;
use video_janitor::domain::status::{JobStatus, StatusUpdate};

const USAGE: &str = "usage: job-status <completed|failed|error> <id> [message]";

fn parse_args<I>(args: I) -> Result<StatusUpdate, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let status = args
        .next()
        .and_then(|s| JobStatus::from_arg(&s))
        .ok_or_else(|| String::from("missing or unknown status"))?;
    let id = args
        .next()
        .ok_or_else(|| String::from("missing record id"))?;
    let id: i64 = id
        .parse()
        .map_err(|_| format!("record id must be an integer, got {:?}", id))?;

    // Remaining words form the message, so it need not be quoted.
    let message = args.collect::<Vec<_>>().join(" ");

    match status {
        JobStatus::Completed => Ok(StatusUpdate::completed(id)),
        _ if message.is_empty() => Err(format!("status '{}' requires a message", status)),
        JobStatus::Failed => Ok(StatusUpdate::failed(id, message)),
        JobStatus::Error => Ok(StatusUpdate::error(id, message)),
    }
}

#[tokio::main]
async fn main() {
    let update = match parse_args(env::args().skip(1)) {
        Ok(u) => u,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = match DatabaseConfig::from_env() {
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

    let service = StatusService::new(MySqlStatusRepository::new(&config));
    // Outcome and failures are already logged by the service.
    let _ = service.apply(update).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_completed() {
        let update = parse_args(args(&["completed", "12"])).unwrap();
        assert_eq!(update, StatusUpdate::completed(12));
    }

    #[test]
    fn test_parse_failed_joins_message() {
        let update = parse_args(args(&["failed", "3", "disk", "full"])).unwrap();
        assert_eq!(update, StatusUpdate::failed(3, "disk full"));
    }

    #[test]
    fn test_parse_error_requires_message() {
        assert!(parse_args(args(&["error", "3"])).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["pending", "1"])).is_err());
        assert!(parse_args(args(&["completed", "abc"])).is_err());
    }
}
