use crate::domain::status::{StatusUpdate, UpdateOutcome};
use crate::error::StatusError;
use crate::ports::status::StatusRepository;
use tracing::{error, info, warn};

/// Reports the outcome of a video-processing job on its record.
///
/// Every call logs exactly one line. Failures are returned to the caller
/// instead of being swallowed, but never panic.
pub struct StatusService<R> {
    repo: R,
}

impl<R> StatusService<R>
where
    R: StatusRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Set status to `completed` and clear the error message.
    pub async fn mark_completed(&self, id: i64) -> Result<UpdateOutcome, StatusError> {
        self.apply(StatusUpdate::completed(id)).await
    }

    pub async fn mark_failed(
        &self,
        id: i64,
        message: &str,
    ) -> Result<UpdateOutcome, StatusError> {
        self.apply(StatusUpdate::failed(id, message)).await
    }

    pub async fn mark_error(&self, id: i64, message: &str) -> Result<UpdateOutcome, StatusError> {
        self.apply(StatusUpdate::error(id, message)).await
    }

    pub async fn apply(&self, update: StatusUpdate) -> Result<UpdateOutcome, StatusError> {
        match self.repo.apply(&update).await {
            Ok(rows) => {
                let outcome = UpdateOutcome::from_rows_affected(rows);
                match outcome {
                    UpdateOutcome::Updated => {
                        info!("ID {}: status updated to '{}'", update.id, update.status)
                    }
                    UpdateOutcome::NotFound => warn!(
                        "ID {}: no record matched, status '{}' not applied",
                        update.id, update.status
                    ),
                }
                Ok(outcome)
            }
            Err(e) => {
                error!(
                    "Failed to update status to '{}' for ID {}: {}",
                    update.status, update.id, e
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::JobStatus;
    use crate::ports::status::MockStatusRepository;
    use mockall::predicate::eq;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn test_mark_completed_clears_message() {
        let mut repo = MockStatusRepository::new();
        repo.expect_apply()
            .with(eq(StatusUpdate {
                id: 42,
                status: JobStatus::Completed,
                error_message: None,
            }))
            .times(1)
            .returning(|_| Ok(1));

        let service = StatusService::new(repo);
        let outcome = service.mark_completed(42).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);
    }

    #[tokio::test]
    async fn test_mark_failed_sets_message() {
        let mut repo = MockStatusRepository::new();
        repo.expect_apply()
            .withf(|u| {
                u.id == 3
                    && u.status == JobStatus::Failed
                    && u.error_message.as_deref() == Some("disk full")
            })
            .times(1)
            .returning(|_| Ok(1));

        let service = StatusService::new(repo);
        assert_eq!(
            service.mark_failed(3, "disk full").await.unwrap(),
            UpdateOutcome::Updated
        );
    }

    #[tokio::test]
    async fn test_mark_error_sets_message() {
        let mut repo = MockStatusRepository::new();
        repo.expect_apply()
            .withf(|u| {
                u.id == 5
                    && u.status == JobStatus::Error
                    && u.error_message.as_deref() == Some("decode error")
            })
            .times(1)
            .returning(|_| Ok(1));

        let service = StatusService::new(repo);
        assert_eq!(
            service.mark_error(5, "decode error").await.unwrap(),
            UpdateOutcome::Updated
        );
    }

    #[tokio::test]
    async fn test_missing_record_is_not_an_error() {
        let mut repo = MockStatusRepository::new();
        repo.expect_apply().times(3).returning(|_| Ok(0));

        let service = StatusService::new(repo);
        assert_eq!(service.mark_completed(999).await.unwrap(), UpdateOutcome::NotFound);
        assert_eq!(
            service.mark_failed(999, "x").await.unwrap(),
            UpdateOutcome::NotFound
        );
        assert_eq!(
            service.mark_error(999, "x").await.unwrap(),
            UpdateOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_returned_and_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut repo = MockStatusRepository::new();
        repo.expect_apply()
            .times(1)
            .returning(|_| Err(StatusError::Connect(sqlx::Error::PoolTimedOut)));

        let service = StatusService::new(repo);
        let result = service.mark_failed(1, "disk full").await;
        assert!(matches!(result, Err(StatusError::Connect(_))));

        let output = logs.contents();
        assert!(output.contains("ERROR"), "missing error line: {}", output);
        assert!(output.contains("Failed to update status to 'failed' for ID 1: Connection error"));
    }
}
