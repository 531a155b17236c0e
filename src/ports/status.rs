use crate::domain::status::StatusUpdate;
use crate::error::StatusError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Apply a single status update and commit it.
    /// Returns the number of rows affected (0 when the id does not exist).
    async fn apply(&self, update: &StatusUpdate) -> Result<u64, StatusError>;
}
