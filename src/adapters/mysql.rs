//! MySQL StatusRepository implementation.
//!
//! Every call opens its own connection and drops it before returning; nothing
//! is pooled or shared between calls.

use crate::config::DatabaseConfig;
use crate::domain::status::StatusUpdate;
use crate::error::StatusError;
use crate::ports::status::StatusRepository;
use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};

#[derive(Clone)]
pub struct MySqlStatusRepository {
    options: MySqlConnectOptions,
    update_sql: String,
}

impl MySqlStatusRepository {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            options: config.connect_options(),
            update_sql: update_statement(&config.table),
        }
    }
}

/// `table` has already been validated as a plain identifier by `DatabaseConfig`.
fn update_statement(table: &str) -> String {
    format!(
        "UPDATE `{}` SET status = ?, error_message = ? WHERE id = ?",
        table
    )
}

#[async_trait]
impl StatusRepository for MySqlStatusRepository {
    async fn apply(&self, update: &StatusUpdate) -> Result<u64, StatusError> {
        let mut conn = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(StatusError::Connect)?;

        // On any early return the transaction rolls back and the socket closes on drop.
        let mut tx = conn.begin().await?;
        let result = sqlx::query(&self.update_sql)
            .bind(update.status.as_str())
            .bind(update.error_message.as_deref())
            .bind(update.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        if let Err(e) = conn.close().await {
            tracing::debug!("Closing connection after update of id {} failed: {}", update.id, e);
        }

        Ok(result.rows_affected())
    }
}
