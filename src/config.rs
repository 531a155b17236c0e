//! Configuration for the sweeper and the status updater.
//!
//! Both are read from environment variables, with `.env` loaded first when present.

use crate::error::ConfigError;
use regex::Regex;
use sqlx::mysql::MySqlConnectOptions;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 48 hours
pub const DEFAULT_MAX_AGE_SECS: u64 = 48 * 60 * 60;
/// Suffix the production sweep has always filtered on.
pub const DEFAULT_VIDEO_SUFFIX: &str = ".,p4";
pub const DEFAULT_TABLE: &str = "videos_processed";

/// Configuration for the cleanup sweep.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Directory holding output videos (not walked recursively)
    pub video_dir: PathBuf,
    /// Files strictly older than this are deleted
    pub max_age: Duration,
    /// Exact filename suffix a file must end with to be considered
    pub suffix: String,
}

impl SweepConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_age_secs = match lookup("VIDEO_MAX_AGE_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "VIDEO_MAX_AGE_SECS",
                value,
            })?,
            None => DEFAULT_MAX_AGE_SECS,
        };

        Ok(Self {
            video_dir: PathBuf::from(
                lookup("VIDEO_DIR").unwrap_or_else(|| String::from("../client/public/videos")),
            ),
            max_age: Duration::from_secs(max_age_secs),
            suffix: lookup("VIDEO_SUFFIX").unwrap_or_else(|| String::from(DEFAULT_VIDEO_SUFFIX)),
        })
    }
}

/// Connection settings for the video status database.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Table holding the processing records
    pub table: String,
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("DB_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "DB_PORT", value })?,
            None => 3306,
        };

        let table = lookup("DB_TABLE").unwrap_or_else(|| String::from(DEFAULT_TABLE));
        validate_identifier(&table)?;

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or_else(|| String::from("127.0.0.1")),
            port,
            user: lookup("DB_USER").unwrap_or_else(|| String::from("root")),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: lookup("DB_NAME").unwrap_or_else(|| String::from("videos")),
            table,
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

fn validate_identifier(name: &str) -> Result<(), ConfigError> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").map_err(|_| {
        ConfigError::InvalidTable(name.to_string())
    })?;
    if re.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTable(name.to_string()))
    }
}
