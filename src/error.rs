//! Error types shared by the configuration and status updater layers.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed
    Invalid { var: &'static str, value: String },
    /// Table names are interpolated into SQL and must be plain identifiers
    InvalidTable(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => {
                write!(f, "Invalid value for {}: {:?}", var, value)
            }
            ConfigError::InvalidTable(name) => write!(f, "Invalid table name: {:?}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum StatusError {
    /// Could not open a connection (unreachable host, bad credentials)
    Connect(sqlx::Error),
    /// The connection opened but the update or commit failed
    Execute(sqlx::Error),
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusError::Connect(e) => write!(f, "Connection error: {}", e),
            StatusError::Execute(e) => write!(f, "Execution error: {}", e),
        }
    }
}

impl std::error::Error for StatusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusError::Connect(e) => Some(e),
            StatusError::Execute(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for StatusError {
    fn from(err: sqlx::Error) -> Self {
        StatusError::Execute(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_status_error_display_and_source() {
        let err = StatusError::Connect(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("Connection error:"));
        assert!(err.source().is_some());

        let err: StatusError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StatusError::Execute(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "DB_PORT",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for DB_PORT: \"abc\"");
    }
}
