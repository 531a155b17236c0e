//! Video Janitor - Maintenance tools for the video processing pipeline
//!
//! Hexagonal Architecture:
//! - domain/: Pure business logic (job status, sweep rules)
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations (MySQL)
//! - application/: Services (cleanup sweeper, status updater)
//! - config: Environment configuration
//!
//! # Binaries
//! - `cleanup`: one sweep of the video directory, deleting expired files
//! - `job-status`: mark a processing record as completed, failed or error

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use adapters::MySqlStatusRepository;
pub use application::{StatusService, Sweeper};
pub use config::{DatabaseConfig, SweepConfig};
pub use domain::status::{JobStatus, StatusUpdate, UpdateOutcome};
pub use error::{ConfigError, StatusError};
