//! Application layer - Services built on the domain rules and ports.

pub mod status;
pub mod sweeper;

pub use status::StatusService;
pub use sweeper::Sweeper;
