//! Domain layer - Pure business logic.

pub mod status;
pub mod sweep;
