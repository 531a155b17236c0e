//! Adapters - Concrete implementations of ports.

pub mod mysql;

pub use mysql::MySqlStatusRepository;
