//! tm-db: Owned NPC database for taskmaker
//!
//! Builds an owned, serializable copy of the static tables, checks it
//! against the data invariants and moves it to and from JSON files.

use thiserror::Error;

pub mod config;
pub mod io;
pub mod model;
pub mod validate;

pub use config::{Config, ConfigError};
pub use io::{DB_VERSION, DbFile, DbHeader, load_database, load_header, save_database};
pub use model::Database;
pub use validate::{ValidationReport, Violation, validate_static};

/// Database load/save errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database file not found")]
    NotFound,

    #[error("Invalid database file header")]
    InvalidHeader,

    #[error("Incompatible database version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid database: {0}")]
    Invalid(ValidationReport),
}
