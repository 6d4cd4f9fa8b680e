//! Core domain logic for Bookshelf.
//! This crate is the single source of truth for book validation and catalog
//! queries.

pub mod catalog;
pub mod logging;
pub mod model;

pub use catalog::book_catalog::BookCatalog;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::book::{Book, BookValidationError, ErrorKind};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
