//! Domain model for catalog entries.
//!
//! # Responsibility
//! - Define the validated record type held by the catalog.
//!
//! # Invariants
//! - A `Book` value is valid for its whole lifetime; validation happens once,
//!   at construction.
//! - Identity is value equality over all fields; there is no surrogate ID.

pub mod book;
