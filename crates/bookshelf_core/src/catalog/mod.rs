//! Catalog layer over validated books.
//!
//! # Responsibility
//! - Own the in-memory book collection and its query operations.
//!
//! # Invariants
//! - The catalog trusts `Book` construction and never re-validates fields.
//! - All query paths are total: misses return empty results, not errors.

pub mod book_catalog;
