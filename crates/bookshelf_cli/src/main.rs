//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bookshelf_core` linkage.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Logging is enabled only when `BOOKSHELF_LOG_DIR` is set.

use bookshelf_core::{init_logging, Book, BookCatalog, BookValidationError, LoggingConfig};
use log::info;
use std::process::ExitCode;

const DEMO_BOOKS: &[(&str, &str, i32)] = &[
    ("Pemrograman Python", "Andi", 2020),
    ("Basis Data", "Erlangga", 2021),
    ("Algoritma", "Andi", 2020),
];

fn main() -> ExitCode {
    println!("bookshelf_core ping={}", bookshelf_core::ping());
    println!("bookshelf_core version={}", bookshelf_core::core_version());

    match LoggingConfig::from_env().and_then(|config| match config {
        Some(config) => init_logging(&config).map(|()| true),
        None => Ok(false),
    }) {
        Ok(enabled) => println!("logging enabled={enabled}"),
        Err(err) => {
            eprintln!("logging init failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let catalog = match demo_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("demo catalog rejected: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "event=cli_demo module=cli status=ok count={}",
        catalog.book_count()
    );

    println!("books count={}", catalog.book_count());
    for book in catalog.find_books_by_author("andi") {
        println!("author=andi {book}");
    }
    for book in catalog.find_books_by_year(2021) {
        println!("year=2021 {book}");
    }

    ExitCode::SUCCESS
}

fn demo_catalog() -> Result<BookCatalog, BookValidationError> {
    DEMO_BOOKS
        .iter()
        .map(|&(title, author, year)| Book::new(title, author, year))
        .collect()
}
