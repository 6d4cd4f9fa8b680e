//! Book domain model.
//!
//! # Responsibility
//! - Define the validated, immutable record stored by the catalog.
//! - Report construction failures through one error kind.
//!
//! # Invariants
//! - `title` is never empty or whitespace-only.
//! - `year` is within `Book::MIN_YEAR..=Book::MAX_YEAR`.
//! - Fields are read-only after construction; there are no setters.
//! - `author` is free text and is not validated.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error category shared by every validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied a value that violates a construction invariant.
    InvalidArgument,
}

/// Validation error returned by [`Book::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Year falls outside the inclusive supported range.
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

impl BookValidationError {
    /// Returns the error category. Always [`ErrorKind::InvalidArgument`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "invalid argument: title cannot be empty"),
            Self::YearOutOfRange { year, min, max } => write!(
                f,
                "invalid argument: year {year} must be between {min} and {max}"
            ),
        }
    }
}

impl Error for BookValidationError {}

/// One catalog entry.
///
/// Two books are equal when title, author and year are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BookFields")]
pub struct Book {
    title: String,
    author: String,
    year: i32,
}

impl Book {
    /// Earliest accepted publication year (inclusive).
    pub const MIN_YEAR: i32 = 2000;
    /// Latest accepted publication year (inclusive).
    pub const MAX_YEAR: i32 = 2100;

    /// Creates a validated book.
    ///
    /// The title is stored exactly as given; only the emptiness check trims it.
    ///
    /// # Errors
    /// - [`BookValidationError::EmptyTitle`] when `title` is empty or blank.
    /// - [`BookValidationError::YearOutOfRange`] when `year` is outside
    ///   `MIN_YEAR..=MAX_YEAR`.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Self, BookValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            debug!("event=book_validate module=model status=error reason=empty_title");
            return Err(BookValidationError::EmptyTitle);
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            debug!(
                "event=book_validate module=model status=error reason=year_out_of_range year={}",
                year
            );
            return Err(BookValidationError::YearOutOfRange {
                year,
                min: Self::MIN_YEAR,
                max: Self::MAX_YEAR,
            });
        }

        Ok(Self {
            title,
            author: author.into(),
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.author, self.year)
    }
}

/// Unvalidated wire shape; deserialization goes through `Book::new`.
#[derive(Deserialize)]
struct BookFields {
    title: String,
    author: String,
    year: i32,
}

impl TryFrom<BookFields> for Book {
    type Error = BookValidationError;

    fn try_from(value: BookFields) -> Result<Self, Self::Error> {
        Book::new(value.title, value.author, value.year)
    }
}
