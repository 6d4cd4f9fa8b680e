//! In-memory book catalog.
//!
//! # Responsibility
//! - Hold validated books in insertion order.
//! - Provide removal by title and linear-scan queries by author and year.
//!
//! # Invariants
//! - `book_count()` always equals the number of stored books.
//! - Insertion never deduplicates; value-equal books may coexist.
//! - Removal is stable: remaining books keep their relative order.
//! - Stored books are never mutated.

use crate::model::book::Book;
use log::debug;

/// Ordered, duplicate-permitting collection of books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding `books` in iteration order.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        books.into_iter().collect()
    }

    /// Appends a book. Always succeeds; duplicates are kept.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
        debug!(
            "event=book_add module=catalog status=ok count={}",
            self.books.len()
        );
    }

    /// Removes the first book whose title equals `title` exactly.
    ///
    /// Comparison is case-sensitive. Returns `false` when nothing matched,
    /// including on an empty catalog.
    pub fn remove_book(&mut self, title: &str) -> bool {
        let Some(index) = self.books.iter().position(|book| book.title() == title) else {
            debug!("event=book_remove module=catalog status=miss");
            return false;
        };

        self.books.remove(index);
        debug!(
            "event=book_remove module=catalog status=ok index={} count={}",
            index,
            self.books.len()
        );
        true
    }

    /// Number of stored books.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All stored books in insertion order, duplicates included.
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// Books whose author matches `author` ignoring case, in insertion order.
    ///
    /// Both sides are folded to uppercase before comparing, so non-ASCII
    /// letters match as well.
    pub fn find_books_by_author(&self, author: &str) -> Vec<&Book> {
        let needle = author.to_uppercase();
        let matches = self
            .books
            .iter()
            .filter(|book| book.author().to_uppercase() == needle)
            .collect::<Vec<_>>();
        debug!(
            "event=book_find module=catalog by=author hits={}",
            matches.len()
        );
        matches
    }

    /// Books published in exactly `year`, in insertion order.
    pub fn find_books_by_year(&self, year: i32) -> Vec<&Book> {
        let matches = self
            .books
            .iter()
            .filter(|book| book.year() == year)
            .collect::<Vec<_>>();
        debug!(
            "event=book_find module=catalog by=year year={} hits={}",
            year,
            matches.len()
        );
        matches
    }
}

impl FromIterator<Book> for BookCatalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Book> for BookCatalog {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        for book in iter {
            self.add_book(book);
        }
    }
}
