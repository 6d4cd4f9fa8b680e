use bookshelf_core::{Book, BookCatalog};

fn book(title: &str, author: &str, year: i32) -> Book {
    Book::new(title, author, year).unwrap()
}

fn titles(books: &[&Book]) -> Vec<String> {
    books.iter().map(|book| book.title().to_string()).collect()
}

fn sample_catalog() -> BookCatalog {
    BookCatalog::with_books([
        book("Pemrograman Python", "Andi", 2020),
        book("Basis Data", "Erlangga", 2021),
        book("Algoritma", "Andi", 2020),
    ])
}

#[test]
fn empty_catalog_reports_nothing() {
    let mut catalog = BookCatalog::new();

    assert_eq!(catalog.book_count(), 0);
    assert!(catalog.all_books().is_empty());
    assert!(!catalog.remove_book("Any Book"));
    assert_eq!(catalog.book_count(), 0);
}

#[test]
fn add_book_increments_count() {
    let mut catalog = BookCatalog::new();
    catalog.add_book(book("Pemrograman", "Andi", 2020));

    assert_eq!(catalog.book_count(), 1);
}

#[test]
fn all_books_preserves_insertion_order() {
    let mut catalog = BookCatalog::new();
    let books = [
        book("A", "Author1", 2020),
        book("B", "Author2", 2021),
        book("C", "Author3", 2022),
    ];
    for b in books.iter().cloned() {
        catalog.add_book(b);
    }

    assert_eq!(catalog.book_count(), 3);
    assert_eq!(catalog.all_books(), &books[..]);
}

#[test]
fn all_books_contains_added_values() {
    let first = book("Pemrograman Python", "Andi", 2020);
    let second = book("Basis Data", "Erlangga", 2021);
    let catalog = BookCatalog::with_books([first.clone(), second.clone()]);

    let all = catalog.all_books();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));
}

#[test]
fn duplicate_books_are_kept() {
    let mut catalog = BookCatalog::new();
    let python = book("Python", "Andi", 2020);
    catalog.add_book(python.clone());
    catalog.add_book(python);

    assert_eq!(catalog.book_count(), 2);
}

#[test]
fn remove_existing_book() {
    let mut catalog = BookCatalog::new();
    catalog.add_book(book("Basis Data", "Erlangga", 2021));

    assert!(catalog.remove_book("Basis Data"));
    assert_eq!(catalog.book_count(), 0);
}

#[test]
fn remove_non_existing_book_returns_false() {
    let mut catalog = sample_catalog();

    assert!(!catalog.remove_book("Buku Tidak Ada"));
    assert_eq!(catalog.book_count(), 3);
}

#[test]
fn remove_keeps_relative_order_of_remaining_books() {
    let mut catalog = sample_catalog();

    assert!(catalog.remove_book("Basis Data"));
    let remaining = catalog.all_books().iter().collect::<Vec<_>>();
    assert_eq!(titles(&remaining), vec!["Pemrograman Python", "Algoritma"]);
}

#[test]
fn remove_takes_first_duplicate_then_next() {
    let mut catalog = BookCatalog::with_books([
        book("Python", "Andi", 2020),
        book("Java", "Budi", 2021),
        book("Python", "Citra", 2022),
    ]);

    assert!(catalog.remove_book("Python"));
    assert_eq!(catalog.book_count(), 2);
    assert_eq!(catalog.all_books()[0].author(), "Budi");
    assert_eq!(catalog.all_books()[1].author(), "Citra");

    assert!(catalog.remove_book("Python"));
    assert_eq!(catalog.book_count(), 1);
    assert!(!catalog.remove_book("Python"));
    assert_eq!(catalog.all_books()[0].title(), "Java");
}

#[test]
fn find_books_by_author_counts_matches() {
    let catalog = sample_catalog();

    assert_eq!(catalog.find_books_by_author("Andi").len(), 2);
    assert_eq!(catalog.find_books_by_author("Erlangga").len(), 1);
}

#[test]
fn find_books_by_author_keeps_insertion_order() {
    let catalog = sample_catalog();

    let found = catalog.find_books_by_author("Andi");
    assert_eq!(titles(&found), vec!["Pemrograman Python", "Algoritma"]);
}

#[test]
fn find_books_by_author_ignores_case() {
    let catalog = BookCatalog::with_books([
        book("Python", "Andi", 2020),
        book("Java", "andi", 2021),
    ]);

    assert_eq!(catalog.find_books_by_author("ANDI").len(), 2);
    assert_eq!(catalog.find_books_by_author("aNdI").len(), 2);
}

#[test]
fn find_books_by_author_without_match_is_empty() {
    let mut catalog = BookCatalog::new();
    catalog.add_book(book("Python", "Andi", 2020));

    assert!(catalog.find_books_by_author("Budi").is_empty());
    assert!(BookCatalog::new().find_books_by_author("Andi").is_empty());
}

#[test]
fn find_books_by_year_matches_exactly() {
    let catalog = BookCatalog::with_books([
        book("Python", "Andi", 2020),
        book("Java", "Budi", 2021),
        book("C++", "Andi", 2020),
    ]);

    let found = catalog.find_books_by_year(2020);
    assert_eq!(titles(&found), vec!["Python", "C++"]);
    assert!(catalog.find_books_by_year(2019).is_empty());
}

#[test]
fn sample_catalog_year_query() {
    assert_eq!(sample_catalog().find_books_by_year(2020).len(), 2);
}

#[test]
fn large_dataset_supports_every_author() {
    let mut catalog = BookCatalog::new();
    for i in 0..1000 {
        catalog.add_book(book(
            &format!("Book {i}"),
            &format!("Author {}", i % 10),
            2000 + i % 21,
        ));
    }

    assert_eq!(catalog.book_count(), 1000);
    for author in 0..10 {
        let found = catalog.find_books_by_author(&format!("Author {author}"));
        assert_eq!(found.len(), 100);
    }
}

#[test]
fn catalog_collects_from_iterator() {
    let catalog = ["X", "Y"]
        .into_iter()
        .map(|title| book(title, "Andi", 2030))
        .collect::<BookCatalog>();

    assert_eq!(catalog.book_count(), 2);
    assert!(!catalog.is_empty());
}
