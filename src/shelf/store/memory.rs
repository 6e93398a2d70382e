use super::DataStore;
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the catalog has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{BookId, BookStatus};

    /// Builds a pre-populated store without going through the catalog, so
    /// fixtures never count as saves.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn next_id(&self) -> BookId {
            self.store.books.iter().map(|b| b.id).max().unwrap_or(0) + 1
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.next_id();
                self.store.books.push(Book::new(
                    id,
                    format!("Test Book {}", i + 1),
                    format!("Test Author {}", i + 1),
                    2000 + i as i32,
                ));
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let id = self.next_id();
            self.store
                .books
                .push(Book::new(id, title.to_string(), author.to_string(), year));
            self
        }

        pub fn with_checked_out_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let id = self.next_id();
            let mut book = Book::new(id, title.to_string(), author.to_string(), year);
            book.status = BookStatus::CheckedOut;
            self.store.books.push(book);
            self
        }

        /// Inserts a record verbatim, including ids that collide with existing ones.
        pub fn with_raw_book(mut self, book: Book) -> Self {
            self.store.books.push(book);
            self
        }
    }
}
