use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save fails, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> &[Book] {
        &self.books
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_saves {
            return Err(ShelfError::Store("save rejected by in-memory store".to_string()));
        }
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
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
                next_id: 1,
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Test Book {}", i + 1);
                let description = format!("Description for book {}", i + 1);
                self = self.with_book(&name, &description, i % 2 == 0);
            }
            self
        }

        pub fn with_book(mut self, name: &str, description: &str, in_stock: bool) -> Self {
            self.store.books.push(Book::new(
                self.next_id,
                name.to_string(),
                description.to_string(),
                in_stock,
            ));
            self.next_id += 1;
            self
        }

        pub fn with_book_id(mut self, id: u64, name: &str, description: &str, in_stock: bool) -> Self {
            self.store
                .books
                .push(Book::new(id, name.to_string(), description.to_string(), in_stock));
            self.next_id = self.next_id.max(id.saturating_add(1));
            self
        }
    }
}
