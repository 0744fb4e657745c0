//! # Storage Layer
//!
//! The [`DataStore`] trait is everything the catalog needs from persistence:
//! read the saved books once at startup, and overwrite them after every change.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage
//!   - All books in a single pretty-printed JSON array (`books.json`)
//!   - Writes go to a temp file first and are renamed into place
//!   - A missing file loads as an empty catalog
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert on write behavior
//!
//! ## Storage Format
//!
//! ```text
//! books.json
//! [
//!   { "id": 1, "name": "Go", "description": "systems", "inStock": true },
//!   ...
//! ]
//! ```
//!
//! The order of the array is the catalog order, including the order left by
//! the last explicit sort.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for book persistence.
pub trait DataStore {
    /// Load every saved book in stored order. Empty when nothing was saved yet.
    fn load_books(&self) -> Result<Vec<Book>>;

    /// Replace the saved books with `books`.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;
}
