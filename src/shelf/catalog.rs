//! # Catalog
//!
//! The authoritative in-memory collection of books.
//!
//! The catalog owns every [`Book`], hands out ids, and runs all lookups. It is
//! generic over its two collaborators:
//!
//! - a [`DataStore`] that receives the full collection after every change
//! - a [`HistoryLog`] that receives one line per change
//!
//! ## Write Order
//!
//! Each mutation is applied in memory first, then saved, then logged. If the
//! save or the log write fails the error is returned, but the in-memory change
//! stays applied and the catalog remains usable. A failed save skips the log line.
//!
//! ## Ids
//!
//! A new book gets `max(existing ids) + 1`, or `1` for an empty catalog. The
//! catalog also remembers the highest id it has ever seen, so an id freed by a
//! delete is not handed out again while the process lives.
//!
//! ## Order
//!
//! Books keep insertion order until [`Catalog::sort_by`] is called. A sort
//! replaces the order and saves it. Searches work on a sorted copy and never
//! change the order.

use crate::error::{Result, ShelfError};
use crate::field::{Field, MatchMode, SortOrder};
use crate::history::HistoryLog;
use crate::merge_sort::sort_books;
use crate::model::Book;
use crate::search::{search, SearchResult};
use crate::store::DataStore;

pub struct Catalog<S: DataStore, H: HistoryLog> {
    books: Vec<Book>,
    last_id: u64,
    store: S,
    history: H,
}

impl<S: DataStore, H: HistoryLog> Catalog<S, H> {
    /// Builds a catalog from whatever the store has saved.
    pub fn open(store: S, history: H) -> Result<Self> {
        let books = store.load_books()?;
        let last_id = books.iter().map(|b| b.id).max().unwrap_or(0);
        tracing::debug!(target: "shelf::catalog", books = books.len(), last_id, "Catalog opened");
        Ok(Self {
            books,
            last_id,
            store,
            history,
        })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn next_id(&self) -> Result<u64> {
        let current_max = self.books.iter().map(|b| b.id).max().unwrap_or(0);
        current_max
            .max(self.last_id)
            .checked_add(1)
            .ok_or(ShelfError::IdsExhausted)
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        in_stock: bool,
    ) -> Result<Book> {
        let id = self.next_id()?;
        let book = Book::new(id, name.into(), description.into(), in_stock);
        self.last_id = id;
        self.books.push(book.clone());

        self.commit(format!("Added book: {}", book.name))?;
        Ok(book)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_by_name(&self, text: &str) -> Vec<&Book> {
        self.find_text(Field::Name, text)
    }

    pub fn find_by_description(&self, text: &str) -> Vec<&Book> {
        self.find_text(Field::Description, text)
    }

    pub fn find_by_stock(&self, in_stock: bool) -> Vec<&Book> {
        self.books.iter().filter(|b| b.in_stock == in_stock).collect()
    }

    fn find_text(&self, field: Field, text: &str) -> Vec<&Book> {
        let needle = text.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                field
                    .text(b)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Overwrites all three mutable fields. `Ok(None)` if no book has `id`.
    pub fn update(
        &mut self,
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        in_stock: bool,
    ) -> Result<Option<Book>> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        book.name = name.into();
        book.description = description.into();
        book.in_stock = in_stock;
        let updated = book.clone();

        self.commit(format!("Updated book: {}", updated.name))?;
        Ok(Some(updated))
    }

    /// Removes the book with `id`. `Ok(false)` leaves the catalog untouched.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let Some(position) = self.books.iter().position(|b| b.id == id) else {
            return Ok(false);
        };
        let removed = self.books.remove(position);

        self.commit(format!("Deleted book: {}", removed.name))?;
        Ok(true)
    }

    /// Reorders the catalog with merge sort and saves the new order.
    pub fn sort_by(&mut self, field: Field, order: SortOrder) -> Result<&[Book]> {
        let books = std::mem::take(&mut self.books);
        self.books = sort_books(books, field, order);

        self.commit(format!(
            "Sorted books by {} in {} order using merge sort",
            field, order
        ))?;
        Ok(&self.books)
    }

    /// Substring search on text fields. See [`crate::search`].
    pub fn search_by(&self, field: Field, value: &str) -> SearchResult {
        search(&self.books, field, value, MatchMode::Partial)
    }

    /// Equality search on text fields. See [`crate::search`].
    pub fn search_exact(&self, field: Field, value: &str) -> SearchResult {
        search(&self.books, field, value, MatchMode::Exact)
    }

    pub fn history_log(&self) -> Result<Option<String>> {
        self.history.read()
    }

    fn commit(&mut self, action: String) -> Result<()> {
        if let Err(e) = self.store.save_books(&self.books) {
            tracing::warn!(target: "shelf::catalog", error = %e, action = %action, "Failed to save books");
            return Err(e);
        }
        if let Err(e) = self.history.append(&action) {
            tracing::warn!(target: "shelf::catalog", error = %e, action = %action, "Failed to append history");
            return Err(e);
        }
        tracing::info!(target: "shelf::catalog", books = self.books.len(), "{}", action);
        Ok(())
    }
}
