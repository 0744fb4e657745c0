//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every shelf operation, whatever the UI.
//!
//! The API facade:
//! - **Normalizes inputs**: raw strings become ids, [`Field`]s, [`SortOrder`]s,
//!   stock flags and delete criteria
//! - **Dispatches** to the matching `commands::<name>::run`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic. Validation of book attributes
//! lives in [`BookInput`](crate::commands::BookInput).
//!
//! `ShelfApi<S, H>` is generic over the storage and history backends:
//! - Production: `ShelfApi<JsonFileStore, FileHistory>`
//! - Testing: `ShelfApi<InMemoryStore, MemoryHistory>`

use crate::catalog::Catalog;
use crate::commands::{self, parse_yes_no, BookInput, DeleteCriteria};
use crate::error::{Result, ShelfError};
use crate::field::{Field, MatchMode, SortOrder};
use crate::history::HistoryLog;
use crate::store::DataStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::search::SearchResult;

pub struct ShelfApi<S: DataStore, H: HistoryLog> {
    catalog: Catalog<S, H>,
}

impl<S: DataStore, H: HistoryLog> ShelfApi<S, H> {
    pub fn new(catalog: Catalog<S, H>) -> Self {
        Self { catalog }
    }

    pub fn open(store: S, history: H) -> Result<Self> {
        Ok(Self::new(Catalog::open(store, history)?))
    }

    pub fn catalog(&self) -> &Catalog<S, H> {
        &self.catalog
    }

    pub fn add_book(
        &mut self,
        name: &str,
        description: &str,
        in_stock: &str,
    ) -> Result<commands::CmdResult> {
        let input = BookInput::parse(name, description, in_stock)?;
        commands::add::run(&mut self.catalog, input)
    }

    pub fn update_book(
        &mut self,
        id: &str,
        name: &str,
        description: &str,
        in_stock: &str,
    ) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        if self.catalog.find_by_id(id).is_none() {
            return Err(ShelfError::BookNotFound(id));
        }
        let input = BookInput::parse(name, description, in_stock)?;
        commands::update::run(&mut self.catalog, id, input)
    }

    pub fn delete_books(&mut self, criteria: &str, value: &str) -> Result<commands::CmdResult> {
        let criteria = parse_delete_criteria(criteria, value)?;
        commands::delete::run(&mut self.catalog, &criteria)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn view_book(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.catalog, parse_id(id)?)
    }

    pub fn sort_books(&mut self, field: &str, order: &str) -> Result<commands::CmdResult> {
        let field: Field = field.parse()?;
        let order: SortOrder = order.parse()?;
        commands::sort::run(&mut self.catalog, field, order)
    }

    pub fn search_books(
        &self,
        field: &str,
        value: &str,
        exact: bool,
    ) -> Result<commands::CmdResult> {
        let field: Field = field.parse()?;
        let mode = if exact {
            MatchMode::Exact
        } else {
            MatchMode::Partial
        };
        commands::search::run(&self.catalog, field, value, mode)
    }

    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::run(&self.catalog)
    }
}

fn parse_id(input: &str) -> Result<u64> {
    input
        .trim()
        .parse()
        .map_err(|_| ShelfError::Invalid(format!("Invalid book id: {}", input)))
}

fn parse_delete_criteria(criteria: &str, value: &str) -> Result<DeleteCriteria> {
    match criteria.trim().to_ascii_lowercase().as_str() {
        "id" => Ok(DeleteCriteria::Id(parse_id(value)?)),
        "name" => Ok(DeleteCriteria::Name(value.to_string())),
        "description" => Ok(DeleteCriteria::Description(value.to_string())),
        "stock" | "instock" | "in_stock" => Ok(DeleteCriteria::Stock(parse_yes_no(value)?)),
        _ => Err(ShelfError::Invalid(format!(
            "Invalid criteria: {} (expected name, description, stock or id)",
            criteria
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShelfApi<InMemoryStore, MemoryHistory> {
        let fixture = StoreFixture::new()
            .with_book("Go", "systems", true)
            .with_book("Rust", "memory-safe", false);
        ShelfApi::open(fixture.store, MemoryHistory::new()).unwrap()
    }

    #[test]
    fn add_validates_before_touching_catalog() {
        let mut api = api();
        assert!(matches!(
            api.add_book("", "d", "yes"),
            Err(ShelfError::Invalid(_))
        ));
        assert!(matches!(
            api.add_book("n", "d", "sure"),
            Err(ShelfError::Invalid(_))
        ));
        assert_eq!(api.catalog().len(), 2);

        api.add_book("Zig", "simple", "no").unwrap();
        assert_eq!(api.catalog().len(), 3);
    }

    #[test]
    fn update_checks_id_first() {
        let mut api = api();
        assert!(matches!(
            api.update_book("9", "", "", ""),
            Err(ShelfError::BookNotFound(9))
        ));
        assert!(matches!(
            api.update_book("x", "a", "b", "yes"),
            Err(ShelfError::Invalid(_))
        ));

        api.update_book("1", "Go", "concurrency", "no").unwrap();
        assert_eq!(api.catalog().find_by_id(1).unwrap().description, "concurrency");
    }

    #[test]
    fn sort_rejects_unknown_field_and_order() {
        let mut api = api();
        assert!(matches!(
            api.sort_books("author", "asc"),
            Err(ShelfError::InvalidField(_))
        ));
        assert!(matches!(
            api.sort_books("name", "sideways"),
            Err(ShelfError::InvalidOrder(_))
        ));
        assert!(api.catalog().history().actions().is_empty());
    }

    #[test]
    fn sort_dispatches() {
        let mut api = api();
        let result = api.sort_books("inStock", "asc").unwrap();
        assert_eq!(result.listed_books[0].name, "Rust");
    }

    #[test]
    fn search_rejects_unknown_field() {
        let api = api();
        assert!(matches!(
            api.search_books("isbn", "1", false),
            Err(ShelfError::InvalidField(_))
        ));
    }

    #[test]
    fn search_dispatches_on_mode() {
        let api = api();
        assert_eq!(api.search_books("name", "us", false).unwrap().listed_books.len(), 1);
        assert!(api.search_books("name", "us", true).unwrap().listed_books.is_empty());
    }

    #[test]
    fn delete_parses_criteria() {
        let mut api = api();
        assert!(matches!(
            api.delete_books("colour", "red"),
            Err(ShelfError::Invalid(_))
        ));
        assert!(matches!(
            api.delete_books("stock", "perhaps"),
            Err(ShelfError::Invalid(_))
        ));

        api.delete_books("stock", "no").unwrap();
        assert_eq!(api.catalog().len(), 1);
        assert_eq!(api.catalog().books()[0].name, "Go");
    }

    #[test]
    fn view_parses_id() {
        let api = api();
        assert_eq!(api.view_book(" 2 ").unwrap().listed_books[0].name, "Rust");
        assert!(matches!(api.view_book("two"), Err(ShelfError::Invalid(_))));
    }

    #[test]
    fn history_dispatches() {
        let mut api = api();
        assert!(api.history().unwrap().history.is_none());
        api.delete_books("id", "1").unwrap();
        assert!(api.history().unwrap().history.unwrap().contains("Deleted book: Go"));
    }
}
