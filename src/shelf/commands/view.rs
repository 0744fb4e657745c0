use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::history::HistoryLog;
use crate::store::DataStore;

pub fn run<S: DataStore, H: HistoryLog>(catalog: &Catalog<S, H>, id: u64) -> Result<CmdResult> {
    let book = catalog
        .find_by_id(id)
        .cloned()
        .ok_or(ShelfError::BookNotFound(id))?;
    Ok(CmdResult::default().with_listed_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_single_book() {
        let fixture = StoreFixture::new().with_books(3);
        let catalog = Catalog::open(fixture.store, MemoryHistory::new()).unwrap();

        let result = run(&catalog, 2).unwrap();
        assert_eq!(result.listed_books[0].name, "Test Book 2");
        assert!(matches!(run(&catalog, 4), Err(ShelfError::BookNotFound(4))));
    }
}
