use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::HistoryLog;
use crate::store::DataStore;

/// Which books a delete applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteCriteria {
    Id(u64),
    /// Case-insensitive substring of the name.
    Name(String),
    /// Case-insensitive substring of the description.
    Description(String),
    Stock(bool),
}

pub fn run<S: DataStore, H: HistoryLog>(
    catalog: &mut Catalog<S, H>,
    criteria: &DeleteCriteria,
) -> Result<CmdResult> {
    let ids: Vec<u64> = match criteria {
        DeleteCriteria::Id(id) => catalog.find_by_id(*id).map(|b| b.id).into_iter().collect(),
        DeleteCriteria::Name(text) => catalog.find_by_name(text).iter().map(|b| b.id).collect(),
        DeleteCriteria::Description(text) => catalog
            .find_by_description(text)
            .iter()
            .map(|b| b.id)
            .collect(),
        DeleteCriteria::Stock(in_stock) => catalog
            .find_by_stock(*in_stock)
            .iter()
            .map(|b| b.id)
            .collect(),
    };

    let mut result = CmdResult::default();
    if ids.is_empty() {
        result.add_message(CmdMessage::warning("Book not found."));
        return Ok(result);
    }

    for id in ids {
        let Some(book) = catalog.find_by_id(id).cloned() else {
            continue;
        };
        if catalog.delete(id)? {
            result.add_message(CmdMessage::success(format!(
                "Book deleted ({}): {}",
                book.id, book.name
            )));
            result.affected_books.push(book);
        }
    }

    Ok(result)
}
