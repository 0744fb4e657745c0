use crate::catalog::Catalog;
use crate::commands::{BookInput, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::history::HistoryLog;
use crate::store::DataStore;

pub fn run<S: DataStore, H: HistoryLog>(
    catalog: &mut Catalog<S, H>,
    id: u64,
    input: BookInput,
) -> Result<CmdResult> {
    let book = catalog
        .update(id, input.name, input.description, input.in_stock)?
        .ok_or(ShelfError::BookNotFound(id))?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Book updated ({}): {}",
            book.id, book.name
        )))
        .with_affected_books(vec![book]))
}
