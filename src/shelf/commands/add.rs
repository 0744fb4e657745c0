use crate::catalog::Catalog;
use crate::commands::{BookInput, CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::HistoryLog;
use crate::store::DataStore;

pub fn run<S: DataStore, H: HistoryLog>(
    catalog: &mut Catalog<S, H>,
    input: BookInput,
) -> Result<CmdResult> {
    let book = catalog.add(input.name, input.description, input.in_stock)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.name
    )));
    result.affected_books.push(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_book_with_next_id() {
        let mut catalog = Catalog::open(InMemoryStore::new(), MemoryHistory::new()).unwrap();
        let input = BookInput::parse("Dune", "spice", "yes").unwrap();

        let result = run(&mut catalog, input).unwrap();
        assert_eq!(result.affected_books[0].id, 1);
        assert_eq!(result.messages[0].content, "Book added (1): Dune");
        assert_eq!(catalog.len(), 1);
    }
}
