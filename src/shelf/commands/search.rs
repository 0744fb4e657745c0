use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::field::{Field, MatchMode};
use crate::history::HistoryLog;
use crate::store::DataStore;

pub fn run<S: DataStore, H: HistoryLog>(
    catalog: &Catalog<S, H>,
    field: Field,
    value: &str,
    mode: MatchMode,
) -> Result<CmdResult> {
    let found = match mode {
        MatchMode::Partial => catalog.search_by(field, value),
        MatchMode::Exact => catalog.search_exact(field, value),
    };

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::warning("No books found."));
    }
    Ok(result.with_listed_books(found.into_books()))
}
