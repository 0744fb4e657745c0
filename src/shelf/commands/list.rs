use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::HistoryLog;
use crate::store::DataStore;

pub fn run<S: DataStore, H: HistoryLog>(catalog: &Catalog<S, H>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_books(catalog.books().to_vec()))
}
