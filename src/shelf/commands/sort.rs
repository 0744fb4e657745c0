use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::field::{Field, SortOrder};
use crate::history::HistoryLog;
use crate::store::DataStore;

pub fn run<S: DataStore, H: HistoryLog>(
    catalog: &mut Catalog<S, H>,
    field: Field,
    order: SortOrder,
) -> Result<CmdResult> {
    let sorted = catalog.sort_by(field, order)?.to_vec();
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "Books sorted by {} in {} order",
            field, order
        )))
        .with_listed_books(sorted))
}
