use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::HistoryLog;
use crate::store::DataStore;

pub fn run<S: DataStore, H: HistoryLog>(catalog: &Catalog<S, H>) -> Result<CmdResult> {
    match catalog.history_log()? {
        Some(content) => Ok(CmdResult::default().with_history(content)),
        None => Ok(CmdResult::default().with_message(CmdMessage::info("Log file does not exist."))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_missing_history() {
        let catalog = Catalog::open(InMemoryStore::new(), MemoryHistory::new()).unwrap();
        let result = run(&catalog).unwrap();
        assert!(result.history.is_none());
        assert_eq!(result.messages[0].content, "Log file does not exist.");
    }

    #[test]
    fn returns_history_verbatim() {
        let mut catalog = Catalog::open(InMemoryStore::new(), MemoryHistory::new()).unwrap();
        catalog.add("Go", "systems", true).unwrap();
        catalog.delete(1).unwrap();

        let history = run(&catalog).unwrap().history.unwrap();
        let lines: Vec<_> = history.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("Deleted book: Go"));
    }
}
