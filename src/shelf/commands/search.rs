use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &Catalog<S>, query: &str) -> Result<CmdResult> {
    let found = catalog.search_books(query);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_books(found))
}
