use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    catalog: &mut Catalog<S>,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdResult> {
    let book = catalog.add_book(title, author, year)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::BookStatus;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_the_new_record() {
        let mut catalog = Catalog::load(InMemoryStore::new()).unwrap();
        let result = run(&mut catalog, "Dune".into(), "Herbert".into(), 1965).unwrap();

        assert_eq!(result.affected_books.len(), 1);
        let book = &result.affected_books[0];
        assert_eq!(book.id, 1);
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Book added (1): Dune");
    }
}
