use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &mut Catalog<S>, id: BookId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match catalog.delete_book(id)? {
        Some(book) => {
            result.add_message(CmdMessage::success(format!(
                "Book deleted ({}): {}",
                book.id, book.title
            )));
            result.affected_books.push(book);
        }
        None => result.add_message(CmdMessage::warning(format!(
            "No book with id {} found.",
            id
        ))),
    }

    Ok(result)
}
