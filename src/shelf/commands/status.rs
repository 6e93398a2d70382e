use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookId, BookStatus};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    catalog: &mut Catalog<S>,
    id: BookId,
    status: BookStatus,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match catalog.change_status(id, status)? {
        Some(book) => {
            result.add_message(CmdMessage::success(format!(
                "Status changed ({}): {} is now {}",
                book.id, book.title, book.status
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
