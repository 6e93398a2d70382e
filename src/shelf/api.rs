//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for every UI (the interactive menu and
//! the one-shot subcommands alike). It owns the [`Catalog`] and:
//! - **Normalizes inputs**: raw user strings become `BookId`, `i32` years and
//!   `BookStatus` values here, so nothing past this layer sees untyped input
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`), never text for a terminal
//!
//! Invalid input is reported as [`ShelfError::InvalidInput`] or
//! [`ShelfError::InvalidStatus`] before the catalog is touched.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::{Result, ShelfError};
use crate::model::{BookId, BookStatus};
use crate::store::DataStore;

pub struct ShelfApi<S: DataStore> {
    catalog: Catalog<S>,
}

impl<S: DataStore> ShelfApi<S> {
    /// Load the catalog from `store`. Fails if the stored catalog is malformed.
    pub fn new(store: S) -> Result<Self> {
        let catalog = Catalog::load(store)?;
        Ok(Self { catalog })
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: &str) -> Result<CmdResult> {
        let year = parse_year(year)?;
        commands::add::run(&mut self.catalog, title.to_string(), author.to_string(), year)
    }

    pub fn delete_book(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.catalog, id)
    }

    pub fn search_books(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.catalog, query)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn change_status(&mut self, id: &str, status: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        let status: BookStatus = status.parse()?;
        commands::status::run(&mut self.catalog, id, status)
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }
}

pub fn parse_id(input: &str) -> Result<BookId> {
    let input = input.trim();
    input
        .parse::<BookId>()
        .map_err(|_| ShelfError::InvalidInput(format!("'{}' is not a valid book id", input)))
}

pub fn parse_year(input: &str) -> Result<i32> {
    let input = input.trim();
    input
        .parse::<i32>()
        .map_err(|_| ShelfError::InvalidInput(format!("'{}' is not a valid year", input)))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShelfPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    fn api_with(store: InMemoryStore) -> ShelfApi<InMemoryStore> {
        ShelfApi::new(store).unwrap()
    }

    #[test]
    fn add_parses_year() {
        let mut api = api_with(InMemoryStore::new());
        let result = api.add_book("Dune", "Herbert", " 1965 ").unwrap();
        let book = &result.affected_books[0];
        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, 1965);
    }

    #[test]
    fn add_rejects_non_numeric_year() {
        let mut api = api_with(InMemoryStore::new());
        let err = api.add_book("Dune", "Herbert", "nineteen").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidInput(_)));
        assert!(api.catalog().is_empty());
    }

    #[test]
    fn delete_rejects_non_integer_id() {
        let mut api = api_with(StoreFixture::new().with_books(1).store);
        for bad in ["abc", "1.5", "-1", ""] {
            assert!(matches!(
                api.delete_book(bad),
                Err(ShelfError::InvalidInput(_))
            ));
        }
        assert_eq!(api.catalog().len(), 1);
    }

    #[test]
    fn change_status_validates_status_before_touching_catalog() {
        let mut api = api_with(StoreFixture::new().with_books(1).store);
        let err = api.change_status("1", "borrowed").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidStatus(_)));
        assert_eq!(api.catalog().store().save_count(), 0);

        let result = api.change_status("1", "checked-out").unwrap();
        assert_eq!(result.affected_books[0].status, BookStatus::CheckedOut);
    }

    #[test]
    fn search_and_list_dispatch() {
        let api = api_with(
            StoreFixture::new()
                .with_book("Dune", "Herbert", 1965)
                .with_book("Foundation", "Asimov", 1951)
                .store,
        );
        assert_eq!(api.search_books("asimov").unwrap().listed_books.len(), 1);
        assert_eq!(api.list_books().unwrap().listed_books.len(), 2);
    }
}
