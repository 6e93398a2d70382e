use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_books(catalog.books().to_vec());
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new()
            .with_book("Dune", "Herbert", 1965)
            .with_book("Emma", "Austen", 1815)
            .store;
        let catalog = Catalog::load(store).unwrap();

        let result = run(&catalog).unwrap();
        let titles: Vec<_> = result.listed_books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Emma"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_says_so() {
        let catalog = Catalog::load(InMemoryStore::new()).unwrap();
        let result = run(&catalog).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "The catalog is empty.");
    }
}
