//! # Catalog Store
//!
//! [`Catalog`] is the authoritative in-memory copy of every book record. It is
//! loaded once from a [`DataStore`] when constructed and written back in full
//! after every mutation; reads never touch storage.
//!
//! Not-found is an ordinary outcome here: `delete_book` and `change_status`
//! return `Ok(None)` for an unknown id and leave both memory and storage
//! untouched. Only storage failures are errors.
//!
//! A catalog assumes it is the sole writer of its store. Two processes sharing
//! one file will overwrite each other's changes.

use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId, BookStatus};
use crate::store::DataStore;

pub struct Catalog<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> Catalog<S> {
    /// Load the catalog from `store`. A malformed store is a hard error.
    pub fn load(store: S) -> Result<Self> {
        let books = store.load_books()?;
        Ok(Self { store, books })
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save_books(&self.books)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ids are one past the highest id in use, so a deletion never lets a new
    /// record collide with a surviving one.
    fn next_id(&self) -> Result<BookId> {
        self.books
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| ShelfError::Store("id space exhausted".to_string()))
    }

    /// Every mutation goes through here: if the write fails, `undo` puts the
    /// in-memory catalog back the way it was.
    fn save_or_undo(&mut self, undo: impl FnOnce(&mut Vec<Book>)) -> Result<()> {
        if let Err(e) = self.store.save_books(&self.books) {
            undo(&mut self.books);
            return Err(e);
        }
        Ok(())
    }

    pub fn add_book(&mut self, title: String, author: String, year: i32) -> Result<Book> {
        let book = Book::new(self.next_id()?, title, author, year);
        self.books.push(book.clone());
        self.save_or_undo(|books| {
            books.pop();
        })?;
        tracing::info!(id = book.id, title = %book.title, "added book");
        Ok(book)
    }

    /// Remove the first record with `id`.
    pub fn delete_book(&mut self, id: BookId) -> Result<Option<Book>> {
        let Some(pos) = self.books.iter().position(|b| b.id == id) else {
            tracing::warn!(id, "delete: book not found");
            return Ok(None);
        };
        let removed = self.books.remove(pos);
        let restore = removed.clone();
        self.save_or_undo(move |books| books.insert(pos, restore))?;
        tracing::info!(id, title = %removed.title, "deleted book");
        Ok(Some(removed))
    }

    pub fn search_books(&self, query: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.matches(query))
            .cloned()
            .collect()
    }

    pub fn change_status(&mut self, id: BookId, status: BookStatus) -> Result<Option<Book>> {
        let Some(pos) = self.books.iter().position(|b| b.id == id) else {
            tracing::warn!(id, "change_status: book not found");
            return Ok(None);
        };
        let previous = std::mem::replace(&mut self.books[pos].status, status);
        let updated = self.books[pos].clone();
        self.save_or_undo(move |books| books[pos].status = previous)?;
        tracing::info!(id, status = %status, "changed status");
        Ok(Some(updated))
    }
}
