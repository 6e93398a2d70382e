//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the catalog. The catalog
//! is always read and written as a whole: there are no per-record operations
//! here, only "load everything" and "replace everything".
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole catalog lives in one JSON file (`library_data.json` by default)
//!   - Writes go to a sibling temp file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves, so tests can assert that reads never write
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "id": 1, "title": "Dune", "author": "Herbert", "year": 1965, "status": "available" }
//! ]
//! ```
//!
//! UTF-8, non-ASCII written literally, no version field.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Load the full catalog. A store that has never been written is empty.
    fn load_books(&self) -> Result<Vec<Book>>;

    /// Replace the persisted catalog with `books`.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;
}
