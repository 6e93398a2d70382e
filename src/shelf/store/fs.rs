use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no catalog file yet, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let books: Vec<Book> = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        tracing::debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        let tmp = self.temp_path();
        if let Err(e) = fs::write(&tmp, content).and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookStatus;
    use tempfile::tempdir;

    fn sample() -> Vec<Book> {
        let mut foundation = Book::new(2, "Foundation".into(), "Asimov".into(), 1951);
        foundation.status = BookStatus::CheckedOut;
        vec![
            Book::new(1, "Dune".into(), "Herbert".into(), 1965),
            foundation,
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("library_data.json"));
        assert!(store.load_books().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("library_data.json"));
        let books = sample();

        store.save_books(&books).unwrap();
        let loaded = store.load_books().unwrap();

        assert_eq!(loaded, books);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/books.json"));
        store.save_books(&sample()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn writes_non_ascii_literally() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("library_data.json"));
        store
            .save_books(&[Book::new(1, "Мастер и Маргарита".into(), "Булгаков".into(), 1967)])
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("Мастер и Маргарита"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn failed_rename_cleans_up_temp_file() {
        let dir = tempdir().unwrap();
        // A directory at the target path makes the rename fail.
        let path = dir.path().join("library_data.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.save_books(&sample()),
            Err(ShelfError::Io(_))
        ));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(
            store.load_books(),
            Err(ShelfError::Serialization(_))
        ));
    }

    #[test]
    fn reads_files_written_by_hand() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library_data.json");
        fs::write(
            &path,
            r#"[{"id": 7, "title": "Emma", "author": "Austen", "year": 1815, "status": "checked-out"}]"#,
        )
        .unwrap();

        let books = FileStore::new(path).load_books().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 7);
        assert_eq!(books[0].status, BookStatus::CheckedOut);
    }
}
