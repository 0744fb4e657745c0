use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::path::PathBuf;

pub struct JsonFileStore {
    data_file: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(data_file: P) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_file(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "books.json".to_string());
        self.data_file
            .with_file_name(format!(".{}-{}.tmp", name, std::process::id()))
    }
}

impl DataStore for JsonFileStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        if !self.data_file.exists() {
            tracing::debug!(target: "shelf::store", path = %self.data_file.display(), "No data file, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.data_file).map_err(ShelfError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let books: Vec<Book> = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        tracing::debug!(
            target: "shelf::store",
            path = %self.data_file.display(),
            books = books.len(),
            "Loaded books"
        );
        Ok(books)
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;

        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        let tmp_file = self.tmp_file();
        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp_file, &self.data_file).map_err(ShelfError::Io)?;

        tracing::debug!(
            target: "shelf::store",
            path = %self.data_file.display(),
            books = books.len(),
            "Saved books"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Book> {
        vec![
            Book::new(1, "Go".into(), "systems".into(), true),
            Book::new(2, "Rust".into(), "memory-safe".into(), false),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));
        assert!(store.load_books().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_is_lossless() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("books.json"));
        store.save_books(&sample()).unwrap();

        assert_eq!(store.load_books().unwrap(), sample());
    }

    #[test]
    fn writes_pretty_json_with_camel_case_stock() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        let mut store = JsonFileStore::new(&path);
        store.save_books(&sample()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n"));
        assert!(raw.contains("\"inStock\": true"));
    }

    #[test]
    fn save_overwrites_and_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("books.json"));
        store.save_books(&sample()).unwrap();
        store.save_books(&sample()[..1]).unwrap();

        assert_eq!(store.load_books().unwrap().len(), 1);
        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("books.json"));
        store.save_books(&sample()).unwrap();
        assert_eq!(store.load_books().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_books(),
            Err(ShelfError::Serialization(_))
        ));
    }
}
