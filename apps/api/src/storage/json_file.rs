//! Directory-backed [`DocumentStore`]: one `<name>.json` file per document.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::storage::{DocumentStore, StorageError};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    fn io_error(name: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            name: name.to_string(),
            source,
        }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.document_path(name)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(name, e)),
        }
    }

    async fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| Self::io_error(name, e))?;

        // Write to a sibling temp path, then rename over the target, so a
        // concurrent reader never observes a half-written document.
        let tmp = self.root.join(format!(".{name}.json.tmp"));
        fs::write(&tmp, contents)
            .await
            .map_err(|e| Self::io_error(name, e))?;
        fs::rename(&tmp, self.document_path(name))
            .await
            .map_err(|e| Self::io_error(name, e))?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool, StorageError> {
        match fs::remove_file(self.document_path(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Self::io_error(name, e)),
        }
    }

    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Self::io_error(".", e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Self::io_error(".", e))?
        {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if file_name.starts_with('.') {
                continue;
            }
            if let Some(name) = file_name.strip_suffix(".json") {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
