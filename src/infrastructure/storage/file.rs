// src/infrastructure/storage/file.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::storage::KeyValueStorage;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// One file per key inside a directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written blob behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> DomainResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DomainError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStorage for FileStorage {
    #[instrument(skip(self), level = "trace")]
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InfrastructureError::FileSystem(format!(
                "Cannot read {}: {}",
                path.display(),
                e
            ))
            .into()),
        }
    }

    #[instrument(skip(self, value), level = "trace", fields(len = value.len()))]
    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let path = self.path_for(key)?;
        let fs_error = |action: &str, e: &dyn std::fmt::Display| -> DomainError {
            InfrastructureError::FileSystem(format!("{} {}: {}", action, path.display(), e)).into()
        };

        fs::create_dir_all(&self.dir).map_err(|e| fs_error("Cannot create directory for", &e))?;
        let mut tmp =
            NamedTempFile::new_in(&self.dir).map_err(|e| fs_error("Cannot stage write of", &e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| fs_error("Cannot write", &e))?;
        tmp.persist(&path)
            .map_err(|e| fs_error("Cannot replace", &e.error))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
