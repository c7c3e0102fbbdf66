use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::utils::temp_and_move;
use data_error::{FolioError, Result};

/// Persists a single record of type `T` as one JSON file on disk.
///
/// The storage holds no in-memory copy: every read goes to disk and every
/// write replaces the file atomically. Decoding stays with the caller when
/// older record shapes must be accepted, see [`read_raw`](Self::read_raw).
pub struct RecordStorage<T> {
    /// Label for logging
    label: String,
    /// Path to the underlying file where the record is persisted
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> RecordStorage<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a new record storage with a diagnostic label and file path.
    ///
    /// The file itself is only created by the first [`write`](Self::write).
    pub fn new(label: String, path: &Path) -> Self {
        Self {
            label,
            path: PathBuf::from(path),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if a record has been persisted at this path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and decode the record, or `None` if none was written yet.
    pub fn read(&self) -> Result<Option<T>> {
        match self.read_raw()? {
            Some(contents) => {
                let value = serde_json::from_str(&contents).map_err(|err| {
                    FolioError::Storage(self.label.clone(), err.to_string())
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Read the raw record contents, or `None` if none was written yet.
    pub fn read_raw(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            log::debug!("{}: no record at {}", self.label, self.path.display());
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        log::debug!("{}: record read", self.label);
        Ok(Some(contents))
    }

    /// Serialize the record and persist it, replacing any previous one.
    pub fn write(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        temp_and_move(json.as_bytes(), &self.path)?;
        log::info!("{}: record written", self.label);
        Ok(())
    }

    /// Remove the record file from disk. Succeeds if it never existed.
    pub fn erase(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("{}: record erased", self.label);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(FolioError::Storage(
                self.label.clone(),
                err.to_string(),
            )),
        }
    }
}
