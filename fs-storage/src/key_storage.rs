use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::utils::{extract_key_from_file_path, temp_and_move, validate_key};
use data_error::{FolioError, Result};

/// Persists values of type `V` under string keys, one JSON file per key.
///
/// The storage holds no in-memory copy: reads always hit the disk, writes
/// land on it before returning. Two handles opened on the same folder
/// therefore observe each other's writes, last write wins.
pub struct KeyStorage<V> {
    /// Label for logging
    label: String,
    /// Path to the underlying folder where records are persisted
    path: PathBuf,
    _marker: PhantomData<V>,
}

impl<V> KeyStorage<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Create a new keyed storage over the given folder.
    ///
    /// The folder is created if it does not exist yet. Records already
    /// present in it are left untouched.
    pub fn new(label: String, path: &Path) -> Result<Self> {
        if path.exists() && !path.is_dir() {
            return Err(FolioError::Storage(
                label,
                "Path is not a directory".to_owned(),
            ));
        }
        fs::create_dir_all(path)?;

        Ok(Self {
            label,
            path: PathBuf::from(path),
            _marker: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value stored under `key`, or `None` if there is none.
    pub fn get(&self, key: &str) -> Result<Option<V>> {
        validate_key(&self.label, key)?;

        let file = self.record_file(key);
        if !file.exists() {
            log::debug!("{}: no record for key {}", self.label, key);
            return Ok(None);
        }

        let contents = fs::read_to_string(&file)?;
        let value = serde_json::from_str(&contents).map_err(|err| {
            FolioError::Storage(self.label.clone(), err.to_string())
        })?;
        Ok(Some(value))
    }

    /// Persist `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &V) -> Result<()> {
        validate_key(&self.label, key)?;

        let json = serde_json::to_string_pretty(value)?;
        temp_and_move(json.as_bytes(), self.record_file(key))?;

        log::debug!("{}: set key={}", self.label, key);
        Ok(())
    }

    /// Remove the record stored under `key`. Succeeds if there is none.
    pub fn remove(&self, key: &str) -> Result<()> {
        validate_key(&self.label, key)?;

        match fs::remove_file(self.record_file(key)) {
            Ok(()) => {
                log::debug!("{}: removed key={}", self.label, key);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(FolioError::Storage(
                self.label.clone(),
                err.to_string(),
            )),
        }
    }

    /// True if a record is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        validate_key(&self.label, key).is_ok()
            && self.record_file(key).exists()
    }

    /// All keys with a stored record, in sorted order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let path = entry?.path();
            let is_record = path.is_file()
                && path
                    .extension()
                    .map_or(false, |ext| ext == "json");
            if is_record {
                keys.push(extract_key_from_file_path(&self.label, &path)?);
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }

    /// Remove the storage folder with every record in it.
    ///
    /// Succeeds if the folder is already gone. The handle stays usable, but
    /// the folder is only recreated by the next [`set`](Self::set).
    pub fn erase(&self) -> Result<()> {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => {
                log::info!("{}: storage erased", self.label);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(FolioError::Storage(
                self.label.clone(),
                err.to_string(),
            )),
        }
    }

    fn record_file(&self, key: &str) -> PathBuf {
        self.path.join(format!("{}.json", key))
    }
}
