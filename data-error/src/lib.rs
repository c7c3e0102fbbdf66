use std::str::Utf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Identifier collision: {0}")]
    Collision(String),
    #[error("Unknown project: {0}")]
    UnknownProject(String),
    #[error("Failed to parse stored data")]
    Parse,
    #[error("Storage error in {0}: {1}")]
    Storage(String, String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Utf8Error> for FolioError {
    fn from(_: Utf8Error) -> Self {
        Self::Parse
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}
