use std::io;

use thiserror::Error;

use data_error::FolioError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown category: {0} (see the `tags` command)")]
    UnknownCategory(String),

    #[error("Unknown technology: {0} (see the `tags` command)")]
    UnknownTechnology(String),

    #[error("Invalid {0}: {1}")]
    InvalidUrl(String, String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    FolioError(#[from] FolioError),
}
