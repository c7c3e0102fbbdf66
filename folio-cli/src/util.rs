use std::env::current_dir;
use std::path::PathBuf;

use folio_store::PortfolioSession;

use crate::error::AppError;

pub fn provide_root(root_dir: &Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root_dir {
        Some(path) => Ok(path.clone()),
        None => Ok(current_dir()?),
    }
}

/// Open the portfolio under the given root, or the current directory.
pub fn provide_session(
    root_dir: &Option<PathBuf>,
) -> Result<PortfolioSession, AppError> {
    let root = provide_root(root_dir)?;
    log::debug!("Opening portfolio at {}", root.display());
    Ok(PortfolioSession::open(&root)?)
}
