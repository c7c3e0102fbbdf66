use std::path::{Path, PathBuf};

use data_error::Result;
use fs_storage::{FOLIO_FOLDER, PROFILE_FILE};

use crate::profile_store::ProfileStore;
use crate::view_counter::ViewCounter;

/// Everything stored under one portfolio root.
///
/// Opening a session prepares the `.folio` folder inside the root and
/// loads the profile record. The stores handed out by the session all
/// work on that folder.
pub struct PortfolioSession {
    root: PathBuf,
    profile_store: ProfileStore,
    view_counter: ViewCounter,
}

impl PortfolioSession {
    /// Open the portfolio stored under `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let folio_dir = root.join(FOLIO_FOLDER);
        let view_counter = ViewCounter::new(&folio_dir)?;

        let profile_path = folio_dir.join(format!("{}.json", PROFILE_FILE));
        let profile_store = ProfileStore::load(&profile_path)?;

        log::debug!("session: opened portfolio at {}", root.display());

        Ok(Self {
            root: PathBuf::from(root),
            profile_store,
            view_counter,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile_store(&self) -> &ProfileStore {
        &self.profile_store
    }

    pub fn profile_store_mut(&mut self) -> &mut ProfileStore {
        &mut self.profile_store
    }

    pub fn view_counter(&self) -> &ViewCounter {
        &self.view_counter
    }
}
