pub mod key_storage;
pub mod record_storage;
pub mod utils;

pub const FOLIO_FOLDER: &str = ".folio";

// Single-record storages
pub const PROFILE_FILE: &str = "userProfile";

// Keyed storages
pub const VIEW_COUNT_PREFIX: &str = "project-views-";
