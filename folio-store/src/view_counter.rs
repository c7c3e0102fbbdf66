use std::path::Path;

use data_error::Result;
use data_portfolio::ProjectId;
use fs_storage::key_storage::KeyStorage;
use fs_storage::VIEW_COUNT_PREFIX;

/// Storage key of the view counter of the given project.
pub fn view_count_key(project_id: &ProjectId) -> String {
    format!("{}{}", VIEW_COUNT_PREFIX, project_id)
}

/// Durable per-project view counters.
///
/// Counters are read fresh from disk on every call, so concurrent sessions
/// converge on the stored value. None of the operations fail observably:
/// a missing or unreadable counter reads as zero, and when a write fails
/// the stored value stands.
pub struct ViewCounter {
    storage: KeyStorage<u64>,
}

impl ViewCounter {
    /// Open the counters stored in the given folder, creating it if needed.
    pub fn new(path: &Path) -> Result<Self> {
        Ok(Self {
            storage: KeyStorage::new("views".to_owned(), path)?,
        })
    }

    /// Current view count of the project, zero if none was recorded.
    pub fn count(&self, project_id: &ProjectId) -> u64 {
        match self.storage.get(&view_count_key(project_id)) {
            Ok(Some(count)) => count,
            Ok(None) => 0,
            Err(err) => {
                log::warn!(
                    "views: failed to read count for {}: {}",
                    project_id,
                    err
                );
                0
            }
        }
    }

    /// Record one more view of the project and return the new count.
    ///
    /// If the new count cannot be persisted the stored value stands and is
    /// returned instead.
    pub fn increment(&self, project_id: &ProjectId) -> u64 {
        let next = self.count(project_id).saturating_add(1);
        match self.storage.set(&view_count_key(project_id), &next) {
            Ok(()) => next,
            Err(err) => {
                log::warn!(
                    "views: failed to persist count for {}: {}",
                    project_id,
                    err
                );
                self.count(project_id)
            }
        }
    }

    /// Forget the project's counter. A missing counter is already forgotten.
    pub fn reset(&self, project_id: &ProjectId) {
        if let Err(err) = self.storage.remove(&view_count_key(project_id)) {
            log::warn!(
                "views: failed to reset count for {}: {}",
                project_id,
                err
            );
        }
    }

    /// All recorded counters as (project id, count) pairs, sorted by id.
    ///
    /// Records in the folder that are not view counters are skipped.
    pub fn all(&self) -> Result<Vec<(String, u64)>> {
        let mut counts = Vec::new();
        for key in self.storage.keys()? {
            let project_id = match key.strip_prefix(VIEW_COUNT_PREFIX) {
                Some(id) => id.to_owned(),
                None => continue,
            };
            match self.storage.get(&key) {
                Ok(Some(count)) => counts.push((project_id, count)),
                Ok(None) => {}
                Err(err) => {
                    log::warn!(
                        "views: skipping unreadable counter {}: {}",
                        key,
                        err
                    );
                }
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use data_portfolio::ProjectId;

    use super::{view_count_key, ViewCounter};

    fn project_id(raw: &str) -> ProjectId {
        raw.parse().unwrap()
    }

    #[test]
    fn key_carries_the_project_id() {
        let id = project_id("42-abc");
        assert_eq!(view_count_key(&id), "project-views-42-abc");
    }

    #[test]
    fn unknown_project_counts_zero() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let counter = ViewCounter::new(temp_dir.path()).unwrap();

        // Reading does not record anything, so the answer never changes.
        assert_eq!(counter.count(&project_id("p1")), 0);
        assert_eq!(counter.count(&project_id("p1")), 0);
    }

    #[test]
    fn increment_returns_the_new_count() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let counter = ViewCounter::new(temp_dir.path()).unwrap();
        let id = project_id("p1");

        assert_eq!(counter.increment(&id), 1);
        assert_eq!(counter.increment(&id), 2);
        assert_eq!(counter.count(&id), 2);
    }

    #[test]
    fn counts_are_stored_under_the_documented_file_name() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let counter = ViewCounter::new(temp_dir.path()).unwrap();

        counter.increment(&project_id("p1"));
        assert!(temp_dir
            .path()
            .join("project-views-p1.json")
            .exists());
    }

    #[test]
    fn fresh_handle_sees_recorded_views() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let id = project_id("p1");

        ViewCounter::new(temp_dir.path())
            .unwrap()
            .increment(&id);

        let reopened = ViewCounter::new(temp_dir.path()).unwrap();
        assert_eq!(reopened.count(&id), 1);
    }

    #[test]
    fn reset_forgets_the_counter() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let counter = ViewCounter::new(temp_dir.path()).unwrap();
        let id = project_id("p1");

        counter.increment(&id);
        counter.reset(&id);
        assert_eq!(counter.count(&id), 0);

        // Resetting an absent counter is fine too.
        counter.reset(&id);
    }

    #[test_log::test]
    fn unreadable_counter_counts_zero() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let counter = ViewCounter::new(temp_dir.path()).unwrap();
        let id = project_id("p1");

        std::fs::write(
            temp_dir.path().join("project-views-p1.json"),
            "not a number",
        )
        .unwrap();

        assert_eq!(counter.count(&id), 0);
    }

    #[test_log::test]
    fn failed_increment_reports_the_stored_count() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let counter = ViewCounter::new(temp_dir.path()).unwrap();
        let id = project_id("p1");

        // A directory squatting on the record path makes every write fail.
        std::fs::create_dir(temp_dir.path().join("project-views-p1.json"))
            .unwrap();

        assert_eq!(counter.increment(&id), 0);
        // Resetting cannot remove the directory either, but stays quiet.
        counter.reset(&id);
        assert_eq!(counter.count(&id), 0);
    }

    #[test]
    fn all_lists_only_view_counters() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let counter = ViewCounter::new(temp_dir.path()).unwrap();

        counter.increment(&project_id("beta"));
        counter.increment(&project_id("alpha"));
        counter.increment(&project_id("alpha"));

        // A profile record sharing the folder is not a counter.
        std::fs::write(temp_dir.path().join("userProfile.json"), "{}")
            .unwrap();

        let counts = counter.all().unwrap();
        assert_eq!(
            counts,
            vec![("alpha".to_owned(), 2), ("beta".to_owned(), 1)]
        );
    }
}
