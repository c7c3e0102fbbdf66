use std::path::Path;

use data_error::{FolioError, Result};
use data_portfolio::{
    decode_profile, Profile, ProfilePatch, Project, ProjectId, ProjectPatch,
    VersionedProfile,
};
use fs_storage::record_storage::RecordStorage;

/// The profile record held in memory with write-through persistence.
///
/// The record is decoded once when the store is loaded; afterwards the
/// in-memory copy is authoritative. Every mutation persists the whole
/// record before returning. When persisting fails the mutation stays
/// applied: the caller gets the error for reporting, and the next
/// successful write lands the full state.
pub struct ProfileStore {
    storage: RecordStorage<VersionedProfile>,
    profile: Profile,
}

impl ProfileStore {
    /// Load the store from the record at `path`.
    ///
    /// A missing record yields the default profile. An unreadable record is
    /// reported in the log and also yields the default profile; the file is
    /// left alone until the first mutation overwrites it. A record written
    /// by a newer release is an error, since overwriting it would destroy
    /// data.
    pub fn load(path: &Path) -> Result<Self> {
        let storage = RecordStorage::new("profile".to_owned(), path);
        let profile = match storage.read_raw()? {
            Some(contents) => match decode_profile(&contents) {
                Ok(profile) => profile,
                Err(err @ FolioError::Storage(_, _)) => return Err(err),
                Err(_) => {
                    log::warn!(
                        "profile: unreadable record, starting from defaults"
                    );
                    Profile::default()
                }
            },
            None => Profile::default(),
        };

        Ok(Self { storage, profile })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.profile.projects
    }

    /// Look up a project by its identifier.
    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.profile
            .projects
            .iter()
            .find(|project| project.id == *id)
    }

    /// Merge `patch` into the profile and persist the result.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Result<()> {
        self.profile.apply(patch);
        self.persist()
    }

    /// Append a project to the profile and persist the result.
    ///
    /// The project's identifier must not collide with an existing one.
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        if self.project(&project.id).is_some() {
            return Err(FolioError::Collision(project.id.to_string()));
        }
        self.profile.projects.push(project);
        self.persist()
    }

    /// Merge `patch` into the project with the given identifier and
    /// persist the result.
    pub fn update_project(
        &mut self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> Result<()> {
        let project = self
            .profile
            .projects
            .iter_mut()
            .find(|project| project.id == *id)
            .ok_or_else(|| FolioError::UnknownProject(id.to_string()))?;
        project.apply(patch);
        self.persist()
    }

    /// Remove the project with the given identifier, persist the result
    /// and hand the removed project back.
    pub fn remove_project(&mut self, id: &ProjectId) -> Result<Project> {
        let position = self
            .profile
            .projects
            .iter()
            .position(|project| project.id == *id)
            .ok_or_else(|| FolioError::UnknownProject(id.to_string()))?;
        let removed = self.profile.projects.remove(position);
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        let record = VersionedProfile::current(self.profile.clone());
        if let Err(err) = self.storage.write(&record) {
            log::warn!("profile: failed to persist record: {}", err);
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempdir::TempDir;

    use data_error::FolioError;
    use data_portfolio::{
        Profile, ProfilePatch, Project, ProjectPatch, PROFILE_RECORD_VERSION,
    };

    use super::ProfileStore;

    fn record_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("userProfile.json")
    }

    #[test]
    fn missing_record_yields_default_profile() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let store = ProfileStore::load(&record_path(&temp_dir)).unwrap();

        assert_eq!(*store.profile(), Profile::default());
        assert!(!record_path(&temp_dir).exists());
    }

    #[test]
    fn update_survives_reload() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let path = record_path(&temp_dir);

        let mut store = ProfileStore::load(&path).unwrap();
        store
            .update_profile(ProfilePatch {
                name: Some("Kay".to_owned()),
                skills: Some(vec!["Rust".to_owned()]),
                ..Default::default()
            })
            .unwrap();
        drop(store);

        let reloaded = ProfileStore::load(&path).unwrap();
        assert_eq!(reloaded.profile().name, "Kay");
        assert_eq!(reloaded.profile().skills, vec!["Rust".to_owned()]);
    }

    #[test]
    fn added_project_survives_reload() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let path = record_path(&temp_dir);

        let project = Project::new("Tracker", "Tracks things");
        let id = project.id.clone();

        let mut store = ProfileStore::load(&path).unwrap();
        store.add_project(project.clone()).unwrap();
        drop(store);

        let reloaded = ProfileStore::load(&path).unwrap();
        assert_eq!(reloaded.projects().len(), 1);
        assert_eq!(*reloaded.project(&id).unwrap(), project);
    }

    #[test]
    fn projects_keep_insertion_order() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let mut store = ProfileStore::load(&record_path(&temp_dir)).unwrap();

        let first = Project::new("First", "");
        let second = Project::new("Second", "");
        let third = Project::new("Third", "");
        let ids: Vec<_> = [&first, &second, &third]
            .iter()
            .map(|project| project.id.clone())
            .collect();

        store.add_project(first).unwrap();
        store.add_project(second.clone()).unwrap();
        store.add_project(third.clone()).unwrap();

        // Patching the middle entry must not disturb its neighbors.
        store
            .update_project(
                &ids[1],
                ProjectPatch {
                    title: Some("Second, revised".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap();

        let listed: Vec<_> = store
            .projects()
            .iter()
            .map(|project| project.id.clone())
            .collect();
        assert_eq!(listed, ids);
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.projects()[2], third);
        assert_eq!(store.projects()[1].title, "Second, revised");
        assert_eq!(store.projects()[1].created_at, second.created_at);
    }

    #[test]
    fn duplicate_project_id_is_a_collision() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let mut store = ProfileStore::load(&record_path(&temp_dir)).unwrap();

        let project = Project::new("Tracker", "Tracks things");
        store.add_project(project.clone()).unwrap();

        let result = store.add_project(project);
        assert!(matches!(result, Err(FolioError::Collision(_))));
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn update_project_patches_in_place() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let mut store = ProfileStore::load(&record_path(&temp_dir)).unwrap();

        let project = Project::new("Tracker", "Tracks things");
        let id = project.id.clone();
        store.add_project(project).unwrap();

        store
            .update_project(
                &id,
                ProjectPatch {
                    title: Some("Tracker 2".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap();

        let project = store.project(&id).unwrap();
        assert_eq!(project.title, "Tracker 2");
        assert_eq!(project.description, "Tracks things");
    }

    #[test]
    fn unknown_project_is_a_typed_error() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let mut store = ProfileStore::load(&record_path(&temp_dir)).unwrap();

        let id = Project::new("Ghost", "").id;
        let update = store.update_project(&id, ProjectPatch::default());
        assert!(matches!(update, Err(FolioError::UnknownProject(_))));

        let removal = store.remove_project(&id);
        assert!(matches!(removal, Err(FolioError::UnknownProject(_))));
    }

    #[test]
    fn remove_project_hands_the_project_back() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let path = record_path(&temp_dir);
        let mut store = ProfileStore::load(&path).unwrap();

        let project = Project::new("Tracker", "Tracks things");
        let id = project.id.clone();
        store.add_project(project).unwrap();

        let removed = store.remove_project(&id).unwrap();
        assert_eq!(removed.title, "Tracker");
        assert!(store.projects().is_empty());

        let reloaded = ProfileStore::load(&path).unwrap();
        assert!(reloaded.projects().is_empty());
    }

    #[test_log::test]
    fn corrupt_record_yields_defaults_and_stays_untouched() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let path = record_path(&temp_dir);
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = ProfileStore::load(&path).unwrap();
        assert_eq!(*store.profile(), Profile::default());

        // The broken file is only replaced by the first mutation.
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{ not json");

        store
            .update_profile(ProfilePatch {
                name: Some("Kay".to_owned()),
                ..Default::default()
            })
            .unwrap();

        let reloaded = ProfileStore::load(&path).unwrap();
        assert_eq!(reloaded.profile().name, "Kay");
    }

    #[test]
    fn legacy_record_is_upgraded_on_first_write() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let path = record_path(&temp_dir);

        let legacy = Profile {
            name: "Kay".to_owned(),
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&legacy).unwrap())
            .unwrap();

        let mut store = ProfileStore::load(&path).unwrap();
        assert_eq!(store.profile().name, "Kay");

        store
            .update_profile(ProfilePatch {
                title: Some("Engineer".to_owned()),
                ..Default::default()
            })
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let record: serde_json::Value =
            serde_json::from_str(&contents).unwrap();
        assert_eq!(
            record["version"],
            serde_json::json!(PROFILE_RECORD_VERSION)
        );
        assert_eq!(record["profile"]["name"], serde_json::json!("Kay"));
    }

    #[test]
    fn record_from_a_newer_release_fails_the_load() {
        let temp_dir = TempDir::new("folio-test").unwrap();
        let path = record_path(&temp_dir);
        std::fs::write(&path, r#"{"version": 99, "profile": {}}"#).unwrap();

        assert!(ProfileStore::load(&path).is_err());
    }
}
