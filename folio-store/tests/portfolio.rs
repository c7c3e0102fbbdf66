#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use data_portfolio::{Profile, ProfilePatch, Project, ProjectPatch};
    use folio_store::PortfolioSession;

    #[test]
    fn fresh_root_starts_empty() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let session = PortfolioSession::open(temp_dir.path())
            .expect("Failed to open portfolio");

        assert_eq!(*session.profile_store().profile(), Profile::default());
        assert_eq!(
            session.view_counter().all().unwrap(),
            vec![]
        );
        assert!(!temp_dir
            .path()
            .join(".folio/userProfile.json")
            .exists());
    }

    #[test]
    fn profile_edits_survive_sessions() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let mut session = PortfolioSession::open(temp_dir.path()).unwrap();
        session
            .profile_store_mut()
            .update_profile(ProfilePatch {
                name: Some("Kay".to_owned()),
                bio: Some("Builds things".to_owned()),
                ..Default::default()
            })
            .expect("Failed to update profile");
        drop(session);

        let session = PortfolioSession::open(temp_dir.path()).unwrap();
        assert_eq!(session.profile_store().profile().name, "Kay");
        assert_eq!(session.profile_store().profile().bio, "Builds things");
    }

    #[test]
    fn project_lifecycle_survives_sessions() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let tracker = Project::new("Tracker", "Tracks things");
        let garden = Project::new("Garden", "Grows things");
        let tracker_id = tracker.id.clone();
        let garden_id = garden.id.clone();

        let mut session = PortfolioSession::open(temp_dir.path()).unwrap();
        let store = session.profile_store_mut();
        store.add_project(tracker).unwrap();
        store.add_project(garden).unwrap();
        store
            .update_project(
                &tracker_id,
                ProjectPatch {
                    title: Some("Tracker 2".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap();
        store.remove_project(&garden_id).unwrap();
        drop(session);

        let session = PortfolioSession::open(temp_dir.path()).unwrap();
        let store = session.profile_store();
        assert_eq!(store.projects().len(), 1);
        assert_eq!(store.project(&tracker_id).unwrap().title, "Tracker 2");
        assert!(store.project(&garden_id).is_none());
    }

    #[test]
    fn records_live_under_the_documented_names() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let project = Project::new("Tracker", "Tracks things");
        let id = project.id.clone();

        let mut session = PortfolioSession::open(temp_dir.path()).unwrap();
        session
            .profile_store_mut()
            .add_project(project)
            .unwrap();
        session.view_counter().increment(&id);

        let folio = temp_dir.path().join(".folio");
        assert!(folio.join("userProfile.json").is_file());
        assert!(folio
            .join(format!("project-views-{}.json", id))
            .is_file());
    }

    #[test]
    fn counters_are_shared_between_live_sessions() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let id = Project::new("Tracker", "Tracks things").id;

        let writer = PortfolioSession::open(temp_dir.path()).unwrap();
        let reader = PortfolioSession::open(temp_dir.path()).unwrap();

        assert_eq!(reader.view_counter().count(&id), 0);
        writer.view_counter().increment(&id);
        assert_eq!(reader.view_counter().count(&id), 1);
        writer.view_counter().increment(&id);
        assert_eq!(reader.view_counter().count(&id), 2);

        reader.view_counter().reset(&id);
        assert_eq!(writer.view_counter().count(&id), 0);
    }

    #[test]
    fn removing_a_project_keeps_its_views() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let project = Project::new("Tracker", "Tracks things");
        let id = project.id.clone();

        let mut session = PortfolioSession::open(temp_dir.path()).unwrap();
        session
            .profile_store_mut()
            .add_project(project)
            .unwrap();
        session.view_counter().increment(&id);
        session
            .profile_store_mut()
            .remove_project(&id)
            .unwrap();

        // The counter stays until it is reset explicitly.
        assert_eq!(session.view_counter().count(&id), 1);
    }

    #[test]
    fn duplicate_project_is_rejected_and_not_persisted() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let project = Project::new("Tracker", "Tracks things");

        let mut session = PortfolioSession::open(temp_dir.path()).unwrap();
        session
            .profile_store_mut()
            .add_project(project.clone())
            .unwrap();
        assert!(session
            .profile_store_mut()
            .add_project(project)
            .is_err());
        drop(session);

        let session = PortfolioSession::open(temp_dir.path()).unwrap();
        assert_eq!(session.profile_store().projects().len(), 1);
    }

    #[test]
    fn legacy_profile_record_is_readable() {
        let temp_dir =
            TempDir::new("folio").expect("Failed to create temporary directory");

        let folio = temp_dir.path().join(".folio");
        fs::create_dir_all(&folio).unwrap();

        let legacy = Profile {
            name: "Kay".to_owned(),
            skills: vec!["Rust".to_owned()],
            ..Default::default()
        };
        fs::write(
            folio.join("userProfile.json"),
            serde_json::to_string(&legacy).unwrap(),
        )
        .unwrap();

        let session = PortfolioSession::open(temp_dir.path()).unwrap();
        assert_eq!(session.profile_store().profile().name, "Kay");
    }
}
