use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ProjectId;

/// One portfolio entry: descriptive metadata, tag sets and external links.
///
/// All fields except the identifier carry serde defaults, so records written
/// before a field existed still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub technologies: BTreeSet<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a project with a generated identifier and the current time
    /// as its creation timestamp.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: description.into(),
            image: None,
            demo_url: None,
            repo_url: None,
            categories: BTreeSet::new(),
            technologies: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Shallow-merge `patch` into the project. Fields the patch supplies
    /// are overwritten, everything else is left untouched.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(demo_url) = patch.demo_url {
            self.demo_url = demo_url;
        }
        if let Some(repo_url) = patch.repo_url {
            self.repo_url = repo_url;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
    }
}

/// A partial project update: only supplied fields are overwritten.
///
/// The identifier and creation timestamp are immutable and cannot be
/// patched. Optional links wrap another `Option`, so a patch can both set
/// and clear them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub demo_url: Option<Option<String>>,
    pub repo_url: Option<Option<String>>,
    pub categories: Option<BTreeSet<String>>,
    pub technologies: Option<BTreeSet<String>>,
}

impl ProjectPatch {
    /// True if the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
