use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use data_error::{FolioError, Result};

/// Opaque identifier of a [`Project`](crate::Project).
///
/// An identifier is generated once when the project is created and never
/// changes afterwards; the store enforces uniqueness within a profile.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(FolioError::Parse);
        }
        Ok(Self(s.to_owned()))
    }
}
