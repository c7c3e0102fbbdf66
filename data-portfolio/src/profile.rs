use serde::{Deserialize, Serialize};
use serde_json::Value;

use data_error::{FolioError, Result};

use crate::project::Project;

/// Version of the persisted profile record.
///
/// Bumped whenever [`VersionedProfile`] changes shape in a way serde
/// defaults cannot absorb. Records written before the envelope existed are
/// bare [`Profile`] objects; [`decode_profile`] still accepts those and the
/// next write upgrades them in place.
pub const PROFILE_RECORD_VERSION: u32 = 1;

/// The single user-owned record: identity fields, contact handles, the
/// skill list and the owned projects.
///
/// Every field carries a serde default, so records written by older
/// releases deserialize with missing fields filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    pub location: String,
    pub email: String,
    pub website: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub telegram: String,
    pub slack: String,
    pub discord: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

impl Profile {
    /// Shallow-merge `patch` into the profile. Fields the patch supplies
    /// are overwritten, everything else is left untouched.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
        if let Some(github) = patch.github {
            self.github = github;
        }
        if let Some(twitter) = patch.twitter {
            self.twitter = twitter;
        }
        if let Some(linkedin) = patch.linkedin {
            self.linkedin = linkedin;
        }
        if let Some(telegram) = patch.telegram {
            self.telegram = telegram;
        }
        if let Some(slack) = patch.slack {
            self.slack = slack;
        }
        if let Some(discord) = patch.discord {
            self.discord = discord;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
    }
}

/// A partial profile update: only supplied fields are overwritten.
///
/// The project list is deliberately absent. Projects are mutated through
/// the dedicated project operations, never through a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub telegram: Option<String>,
    pub slack: Option<String>,
    pub discord: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl ProfilePatch {
    /// True if the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

/// The persisted shape of a profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionedProfile {
    pub version: u32,
    pub profile: Profile,
}

impl VersionedProfile {
    /// Wrap a profile snapshot in the current record version.
    pub fn current(profile: Profile) -> Self {
        Self {
            version: PROFILE_RECORD_VERSION,
            profile,
        }
    }
}

/// Decode a stored profile record.
///
/// Accepts the current versioned envelope as well as the legacy shape, a
/// bare [`Profile`] object without an envelope. Records claiming a version
/// newer than [`PROFILE_RECORD_VERSION`] are rejected: they were written by
/// a newer release and overwriting them with a default-filled decode would
/// destroy data.
pub fn decode_profile(data: &str) -> Result<Profile> {
    let value: Value = serde_json::from_str(data)?;
    if value.get("version").is_none() {
        log::info!("profile: decoding legacy record without version envelope");
        return Ok(serde_json::from_value(value)?);
    }

    let record: VersionedProfile = serde_json::from_value(value)?;
    if record.version > PROFILE_RECORD_VERSION {
        return Err(FolioError::Storage(
            "profile".to_owned(),
            format!(
                "record version {} is newer than supported version {}",
                record.version, PROFILE_RECORD_VERSION
            ),
        ));
    }
    Ok(record.profile)
}
