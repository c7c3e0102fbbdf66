//! # Data Portfolio
//!
//! Record types shared by the folio crates: the user [`Profile`], its
//! [`Project`] entries, the [`ProfilePatch`] partial update and the
//! versioned envelope in which profile records are persisted.

mod id;
mod profile;
mod project;
pub mod tags;

pub use id::ProjectId;
pub use profile::{
    decode_profile, Profile, ProfilePatch, VersionedProfile,
    PROFILE_RECORD_VERSION,
};
pub use project::{Project, ProjectPatch};
