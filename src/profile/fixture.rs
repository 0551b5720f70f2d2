//! Shared test profile: the starter document written by `folio init`.
//!
//! 3 experience entries (the third has no bullet points), 4 education
//! entries, 5 projects (3 featured), 8 blog posts (3 featured) and an
//! authored timeline.

use super::{ProfileStore, types::ProfileData};

pub const PROFILE_JSON: &str = include_str!("../embed/init/profile.json");

pub fn data() -> ProfileData {
    serde_json::from_str(PROFILE_JSON).unwrap()
}

pub fn store() -> ProfileStore {
    ProfileStore::new(data()).unwrap()
}
