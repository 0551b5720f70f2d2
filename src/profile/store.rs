//! Immutable profile store.
//!
//! The profile document is read once, checked for the invariants the query
//! layer relies on, and never mutated afterwards.
//!
//! # Load-time checks
//!
//! - ids are unique within each collection
//! - every authored timeline slot names an existing record, at most once
//!
//! Technology slugs are assigned here as well, once, so every page links
//! a technology through the same distinct slug.

use super::types::{ProfileData, TimelineKind, TimelineRef};
use crate::utils::slug::unique_slugs;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading the profile document.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not a valid profile document")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("duplicate id {id} in `{collection}`")]
    DuplicateId { collection: &'static str, id: u32 },

    #[error("timeline refers to missing {} {id}", .kind.name())]
    DanglingTimeline { kind: TimelineKind, id: u32 },
}

/// Read-only holder of the loaded profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    data: ProfileData,
    /// `(technology, slug)` in first-seen order, slugs distinct.
    technology_slugs: Vec<(String, String)>,
}

impl ProfileStore {
    /// Read and validate a profile document from disk.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content =
            fs::read_to_string(path).map_err(|err| ProfileError::Io(path.to_path_buf(), err))?;
        let data = serde_json::from_str(&content)
            .map_err(|err| ProfileError::Json(path.to_path_buf(), err))?;
        Self::new(data)
    }

    /// Wrap an already-parsed document after checking its invariants.
    pub fn new(data: ProfileData) -> Result<Self, ProfileError> {
        check_unique("experience", data.experience.iter().map(|e| e.id))?;
        check_unique("education", data.education.iter().map(|e| e.id))?;
        check_unique("projects", data.projects.iter().map(|p| p.id))?;
        check_unique("blog", data.blog.iter().map(|p| p.id))?;

        if let Some(timeline) = &data.timeline {
            check_timeline(&data, timeline)?;
        }

        let mut store = Self {
            data,
            technology_slugs: Vec::new(),
        };
        let technologies: Vec<String> =
            store.technologies().into_iter().map(str::to_owned).collect();
        let slugs = unique_slugs(technologies.iter().map(String::as_str));
        store.technology_slugs = technologies.into_iter().zip(slugs).collect();
        Ok(store)
    }

    /// The full dataset.
    #[inline]
    pub fn data(&self) -> &ProfileData {
        &self.data
    }

    /// Every technology with its page slug, in first-seen order.
    pub fn technology_slugs(&self) -> &[(String, String)] {
        &self.technology_slugs
    }
}

fn check_unique(
    collection: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), ProfileError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ProfileError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

fn check_timeline(data: &ProfileData, timeline: &[TimelineRef]) -> Result<(), ProfileError> {
    let mut seen = HashSet::new();
    for slot in timeline {
        let exists = match slot.kind {
            TimelineKind::Experience => data.experience.iter().any(|e| e.id == slot.id),
            TimelineKind::Education => data.education.iter().any(|e| e.id == slot.id),
        };
        if !exists {
            return Err(ProfileError::DanglingTimeline {
                kind: slot.kind,
                id: slot.id,
            });
        }
        if !seen.insert(*slot) {
            return Err(ProfileError::DuplicateId {
                collection: "timeline",
                id: slot.id,
            });
        }
    }
    Ok(())
}
