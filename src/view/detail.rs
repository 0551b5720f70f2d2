//! Detail selection for the experience timeline.
//!
//! Two states: `Closed`, or `Open` holding one experience record. Opening
//! while open replaces the selection. Closing drops it entirely.

use crate::profile::{Experience, ProfileStore, TimelineKind, TimelineRef};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DetailSelection<'a> {
    #[default]
    Closed,
    Open(&'a Experience),
}

impl<'a> DetailSelection<'a> {
    /// "View details" on a timeline entry.
    ///
    /// The reference is resolved against the store by id. Education
    /// entries and unknown ids leave the state unchanged. Returns whether
    /// the selection is now that entry.
    pub fn open(&mut self, store: &'a ProfileStore, slot: TimelineRef) -> bool {
        if slot.kind != TimelineKind::Experience {
            return false;
        }
        match store.experience_by_id(slot.id) {
            Some(exp) => {
                *self = Self::Open(exp);
                true
            }
            None => false,
        }
    }

    /// Backdrop, close button and footer button all land here.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn selected(&self) -> Option<&'a Experience> {
        match *self {
            Self::Open(exp) => Some(exp),
            Self::Closed => None,
        }
    }
}
