//! Experience and education merged into one display timeline.
//!
//! The order is editorial. When the profile carries a `timeline` array it
//! is followed slot by slot; otherwise experience entries come first, then
//! education, each in stored order. Items reference their source record by
//! id, so two entries sharing a title stay distinguishable.

use super::{
    ProfileStore,
    types::{Education, Experience, TimelineKind, TimelineRef},
};

/// One entry of the timeline, borrowing its source record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineItem<'a> {
    Experience(&'a Experience),
    Education(&'a Education),
}

impl<'a> TimelineItem<'a> {
    pub const fn kind(&self) -> TimelineKind {
        match *self {
            Self::Experience(_) => TimelineKind::Experience,
            Self::Education(_) => TimelineKind::Education,
        }
    }

    /// Id reference back into the store.
    pub const fn reference(&self) -> TimelineRef {
        match *self {
            Self::Experience(exp) => TimelineRef::experience(exp.id),
            Self::Education(edu) => TimelineRef::education(edu.id),
        }
    }

    /// Job title or degree.
    pub fn title(&self) -> &'a str {
        match *self {
            Self::Experience(exp) => &exp.title,
            Self::Education(edu) => &edu.degree,
        }
    }

    /// Company or institution.
    pub fn subtitle(&self) -> &'a str {
        match *self {
            Self::Experience(exp) => &exp.company,
            Self::Education(edu) => &edu.institution,
        }
    }

    pub fn location(&self) -> &'a str {
        match *self {
            Self::Experience(exp) => &exp.location,
            Self::Education(edu) => &edu.location,
        }
    }

    pub fn period(&self) -> &'a str {
        match *self {
            Self::Experience(exp) => &exp.period,
            Self::Education(edu) => &edu.period,
        }
    }

    pub fn description(&self) -> &'a str {
        match *self {
            Self::Experience(exp) => &exp.description,
            Self::Education(edu) => &edu.description,
        }
    }

    /// Empty for education entries.
    pub fn technologies(&self) -> &'a [String] {
        match *self {
            Self::Experience(exp) => &exp.technologies,
            Self::Education(_) => &[],
        }
    }

    /// Only experience entries with bullet points offer a detail view.
    pub fn has_details(&self) -> bool {
        matches!(self, Self::Experience(exp) if !exp.bullet_points.is_empty())
    }
}

impl ProfileStore {
    /// The timeline in display order.
    pub fn timeline(&self) -> Vec<TimelineItem<'_>> {
        let data = self.data();
        match &data.timeline {
            // slots are checked at load, so every lookup resolves
            Some(slots) => slots
                .iter()
                .filter_map(|slot| self.resolve(*slot))
                .collect(),
            None => data
                .experience
                .iter()
                .map(TimelineItem::Experience)
                .chain(data.education.iter().map(TimelineItem::Education))
                .collect(),
        }
    }

    /// Look up the record a timeline reference points at.
    pub fn resolve(&self, slot: TimelineRef) -> Option<TimelineItem<'_>> {
        match slot.kind {
            TimelineKind::Experience => {
                self.experience_by_id(slot.id).map(TimelineItem::Experience)
            }
            TimelineKind::Education => self.education_by_id(slot.id).map(TimelineItem::Education),
        }
    }
}
