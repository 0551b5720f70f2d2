//! Technology filter and text search for the project listing.
//!
//! Both narrow: a project is listed only if it passes the technology filter
//! AND the search. The search is a case-insensitive substring match on the
//! title or the description; an empty search passes everything.

use crate::profile::Project;

/// Sentinel value for "no technology filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TechFilter {
    #[default]
    All,
    /// Exact technology string, as stored on projects.
    Technology(String),
}

impl TechFilter {
    /// `"all"` or an empty value mean [`TechFilter::All`].
    pub fn parse(value: &str) -> Self {
        match value {
            "" | ALL => Self::All,
            tech => Self::Technology(tech.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Technology(tech) => tech,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Technology(tech) => project.technologies.iter().any(|t| t == tech),
        }
    }
}

/// Filter state of the project listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    filter: TechFilter,
    search: String,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: TechFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, search: &str) {
        search.clone_into(&mut self.search);
    }

    pub fn filter(&self) -> &TechFilter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Projects passing both predicates, stored order preserved.
    ///
    /// An empty result is a valid state, rendered as an empty-state message.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let needle = self.search.to_lowercase();
        projects
            .iter()
            .filter(|p| self.filter.matches(p) && matches_search(p, &needle))
            .collect()
    }
}

/// `needle` must already be lower-cased.
fn matches_search(project: &Project, needle: &str) -> bool {
    needle.is_empty()
        || project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
}
