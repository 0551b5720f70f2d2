//! Request path to page mapping.
//!
//! A route carries the interaction state a page is rendered with: the
//! number of "load more" presses on the blog, the project filter and
//! search text, or the experience whose detail modal is open.
//!
//! # Surface
//!
//! | Path                      | Route                               |
//! |---------------------------|-------------------------------------|
//! | `/`                       | `Home { experience: None }`         |
//! | `/experience/{id}/`       | `Home { experience: Some(id) }`     |
//! | `/blog/`, `/blog/?more=k` | `Blog { more }`                     |
//! | `/blog/more/{k}/`         | `Blog { more: k }`                  |
//! | `/blog/{id}/`             | `BlogPost(id)`                      |
//! | `/projects/?filter=&q=`   | `Projects { filter, search }`       |
//! | `/projects/tech/{slug}/`  | `ProjectsTech(slug)`                |
//! | anything else             | `NotFound`                          |

use crate::{
    build::NOT_FOUND_FILE,
    profile::ProfileStore,
    view::{DetailSelection, TechFilter},
};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home { experience: Option<u32> },
    Blog { more: usize },
    BlogPost(u32),
    Projects { filter: TechFilter, search: String },
    /// Static per-technology listing, keyed by the slug the store
    /// assigned to the technology.
    ProjectsTech(String),
    NotFound,
}

impl Route {
    /// Parse a request target (`path?query`). Percent-encoding is decoded.
    pub fn parse(target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let path = decode(path);
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.last() == Some(&"index.html") {
            segments.pop();
        }

        match segments.as_slice() {
            [] => Self::Home { experience: None },
            ["experience", id] => match id.parse() {
                Ok(id) => Self::Home {
                    experience: Some(id),
                },
                Err(_) => Self::NotFound,
            },
            ["blog"] => Self::Blog {
                more: query_param(query, "more")
                    .and_then(|k| k.parse().ok())
                    .unwrap_or(0),
            },
            ["blog", "more", k] => match k.parse() {
                Ok(more) => Self::Blog { more },
                Err(_) => Self::NotFound,
            },
            ["blog", id] => match id.parse() {
                Ok(id) => Self::BlogPost(id),
                Err(_) => Self::NotFound,
            },
            ["projects"] => Self::Projects {
                filter: TechFilter::parse(query_param(query, "filter").as_deref().unwrap_or("")),
                search: query_param(query, "q").unwrap_or_default(),
            },
            ["projects", "tech", slug] => Self::ProjectsTech((*slug).to_owned()),
            _ => Self::NotFound,
        }
    }

    /// Canonical path of this route.
    ///
    /// Paths without a query string are also written by the static build,
    /// so every link between built pages uses this form.
    pub fn path(&self) -> String {
        match self {
            Self::Home { experience: None } => "/".to_owned(),
            Self::Home {
                experience: Some(id),
            } => format!("/experience/{id}/"),
            Self::Blog { more: 0 } => "/blog/".to_owned(),
            Self::Blog { more } => format!("/blog/more/{more}/"),
            Self::BlogPost(id) => format!("/blog/{id}/"),
            Self::Projects { filter, search } => match (filter, search.is_empty()) {
                (TechFilter::All, true) => "/projects/".to_owned(),
                (filter, true) => {
                    format!("/projects/?filter={}", urlencoding::encode(filter.as_str()))
                }
                (filter, false) => format!(
                    "/projects/?filter={}&q={}",
                    urlencoding::encode(filter.as_str()),
                    urlencoding::encode(search)
                ),
            },
            Self::ProjectsTech(slug) => format!("/projects/tech/{slug}/"),
            Self::NotFound => format!("/{NOT_FOUND_FILE}"),
        }
    }

    /// Home page showing the given detail selection.
    pub fn home(detail: &DetailSelection<'_>) -> Self {
        Self::Home {
            experience: detail.selected().map(|exp| exp.id),
        }
    }

    /// Projects listing narrowed to one technology.
    pub fn projects_with(tech: &str) -> Self {
        Self::Projects {
            filter: TechFilter::parse(tech),
            search: String::new(),
        }
    }

    /// Link target for a project listing state.
    ///
    /// A technology filter without search text uses the static page for
    /// that technology, so links work in the built site.
    pub fn projects_link(store: &ProfileStore, filter: TechFilter, search: &str) -> Self {
        if search.is_empty()
            && let TechFilter::Technology(tech) = &filter
            && let Some(slug) = store.technology_slug(tech)
        {
            return Self::ProjectsTech(slug.to_owned());
        }
        Self::Projects {
            filter,
            search: search.to_owned(),
        }
    }
}

/// First value of `key` in a query string. `+` is a space, as sent by forms.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode(&v.replace('+', " ")).into_owned())
}

fn decode(s: &str) -> Cow<'_, str> {
    urlencoding::decode(s).unwrap_or(Cow::Borrowed(s))
}
