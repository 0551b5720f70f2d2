//! Profile data: the single source of site content.
//!
//! # Architecture
//!
//! ```text
//! profile.json ──► ProfileStore::load() ──► ProfileStore (immutable)
//!                      │                        │
//!                      └── id / timeline checks ├── query     (by id, featured, all)
//!                                               ├── timeline  (authored order)
//!                                               ├── skills    (fixed categories)
//!                                               └── stats     (listing counters)
//! ```
//!
//! Nothing here mutates after load. Per-page interaction state lives in
//! [`crate::view`] and is derived from these queries.

#[cfg(test)]
pub mod fixture;
mod query;
pub mod skills;
pub mod stats;
mod store;
pub mod timeline;
mod types;

pub use store::ProfileStore;
pub use timeline::TimelineItem;
pub use types::{BlogPost, Experience, Project, TimelineKind, TimelineRef};
