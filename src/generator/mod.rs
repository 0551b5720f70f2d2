//! Site-wide files generated next to the pages.

pub mod rss;
pub mod sitemap;
