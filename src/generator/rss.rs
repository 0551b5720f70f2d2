//! RSS feed over blog posts.
//!
//! One item per post, in stored order. Posts whose date does not parse
//! are skipped with a log line rather than failing the build.

use crate::{
    config::SiteConfig,
    log,
    profile::{BlogPost, ProfileStore},
    route::Route,
    utils::{
        date::to_rfc2822,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result, anyhow};
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::fs;

// ============================================================================
// Public API
// ============================================================================

/// Build rss feed if enabled in config.
pub fn build_rss(config: &SiteConfig, store: &ProfileStore) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::new(config, store).write()?;
    }
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

struct RssFeed<'a> {
    config: &'a SiteConfig,
    store: &'a ProfileStore,
}

impl<'a> RssFeed<'a> {
    const fn new(config: &'a SiteConfig, store: &'a ProfileStore) -> Self {
        Self { config, store }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let link = self
            .config
            .absolute_url("/")
            .context("[base.url] is required for RSS generation")?;
        let author = self.author();
        let items: Vec<_> = self
            .store
            .all_blog_posts()
            .iter()
            .filter_map(|post| {
                let item = post_to_rss_item(post, self.config, author.as_deref());
                if item.is_none() {
                    log!("rss"; "skipping post {}: invalid date `{}`", post.id, post.date);
                }
                item
            })
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(link)
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .generator(env!("CARGO_PKG_NAME").to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// `email (Name)` from the profile, when an email is set.
    fn author(&self) -> Option<String> {
        let personal = &self.store.profile_data().personal;
        (!personal.email.is_empty()).then(|| format!("{} ({})", personal.email, personal.name))
    }

    /// Write rss feed to file
    fn write(self) -> Result<()> {
        let config = self.config;
        let xml = self.into_xml()?;
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);
        let rss_path = config.build.output.join(&config.build.rss.path);

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&rss_path, &*xml)
            .with_context(|| format!("Failed to write rss feed to {}", rss_path.display()))?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a post to an rss item.
/// Returns None if the date is unusable or no site url is configured.
fn post_to_rss_item(post: &BlogPost, config: &SiteConfig, author: Option<&str>) -> Option<rss::Item> {
    let pub_date = to_rfc2822(&post.date)?;
    let link = config.absolute_url(&Route::BlogPost(post.id).path())?;
    let categories = post
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.as_str()).build())
        .collect::<Vec<_>>();

    Some(
        ItemBuilder::default()
            .title(post.title.clone())
            .link(Some(link.clone()))
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .description(post.excerpt.clone())
            .pub_date(pub_date)
            .author(author.map(str::to_owned))
            .categories(categories)
            .build(),
    )
}
