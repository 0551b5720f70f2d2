//! Sitemap generation.
//!
//! Lists the canonical pages of the built site for search engine indexing.
//! State variants (open modals, load-more pages) are left out since they
//! repeat content already listed.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/1/</loc>
//!     <lastmod>2024-01-15</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    profile::ProfileStore,
    route::Route,
    utils::{
        date::parse_ymd,
        html::escape,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, store: &ProfileStore) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::from_store(store, config);
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Absolute URL, or the bare path when no `[base] url` is set
    loc: String,
    /// Last modification date (YYYY-MM-DD)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Home, listings, every post and every per-technology page.
    fn from_store(store: &ProfileStore, config: &SiteConfig) -> Self {
        let loc = |route: &Route| {
            let path = route.path();
            config.absolute_url(&path).unwrap_or(path)
        };

        let mut urls: Vec<UrlEntry> = [
            Route::Home { experience: None },
            Route::Blog { more: 0 },
            Route::projects_with("all"),
        ]
        .iter()
        .map(|route| UrlEntry {
            loc: loc(route),
            lastmod: None,
        })
        .collect();

        urls.extend(store.all_blog_posts().iter().map(|post| UrlEntry {
            loc: loc(&Route::BlogPost(post.id)),
            lastmod: parse_ymd(&post.date).map(|d| d.format("%Y-%m-%d").to_string()),
        }));

        urls.extend(store.technology_slugs().iter().map(|(_, slug)| UrlEntry {
            loc: loc(&Route::ProjectsTech(slug.clone())),
            lastmod: None,
        }));

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
