//! `[view]` section configuration.
//!
//! Sizes that shape list views: the blog's load-more step and how many
//! badges the cards preview before collapsing the rest into `+N`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[view]` section in folio.toml.
///
/// # Example
/// ```toml
/// [view]
/// page_size = 6
/// home_featured_posts = 3
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Blog posts revealed initially and per "load more".
    #[serde(default = "defaults::view::page_size")]
    #[educe(Default = defaults::view::page_size())]
    pub page_size: usize,

    /// Featured posts shown in the home page blog section.
    #[serde(default = "defaults::view::home_featured_posts")]
    #[educe(Default = defaults::view::home_featured_posts())]
    pub home_featured_posts: usize,

    /// Technology badges per timeline entry before `+N`.
    #[serde(default = "defaults::view::technology_preview")]
    #[educe(Default = defaults::view::technology_preview())]
    pub technology_preview: usize,

    /// Tag badges per blog card.
    #[serde(default = "defaults::view::tag_preview")]
    #[educe(Default = defaults::view::tag_preview())]
    pub tag_preview: usize,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_view_config_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"
        "#,
        )
        .unwrap();

        assert_eq!(config.view.page_size, 6);
        assert_eq!(config.view.home_featured_posts, 3);
        assert_eq!(config.view.technology_preview, 4);
        assert_eq!(config.view.tag_preview, 3);
    }

    #[test]
    fn test_view_config_override() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"
            [view]
            page_size = 10
        "#,
        )
        .unwrap();

        assert_eq!(config.view.page_size, 10);
        assert_eq!(config.view.tag_preview, 3);
    }
}
