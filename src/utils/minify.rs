//! Output minification for rendered pages and feeds.
//!
//! Controlled by `[build] minify`. When disabled, the input is returned
//! borrowed and untouched.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Content type for minification.
pub enum MinifyType<'a> {
    Html(&'a [u8]),
    Xml(&'a [u8]),
}

/// Minify content if the config asks for it.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    match (config.build.minify, content) {
        (false, MinifyType::Html(bytes) | MinifyType::Xml(bytes)) => Cow::Borrowed(bytes),
        (true, MinifyType::Html(html)) => Cow::Owned(minify_html_inner(html)),
        (true, MinifyType::Xml(xml)) => Cow::Owned(minify_xml_inner(xml)),
    }
}

fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    minify_html::minify(html, &cfg)
}

/// Line-based: trims every line and drops the newlines between them.
fn minify_xml_inner(xml: &[u8]) -> Vec<u8> {
    String::from_utf8_lossy(xml)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_html_strips_whitespace() {
        let html = b"<html>\n  <body>\n    <h1>Portfolio</h1>\n  </body>\n</html>";
        let result = minify(MinifyType::Html(html), &config_with_minify(true));
        let result = String::from_utf8_lossy(&result);

        assert!(!result.contains("\n  "));
        assert!(result.contains("<h1>Portfolio</h1>"));
    }

    #[test]
    fn test_minify_disabled_borrows() {
        let html = b"<p>\n  hello\n</p>";
        let result = minify(MinifyType::Html(html), &config_with_minify(false));
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html);
    }

    #[test]
    fn test_minify_xml_joins_lines() {
        let xml = b"<urlset>\n\n  <url>\n    <loc>https://example.com/</loc>\n  </url>\n</urlset>";
        let result = minify(MinifyType::Xml(xml), &config_with_minify(true));
        assert_eq!(
            &*result,
            b"<urlset><url><loc>https://example.com/</loc></url></urlset>"
        );
    }
}
