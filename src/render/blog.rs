//! Blog listing with load-more, and single post pages.

use super::{layout, preview_badges, stat};
use crate::{
    config::SiteConfig,
    profile::{BlogPost, ProfileStore},
    route::Route,
    utils::{date::format_long, html::escape},
    view::Pagination,
};

/// Listing page after `pagination` has been advanced by the route.
///
/// `more` in the route is the number of loads so far, so the next link
/// is `more + 1`, recovered from the visible count.
pub fn render_list(store: &ProfileStore, config: &SiteConfig, pagination: Pagination) -> String {
    let posts = store.all_blog_posts();
    let mut main = String::from(
        "<section>\n    <h1>Blog</h1>\n    <p class=\"muted\">Thoughts on development, architecture and the tools I use.</p>\n    <div class=\"grid\">\n",
    );

    for post in pagination.visible_slice(posts) {
        main.push_str(&card(post, config));
    }
    main.push_str("    </div>\n");

    if pagination.has_more() {
        let loads = pagination.visible().div_ceil(pagination.page_size());
        main.push_str(&format!(
            "    <p><a class=\"load-more\" href=\"{}\">Load More Posts</a></p>\n",
            Route::Blog { more: loads }.path()
        ));
    }

    main.push_str(&format!(
        "    <p class=\"muted\">Showing {} of {} posts</p>\n</section>\n",
        pagination.visible(),
        pagination.total()
    ));

    let stats = store.blog_stats();
    main.push_str(&format!(
        "<section>\n    <h3>Blog Statistics</h3>\n    <div class=\"stats\">{}{}{}{}</div>\n</section>\n",
        stat(stats.total, "Total Posts"),
        stat(stats.featured, "Featured"),
        stat(stats.tags, "Topics"),
        stat(format!("{}min", stats.avg_read_minutes), "Avg Read Time"),
    ));

    layout(config, "Blog", &main)
}

fn card(post: &BlogPost, config: &SiteConfig) -> String {
    format!(
        r#"        <article class="card">
            <span class="badge">{label}</span>
            <h3><a href="{href}">{title}</a></h3>
            <p class="muted">{date} · {read_time}</p>
            <p>{excerpt}</p>
            <p>{tags}</p>
        </article>
"#,
        label = if post.featured { "Featured" } else { "Article" },
        href = Route::BlogPost(post.id).path(),
        title = escape(&post.title),
        date = escape(&format_long(&post.date)),
        read_time = escape(&post.read_time),
        excerpt = escape(&post.excerpt),
        tags = preview_badges(&post.tags, config.view.tag_preview),
    )
}

pub fn render_post(post: &BlogPost, config: &SiteConfig) -> String {
    let tags: String = post
        .tags
        .iter()
        .map(|t| format!(r#"<span class="badge">{}</span>"#, escape(t)))
        .collect();
    let paragraphs: String = post
        .content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("        <p>{}</p>\n", escape(p)))
        .collect();

    let main = format!(
        r#"<article>
    <p><a href="/blog/">← Back to Blog</a></p>
    {featured}
    <h1>{title}</h1>
    <p class="muted">{date} · {read_time}</p>
    <p>{tags}</p>
    <p><em>{excerpt}</em></p>
    <div class="content">
{paragraphs}    </div>
</article>
"#,
        featured = if post.featured {
            r#"<span class="badge active">Featured</span>"#
        } else {
            ""
        },
        title = escape(&post.title),
        date = escape(&format_long(&post.date)),
        read_time = escape(&post.read_time),
        excerpt = escape(&post.excerpt),
    );

    layout(config, &post.title, &main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixture;

    fn list(loads: usize) -> String {
        let store = fixture::store();
        let config = SiteConfig::default();
        let pagination = Pagination::with_loads(store.all_blog_posts().len(), 6, loads);
        render_list(&store, &config, pagination)
    }

    #[test]
    fn test_first_page() {
        let html = list(0);
        assert_eq!(html.matches("<article class=\"card\">").count(), 6);
        assert!(html.contains(r#"href="/blog/more/1/">Load More Posts"#));
        assert!(html.contains("Showing 6 of 8 posts"));
    }

    #[test]
    fn test_after_load_more() {
        let html = list(1);
        assert_eq!(html.matches("<article class=\"card\">").count(), 8);
        assert!(!html.contains("Load More Posts"));
        assert!(html.contains("Showing 8 of 8 posts"));
    }

    #[test]
    fn test_loads_past_ceiling() {
        assert_eq!(list(5), list(1));
    }

    #[test]
    fn test_next_link_counts_loads() {
        let store = fixture::store();
        let config = SiteConfig::default();
        let pagination = Pagination::with_loads(8, 2, 1);
        let html = render_list(&store, &config, pagination);
        assert!(html.contains(r#"href="/blog/more/2/""#));
    }

    #[test]
    fn test_stats() {
        let html = list(0);
        assert!(html.contains("<strong>8</strong><span class=\"muted\">Total Posts"));
        assert!(html.contains("<strong>3</strong><span class=\"muted\">Featured"));
        assert!(html.contains("<strong>7min</strong>"));
    }

    #[test]
    fn test_card_date_and_tags() {
        let html = list(0);
        assert!(html.contains("January 15, 2024 · 5 min"));
        // three tags on the first post, all within the preview
        assert!(html.contains(r#"<span class="badge">Architecture</span>"#));
    }

    #[test]
    fn test_post_page() {
        let store = fixture::store();
        let post = store.blog_post_by_id(3).unwrap();
        let html = render_post(post, &SiteConfig::default());

        assert!(html.contains("<h1>Event Processing with Kafka</h1>"));
        assert!(html.contains("March 10, 2024"));
        assert!(html.contains("Featured"));
        assert!(html.contains("<div class=\"content\">"));
    }
}
