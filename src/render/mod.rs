//! HTML rendering of routes.
//!
//! Every page is a pure function of the profile store, the config and the
//! route. Interaction state is rebuilt from the route on each call, so the
//! static build and the dev server produce identical markup for the same
//! path.
//!
//! # Pages
//!
//! | Route          | Module       | State                 |
//! |----------------|--------------|-----------------------|
//! | `Home`         | [`home`]     | `DetailSelection`     |
//! | `Blog`         | [`blog`]     | `Pagination`          |
//! | `BlogPost`     | [`blog`]     |                       |
//! | `Projects*`    | [`projects`] | `ProjectFilter`       |
//! | `NotFound`     | this module  |                       |

mod blog;
mod home;
mod projects;

use crate::{
    config::SiteConfig,
    profile::{ProfileStore, TimelineRef},
    route::Route,
    utils::html::escape,
    view::{DetailSelection, Pagination, ProjectFilter, TechFilter},
};

/// Page shell (embedded at compile time)
const LAYOUT_TEMPLATE: &str = include_str!("../embed/layout.html");

/// A rendered page and the HTTP status it should be served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub html: String,
}

impl Page {
    fn ok(html: String) -> Self {
        Self { status: 200, html }
    }

    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Render a route to a full HTML document.
pub fn render(route: &Route, store: &ProfileStore, config: &SiteConfig) -> Page {
    match route {
        Route::Home { experience } => {
            let mut detail = DetailSelection::default();
            if let Some(id) = experience {
                // unknown ids leave the modal closed
                detail.open(store, TimelineRef::experience(*id));
            }
            Page::ok(home::render(store, config, detail))
        }
        Route::Blog { more } => {
            let total = store.all_blog_posts().len();
            let pagination = Pagination::with_loads(total, config.view.page_size, *more);
            Page::ok(blog::render_list(store, config, pagination))
        }
        Route::BlogPost(id) => match store.blog_post_by_id(*id) {
            Some(post) => Page::ok(blog::render_post(post, config)),
            None => not_found(config),
        },
        Route::Projects { filter, search } => {
            let mut state = ProjectFilter::new();
            state.set_filter(filter.clone());
            state.set_search(search);
            Page::ok(projects::render(store, config, &state))
        }
        Route::ProjectsTech(slug) => match store.technology_by_slug(slug) {
            Some(tech) => {
                let mut state = ProjectFilter::new();
                state.set_filter(TechFilter::Technology(tech.to_owned()));
                Page::ok(projects::render(store, config, &state))
            }
            None => not_found(config),
        },
        Route::NotFound => not_found(config),
    }
}

/// The 404 page.
pub fn not_found(config: &SiteConfig) -> Page {
    let body = r#"<section class="empty">
    <h1>Page not found</h1>
    <p class="muted">The page you are looking for does not exist.</p>
    <p><a href="/">Back to home</a></p>
</section>"#;
    Page {
        status: 404,
        html: layout(config, "Not Found", body),
    }
}

/// Wrap page content in the site shell.
fn layout(config: &SiteConfig, title: &str, main: &str) -> String {
    let site = &config.base.title;
    let title = if title.is_empty() {
        escape(site)
    } else {
        format!("{} | {}", escape(title), escape(site))
    };
    let feed = match (config.build.rss.enable, config.base.url.is_some()) {
        (true, true) => format!(
            r#"<link rel="alternate" type="application/rss+xml" title="{}" href="/{}">"#,
            escape(site),
            escape(&config.build.rss.path.to_string_lossy())
        ),
        _ => String::new(),
    };

    #[allow(clippy::literal_string_with_formatting_args)]
    // These are template placeholders, not format args
    let html = LAYOUT_TEMPLATE
        .replace("{lang}", &escape(&config.base.language))
        .replace("{title}", &title)
        .replace("{description}", &escape(&config.base.description))
        .replace("{feed}", &feed)
        .replace("{site}", &escape(site))
        .replace("{main}", main);
    html
}

/// Badges for the first `limit` values, then `+N` for the rest.
fn preview_badges(values: &[String], limit: usize) -> String {
    let mut html: String = values
        .iter()
        .take(limit)
        .map(|v| format!(r#"<span class="badge">{}</span>"#, escape(v)))
        .collect();
    if values.len() > limit {
        html.push_str(&format!(
            r#"<span class="badge">+{}</span>"#,
            values.len() - limit
        ));
    }
    html
}

/// One labelled counter of a statistics block.
fn stat(value: impl std::fmt::Display, label: &str) -> String {
    format!("<div><strong>{value}</strong><span class=\"muted\">{label}</span></div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixture;

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Jane Doe".into();
        config
    }

    fn render_path(path: &str) -> Page {
        render(&Route::parse(path), &fixture::store(), &config())
    }

    #[test]
    fn test_not_found_routes() {
        for path in ["/nope/", "/blog/99/", "/blog/abc/", "/projects/tech/cobol/"] {
            let page = render_path(path);
            assert!(page.is_not_found(), "{path}");
            assert!(page.html.contains("Page not found"));
        }
    }

    #[test]
    fn test_ok_routes() {
        for path in ["/", "/experience/2/", "/blog/", "/blog/1/", "/projects/", "/projects/tech/go/"] {
            assert_eq!(render_path(path).status, 200, "{path}");
        }
    }

    /// Fixture whose first three projects use technologies with clashing
    /// or empty slugs.
    fn clashing_store() -> ProfileStore {
        let mut data = fixture::data();
        data.projects.truncate(3);
        data.projects[0].title = "Plus Plus".into();
        data.projects[0].technologies = vec!["C++".into()];
        data.projects[1].title = "Sharp".into();
        data.projects[1].technologies = vec!["C#".into()];
        data.projects[2].title = "Hash".into();
        data.projects[2].technologies = vec!["#".into()];
        ProfileStore::new(data).unwrap()
    }

    fn follow_filter_link(store: &ProfileStore, tech: &str) -> (String, Page) {
        let link = Route::projects_link(store, TechFilter::parse(tech), "").path();
        let page = render(&Route::parse(&link), store, &config());
        (link, page)
    }

    #[test]
    fn test_colliding_slugs_select_their_own_technology() {
        let store = clashing_store();

        let (link, page) = follow_filter_link(&store, "C#");
        assert_eq!(link, "/projects/tech/c-2/");
        assert!(page.html.contains("<h3>Sharp</h3>"));
        assert!(!page.html.contains("<h3>Plus Plus</h3>"));

        let (link, page) = follow_filter_link(&store, "C++");
        assert_eq!(link, "/projects/tech/c/");
        assert!(page.html.contains("<h3>Plus Plus</h3>"));
        assert!(!page.html.contains("<h3>Sharp</h3>"));
    }

    #[test]
    fn test_symbol_only_technology_has_a_page() {
        let store = clashing_store();
        let (link, page) = follow_filter_link(&store, "#");

        assert_eq!(link, "/projects/tech/tech/");
        assert_eq!(page.status, 200);
        assert!(page.html.contains("<h3>Hash</h3>"));
        assert!(!page.html.contains("<h3>Sharp</h3>"));
    }

    #[test]
    fn test_layout_title_and_lang() {
        let html = layout(&config(), "Blog", "<p>x</p>");
        assert!(html.contains("<title>Blog | Jane Doe</title>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<p>x</p>"));
        assert!(!html.contains("{main}"));
    }

    #[test]
    fn test_layout_feed_link() {
        let mut config = config();
        assert!(!layout(&config, "", "").contains("application/rss+xml"));

        config.build.rss.enable = true;
        config.base.url = Some("https://jane.dev".into());
        assert!(layout(&config, "", "").contains(r#"href="/feed.xml""#));
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout(&config(), "<script>", "");
        assert!(html.contains("&lt;script&gt; | Jane Doe"));
    }

    #[test]
    fn test_preview_badges() {
        let values: Vec<String> = ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec();
        let html = preview_badges(&values, 4);
        assert_eq!(html.matches("class=\"badge\"").count(), 5);
        assert!(html.contains(">+2<"));

        let html = preview_badges(&values[..2], 4);
        assert!(!html.contains('+'));
    }
}
