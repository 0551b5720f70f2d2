//! Static site build.
//!
//! Every route a visitor can reach by following links is rendered once
//! and written as `<route>/index.html`. Interaction state becomes part of
//! the path, so the built site works without a server.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()      clean / create the output dir
//!     │
//!     ├── rayon::join
//!     │     ├── write_pages()   static_routes() ──► render ──► minify ──► index.html
//!     │     └── rayon::join
//!     │           ├── build_rss()
//!     │           └── build_sitemap()
//!     │
//!     └── 404.html
//! ```

use crate::{
    config::SiteConfig,
    generator::{rss::build_rss, sitemap::build_sitemap},
    log,
    profile::ProfileStore,
    render::{self, Page},
    route::Route,
    utils::minify::{MinifyType, minify},
    view::Pagination,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Not-found page written at the output root.
pub const NOT_FOUND_FILE: &str = "404.html";

/// Build the entire site. Returns the number of pages written.
///
/// If `config.build.clean` is true, clears the entire output directory first.
pub fn build_site(config: &SiteConfig, store: &ProfileStore) -> Result<usize> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let routes = static_routes(store, config);
    log!("build"; "rendering {} pages...", routes.len());

    let (pages_result, (rss_result, sitemap_result)) = rayon::join(
        || write_pages(&routes, store, config),
        || {
            rayon::join(
                || build_rss(config, store),
                || build_sitemap(config, store),
            )
        },
    );
    pages_result?;
    rss_result?;
    sitemap_result?;

    let not_found = render::not_found(config);
    write_page(&output.join(NOT_FOUND_FILE), &not_found, config)?;

    log!("build"; "done, {} pages in {}", routes.len(), output.display());
    Ok(routes.len())
}

/// Every linkable state of the site.
///
/// - home, plus one page per experience that offers a detail view
/// - blog listing after 0..=max loads, and every post
/// - project listing, unfiltered and per technology
pub fn static_routes(store: &ProfileStore, config: &SiteConfig) -> Vec<Route> {
    let mut routes = vec![Route::Home { experience: None }];

    routes.extend(
        store
            .timeline()
            .into_iter()
            .filter(|item| item.has_details())
            .map(|item| Route::Home {
                experience: Some(item.reference().id),
            }),
    );

    let pagination = Pagination::new(store.all_blog_posts().len(), config.view.page_size);
    routes.extend((0..=pagination.max_loads()).map(|more| Route::Blog { more }));
    routes.extend(store.all_blog_posts().iter().map(|post| Route::BlogPost(post.id)));

    routes.push(Route::projects_with("all"));
    routes.extend(
        store
            .technology_slugs()
            .iter()
            .map(|(_, slug)| Route::ProjectsTech(slug.clone())),
    );

    routes
}

fn write_pages(routes: &[Route], store: &ProfileStore, config: &SiteConfig) -> Result<()> {
    routes.par_iter().try_for_each(|route| {
        let page = render::render(route, store, config);
        let path = output_path(&config.build.output, route);
        write_page(&path, &page, config)
            .with_context(|| format!("Failed to build {}", route.path()))
    })
}

/// `/blog/1/` → `<output>/blog/1/index.html`
fn output_path(output: &Path, route: &Route) -> std::path::PathBuf {
    let path = route.path();
    output.join(path.trim_matches('/')).join("index.html")
}

fn write_page(path: &Path, page: &Page, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let html = minify(MinifyType::Html(page.html.as_bytes()), config);
    fs::write(path, &*html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        log!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixture;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.base.title = "Jane Doe".into();
        config.base.url = Some("https://example.com".into());
        config.build.output = dir.path().join("public");
        (dir, config)
    }

    #[test]
    fn test_static_routes() {
        let store = fixture::store();
        let routes = static_routes(&store, &SiteConfig::default());

        assert_eq!(routes[0], Route::Home { experience: None });
        assert!(routes.contains(&Route::Home { experience: Some(1) }));
        assert!(!routes.contains(&Route::Home { experience: Some(3) }));
        assert!(routes.contains(&Route::Blog { more: 1 }));
        assert!(!routes.contains(&Route::Blog { more: 2 }));
        assert!(routes.contains(&Route::BlogPost(8)));
        assert!(routes.contains(&Route::ProjectsTech("go".into())));
        // home + 2 detail pages + 2 blog pages + 8 posts + 1 listing + 10 technologies
        assert_eq!(routes.len(), 24);
    }

    #[test]
    fn test_static_routes_distinct_paths() {
        let mut data = fixture::data();
        data.projects[0].technologies = vec!["C++".into(), "#".into()];
        data.projects[1].technologies = vec!["C#".into(), "C".into()];
        let store = ProfileStore::new(data).unwrap();

        let paths: Vec<String> = static_routes(&store, &SiteConfig::default())
            .iter()
            .map(Route::path)
            .collect();
        let unique: std::collections::HashSet<&String> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        assert!(paths.contains(&"/projects/tech/c-3/".to_owned()));
        assert!(paths.contains(&"/projects/tech/tech/".to_owned()));
        assert!(!paths.iter().any(|p| p.contains("//")));
    }

    #[test]
    fn test_output_path() {
        let out = Path::new("/out");
        assert_eq!(
            output_path(out, &Route::Home { experience: None }),
            Path::new("/out/index.html")
        );
        assert_eq!(
            output_path(out, &Route::Blog { more: 1 }),
            Path::new("/out/blog/more/1/index.html")
        );
        assert_eq!(
            output_path(out, &Route::ProjectsTech("tailwind-css".into())),
            Path::new("/out/projects/tech/tailwind-css/index.html")
        );
    }

    #[test]
    fn test_build_site_writes_routes() {
        let (_dir, config) = setup();
        let store = fixture::store();
        let count = build_site(&config, &store).unwrap();
        let out = &config.build.output;

        assert_eq!(count, 24);
        for file in [
            "index.html",
            "experience/2/index.html",
            "blog/index.html",
            "blog/more/1/index.html",
            "blog/5/index.html",
            "projects/index.html",
            "projects/tech/react-native/index.html",
            "404.html",
            "sitemap.xml",
        ] {
            assert!(out.join(file).is_file(), "{file}");
        }
        assert!(!out.join("experience/3").exists());
        assert!(!out.join("feed.xml").exists());
    }

    #[test]
    fn test_build_site_with_rss() {
        let (_dir, mut config) = setup();
        config.build.rss.enable = true;
        build_site(&config, &fixture::store()).unwrap();
        assert!(config.build.output.join("feed.xml").is_file());
    }

    #[test]
    fn test_built_page_content() {
        let (_dir, config) = setup();
        build_site(&config, &fixture::store()).unwrap();

        let html = fs::read_to_string(config.build.output.join("projects/tech/go/index.html")).unwrap();
        assert!(html.contains("CLI Toolkit"));
        assert!(!html.contains("React Dashboard"));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let (_dir, mut config) = setup();
        let stale = config.build.output.join("stale.html");
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(&stale, "old").unwrap();

        build_site(&config, &fixture::store()).unwrap();
        assert!(stale.exists());

        config.build.clean = true;
        build_site(&config, &fixture::store()).unwrap();
        assert!(!stale.exists());
    }
}
