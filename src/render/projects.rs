//! Project listing with technology filter and search.

use super::{layout, stat};
use crate::{
    config::SiteConfig,
    profile::{ProfileStore, Project},
    route::Route,
    utils::html::escape,
    view::{ProjectFilter, TechFilter, filter::ALL},
};

pub fn render(store: &ProfileStore, config: &SiteConfig, state: &ProjectFilter) -> String {
    let mut main = String::from(
        "<section>\n    <h1>Projects</h1>\n    <p class=\"muted\">Things I have built, from side projects to production systems.</p>\n",
    );

    main.push_str(&search_form(state));
    main.push_str(&filter_bar(store, state));

    let matches = state.apply(store.all_projects());
    if matches.is_empty() {
        main.push_str(
            r#"    <div class="empty">
        <h3>No projects found</h3>
        <p class="muted">Try adjusting your search or filter criteria.</p>
    </div>
"#,
        );
    } else {
        main.push_str("    <div class=\"grid\">\n");
        for project in &matches {
            main.push_str(&card(project));
        }
        main.push_str("    </div>\n");
    }
    main.push_str("</section>\n");

    let stats = store.project_stats();
    main.push_str(&format!(
        "<section>\n    <h3>Project Statistics</h3>\n    <div class=\"stats\">{}{}{}{}</div>\n</section>\n",
        stat(stats.total, "Total Projects"),
        stat(stats.featured, "Featured"),
        stat(stats.technologies, "Technologies"),
        stat(matches.len(), "Showing"),
    ));

    let title = match state.filter() {
        TechFilter::All => "Projects".to_owned(),
        TechFilter::Technology(tech) => format!("{tech} Projects"),
    };
    layout(config, &title, &main)
}

/// GET form back to the listing. Carries the active filter along.
fn search_form(state: &ProjectFilter) -> String {
    format!(
        r#"    <form method="get" action="/projects/">
        <input type="hidden" name="filter" value="{filter}">
        <input type="search" name="q" value="{search}" placeholder="Search projects...">
        <button type="submit">Search</button>
    </form>
"#,
        filter = escape(state.filter().as_str()),
        search = escape(state.search()),
    )
}

/// "All" followed by every distinct technology, first-seen order.
fn filter_bar(store: &ProfileStore, state: &ProjectFilter) -> String {
    let mut html = String::from("    <nav class=\"filters\">");
    let options = std::iter::once(ALL).chain(store.technologies());

    for option in options {
        let filter = TechFilter::parse(option);
        let class = if &filter == state.filter() {
            "badge active"
        } else {
            "badge"
        };
        let href = Route::projects_link(store, filter, state.search()).path();
        let label = if option == ALL { "All" } else { option };
        html.push_str(&format!(
            r#"<a class="{class}" href="{}">{}</a>"#,
            escape(&href),
            escape(label)
        ));
    }

    html.push_str("</nav>\n");
    html
}

/// Project card, shared with the home page.
pub(super) fn card(project: &Project) -> String {
    let badges: String = project
        .technologies
        .iter()
        .map(|t| format!(r#"<span class="badge">{}</span>"#, escape(t)))
        .collect();
    let mut links = String::new();
    if !project.github.is_empty() {
        links.push_str(&format!(r#"<a href="{}">Code</a> "#, escape(&project.github)));
    }
    if !project.live.is_empty() {
        links.push_str(&format!(r#"<a href="{}">Live Demo</a>"#, escape(&project.live)));
    }

    format!(
        r#"        <article class="card">
            {featured}<h3>{title}</h3>
            <p>{description}</p>
            <p>{badges}</p>
            <p>{links}</p>
        </article>
"#,
        featured = if project.featured {
            r#"<span class="badge active">Featured</span>"#
        } else {
            ""
        },
        title = escape(&project.title),
        description = escape(&project.description),
    )
}
