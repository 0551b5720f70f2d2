//! Home page: hero, about, experience timeline, featured projects,
//! featured posts and contact.

use super::{layout, preview_badges};
use crate::{
    config::SiteConfig,
    profile::{Experience, ProfileStore, TimelineItem, skills::group_skills},
    route::Route,
    utils::{date::format_long, html::escape},
    view::DetailSelection,
};

pub fn render(store: &ProfileStore, config: &SiteConfig, detail: DetailSelection<'_>) -> String {
    let personal = &store.profile_data().personal;
    let mut main = String::with_capacity(16 * 1024);

    main.push_str(&format!(
        r#"<section id="hero">
    <h1>{}</h1>
    <p class="muted">{}</p>
    <p>{}</p>
    <p><a href="/projects/">View my work</a> · <a href="/#contact">Get in touch</a></p>
</section>
"#,
        escape(&personal.name),
        escape(&personal.title),
        escape(&personal.tagline),
    ));

    main.push_str(&about(store));
    main.push_str(&timeline(store, config));
    main.push_str(&featured_projects(store));
    main.push_str(&featured_posts(store, config));
    main.push_str(&contact(store));

    if let Some(exp) = detail.selected() {
        let mut closed = detail;
        closed.close();
        main.push_str(&modal(exp, &Route::home(&closed).path()));
    }

    layout(config, "", &main)
}

fn about(store: &ProfileStore) -> String {
    let data = store.profile_data();
    let mut html = format!(
        "<section id=\"about\">\n    <h2>About</h2>\n    <p>{}</p>\n    <p class=\"muted\">{}</p>\n",
        escape(&data.personal.description),
        escape(&data.personal.location),
    );

    html.push_str("    <div class=\"grid\">\n");
    for group in group_skills(&data.skills) {
        html.push_str(&format!(
            "        <div class=\"card\"><h3>{}</h3>",
            escape(group.name)
        ));
        for skill in group.skills {
            html.push_str(&format!(r#"<span class="badge">{}</span>"#, escape(skill)));
        }
        html.push_str("</div>\n");
    }
    html.push_str("    </div>\n</section>\n");
    html
}

fn timeline(store: &ProfileStore, config: &SiteConfig) -> String {
    let mut html = String::from("<section id=\"experience\">\n    <h2>Experience &amp; Education</h2>\n");

    for item in store.timeline() {
        html.push_str(&format!(
            r#"    <article class="card {kind}">
        <h3>{title}</h3>
        <p>{subtitle} · <span class="muted">{location}</span></p>
        <p class="muted">{period}</p>
        <p>{description}</p>
        <p>{badges}</p>
"#,
            kind = item.kind().name(),
            title = escape(item.title()),
            subtitle = escape(item.subtitle()),
            location = escape(item.location()),
            period = escape(item.period()),
            description = escape(item.description()),
            badges = preview_badges(item.technologies(), config.view.technology_preview),
        ));
        if let TimelineItem::Experience(exp) = item
            && item.has_details()
        {
            let href = Route::Home {
                experience: Some(exp.id),
            }
            .path();
            html.push_str(&format!("        <a href=\"{href}\">View Details</a>\n"));
        }
        html.push_str("    </article>\n");
    }

    html.push_str("</section>\n");
    html
}

/// The detail modal. Every close control links to `close_href`.
fn modal(exp: &Experience, close_href: &str) -> String {
    let bullets: String = exp
        .bullet_points
        .iter()
        .map(|b| format!("            <li>{}</li>\n", escape(b)))
        .collect();
    let badges: String = exp
        .technologies
        .iter()
        .map(|t| format!(r#"<span class="badge">{}</span>"#, escape(t)))
        .collect();

    format!(
        r#"<div class="modal" role="dialog" aria-modal="true">
    <a class="backdrop" href="{close}" aria-label="Close"></a>
    <div class="card">
        <a href="{close}" aria-label="Close">×</a>
        <h2>{title}</h2>
        <p>{company} · <span class="muted">{location}</span></p>
        <p class="muted">{period}</p>
        <p>{description}</p>
        <h3>Key Achievements</h3>
        <ul>
{bullets}        </ul>
        <h3>Technologies</h3>
        <p>{badges}</p>
        <p><a href="{close}">Close</a></p>
    </div>
</div>
"#,
        close = escape(close_href),
        title = escape(&exp.title),
        company = escape(&exp.company),
        location = escape(&exp.location),
        period = escape(&exp.period),
        description = escape(&exp.description),
    )
}

fn featured_projects(store: &ProfileStore) -> String {
    let mut html = String::from(
        "<section id=\"projects\">\n    <h2>Featured Projects</h2>\n    <div class=\"grid\">\n",
    );
    for project in store.featured_projects() {
        html.push_str(&super::projects::card(project));
    }
    html.push_str("    </div>\n    <p><a href=\"/projects/\">View all projects</a></p>\n</section>\n");
    html
}

fn featured_posts(store: &ProfileStore, config: &SiteConfig) -> String {
    let mut html = String::from(
        "<section id=\"blog\">\n    <h2>Latest Articles</h2>\n    <div class=\"grid\">\n",
    );
    for post in store
        .featured_blog_posts()
        .into_iter()
        .take(config.view.home_featured_posts)
    {
        html.push_str(&format!(
            "        <article class=\"card\"><h3><a href=\"{}\">{}</a></h3><p class=\"muted\">{} · {}</p><p>{}</p></article>\n",
            Route::BlogPost(post.id).path(),
            escape(&post.title),
            escape(&format_long(&post.date)),
            escape(&post.read_time),
            escape(&post.excerpt),
        ));
    }
    html.push_str("    </div>\n    <p><a href=\"/blog/\">View all articles</a></p>\n</section>\n");
    html
}

fn contact(store: &ProfileStore) -> String {
    let personal = &store.profile_data().personal;
    let links: String = [
        ("GitHub", &personal.github),
        ("LinkedIn", &personal.linkedin),
        ("Twitter", &personal.twitter),
    ]
    .into_iter()
    .filter(|(_, href)| !href.is_empty())
    .map(|(label, href)| format!(r#" · <a href="{}">{label}</a>"#, escape(href)))
    .collect();

    format!(
        "<section id=\"contact\">\n    <h2>Get in Touch</h2>\n    <p><a href=\"mailto:{email}\">{email}</a>{links}</p>\n</section>\n",
        email = escape(&personal.email),
    )
}
