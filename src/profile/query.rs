//! Read-only queries over the profile store.
//!
//! Every query is a pure function of the loaded document. Lookups by id
//! return `None` when nothing matches; that is the not-found outcome, and
//! the caller decides how to present it (the blog detail route renders 404).

use super::{
    ProfileStore,
    types::{BlogPost, Education, Experience, ProfileData, Project},
};

impl ProfileStore {
    /// The full dataset.
    #[inline]
    pub fn profile_data(&self) -> &ProfileData {
        self.data()
    }

    /// All blog posts in stored order.
    pub fn all_blog_posts(&self) -> &[BlogPost] {
        &self.data().blog
    }

    /// All projects in stored order.
    pub fn all_projects(&self) -> &[Project] {
        &self.data().projects
    }

    pub fn blog_post_by_id(&self, id: u32) -> Option<&BlogPost> {
        self.data().blog.iter().find(|post| post.id == id)
    }

    pub fn experience_by_id(&self, id: u32) -> Option<&Experience> {
        self.data().experience.iter().find(|exp| exp.id == id)
    }

    pub fn education_by_id(&self, id: u32) -> Option<&Education> {
        self.data().education.iter().find(|edu| edu.id == id)
    }

    /// Featured projects, stored order preserved.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.data().projects.iter().filter(|p| p.featured).collect()
    }

    /// Featured blog posts, stored order preserved.
    pub fn featured_blog_posts(&self) -> Vec<&BlogPost> {
        self.data().blog.iter().filter(|p| p.featured).collect()
    }

    /// Distinct technologies across all projects, in first-seen order.
    ///
    /// These are the selectable values of the project filter.
    pub fn technologies(&self) -> Vec<&str> {
        distinct(self.data().projects.iter().flat_map(|p| &p.technologies))
    }

    /// Page slug of a technology, `None` when no project uses it.
    pub fn technology_slug(&self, tech: &str) -> Option<&str> {
        self.technology_slugs()
            .iter()
            .find(|(t, _)| t == tech)
            .map(|(_, slug)| slug.as_str())
    }

    /// The technology a page slug was assigned to.
    pub fn technology_by_slug(&self, slug: &str) -> Option<&str> {
        self.technology_slugs()
            .iter()
            .find(|(_, s)| s == slug)
            .map(|(tech, _)| tech.as_str())
    }

    /// Distinct blog tags, in first-seen order.
    pub fn blog_tags(&self) -> Vec<&str> {
        distinct(self.data().blog.iter().flat_map(|p| &p.tags))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value.as_str()) {
            out.push(value.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::profile::fixture;

    #[test]
    fn test_profile_data_is_whole_document() {
        let store = fixture::store();
        assert_eq!(store.profile_data(), &fixture::data());
    }

    #[test]
    fn test_all_blog_posts_stored_order() {
        let store = fixture::store();
        let ids: Vec<u32> = store.all_blog_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_blog_post_by_id_present() {
        let store = fixture::store();
        for post in store.all_blog_posts() {
            let found = store.blog_post_by_id(post.id).unwrap();
            assert_eq!(found, post);
        }
    }

    #[test]
    fn test_blog_post_by_id_absent() {
        let store = fixture::store();
        assert!(store.blog_post_by_id(0).is_none());
        assert!(store.blog_post_by_id(9).is_none());
        assert!(store.blog_post_by_id(u32::MAX).is_none());
    }

    #[test]
    fn test_featured_projects_partition() {
        let store = fixture::store();
        let featured = store.featured_projects();
        let rest: Vec<_> = store.all_projects().iter().filter(|p| !p.featured).collect();

        assert!(featured.iter().all(|p| p.featured));
        assert!(featured.iter().all(|f| !rest.iter().any(|r| r.id == f.id)));
        assert_eq!(featured.len() + rest.len(), store.all_projects().len());

        let ids: Vec<u32> = featured.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_featured_blog_posts() {
        let store = fixture::store();
        let ids: Vec<u32> = store.featured_blog_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_technologies_distinct_first_seen() {
        let store = fixture::store();
        assert_eq!(
            store.technologies(),
            vec![
                "React.js",
                "Node.js",
                "MongoDB",
                "TypeScript",
                "Go",
                "Docker",
                "React Native",
                "PostgreSQL",
                "Next.js",
                "Tailwind CSS",
            ]
        );
    }

    #[test]
    fn test_technology_slug_lookup() {
        let store = fixture::store();
        assert_eq!(store.technology_slug("Tailwind CSS"), Some("tailwind-css"));
        assert_eq!(store.technology_by_slug("node-js"), Some("Node.js"));
        assert_eq!(store.technology_slug("Rust"), None);
        assert_eq!(store.technology_by_slug("rust"), None);
    }

    #[test]
    fn test_blog_tags_distinct() {
        let store = fixture::store();
        let tags = store.blog_tags();
        assert_eq!(tags[0], "React");
        assert_eq!(tags.iter().filter(|t| **t == "Frontend").count(), 1);
    }

    #[test]
    fn test_experience_and_education_by_id() {
        let store = fixture::store();
        assert_eq!(store.experience_by_id(2).unwrap().title, "Software Engineer");
        assert!(store.experience_by_id(4).is_none());
        assert_eq!(
            store.education_by_id(2).unwrap().institution,
            "Golden Gate University"
        );
        assert!(store.education_by_id(5).is_none());
    }
}
