//! Summary counters shown under the project and blog listings.

use super::{ProfileStore, types::BlogPost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub featured: usize,
    /// Distinct technologies across all projects.
    pub technologies: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogStats {
    pub total: usize,
    pub featured: usize,
    /// Distinct tags across all posts.
    pub tags: usize,
    /// Mean read time in whole minutes, rounded.
    pub avg_read_minutes: u32,
}

impl ProfileStore {
    pub fn project_stats(&self) -> ProjectStats {
        ProjectStats {
            total: self.all_projects().len(),
            featured: self.featured_projects().len(),
            technologies: self.technologies().len(),
        }
    }

    pub fn blog_stats(&self) -> BlogStats {
        BlogStats {
            total: self.all_blog_posts().len(),
            featured: self.featured_blog_posts().len(),
            tags: self.blog_tags().len(),
            avg_read_minutes: average_read_minutes(self.all_blog_posts()),
        }
    }
}

/// Leading integer of a read time: `"5 min"` → 5. Anything else counts as 0.
pub fn read_minutes(read_time: &str) -> u32 {
    let digits: String = read_time
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

fn average_read_minutes(posts: &[BlogPost]) -> u32 {
    if posts.is_empty() {
        return 0;
    }
    let total: u64 = posts
        .iter()
        .map(|p| u64::from(read_minutes(&p.read_time)))
        .sum();
    (total as f64 / posts.len() as f64).round() as u32
}
