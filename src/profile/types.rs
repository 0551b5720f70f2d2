//! Profile document types.
//!
//! These mirror `profile.json` one to one. Keys are camelCase in the
//! document (`bulletPoints`, `readTime`).

use serde::{Deserialize, Serialize};

/// The whole profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub personal: Personal,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub experience: Vec<Experience>,

    #[serde(default)]
    pub education: Vec<Education>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub blog: Vec<BlogPost>,

    /// Authored display order of the experience/education timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineRef>>,
}

/// Owner of the site: hero, about and contact sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free text, e.g. "May 2022 - April 2024".
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image: String,
    /// ISO 8601 date, `YYYY-MM-DD`.
    pub date: String,
    /// Free text, e.g. "5 min".
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Which collection a timeline entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Experience,
    Education,
}

impl TimelineKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Education => "education",
        }
    }
}

/// One authored timeline slot: `{ "kind": "education", "id": 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineRef {
    pub kind: TimelineKind,
    pub id: u32,
}

impl TimelineRef {
    pub const fn experience(id: u32) -> Self {
        Self {
            kind: TimelineKind::Experience,
            id,
        }
    }

    pub const fn education(id: u32) -> Self {
        Self {
            kind: TimelineKind::Education,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_camel_case() {
        let post: BlogPost = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Hooks",
                "excerpt": "e",
                "content": "c",
                "date": "2024-01-15",
                "readTime": "5 min",
                "tags": ["React"]
            }"#,
        )
        .unwrap();

        assert_eq!(post.read_time, "5 min");
        assert!(!post.featured);
        assert_eq!(post.image, "");
    }

    #[test]
    fn test_experience_bullet_points() {
        let exp: Experience = serde_json::from_str(
            r#"{
                "id": 1, "title": "Engineer", "company": "Acme", "location": "Remote",
                "period": "2022 - 2024", "description": "d",
                "bulletPoints": ["a", "b"], "technologies": ["Rust"]
            }"#,
        )
        .unwrap();

        assert_eq!(exp.bullet_points, vec!["a", "b"]);
    }

    #[test]
    fn test_timeline_ref_lowercase_kind() {
        let refs: Vec<TimelineRef> =
            serde_json::from_str(r#"[{"kind":"education","id":2},{"kind":"experience","id":1}]"#)
                .unwrap();
        assert_eq!(refs, vec![TimelineRef::education(2), TimelineRef::experience(1)]);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result: Result<Project, _> = serde_json::from_str(r#"{"id": 1, "title": "x"}"#);
        assert!(result.is_err());
    }
}
