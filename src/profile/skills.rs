//! Skill grouping for the about section.
//!
//! Categories are fixed name sets; the profile only stores a flat list.
//! Each group keeps the stored order of the skills that fall into it.

/// Fixed category membership, in display order.
const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Frontend Development",
        &["React.js", "Next.js", "TypeScript", "JavaScript", "Tailwind CSS"],
    ),
    (
        "Backend Development",
        &["Node.js", "Python", "MongoDB", "PostgreSQL"],
    ),
    (
        "Tools & Technologies",
        &["AWS", "Docker", "Git", "Framer Motion"],
    ),
];

/// Heading for skills outside every fixed category.
const OTHER: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup<'a> {
    pub name: &'static str,
    pub skills: Vec<&'a str>,
}

/// Group skills by category.
///
/// The fixed categories are always present, possibly empty. The `Other`
/// group is appended only when some skill matched no category.
pub fn group_skills(skills: &[String]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup> = SKILL_CATEGORIES
        .iter()
        .map(|&(name, members)| SkillGroup {
            name,
            skills: skills
                .iter()
                .map(String::as_str)
                .filter(|skill| members.contains(skill))
                .collect(),
        })
        .collect();

    let other: Vec<&str> = skills
        .iter()
        .map(String::as_str)
        .filter(|skill| !SKILL_CATEGORIES.iter().any(|(_, m)| m.contains(skill)))
        .collect();
    if !other.is_empty() {
        groups.push(SkillGroup {
            name: OTHER,
            skills: other,
        });
    }

    groups
}
