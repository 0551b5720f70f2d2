//! URL slugs for technology filter pages.

use deunicode::deunicode;
use std::collections::HashSet;

/// Slug used when a value has no alphanumeric characters.
const FALLBACK_SLUG: &str = "tech";

/// ASCII, lowercase, runs of anything non-alphanumeric collapsed to `-`.
///
/// `"React.js"` → `"react-js"`, `"C++"` → `"c"`, `"Node.js"` → `"node-js"`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// One slug per value, distinct across the whole list.
///
/// Collisions are resolved in input order: the first value keeps the plain
/// slug and later ones get `-2`, `-3`, ... (`["C++", "C#"]` → `["c", "c-2"]`).
pub fn unique_slugs<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    values
        .into_iter()
        .map(|value| {
            let base = match slugify(value) {
                slug if slug.is_empty() => FALLBACK_SLUG.to_owned(),
                slug => slug,
            };
            let mut slug = base.clone();
            let mut n = 2;
            while !taken.insert(slug.clone()) {
                slug = format!("{base}-{n}");
                n += 1;
            }
            slug
        })
        .collect()
}
